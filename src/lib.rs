//! Vigilancia comunitaria: una aplicacion de escritorio con un mapa de
//! incidentes, un feed de alertas, consejos de seguridad, un perfil y un
//! modal para reportar incidentes.
//!
//! Todos los datos son de ejemplo y viven en memoria: no hay backend, ni
//! persistencia, ni red. La biblioteca contiene el estado y la logica; el
//! binario `community_watch` (en `src/ui`) solo dibuja con egui.

pub mod alerts;
pub mod app;
pub mod chat;
pub mod config;
pub mod error;
pub mod incidents;
pub mod map;
pub mod report;
pub mod utils;
