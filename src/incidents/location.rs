use serde::{Deserialize, Serialize};

/// Contiene una localizacion especifica en el mapa.
///
/// Solo se guarda el par de coordenadas tal cual vienen en los datos de
/// ejemplo: no se valida el rango ni se usa para proyectar los marcadores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Location {
        Location { lat, lng }
    }

    /// Coordenadas con cuatro decimales, como se muestran en el detalle y el tooltip.
    pub fn parse_to_string(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}
