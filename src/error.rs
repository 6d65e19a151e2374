use thiserror::Error;

use crate::report::report_error::ReportError;

/// Errores que se pueden lanzar desde la aplicacion de vigilancia comunitaria.
#[derive(Debug, Error, PartialEq)]
pub enum AppError {
    #[error("Error: no se ha podido leer el archivo de configuracion: {0}")]
    ReadingConfigFile(String),

    #[error("Error: el archivo de configuracion es invalido: {0}")]
    ParsingConfig(String),

    #[error("Error: configuracion invalida: {0}")]
    InvalidConfig(String),

    #[error("Error: no se han podido cargar los incidentes: {0}")]
    SeedData(String),

    #[error("Error: severidad desconocida: {0}")]
    InvalidSeverity(String),

    #[error("Error: no existe el incidente {0}")]
    UnknownIncident(u32),

    #[error("Error en el reporte: {0}")]
    Report(#[from] ReportError),
}
