use thiserror::Error;

/// Motivos por los que el formulario de reporte rechaza una accion.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    #[error("Falta elegir el tipo de incidente.")]
    MissingCategory,

    #[error("Falta la descripcion del incidente.")]
    MissingDescription,

    #[error("Falta la ubicacion del incidente.")]
    MissingLocation,

    #[error("La ubicacion manual esta deshabilitada mientras se usa la ubicacion actual.")]
    LocationLocked,

    #[error("El formulario no esta en edicion.")]
    NotEditing,

    #[error("El reporte se esta enviando.")]
    SubmissionInProgress,
}
