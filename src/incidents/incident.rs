use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::error::AppError;

use super::{incident_kind::IncidentKind, location::Location, severity::Severity};

const NAIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Un evento de seguridad reportado por la comunidad.
///
/// Los incidentes se crean una unica vez a partir de los datos de ejemplo y
/// nunca se modifican: por eso no hay setters.
#[derive(Debug, Clone, PartialEq)]
pub struct Incident {
    id: u32,
    kind: IncidentKind,
    location: Location,
    description: String,
    timestamp: DateTime<Utc>,
    severity: Severity,
}

impl Incident {
    pub fn new(
        id: u32,
        kind: IncidentKind,
        location: Location,
        description: &str,
        timestamp: DateTime<Utc>,
        severity: Severity,
    ) -> Incident {
        Self {
            id,
            kind,
            location,
            description: description.to_string(),
            timestamp,
            severity,
        }
    }

    pub fn get_id(&self) -> u32 {
        self.id
    }

    pub fn get_kind(&self) -> &IncidentKind {
        &self.kind
    }

    pub fn get_location(&self) -> Location {
        self.location
    }

    pub fn get_description(&self) -> &str {
        &self.description
    }

    pub fn get_timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn get_severity(&self) -> Severity {
        self.severity
    }

    /// Un incidente es una alerta activa si es de severidad alta y ocurrio hace
    /// menos de `window`. Justo en el limite ya no cuenta.
    pub fn is_active_alert(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.severity == Severity::High && now - self.timestamp < window
    }
}

/// Forma en la que llega un incidente desde el JSON de datos de ejemplo,
/// antes de normalizar la categoria y la severidad.
#[derive(Debug, Clone, Deserialize)]
pub struct IncidentRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: Location,
    pub description: String,
    pub timestamp: String,
    pub severity: String,
}

impl TryFrom<IncidentRecord> for Incident {
    type Error = AppError;

    fn try_from(record: IncidentRecord) -> Result<Self, Self::Error> {
        let kind = IncidentKind::from_label(&record.kind);
        if !kind.is_known() {
            tracing::warn!(
                id = record.id,
                label = %record.kind,
                "categoria desconocida en los datos de ejemplo"
            );
        }

        Ok(Incident {
            id: record.id,
            kind,
            location: record.location,
            description: record.description,
            timestamp: parse_timestamp(&record.timestamp)?,
            severity: record.severity.parse()?,
        })
    }
}

/// Acepta timestamps RFC 3339 o sin zona horaria; estos ultimos se toman en UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, AppError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.with_timezone(&Utc));
    }

    match NaiveDateTime::parse_from_str(raw, NAIVE_TIMESTAMP_FORMAT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(err) => Err(AppError::SeedData(format!(
            "timestamp invalido '{}': {}",
            raw, err
        ))),
    }
}
