use std::{collections::HashSet, fs::File, io::BufReader, path::Path};

use chrono::{DateTime, Duration, Utc};

use crate::error::AppError;

use super::{
    incident::{Incident, IncidentRecord},
    severity::Severity,
};

const SEED_INCIDENTS: &str = include_str!("seed_incidents.json");

/// Secuencia ordenada e inmutable de incidentes.
///
/// Se arma una sola vez al iniciar la aplicacion y despues solo se presta
/// como lectura a las vistas. No existe ninguna operacion que agregue,
/// modifique o borre incidentes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncidentStore {
    incidents: Vec<Incident>,
}

impl IncidentStore {
    /// Arma el store validando que los ids no se repitan.
    pub fn new(incidents: Vec<Incident>) -> Result<IncidentStore, AppError> {
        let mut seen = HashSet::new();
        for incident in &incidents {
            if !seen.insert(incident.get_id()) {
                return Err(AppError::SeedData(format!(
                    "id de incidente repetido: {}",
                    incident.get_id()
                )));
            }
        }

        Ok(Self { incidents })
    }

    /// Carga los incidentes de ejemplo que vienen embebidos en el binario.
    pub fn seed() -> Result<IncidentStore, AppError> {
        IncidentStore::from_json_str(SEED_INCIDENTS)
    }

    pub fn from_json_str(json: &str) -> Result<IncidentStore, AppError> {
        let records: Vec<IncidentRecord> =
            serde_json::from_str(json).map_err(|err| AppError::SeedData(err.to_string()))?;
        IncidentStore::from_records(records)
    }

    /// Toma un path a un archivo JSON con incidentes y levanta el store.
    pub fn from_file(file_path: &Path) -> Result<IncidentStore, AppError> {
        let file = File::open(file_path).map_err(|err| {
            AppError::SeedData(format!("{}: {}", file_path.display(), err))
        })?;

        let reader = BufReader::new(file);
        let records: Vec<IncidentRecord> = serde_json::from_reader(reader)
            .map_err(|err| AppError::SeedData(format!("{}: {}", file_path.display(), err)))?;

        IncidentStore::from_records(records)
    }

    fn from_records(records: Vec<IncidentRecord>) -> Result<IncidentStore, AppError> {
        let incidents = records
            .into_iter()
            .map(Incident::try_from)
            .collect::<Result<Vec<Incident>, AppError>>()?;

        IncidentStore::new(incidents)
    }

    pub fn get_incidents(&self) -> &[Incident] {
        &self.incidents
    }

    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.get_id() == id)
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.incidents
            .iter()
            .filter(|incident| incident.get_severity() == severity)
            .count()
    }

    /// Hay alerta activa si algun incidente de severidad alta ocurrio hace menos de `window`.
    pub fn has_active_alert(&self, now: DateTime<Utc>, window: Duration) -> bool {
        self.incidents
            .iter()
            .any(|incident| incident.is_active_alert(now, window))
    }
}
