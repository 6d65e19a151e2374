use chrono::{DateTime, Utc};

use crate::incidents::{incident::Incident, incident_store::IncidentStore, severity::Severity};

use super::time_ago::time_ago;

/// Distancia fija que se muestra en cada alerta; no se calcula.
pub const DISTANCE_PLACEHOLDER: &str = "0.5 miles away";

/// Una fila de la lista de alertas recientes, lista para dibujar.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub time_ago: String,
    pub distance: &'static str,
    pub severity: Severity,
}

impl AlertRow {
    pub fn from_incident(incident: &Incident, now: DateTime<Utc>) -> AlertRow {
        AlertRow {
            id: incident.get_id(),
            title: incident.get_kind().display_name(),
            description: incident.get_description().to_string(),
            time_ago: time_ago(incident.get_timestamp(), now),
            distance: DISTANCE_PLACEHOLDER,
            severity: incident.get_severity(),
        }
    }
}

/// Arma las filas en el mismo orden en que vienen los incidentes: no se reordena.
pub fn alert_rows(store: &IncidentStore, now: DateTime<Utc>) -> Vec<AlertRow> {
    store
        .get_incidents()
        .iter()
        .map(|incident| AlertRow::from_incident(incident, now))
        .collect()
}

/// Estado local de la pantalla de alertas: que incidente esta abierto en el detalle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertFeed {
    selected: Option<u32>,
}

impl AlertFeed {
    pub fn select(&mut self, id: u32) {
        self.selected = Some(id);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Devuelve el incidente seleccionado tal cual esta en el store.
    pub fn selected<'a>(&self, store: &'a IncidentStore) -> Option<&'a Incident> {
        self.selected.and_then(|id| store.find(id))
    }
}
