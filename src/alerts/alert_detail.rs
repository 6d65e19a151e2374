use crate::incidents::{incident::Incident, severity::Severity};

use super::{
    alert_feed::DISTANCE_PLACEHOLDER, safety_tips::safety_tips_for,
    time_ago::format_local_timestamp,
};

/// Contenido del detalle de una alerta. Es funcion pura del incidente seleccionado.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertDetail {
    pub id: u32,
    pub title: String,
    pub timestamp: String,
    pub distance: &'static str,
    pub coordinates: String,
    pub description: String,
    pub severity: Severity,
    pub tips: &'static [&'static str; 4],
}

impl AlertDetail {
    /// Sin incidente seleccionado no hay nada que mostrar.
    pub fn for_incident(incident: Option<&Incident>) -> Option<AlertDetail> {
        let incident = incident?;

        Some(AlertDetail {
            id: incident.get_id(),
            title: format!("{} Alert", incident.get_kind().display_name()),
            timestamp: format_local_timestamp(incident.get_timestamp()),
            distance: DISTANCE_PLACEHOLDER,
            coordinates: incident.get_location().parse_to_string(),
            description: incident.get_description().to_string(),
            severity: incident.get_severity(),
            tips: safety_tips_for(incident.get_kind()),
        })
    }
}
