use chrono::{DateTime, Duration, Utc};

use crate::incidents::{incident_store::IncidentStore, severity::Severity};

/// El estado del area no se deriva de los datos: siempre se muestra igual.
pub const AREA_STATUS: &str = "Monitored";

/// Resumen que encabeza la pantalla de alertas.
///
/// Se recalcula en cada frame a partir del store, sin cache: si un incidente
/// deja de ser reciente, el banner desaparece en el proximo dibujado.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSummary {
    pub has_active_alert: bool,
    pub active_alerts: usize,
    pub area_status: &'static str,
}

impl AlertSummary {
    pub fn compute(store: &IncidentStore, now: DateTime<Utc>, window: Duration) -> AlertSummary {
        AlertSummary {
            has_active_alert: store.has_active_alert(now, window),
            active_alerts: store.count_by_severity(Severity::High),
            area_status: AREA_STATUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::incidents::{incident::Incident, incident_kind::IncidentKind, location::Location};

    use super::*;

    #[test]
    fn test_summary_over_seed_data() {
        let store = IncidentStore::seed().unwrap();
        let now = Utc.with_ymd_and_hms(2024, 3, 12, 9, 0, 0).unwrap();

        let summary = AlertSummary::compute(&store, now, Duration::hours(1));

        assert!(!summary.has_active_alert);
        assert_eq!(summary.active_alerts, 2);
        assert_eq!(summary.area_status, "Monitored");
    }

    #[test]
    fn test_summary_with_fresh_high_incident() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 16, 0, 0).unwrap();
        let store = IncidentStore::new(vec![Incident::new(
            1,
            IncidentKind::Theft,
            Location::new(0.0, 0.0),
            "robo de bicicleta",
            now - Duration::minutes(10),
            Severity::High,
        )])
        .unwrap();

        let summary = AlertSummary::compute(&store, now, Duration::hours(1));

        assert!(summary.has_active_alert);
        assert_eq!(summary.active_alerts, 1);
    }

    #[test]
    fn test_summary_of_empty_store() {
        let summary =
            AlertSummary::compute(&IncidentStore::default(), Utc::now(), Duration::hours(1));
        assert!(!summary.has_active_alert);
        assert_eq!(summary.active_alerts, 0);
    }
}
