use std::{
    path::PathBuf,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use mockall::mock;

use community_watch::{
    app::{
        app_state::{AppAction, AppState},
        navigation::Tab,
    },
    chat::chat_assistant::{CANNED_REPLY, GREETING},
    config::app_config::AppConfig,
    incidents::incident_store::IncidentStore,
    report::{
        report_category::ReportCategory,
        report_form::{FormPhase, CURRENT_LOCATION_PLACEHOLDER},
    },
    utils::clock::Clock,
};

mock! {
    pub TestClock {}

    impl Clock for TestClock {
        fn now(&self) -> DateTime<Utc>;
    }
}

/// Arma un `AppState` sobre los incidentes de ejemplo con un reloj que el
/// test adelanta a mano.
fn state_with_clock(start: DateTime<Utc>) -> (AppState, Arc<Mutex<DateTime<Utc>>>) {
    let time = Arc::new(Mutex::new(start));
    let shared = time.clone();

    let mut clock = MockTestClock::new();
    clock
        .expect_now()
        .returning(move || *shared.lock().unwrap());

    let state = AppState::new(
        &AppConfig::default(),
        IncidentStore::seed().unwrap(),
        Box::new(clock),
    );
    (state, time)
}

fn advance(time: &Arc<Mutex<DateTime<Utc>>>, millis: i64) {
    let mut now = time.lock().unwrap();
    *now += Duration::milliseconds(millis);
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_01_report_is_submitted_and_modal_closes_itself() {
        let (mut state, time) = state_with_clock(start());

        state.dispatch(AppAction::OpenReport).unwrap();
        assert!(state.is_report_modal_open());
        assert!(!state.report_form().submit_enabled());

        state
            .dispatch(AppAction::SetReportCategory(ReportCategory::Theft))
            .unwrap();
        state
            .dispatch(AppAction::SetReportDescription("x".to_string()))
            .unwrap();
        state.dispatch(AppAction::ToggleCurrentLocation).unwrap();
        assert_eq!(
            state.report_form().location(),
            CURRENT_LOCATION_PLACEHOLDER
        );
        assert!(state.report_form().submit_enabled());

        state.dispatch(AppAction::SubmitReport).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Submitting);
        assert_eq!(state.report_form().submit_label(), "Submitting...");

        advance(&time, 999);
        state.dispatch(AppAction::Tick).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Submitting);

        advance(&time, 1);
        state.dispatch(AppAction::Tick).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Success);
        assert!(state.is_report_modal_open());

        advance(&time, 2000);
        state.dispatch(AppAction::Tick).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Closed);
        assert!(!state.is_report_modal_open());

        // Al reabrir el formulario arranca vacio.
        state.dispatch(AppAction::OpenReport).unwrap();
        assert_eq!(state.report_form().category(), None);
        assert_eq!(state.report_form().description(), "");
        assert_eq!(state.report_form().location(), "");
        assert!(!state.report_form().uses_current_location());
        assert_eq!(state.report_form().media_count(), 0);
    }

    #[test]
    fn test_02_submitted_report_keeps_its_fields() {
        let (mut state, time) = state_with_clock(start());

        state.dispatch(AppAction::OpenReport).unwrap();
        state
            .dispatch(AppAction::SetReportCategory(ReportCategory::Accident))
            .unwrap();
        state
            .dispatch(AppAction::SetReportDescription("Choque en la esquina".to_string()))
            .unwrap();
        state
            .dispatch(AppAction::SetReportLocation("Av. Corrientes 1200".to_string()))
            .unwrap();
        state
            .dispatch(AppAction::AttachMedia(vec![
                PathBuf::from("foto1.jpg"),
                PathBuf::from("foto2.png"),
            ]))
            .unwrap();
        state.dispatch(AppAction::SubmitReport).unwrap();

        advance(&time, 1000);
        state.dispatch(AppAction::Tick).unwrap();

        let report = state.last_submitted().unwrap();
        assert_eq!(report.category, ReportCategory::Accident);
        assert_eq!(report.description, "Choque en la esquina");
        assert_eq!(report.location, "Av. Corrientes 1200");
        assert!(!report.used_current_location);
        assert_eq!(report.media_count, 2);
        assert_eq!(state.incidents().len(), 4);
    }

    #[test]
    fn test_03_navigation_keeps_report_button_state() {
        let (mut state, _) = state_with_clock(start());

        for tab in Tab::ALL {
            state.dispatch(AppAction::SelectTab(tab)).unwrap();
            assert_eq!(state.active_tab(), tab);
        }

        state.dispatch(AppAction::OpenReport).unwrap();
        state.dispatch(AppAction::SelectTab(Tab::Map)).unwrap();
        assert!(state.is_report_modal_open());

        state.dispatch(AppAction::CloseReport).unwrap();
        assert!(!state.is_report_modal_open());
    }

    #[test]
    fn test_04_alerts_tab_shows_banner_and_detail() {
        let (mut state, _) = state_with_clock(start());
        state.dispatch(AppAction::SelectTab(Tab::Alerts)).unwrap();

        let summary = state.alert_summary();
        assert!(summary.has_active_alert);
        assert_eq!(summary.active_alerts, 2);
        assert_eq!(summary.area_status, "Monitored");

        let rows = state.alert_rows();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].id, 1);
        assert_eq!(rows[1].time_ago, "15m ago");
        assert_eq!(rows[3].distance, "0.5 miles away");

        state.dispatch(AppAction::SelectIncident(1)).unwrap();
        let detail = state.selected_detail().unwrap();
        assert_eq!(detail.title, "Theft Alert");
        assert_eq!(detail.tips[0], "Keep valuables out of sight");
        assert_eq!(detail.coordinates, "40.7128, -74.0060");

        state.dispatch(AppAction::SelectIncident(4)).unwrap();
        let detail = state.selected_detail().unwrap();
        assert_eq!(detail.tips[0], "Stay alert and aware");

        state.dispatch(AppAction::CloseIncidentDetail).unwrap();
        assert!(state.selected_detail().is_none());
    }

    #[test]
    fn test_05_banner_disappears_after_the_window() {
        let (state, time) = state_with_clock(start());
        assert!(state.alert_summary().has_active_alert);

        advance(&time, 60 * 60 * 1000);
        assert!(!state.alert_summary().has_active_alert);
        assert_eq!(state.alert_summary().active_alerts, 2);
    }

    #[test]
    fn test_06_chat_answers_after_delay() {
        let (mut state, time) = state_with_clock(start());
        state.dispatch(AppAction::SelectTab(Tab::Tips)).unwrap();
        state.dispatch(AppAction::OpenChat).unwrap();
        assert_eq!(state.chat().unwrap().messages()[0].text, GREETING);

        state
            .dispatch(AppAction::SetChatInput("   ".to_string()))
            .unwrap();
        state.dispatch(AppAction::SendChatMessage).unwrap();
        assert_eq!(state.chat().unwrap().messages().len(), 1);

        state
            .dispatch(AppAction::SetChatInput("¿Es seguro salir?".to_string()))
            .unwrap();
        state.dispatch(AppAction::SendChatMessage).unwrap();
        assert_eq!(state.chat().unwrap().messages().len(), 2);
        assert_eq!(state.chat().unwrap().input(), "");

        advance(&time, 1000);
        state.dispatch(AppAction::Tick).unwrap();
        let messages = state.chat().unwrap().messages();
        assert_eq!(messages.len(), 3);
        assert!(messages[2].is_bot);
        assert_eq!(messages[2].text, CANNED_REPLY);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn test_07_config_file_changes_timings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_config.json");
        std::fs::write(&path, r#"{ "submit_delay_ms": 200, "success_display_ms": 300 }"#)
            .unwrap();
        let config = AppConfig::new(&path).unwrap();

        let time = Arc::new(Mutex::new(start()));
        let shared = time.clone();
        let mut clock = MockTestClock::new();
        clock
            .expect_now()
            .returning(move || *shared.lock().unwrap());
        let mut state = AppState::from_config(&config, Box::new(clock));

        state.dispatch(AppAction::OpenReport).unwrap();
        state
            .dispatch(AppAction::SetReportCategory(ReportCategory::Other))
            .unwrap();
        state
            .dispatch(AppAction::SetReportDescription("Algo raro".to_string()))
            .unwrap();
        state.dispatch(AppAction::ToggleCurrentLocation).unwrap();
        state.dispatch(AppAction::SubmitReport).unwrap();
        assert_eq!(
            state.next_deadline(),
            Some(start() + Duration::milliseconds(200))
        );

        advance(&time, 200);
        state.dispatch(AppAction::Tick).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Success);

        advance(&time, 300);
        state.dispatch(AppAction::Tick).unwrap();
        assert!(!state.is_report_modal_open());
    }

    #[test]
    fn test_08_out_of_range_delay_never_reaches_the_form() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_config.json");
        std::fs::write(&path, r#"{ "submit_delay_ms": 9000000000000000000 }"#).unwrap();

        assert!(AppConfig::load(Some(path.as_path())).is_err());

        // El binario sigue con la configuracion por defecto.
        let (mut state, time) = state_with_clock(start());
        state.dispatch(AppAction::OpenReport).unwrap();
        state
            .dispatch(AppAction::SetReportCategory(ReportCategory::Theft))
            .unwrap();
        state
            .dispatch(AppAction::SetReportDescription("Robo".to_string()))
            .unwrap();
        state.dispatch(AppAction::ToggleCurrentLocation).unwrap();
        state.dispatch(AppAction::SubmitReport).unwrap();

        advance(&time, 1000);
        state.dispatch(AppAction::Tick).unwrap();
        assert_eq!(state.report_form().phase(), FormPhase::Success);
    }

    #[test]
    fn test_09_missing_seed_file_still_opens_with_embedded_incidents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app_config.json");
        let missing_seed = dir.path().join("no_existe.json");
        let contents = serde_json::json!({ "seed_file": missing_seed }).to_string();
        std::fs::write(&path, contents).unwrap();
        let config = AppConfig::new(&path).unwrap();

        let mut clock = MockTestClock::new();
        clock.expect_now().returning(start);
        let state = AppState::from_config(&config, Box::new(clock));

        assert_eq!(state.incidents().len(), 4);
        assert!(state.alert_summary().has_active_alert);
    }
}
