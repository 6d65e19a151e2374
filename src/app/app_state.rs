use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::{
    alerts::{
        alert_detail::AlertDetail,
        alert_feed::{alert_rows, AlertFeed, AlertRow},
        alert_summary::AlertSummary,
    },
    chat::chat_assistant::ChatAssistant,
    config::app_config::AppConfig,
    error::AppError,
    incidents::{incident::Incident, incident_store::IncidentStore},
    report::{
        report_category::ReportCategory,
        report_form::{FormEvent, ReportForm, SubmittedReport},
    },
    utils::clock::Clock,
};

use super::navigation::Tab;

/// Todo lo que las vistas pueden pedirle al contenedor de estado.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SelectTab(Tab),
    OpenReport,
    CloseReport,
    SelectIncident(u32),
    CloseIncidentDetail,
    SetReportCategory(ReportCategory),
    SetReportDescription(String),
    SetReportLocation(String),
    ToggleCurrentLocation,
    AttachMedia(Vec<PathBuf>),
    SubmitReport,
    OpenChat,
    ToggleChat,
    SetChatInput(String),
    SendChatMessage,
    Tick,
}

/// Contenedor de estado de la aplicacion.
///
/// Es el unico duenio de la pestaña activa, de si el modal de reporte esta
/// abierto y de la lista de incidentes. Las vistas lo leen por referencia y
/// solo lo modifican despachando un `AppAction`.
pub struct AppState {
    clock: Box<dyn Clock>,
    active_tab: Tab,
    report_modal_open: bool,
    incidents: IncidentStore,
    alert_feed: AlertFeed,
    report_form: ReportForm,
    chat: Option<ChatAssistant>,
    chat_reply_delay: Duration,
    active_alert_window: Duration,
    last_submitted: Option<SubmittedReport>,
}

impl AppState {
    pub fn new(config: &AppConfig, incidents: IncidentStore, clock: Box<dyn Clock>) -> AppState {
        tracing::info!(incidents = incidents.len(), "estado de la aplicacion creado");
        Self {
            clock,
            active_tab: Tab::default(),
            report_modal_open: false,
            incidents,
            alert_feed: AlertFeed::default(),
            report_form: ReportForm::new(config.report_timings()),
            chat: None,
            chat_reply_delay: config.get_chat_reply_delay(),
            active_alert_window: config.get_active_alert_window(),
            last_submitted: None,
        }
    }

    /// Arma el estado cargando los incidentes que indique la configuracion.
    /// Si el archivo configurado no se puede cargar se usan los embebidos.
    pub fn from_config(config: &AppConfig, clock: Box<dyn Clock>) -> AppState {
        let incidents = config.load_incidents().unwrap_or_else(|e| {
            tracing::error!("{}. Se usan los incidentes de ejemplo.", e);
            IncidentStore::seed().unwrap_or_else(|e| {
                tracing::error!("{}", e);
                IncidentStore::default()
            })
        });
        AppState::new(config, incidents, clock)
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn is_report_modal_open(&self) -> bool {
        self.report_modal_open
    }

    pub fn incidents(&self) -> &IncidentStore {
        &self.incidents
    }

    pub fn report_form(&self) -> &ReportForm {
        &self.report_form
    }

    pub fn chat(&self) -> Option<&ChatAssistant> {
        self.chat.as_ref()
    }

    /// Ultimo reporte simulado. Solo queda registrado aca: no llega al store.
    pub fn last_submitted(&self) -> Option<&SubmittedReport> {
        self.last_submitted.as_ref()
    }

    pub fn alert_summary(&self) -> AlertSummary {
        AlertSummary::compute(&self.incidents, self.now(), self.active_alert_window)
    }

    pub fn alert_rows(&self) -> Vec<AlertRow> {
        alert_rows(&self.incidents, self.now())
    }

    pub fn selected_incident(&self) -> Option<&Incident> {
        self.alert_feed.selected(&self.incidents)
    }

    pub fn selected_detail(&self) -> Option<AlertDetail> {
        AlertDetail::for_incident(self.selected_incident())
    }

    /// Proximo momento en que algun paso diferido tiene que correr.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        let chat_deadline = self.chat.as_ref().and_then(ChatAssistant::next_deadline);
        match (self.report_form.next_deadline(), chat_deadline) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn dispatch(&mut self, action: AppAction) -> Result<(), AppError> {
        let now = self.now();
        match action {
            AppAction::SelectTab(tab) => self.select_tab(tab),
            AppAction::OpenReport => {
                self.report_form.open();
                self.report_modal_open = true;
            }
            AppAction::CloseReport => {
                self.report_form.cancel()?;
                self.report_modal_open = false;
            }
            AppAction::SelectIncident(id) => {
                if self.incidents.find(id).is_none() {
                    tracing::warn!(id, "se selecciono un incidente inexistente");
                    return Err(AppError::UnknownIncident(id));
                }
                tracing::debug!(id, "incidente seleccionado");
                self.alert_feed.select(id);
            }
            AppAction::CloseIncidentDetail => self.alert_feed.close_detail(),
            AppAction::SetReportCategory(category) => self.report_form.set_category(category)?,
            AppAction::SetReportDescription(description) => {
                self.report_form.set_description(&description)?
            }
            AppAction::SetReportLocation(location) => self.report_form.set_location(&location)?,
            AppAction::ToggleCurrentLocation => self.report_form.toggle_current_location()?,
            AppAction::AttachMedia(files) => self.report_form.attach_media(files)?,
            AppAction::SubmitReport => self.report_form.submit(now)?,
            AppAction::OpenChat => {
                if self.active_tab == Tab::Tips && self.chat.is_none() {
                    self.chat = Some(ChatAssistant::new(self.chat_reply_delay));
                    tracing::info!("asistente abierto");
                }
            }
            AppAction::ToggleChat => {
                if let Some(chat) = &mut self.chat {
                    chat.toggle_visibility();
                }
            }
            AppAction::SetChatInput(input) => {
                if let Some(chat) = &mut self.chat {
                    chat.set_input(&input);
                }
            }
            AppAction::SendChatMessage => {
                if let Some(chat) = &mut self.chat {
                    chat.send(now);
                }
            }
            AppAction::Tick => self.tick(now),
        }
        Ok(())
    }

    /// Cierre de la aplicacion: se descartan todos los pasos diferidos.
    pub fn shutdown(&mut self) {
        self.report_form.force_close();
        self.report_modal_open = false;
        if let Some(chat) = &mut self.chat {
            chat.cancel_pending();
        }
        self.chat = None;
    }

    fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }

        // Al salir de una pestaña su estado local se desmonta.
        match self.active_tab {
            Tab::Alerts => self.alert_feed.close_detail(),
            Tab::Tips => {
                if let Some(chat) = &mut self.chat {
                    chat.cancel_pending();
                }
                self.chat = None;
            }
            Tab::Map | Tab::Profile => {}
        }

        tracing::info!(from = %self.active_tab, to = %tab, "cambio de pestaña");
        self.active_tab = tab;
    }

    fn tick(&mut self, now: DateTime<Utc>) {
        match self.report_form.tick(now) {
            Some(FormEvent::Submitted(report)) => {
                tracing::info!(
                    category = %report.category,
                    media = report.media_count,
                    "reporte simulado recibido; no se agrega a la lista de incidentes"
                );
                self.last_submitted = Some(report);
            }
            Some(FormEvent::Closed) => self.report_modal_open = false,
            None => {}
        }

        if let Some(chat) = &mut self.chat {
            chat.tick(now);
        }
    }
}
