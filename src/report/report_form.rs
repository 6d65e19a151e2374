use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};

use crate::utils::deferred::Deferred;

use super::{report_category::ReportCategory, report_error::ReportError};

/// Texto que reemplaza la ubicacion cuando se usa la ubicacion actual.
pub const CURRENT_LOCATION_PLACEHOLDER: &str = "Using current location";

///  El formulario de reporte puede estar en distintos estados:
/// - Closed: el modal no se muestra.
/// - Editing: el usuario completa tipo, descripcion y ubicacion.
/// - Submitting: se simula el envio; no se puede editar ni cancelar.
/// - Success: se muestra el mensaje de exito hasta que el modal se cierra solo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Editing,
    Submitting,
    Success,
}

/// Tiempos del envio simulado.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportTimings {
    pub submit_delay: Duration,
    pub success_display: Duration,
    pub description_soft_limit: usize,
}

impl Default for ReportTimings {
    fn default() -> Self {
        Self {
            submit_delay: Duration::milliseconds(1000),
            success_display: Duration::milliseconds(2000),
            description_soft_limit: 280,
        }
    }
}

/// Lo que el formulario "envio". Nunca se agrega al store de incidentes.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmittedReport {
    pub category: ReportCategory,
    pub description: String,
    pub location: String,
    pub used_current_location: bool,
    pub media_count: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Avisos que el formulario le da a su duenio al avanzar en el tiempo.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Submitted(SubmittedReport),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormStep {
    FinishSubmission,
    AutoClose,
}

/// Modal de reporte de incidentes con su propio estado.
///
/// Los pasos Submitting -> Success -> Closed se programan como continuaciones
/// diferidas que se consultan con `tick`. Al cerrar el formulario la
/// continuacion pendiente se descarta.
#[derive(Debug, Clone)]
pub struct ReportForm {
    phase: FormPhase,
    category: Option<ReportCategory>,
    description: String,
    location: String,
    use_current_location: bool,
    media: Vec<PathBuf>,
    timings: ReportTimings,
    pending: Option<Deferred<FormStep>>,
}

impl Default for ReportForm {
    fn default() -> Self {
        ReportForm::new(ReportTimings::default())
    }
}

impl ReportForm {
    pub fn new(timings: ReportTimings) -> ReportForm {
        Self {
            phase: FormPhase::Closed,
            category: None,
            description: String::new(),
            location: String::new(),
            use_current_location: false,
            media: Vec::new(),
            timings,
            pending: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn category(&self) -> Option<ReportCategory> {
        self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn uses_current_location(&self) -> bool {
        self.use_current_location
    }

    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    pub fn timings(&self) -> ReportTimings {
        self.timings
    }

    /// Cantidad de caracteres de la descripcion. El limite es solo informativo.
    pub fn character_count(&self) -> usize {
        self.description.chars().count()
    }

    pub fn over_soft_limit(&self) -> bool {
        self.character_count() > self.timings.description_soft_limit
    }

    /// Abre el modal. Si ya estaba abierto no hace nada.
    pub fn open(&mut self) {
        if self.phase == FormPhase::Closed {
            self.phase = FormPhase::Editing;
            tracing::info!("formulario de reporte abierto");
        }
    }

    pub fn set_category(&mut self, category: ReportCategory) -> Result<(), ReportError> {
        self.check_editing()?;
        tracing::debug!(category = %category, "tipo de incidente elegido");
        self.category = Some(category);
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) -> Result<(), ReportError> {
        self.check_editing()?;
        self.description = description.to_string();
        Ok(())
    }

    pub fn set_location(&mut self, location: &str) -> Result<(), ReportError> {
        self.check_editing()?;
        if self.use_current_location {
            return Err(ReportError::LocationLocked);
        }
        self.location = location.to_string();
        Ok(())
    }

    /// Alterna el uso de la ubicacion actual. Al activarlo se pisa la ubicacion
    /// escrita; al desactivarlo se vacia y se vuelve a habilitar la edicion.
    pub fn toggle_current_location(&mut self) -> Result<(), ReportError> {
        self.check_editing()?;
        self.use_current_location = !self.use_current_location;
        if self.use_current_location {
            self.location = CURRENT_LOCATION_PLACEHOLDER.to_string();
        } else {
            self.location.clear();
        }
        tracing::debug!(
            use_current_location = self.use_current_location,
            "ubicacion actual alternada"
        );
        Ok(())
    }

    /// Acepta archivos adjuntos sin procesarlos, subirlos ni validarlos.
    pub fn attach_media(&mut self, files: Vec<PathBuf>) -> Result<(), ReportError> {
        self.check_editing()?;
        tracing::debug!(files = files.len(), "archivos adjuntos aceptados");
        self.media.extend(files);
        Ok(())
    }

    /// Devuelve todos los campos que faltan completar.
    pub fn validate(&self) -> Vec<ReportError> {
        let mut missing = Vec::new();
        if self.category.is_none() {
            missing.push(ReportError::MissingCategory);
        }
        if self.description.is_empty() {
            missing.push(ReportError::MissingDescription);
        }
        if self.location.is_empty() && !self.use_current_location {
            missing.push(ReportError::MissingLocation);
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    pub fn submit_enabled(&self) -> bool {
        self.phase == FormPhase::Editing && self.is_valid()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.phase == FormPhase::Submitting {
            "Submitting..."
        } else {
            "Submit Report"
        }
    }

    /// Comienza el envio simulado. El paso a Success ocurre en `tick` luego de
    /// `submit_delay`.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), ReportError> {
        self.check_editing()?;
        if let Some(error) = self.validate().into_iter().next() {
            tracing::warn!(%error, "envio de reporte rechazado");
            return Err(error);
        }

        self.phase = FormPhase::Submitting;
        self.pending = Some(Deferred::schedule(
            now,
            self.timings.submit_delay,
            FormStep::FinishSubmission,
        ));
        tracing::info!("enviando reporte");
        Ok(())
    }

    /// Cancelacion pedida por el usuario. Mientras se envia no se puede cancelar.
    pub fn cancel(&mut self) -> Result<(), ReportError> {
        match self.phase {
            FormPhase::Submitting => {
                tracing::warn!("no se puede cancelar un reporte que se esta enviando");
                Err(ReportError::SubmissionInProgress)
            }
            FormPhase::Closed => Ok(()),
            FormPhase::Editing | FormPhase::Success => {
                self.reset();
                tracing::info!("formulario de reporte cancelado");
                Ok(())
            }
        }
    }

    /// Cierre forzado por el duenio del formulario: descarta cualquier paso pendiente.
    pub fn force_close(&mut self) {
        if self.pending.is_some() {
            tracing::warn!(phase = ?self.phase, "se descarta un envio pendiente");
        }
        self.reset();
    }

    /// Hace avanzar los pasos diferidos que ya vencieron.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<FormEvent> {
        let pending = self.pending.as_mut()?;
        let due_at = pending.due_at();
        let step = pending.poll(now)?;
        self.pending = None;

        match step {
            FormStep::FinishSubmission => {
                let Some(report) = self.build_submitted_report(now) else {
                    self.reset();
                    return Some(FormEvent::Closed);
                };
                self.phase = FormPhase::Success;
                self.pending = Some(Deferred::schedule(
                    due_at,
                    self.timings.success_display,
                    FormStep::AutoClose,
                ));
                tracing::info!(category = %report.category, "reporte enviado");
                Some(FormEvent::Submitted(report))
            }
            FormStep::AutoClose => {
                self.reset();
                tracing::info!("formulario de reporte cerrado luego del envio");
                Some(FormEvent::Closed)
            }
        }
    }

    /// Proximo momento en que `tick` tiene algo para hacer.
    pub fn next_deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(Deferred::due_at)
    }

    fn build_submitted_report(&self, now: DateTime<Utc>) -> Option<SubmittedReport> {
        Some(SubmittedReport {
            category: self.category?,
            description: self.description.clone(),
            location: self.location.clone(),
            used_current_location: self.use_current_location,
            media_count: self.media.len(),
            submitted_at: now,
        })
    }

    fn check_editing(&self) -> Result<(), ReportError> {
        match self.phase {
            FormPhase::Editing => Ok(()),
            FormPhase::Submitting => Err(ReportError::SubmissionInProgress),
            FormPhase::Closed | FormPhase::Success => Err(ReportError::NotEditing),
        }
    }

    fn reset(&mut self) {
        self.phase = FormPhase::Closed;
        self.category = None;
        self.description.clear();
        self.location.clear();
        self.use_current_location = false;
        self.media.clear();
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap()
    }

    fn open_form() -> ReportForm {
        let mut form = ReportForm::default();
        form.open();
        form
    }

    fn assert_pristine(form: &ReportForm) {
        assert_eq!(form.phase(), FormPhase::Closed);
        assert_eq!(form.category(), None);
        assert_eq!(form.description(), "");
        assert_eq!(form.location(), "");
        assert!(!form.uses_current_location());
        assert_eq!(form.media_count(), 0);
        assert_eq!(form.next_deadline(), None);
    }

    #[test]
    fn test_01_validity_over_all_combinations() {
        for type_set in [false, true] {
            for description_set in [false, true] {
                for location_set in [false, true] {
                    let mut form = open_form();
                    if type_set {
                        form.set_category(ReportCategory::Accident).unwrap();
                    }
                    if description_set {
                        form.set_description("Choque en la esquina").unwrap();
                    }
                    if location_set {
                        form.set_location("Av. Corrientes 1234").unwrap();
                    }

                    assert_eq!(
                        form.is_valid(),
                        type_set && description_set && location_set,
                        "type={} description={} location={}",
                        type_set,
                        description_set,
                        location_set
                    );
                }
            }
        }
    }

    #[test]
    fn test_02_current_location_satisfies_location() {
        let mut form = open_form();
        form.set_category(ReportCategory::Theft).unwrap();
        form.set_description("Robo de celular").unwrap();
        assert_eq!(form.validate(), vec![ReportError::MissingLocation]);

        form.toggle_current_location().unwrap();

        assert!(form.is_valid());
        assert_eq!(form.location(), CURRENT_LOCATION_PLACEHOLDER);
        assert_eq!(
            form.set_location("otra ubicacion"),
            Err(ReportError::LocationLocked)
        );

        form.toggle_current_location().unwrap();
        assert_eq!(form.location(), "");
        assert!(form.set_location("Plaza Italia").is_ok());
    }

    #[test]
    fn test_03_validate_reports_every_missing_field() {
        let form = open_form();
        assert_eq!(
            form.validate(),
            vec![
                ReportError::MissingCategory,
                ReportError::MissingDescription,
                ReportError::MissingLocation,
            ]
        );
    }

    #[test]
    fn test_04_invalid_submit_is_rejected() {
        let mut form = open_form();
        form.set_description("algo raro").unwrap();

        assert_eq!(form.submit(start()), Err(ReportError::MissingCategory));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn test_05_cancel_resets_partial_input() {
        let mut form = open_form();
        form.set_category(ReportCategory::Vandalism).unwrap();
        form.set_description("Grafitis en la escuela").unwrap();
        form.toggle_current_location().unwrap();
        form.attach_media(vec![PathBuf::from("foto.jpg")]).unwrap();

        form.cancel().unwrap();
        assert_pristine(&form);

        form.cancel().unwrap();
        assert_pristine(&form);
    }

    #[test]
    fn test_06_full_submission_cycle() {
        let mut form = open_form();
        form.set_category(ReportCategory::Theft).unwrap();
        form.set_description("Saw someone near the gate").unwrap();
        form.toggle_current_location().unwrap();

        form.submit(start()).unwrap();
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(!form.submit_enabled());
        assert_eq!(form.submit_label(), "Submitting...");
        assert_eq!(form.tick(start() + Duration::milliseconds(999)), None);

        let event = form.tick(start() + Duration::seconds(1));
        match event {
            Some(FormEvent::Submitted(report)) => {
                assert_eq!(report.category, ReportCategory::Theft);
                assert_eq!(report.description, "Saw someone near the gate");
                assert!(report.used_current_location);
            }
            other => panic!("evento inesperado: {:?}", other),
        }
        assert_eq!(form.phase(), FormPhase::Success);
        assert_eq!(form.description(), "Saw someone near the gate");

        assert_eq!(form.tick(start() + Duration::milliseconds(2999)), None);
        assert_eq!(form.tick(start() + Duration::seconds(3)), Some(FormEvent::Closed));
        assert_pristine(&form);
    }

    #[test]
    fn test_07_cannot_cancel_or_edit_while_submitting() {
        let mut form = open_form();
        form.set_category(ReportCategory::Other).unwrap();
        form.set_description("Ruidos extraños").unwrap();
        form.set_location("Pasaje 5").unwrap();
        form.submit(start()).unwrap();

        assert_eq!(form.cancel(), Err(ReportError::SubmissionInProgress));
        assert_eq!(
            form.set_description("otra cosa"),
            Err(ReportError::SubmissionInProgress)
        );
        assert_eq!(form.phase(), FormPhase::Submitting);
    }

    #[test]
    fn test_08_force_close_drops_pending_steps() {
        let mut form = open_form();
        form.set_category(ReportCategory::Accident).unwrap();
        form.set_description("Choque").unwrap();
        form.set_location("Ruta 2").unwrap();
        form.submit(start()).unwrap();

        form.force_close();

        assert_pristine(&form);
        assert_eq!(form.tick(start() + Duration::seconds(10)), None);
    }

    #[test]
    fn test_09_cancel_during_success_closes_early() {
        let mut form = open_form();
        form.set_category(ReportCategory::Theft).unwrap();
        form.set_description("Robo").unwrap();
        form.set_location("Esquina").unwrap();
        form.submit(start()).unwrap();
        form.tick(start() + Duration::seconds(1));

        form.cancel().unwrap();

        assert_pristine(&form);
        assert_eq!(form.tick(start() + Duration::seconds(5)), None);
    }

    #[test]
    fn test_10_soft_limit_is_informative() {
        let mut form = open_form();
        let long_text = "a".repeat(300);
        form.set_description(&long_text).unwrap();

        assert_eq!(form.character_count(), 300);
        assert!(form.over_soft_limit());
        assert_eq!(form.description().len(), 300);
    }

    #[test]
    fn test_11_editing_a_closed_form_fails() {
        let mut form = ReportForm::default();
        assert_eq!(
            form.set_category(ReportCategory::Theft),
            Err(ReportError::NotEditing)
        );
        assert_eq!(form.submit(start()), Err(ReportError::NotEditing));
    }
}
