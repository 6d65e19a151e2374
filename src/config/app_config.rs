use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use chrono::Duration;
use serde::Deserialize;

use crate::{
    error::AppError, incidents::incident_store::IncidentStore, report::report_form::ReportTimings,
};

pub const DEFAULT_CONFIG_PATH: &str = "./config/app_config.json";

/// Una hora.
pub const MAX_DELAY_MS: u64 = 60 * 60 * 1000;
/// Un año.
pub const MAX_ALERT_WINDOW_MINUTES: u64 = 365 * 24 * 60;
pub const MAX_WINDOW_SIDE: f32 = 10_000.0;

/// Sirve para levantar la configuracion de la aplicacion a partir del JSON.
/// Todos los campos son opcionales: lo que no venga en el archivo toma su
/// valor por defecto.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Cuanto tarda el envio simulado de un reporte.
    submit_delay_ms: u64,

    /// Cuanto se muestra el mensaje de exito antes de cerrar el modal.
    success_display_ms: u64,

    /// Demora de la respuesta enlatada del asistente.
    chat_reply_delay_ms: u64,

    /// Un incidente de severidad alta mas nuevo que esto dispara el banner de alerta.
    active_alert_window_minutes: u64,

    /// Limite de caracteres que se muestra junto a la descripcion. No se hace cumplir.
    description_soft_limit: usize,

    /// Archivo JSON alternativo con los incidentes de ejemplo.
    seed_file: Option<PathBuf>,

    window_width: f32,
    window_height: f32,

    /// Filtro de logs por defecto si no esta definida `RUST_LOG`.
    log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1000,
            success_display_ms: 2000,
            chat_reply_delay_ms: 1000,
            active_alert_window_minutes: 60,
            description_soft_limit: 280,
            seed_file: None,
            window_width: 420.0,
            window_height: 780.0,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Leo la configuracion a partir de un archivo json.
    pub fn new(config_file_path: &Path) -> Result<AppConfig, AppError> {
        let config = AppConfig::read_app_config(config_file_path)?;
        config.validate()?;
        Ok(config)
    }

    /// Si se paso un path explicito, tiene que poder leerse. Si no, se usa el
    /// archivo por defecto cuando existe y, si no existe, la configuracion por defecto.
    pub fn load(explicit_path: Option<&Path>) -> Result<AppConfig, AppError> {
        AppConfig::load_with_default(explicit_path, Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_with_default(
        explicit_path: Option<&Path>,
        default_path: &Path,
    ) -> Result<AppConfig, AppError> {
        match explicit_path {
            Some(path) => AppConfig::new(path),
            None if default_path.exists() => AppConfig::new(default_path),
            None => Ok(AppConfig::default()),
        }
    }

    fn read_app_config(file_path: &Path) -> Result<AppConfig, AppError> {
        let config_file = File::open(file_path).map_err(|err| {
            AppError::ReadingConfigFile(format!("{}: {}", file_path.display(), err))
        })?;

        let reader = BufReader::new(config_file);
        serde_json::from_reader(reader)
            .map_err(|err| AppError::ParsingConfig(format!("{}: {}", file_path.display(), err)))
    }

    fn validate(&self) -> Result<(), AppError> {
        let delays = [
            ("submit_delay_ms", self.submit_delay_ms),
            ("success_display_ms", self.success_display_ms),
            ("chat_reply_delay_ms", self.chat_reply_delay_ms),
        ];
        for (name, value) in delays {
            check_bounded(name, value, MAX_DELAY_MS)?;
        }
        check_bounded(
            "active_alert_window_minutes",
            self.active_alert_window_minutes,
            MAX_ALERT_WINDOW_MINUTES,
        )?;

        let sizes = [self.window_width, self.window_height];
        if sizes
            .iter()
            .any(|size| !size.is_finite() || *size <= 0.0 || *size > MAX_WINDOW_SIDE)
        {
            return Err(AppError::InvalidConfig(format!(
                "el tamaño de la ventana tiene que estar entre 0 y {}",
                MAX_WINDOW_SIDE
            )));
        }

        Ok(())
    }

    pub fn get_submit_delay(&self) -> Duration {
        millis_duration(self.submit_delay_ms)
    }

    pub fn get_success_display(&self) -> Duration {
        millis_duration(self.success_display_ms)
    }

    pub fn get_chat_reply_delay(&self) -> Duration {
        millis_duration(self.chat_reply_delay_ms)
    }

    pub fn get_active_alert_window(&self) -> Duration {
        let minutes = self.active_alert_window_minutes.min(MAX_ALERT_WINDOW_MINUTES);
        Duration::try_minutes(minutes as i64).unwrap_or(Duration::zero())
    }

    pub fn get_description_soft_limit(&self) -> usize {
        self.description_soft_limit
    }

    pub fn get_window_size(&self) -> [f32; 2] {
        [self.window_width, self.window_height]
    }

    pub fn get_log_level(&self) -> &str {
        &self.log_level
    }

    pub fn report_timings(&self) -> ReportTimings {
        ReportTimings {
            submit_delay: self.get_submit_delay(),
            success_display: self.get_success_display(),
            description_soft_limit: self.get_description_soft_limit(),
        }
    }

    /// Carga los incidentes del archivo configurado, o los embebidos si no hay ninguno.
    pub fn load_incidents(&self) -> Result<IncidentStore, AppError> {
        match &self.seed_file {
            Some(path) => IncidentStore::from_file(path),
            None => IncidentStore::seed(),
        }
    }
}

/// Un valor fuera de `1..=max` se rechaza.
fn check_bounded(name: &str, value: u64, max: u64) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::InvalidConfig(format!("{} no puede ser 0", name)));
    }
    if value > max {
        return Err(AppError::InvalidConfig(format!(
            "{} no puede ser mayor a {}",
            name, max
        )));
    }
    Ok(())
}

/// Los valores ya validados entran en el rango; el tope cubre configuraciones
/// deserializadas sin pasar por `validate`.
fn millis_duration(value: u64) -> Duration {
    let millis = value.min(MAX_DELAY_MS) as i64;
    Duration::try_milliseconds(millis).unwrap_or(Duration::zero())
}
