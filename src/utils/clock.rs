use chrono::{DateTime, Utc};

/// Fuente de la hora actual. Las vistas y el contenedor de estado nunca llaman
/// a `Utc::now()` directamente, asi los tests pueden fijar el tiempo.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj del sistema.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
