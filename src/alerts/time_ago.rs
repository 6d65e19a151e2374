use chrono::{DateTime, Local, Utc};

const LOCAL_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Texto relativo de cuanto paso desde `timestamp`.
///
/// Los minutos se truncan; menos de una hora se muestra en minutos, menos de
/// un dia en horas y el resto en dias completos.
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_elapsed_minutes((now - timestamp).num_minutes())
}

pub fn format_elapsed_minutes(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{}m ago", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }

    format!("{}d ago", hours / 24)
}

/// Fecha y hora absolutas en la zona horaria local, para tooltips y detalle.
pub fn format_local_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format(LOCAL_TIMESTAMP_FORMAT)
        .to_string()
}
