use egui::{Color32, RichText};

use community_watch::incidents::severity::Severity;

pub const INDIGO: Color32 = Color32::from_rgb(79, 70, 229);
pub const INDIGO_LIGHT: Color32 = Color32::from_rgb(238, 242, 255);
pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
pub const GREEN: Color32 = Color32::from_rgb(22, 163, 74);
pub const GREEN_LIGHT: Color32 = Color32::from_rgb(240, 253, 244);
pub const GRAY_TEXT: Color32 = Color32::from_rgb(75, 85, 99);
pub const CARD: Color32 = Color32::WHITE;

/// Fondo de la tarjeta de una alerta segun su severidad.
pub fn severity_background(severity: Severity) -> Color32 {
    match severity {
        Severity::High => Color32::from_rgb(254, 242, 242),
        Severity::Medium => Color32::from_rgb(254, 252, 232),
        Severity::Low => Color32::from_rgb(239, 246, 255),
    }
}

pub fn heading(text: &str) -> RichText {
    RichText::new(text).size(18.0).strong().color(Color32::from_rgb(17, 24, 39))
}

pub fn muted(text: &str) -> RichText {
    RichText::new(text).size(12.0).color(GRAY_TEXT)
}

/// Tarjeta blanca con bordes redondeados, como las del resto de las pantallas.
pub fn card(fill: Color32) -> egui::Frame {
    egui::Frame::none()
        .fill(fill)
        .rounding(8.0)
        .inner_margin(12.0)
}
