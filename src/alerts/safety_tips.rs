use crate::incidents::incident_kind::IncidentKind;

const THEFT_TIPS: [&str; 4] = [
    "Keep valuables out of sight",
    "Stay in well-lit areas",
    "Travel in groups when possible",
    "Be aware of your surroundings",
];

const SUSPICIOUS_TIPS: [&str; 4] = [
    "Maintain a safe distance",
    "Contact local authorities",
    "Document any unusual behavior",
    "Alert nearby businesses or neighbors",
];

const GENERIC_TIPS: [&str; 4] = [
    "Stay alert and aware",
    "Report any suspicious activity",
    "Keep emergency contacts handy",
    "Follow official guidance",
];

/// Recomendaciones que acompañan el detalle de una alerta, segun su categoria.
pub fn safety_tips_for(kind: &IncidentKind) -> &'static [&'static str; 4] {
    match kind {
        IncidentKind::Theft => &THEFT_TIPS,
        IncidentKind::Suspicious => &SUSPICIOUS_TIPS,
        _ => &GENERIC_TIPS,
    }
}

/// Consejos generales de la pestaña de consejos.
pub const GENERAL_TIPS: [&str; 6] = [
    "Manténgase consciente de su entorno en todo momento.",
    "Mantenga los contactos de emergencia fácilmente accesibles",
    "Reportar actividad sospechosa inmediatamente",
    "Reportar actividad sospechosa inmediatamente",
    "Reportar actividad sospechosa inmediatamente",
    "Reportar actividad sospechosa inmediatamente",
];

/// Tema de seguridad que se muestra como tarjeta en la pestaña de consejos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipCard {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const TIP_CARDS: [TipCard; 4] = [
    TipCard {
        id: 1,
        title: "Protege tu hogar",
        description: "Consejos básicos para mantener tu casa segura",
        icon: "🏠",
    },
    TipCard {
        id: 2,
        title: "Evita estafas telefónicas",
        description: "Cómo identificar y prevenir fraudes por teléfono",
        icon: "📞",
    },
    TipCard {
        id: 3,
        title: "Seguridad personal",
        description: "Tips para mantenerte seguro en la calle",
        icon: "🛡",
    },
    TipCard {
        id: 4,
        title: "Seguridad digital",
        description: "Protege tus datos y dispositivos",
        icon: "🔒",
    },
];
