/// Perfil fijo que muestra la pestaña de perfil. No hay usuarios reales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub member_since: &'static str,
    pub settings: [&'static str; 3],
}

pub const DEMO_PROFILE: Profile = Profile {
    name: "John Doe",
    member_since: "Miembro de la comunidad desde 2024",
    settings: [
        "Ajustes",
        "Preferencias de notificaciones",
        "Configuración de privacidad",
    ],
};
