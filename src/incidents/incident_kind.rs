use std::fmt;

/// Categoria de un incidente.
///
/// Los datos de ejemplo traen etiquetas mezcladas en ingles y castellano
/// ("robo", "sospechoso", "Accident"), por eso toda etiqueta pasa por
/// `IncidentKind::from_label` al ingresar al sistema. Las etiquetas que no
/// corresponden a ninguna categoria conocida se conservan en `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IncidentKind {
    Theft,
    Suspicious,
    Vandalism,
    Accident,
    Other(String),
}

impl IncidentKind {
    /// Normaliza una etiqueta libre a una categoria, sin distinguir mayusculas.
    pub fn from_label(label: &str) -> IncidentKind {
        let normalized = label.trim().to_lowercase();
        match normalized.as_str() {
            "theft" | "robo" | "hurto" => IncidentKind::Theft,
            "suspicious" | "sospechoso" => IncidentKind::Suspicious,
            "vandalism" | "vandalismo" => IncidentKind::Vandalism,
            "accident" | "accidente" => IncidentKind::Accident,
            "otro" => IncidentKind::Other("other".to_string()),
            _ => IncidentKind::Other(normalized),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            IncidentKind::Theft => "theft",
            IncidentKind::Suspicious => "suspicious",
            IncidentKind::Vandalism => "vandalism",
            IncidentKind::Accident => "accident",
            IncidentKind::Other(label) => label,
        }
    }

    /// Etiqueta con la primera letra en mayuscula, tal como se muestra en las vistas.
    pub fn display_name(&self) -> String {
        capitalize(self.label())
    }

    /// Indica si la etiqueta original correspondia a una categoria conocida.
    pub fn is_known(&self) -> bool {
        match self {
            IncidentKind::Other(label) => label == "other",
            _ => true,
        }
    }
}

impl fmt::Display for IncidentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Pasa a mayuscula solo el primer caracter y deja el resto intacto.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
