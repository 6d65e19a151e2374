use std::fmt;

/// Las cinco categorias que ofrece el formulario de reporte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportCategory {
    Theft,
    Suspicious,
    Vandalism,
    Accident,
    Other,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Theft,
        ReportCategory::Suspicious,
        ReportCategory::Vandalism,
        ReportCategory::Accident,
        ReportCategory::Other,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReportCategory::Theft => "theft",
            ReportCategory::Suspicious => "suspicious",
            ReportCategory::Vandalism => "vandalism",
            ReportCategory::Accident => "accident",
            ReportCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportCategory::Theft => "Theft",
            ReportCategory::Suspicious => "Suspicious Activity",
            ReportCategory::Vandalism => "Vandalism",
            ReportCategory::Accident => "Accident",
            ReportCategory::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ReportCategory::Theft => "🖐",
            ReportCategory::Suspicious => "⚠",
            ReportCategory::Vandalism => "🛡",
            ReportCategory::Accident => "🚗",
            ReportCategory::Other => "❓",
        }
    }
}

impl fmt::Display for ReportCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
