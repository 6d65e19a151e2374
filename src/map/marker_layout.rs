use egui::{Color32, Pos2, Vec2};

use crate::incidents::{incident::Incident, severity::Severity};

/// Separacion en pixeles entre marcadores consecutivos.
pub const MARKER_STEP: f32 = 20.0;

/// El mapa es una imagen fija: los marcadores no se proyectan desde su
/// ubicacion geografica sino que se corren desde el centro segun su id.
pub fn marker_offset(id: u32) -> Vec2 {
    let step = id as f32 * MARKER_STEP;
    Vec2::new(step, step)
}

pub fn marker_position(center: Pos2, id: u32) -> Pos2 {
    center + marker_offset(id)
}

pub fn marker_color(severity: Severity) -> Color32 {
    match severity {
        Severity::High => Color32::from_rgb(239, 68, 68),
        Severity::Medium => Color32::from_rgb(234, 179, 8),
        Severity::Low => Color32::from_rgb(59, 130, 246),
    }
}

/// Un marcador listo para dibujar sobre el fondo del mapa.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: u32,
    pub position: Pos2,
    pub color: Color32,
}

pub fn layout_markers(incidents: &[Incident], center: Pos2) -> Vec<Marker> {
    incidents
        .iter()
        .map(|incident| Marker {
            id: incident.get_id(),
            position: marker_position(center, incident.get_id()),
            color: marker_color(incident.get_severity()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::incidents::incident_store::IncidentStore;

    use super::*;

    #[test]
    fn test_offset_grows_with_id() {
        assert_eq!(marker_offset(0), Vec2::ZERO);
        assert_eq!(marker_offset(1), Vec2::new(20.0, 20.0));
        assert_eq!(marker_offset(3), Vec2::new(60.0, 60.0));
    }

    #[test]
    fn test_markers_ignore_geographic_location() {
        let store = IncidentStore::seed().unwrap();
        let markers = layout_markers(store.get_incidents(), Pos2::new(200.0, 300.0));

        assert_eq!(markers.len(), 4);
        assert_eq!(markers[1].position, Pos2::new(240.0, 340.0));
        assert_eq!(markers[2].position, Pos2::new(260.0, 360.0));
    }

    #[test]
    fn test_marker_colors_follow_severity() {
        assert_eq!(marker_color(Severity::High), Color32::from_rgb(239, 68, 68));
        assert_eq!(marker_color(Severity::Medium), Color32::from_rgb(234, 179, 8));
        assert_eq!(marker_color(Severity::Low), Color32::from_rgb(59, 130, 246));
    }
}
