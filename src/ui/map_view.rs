use egui::{Color32, Id, Rect, Sense, Stroke, Ui};

use community_watch::{
    alerts::time_ago::format_local_timestamp,
    incidents::incident_store::IncidentStore,
    map::marker_layout::layout_markers,
};

const MARKER_RADIUS: f32 = 9.0;

/// Dibuja el fondo fijo del mapa y un marcador por incidente.
/// Pasar el mouse sobre un marcador muestra tipo, descripcion y fecha.
pub fn show(ui: &mut Ui, incidents: &IncidentStore) {
    let (rect, _response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());

    egui::Image::new(egui::include_image!("../../assets/map_background.png"))
        .maintain_aspect_ratio(false)
        .paint_at(ui, rect);
    ui.painter()
        .rect_filled(rect, 0.0, Color32::from_black_alpha(25));

    let painter = ui.painter_at(rect);
    for marker in layout_markers(incidents.get_incidents(), rect.center()) {
        let Some(incident) = incidents.find(marker.id) else {
            continue;
        };

        painter.circle_filled(marker.position, MARKER_RADIUS, marker.color);
        painter.circle_stroke(marker.position, MARKER_RADIUS, Stroke::new(2.0, Color32::WHITE));

        let hit_box = Rect::from_center_size(marker.position, egui::vec2(24.0, 24.0));
        ui.interact(hit_box, Id::new(("incident_marker", marker.id)), Sense::hover())
            .on_hover_ui(|ui| {
                ui.set_max_width(190.0);
                ui.strong(incident.get_kind().display_name());
                ui.label(egui::RichText::new(incident.get_description()).size(11.0));
                ui.label(
                    egui::RichText::new(incident.get_location().parse_to_string())
                        .size(11.0)
                        .color(Color32::GRAY),
                );
                ui.label(
                    egui::RichText::new(format_local_timestamp(incident.get_timestamp()))
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            });
    }
}
