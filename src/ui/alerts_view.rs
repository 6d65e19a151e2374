use egui::{Color32, RichText, ScrollArea, Ui};

use community_watch::{
    alerts::{alert_feed::AlertRow, alert_summary::AlertSummary},
    app::app_state::AppAction,
    map::marker_layout::marker_color,
};

use crate::theme::{
    card, heading, muted, severity_background, CARD, GREEN, GREEN_LIGHT, INDIGO, INDIGO_LIGHT, RED,
};

/// Pantalla de alertas: banner de alerta activa, resumen del dia y la lista
/// de alertas recientes en el orden en que llegan.
pub fn show(
    ui: &mut Ui,
    summary: &AlertSummary,
    rows: &[AlertRow],
    actions: &mut Vec<AppAction>,
) {
    ScrollArea::vertical().show(ui, |ui| {
        if summary.has_active_alert {
            active_alert_banner(ui);
        }

        ui.add_space(8.0);
        overview(ui, summary);
        ui.add_space(12.0);

        ui.label(heading("Recent Alerts"));
        ui.add_space(6.0);

        if rows.is_empty() {
            card(CARD).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(muted("No recent alerts"));
            });
        }

        for row in rows {
            if alert_row(ui, row) {
                actions.push(AppAction::SelectIncident(row.id));
            }
            ui.add_space(8.0);
        }
    });
}

fn active_alert_banner(ui: &mut Ui) {
    card(RED).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("⚠ Active Security Alert").strong().color(Color32::WHITE));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("LIVE").size(11.0).color(Color32::WHITE));
            });
        });
    });
}

fn overview(ui: &mut Ui, summary: &AlertSummary) {
    card(CARD).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(heading("Today's Overview"));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("🔔");
            });
        });
        ui.columns(2, |columns| {
            card(INDIGO_LIGHT).show(&mut columns[0], |ui| {
                ui.label(muted("Active Alerts ⚠"));
                ui.label(
                    RichText::new(summary.active_alerts.to_string())
                        .size(24.0)
                        .strong()
                        .color(INDIGO),
                );
            });
            card(GREEN_LIGHT).show(&mut columns[1], |ui| {
                ui.label(muted("Area Status 🛡"));
                ui.label(RichText::new(summary.area_status).strong().color(GREEN));
            });
        });
    });
}

/// Devuelve true si se hizo click sobre la fila.
fn alert_row(ui: &mut Ui, row: &AlertRow) -> bool {
    let response = card(severity_background(row.severity))
        .stroke(egui::Stroke::new(1.0, marker_color(row.severity)))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(marker_color(row.severity)));
                ui.label(RichText::new(&row.title).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(muted("›"));
                });
            });
            ui.label(RichText::new(&row.description).size(13.0));
            ui.horizontal(|ui| {
                ui.label(muted(&format!("🕑 {}", row.time_ago)));
                ui.label(muted(&format!("📍 {}", row.distance)));
            });
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}
