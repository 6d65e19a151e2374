use egui::{Align, Layout, RichText, Ui};

use community_watch::app::{
    app_state::AppAction,
    navigation::{tab_entries, Tab},
};

use crate::theme::{GRAY_TEXT, INDIGO};

/// Barra inferior con las cuatro pestañas. Resalta la activa y pide el cambio.
pub fn show(ui: &mut Ui, active_tab: Tab, actions: &mut Vec<AppAction>) {
    let entries = tab_entries(active_tab);
    let width = ui.available_width() / entries.len() as f32;

    ui.horizontal(|ui| {
        for entry in entries {
            let color = if entry.active { INDIGO } else { GRAY_TEXT };
            ui.allocate_ui_with_layout(
                egui::vec2(width, 48.0),
                Layout::top_down(Align::Center),
                |ui| {
                    let label = RichText::new(format!("{}\n{}", entry.icon, entry.label))
                        .size(13.0)
                        .color(color);
                    if ui.add(egui::Button::new(label).frame(false)).clicked() {
                        actions.push(AppAction::SelectTab(entry.tab));
                    }
                },
            );
        }
    });
}
