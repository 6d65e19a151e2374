use egui::{RichText, Ui};

use community_watch::app::profile::DEMO_PROFILE;

use crate::theme::{card, heading, muted, CARD, INDIGO};

pub fn show(ui: &mut Ui) {
    card(CARD).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new("👤").size(40.0).color(INDIGO));
            ui.vertical(|ui| {
                ui.label(heading(DEMO_PROFILE.name));
                ui.label(muted(DEMO_PROFILE.member_since));
            });
        });
        ui.add_space(12.0);

        // Entradas sin comportamiento asociado.
        for setting in DEMO_PROFILE.settings {
            let _ = ui.add_sized(
                [ui.available_width(), 32.0],
                egui::Button::new(setting),
            );
        }
    });
}
