use egui::{RichText, ScrollArea, Ui};

use community_watch::{
    alerts::safety_tips::{GENERAL_TIPS, TIP_CARDS},
    app::app_state::AppAction,
};

use crate::theme::{card, heading, muted, CARD, INDIGO};

/// Pestaña de consejos: lista general, tarjetas por tema y el lanzador del asistente.
pub fn show(ui: &mut Ui, chat_open: bool, actions: &mut Vec<AppAction>) {
    ScrollArea::vertical().show(ui, |ui| {
        card(CARD).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(heading("Consejos de seguridad"));
            ui.add_space(6.0);
            for tip in GENERAL_TIPS {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new("🛡").color(INDIGO));
                    ui.label(tip);
                });
            }
        });
        ui.add_space(12.0);

        for tip_card in TIP_CARDS {
            card(CARD).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(tip_card.icon).size(22.0));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(tip_card.title).strong());
                        ui.label(muted(tip_card.description));
                    });
                });
            });
            ui.add_space(8.0);
        }

        if !chat_open && ui.button("💬 Asistente").clicked() {
            actions.push(AppAction::OpenChat);
        }
    });
}
