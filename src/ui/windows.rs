use egui::{Align2, Color32, Context, RichText, Window};

use community_watch::{
    alerts::alert_detail::AlertDetail, app::app_state::AppAction,
    chat::chat_assistant::ChatAssistant, map::marker_layout::marker_color,
};

use crate::theme::{card, heading, muted, INDIGO, RED};

/// Boton flotante para abrir el modal de reporte. Se muestra en todas las pestañas.
pub fn add_report_button(ctx: &Context, actions: &mut Vec<AppAction>) {
    egui::Area::new(egui::Id::new("report_incident_button"))
        .anchor(Align2::RIGHT_BOTTOM, [-16., -16.])
        .show(ctx, |ui| {
            let button = egui::Button::new(RichText::new("➕").heading().color(Color32::WHITE))
                .fill(RED)
                .rounding(24.0)
                .min_size(egui::vec2(48.0, 48.0));
            if ui.add(button).clicked() {
                actions.push(AppAction::OpenReport);
            }
        });
}

/// Detalle de la alerta seleccionada. Sin seleccion no se muestra nada.
pub fn add_alert_detail_window(
    ctx: &Context,
    detail: Option<AlertDetail>,
    actions: &mut Vec<AppAction>,
) {
    let Some(detail) = detail else {
        return;
    };

    Window::new("Alert Detail")
        .id(egui::Id::new(("alert_detail", detail.id)))
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::CENTER_CENTER, [0., 0.])
        .show(ctx, |ui| {
            ui.set_width(340.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚠").color(marker_color(detail.severity)));
                ui.label(heading(&detail.title));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✖").clicked() {
                        actions.push(AppAction::CloseIncidentDetail);
                    }
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(muted(&format!("🕑 {}", detail.timestamp)));
                ui.label(muted(&format!("📍 {}", detail.distance)));
            });
            ui.label(muted(&format!("🌐 {}", detail.coordinates)));
            ui.label(&detail.description);
            ui.add_space(10.0);

            ui.label(RichText::new("🛡 Safety Recommendations").strong().color(INDIGO));
            card(Color32::from_gray(248)).show(ui, |ui| {
                ui.set_width(ui.available_width());
                for tip in detail.tips {
                    ui.label(format!("› {}", tip));
                }
            });
            ui.add_space(10.0);

            // Acciones decorativas: no hacen nada.
            ui.horizontal(|ui| {
                let share = RichText::new("Share Alert").color(Color32::WHITE);
                let _ = ui.add(egui::Button::new(share).fill(INDIGO));
                let _ = ui.button("Get Directions");
            });
        });
}

/// Ventana del asistente de chat, anclada abajo a la izquierda.
pub fn add_chat_window(ctx: &Context, chat: &ChatAssistant, actions: &mut Vec<AppAction>) {
    Window::new("Asistente de Seguridad")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [16., -16.])
        .show(ctx, |ui| {
            let toggle = if chat.is_visible() { "✖" } else { "🤖" };
            if ui.button(toggle).clicked() {
                actions.push(AppAction::ToggleChat);
            }
            if !chat.is_visible() {
                return;
            }

            ui.set_width(300.0);
            ui.label(RichText::new("🤖 Asistente de Seguridad").strong());
            ui.separator();

            egui::ScrollArea::vertical()
                .max_height(320.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in chat.messages() {
                        let layout = if message.is_bot {
                            egui::Layout::left_to_right(egui::Align::TOP)
                        } else {
                            egui::Layout::right_to_left(egui::Align::TOP)
                        };
                        ui.with_layout(layout, |ui| {
                            let (fill, text) = if message.is_bot {
                                (Color32::from_gray(240), Color32::from_gray(30))
                            } else {
                                (INDIGO, Color32::WHITE)
                            };
                            card(fill).show(ui, |ui| {
                                ui.set_max_width(220.0);
                                ui.label(RichText::new(&message.text).color(text));
                            });
                        });
                    }
                    if chat.pending_replies() > 0 {
                        ui.label(muted("El asistente esta escribiendo..."));
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let mut input = chat.input().to_string();
                let response = ui.add(
                    egui::TextEdit::singleline(&mut input)
                        .hint_text("Escribe tu mensaje...")
                        .desired_width(220.0),
                );
                if response.changed() {
                    actions.push(AppAction::SetChatInput(input.clone()));
                }

                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let can_send = !input.trim().is_empty();
                let send = ui.add_enabled(can_send, egui::Button::new("➤")).clicked();
                if can_send && (enter || send) {
                    actions.push(AppAction::SendChatMessage);
                }
            });
        });
}
