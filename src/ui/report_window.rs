use std::path::PathBuf;

use egui::{Align2, Color32, Context, RichText, Ui, Window};

use community_watch::{
    app::app_state::AppAction,
    report::{
        report_category::ReportCategory,
        report_form::{FormPhase, ReportForm},
    },
};

use crate::theme::{heading, muted, GREEN, INDIGO};

/// Modal de reporte de incidentes. Se monta siempre y decide que mostrar
/// segun la fase del formulario.
pub fn add_report_window(ctx: &Context, form: &ReportForm, actions: &mut Vec<AppAction>) {
    match form.phase() {
        FormPhase::Closed => {}
        FormPhase::Success => success_window(ctx),
        FormPhase::Editing | FormPhase::Submitting => {
            collect_dropped_media(ctx, form, actions);
            Window::new("Report Incident")
                .collapsible(false)
                .resizable(false)
                .title_bar(false)
                .anchor(Align2::CENTER_CENTER, [0., 0.])
                .show(ctx, |ui| {
                    ui.set_width(360.0);
                    form_contents(ui, form, actions);
                });
        }
    }
}

fn success_window(ctx: &Context) {
    Window::new("Report Submitted")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::CENTER_CENTER, [0., 0.])
        .show(ctx, |ui| {
            ui.set_width(320.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🛡").size(28.0).color(GREEN));
                ui.label(heading("Report Submitted!"));
                ui.label(muted("Thank you for helping keep our community safe."));
            });
        });
}

fn form_contents(ui: &mut Ui, form: &ReportForm, actions: &mut Vec<AppAction>) {
    let editing = form.phase() == FormPhase::Editing;

    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(heading("Report Incident"));
            ui.label(muted("Help keep our community safe"));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui.add_enabled(editing, egui::Button::new("✖")).clicked() {
                actions.push(AppAction::CloseReport);
            }
        });
    });
    ui.separator();

    let missing = form.validate();

    ui.label(RichText::new("What type of incident are you reporting?").strong());
    egui::Grid::new("report_categories")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            for (index, category) in ReportCategory::ALL.into_iter().enumerate() {
                let selected = form.category() == Some(category);
                let text = format!("{} {}", category.icon(), category.label());
                let response = ui.add_enabled(editing, egui::SelectableLabel::new(selected, text));
                if response.clicked() {
                    actions.push(AppAction::SetReportCategory(category));
                }
                if index % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    ui.add_space(8.0);

    ui.label(RichText::new("Description").strong());
    let mut description = form.description().to_string();
    let response = ui.add_enabled(
        editing,
        egui::TextEdit::multiline(&mut description)
            .desired_rows(3)
            .desired_width(f32::INFINITY)
            .hint_text("Please provide details about what you observed..."),
    );
    if response.changed() {
        actions.push(AppAction::SetReportDescription(description));
    }
    let count_color = if form.over_soft_limit() {
        Color32::from_rgb(220, 38, 38)
    } else {
        Color32::GRAY
    };
    ui.label(
        RichText::new(format!(
            "{}/{} characters",
            form.character_count(),
            form.timings().description_soft_limit
        ))
        .size(12.0)
        .color(count_color),
    );
    ui.add_space(8.0);

    ui.label(RichText::new("Location").strong());
    ui.horizontal(|ui| {
        let mut location = form.location().to_string();
        let response = ui.add_enabled(
            editing && !form.uses_current_location(),
            egui::TextEdit::singleline(&mut location)
                .desired_width(300.0)
                .hint_text("Enter location or use current"),
        );
        if response.changed() {
            actions.push(AppAction::SetReportLocation(location));
        }

        let pin_color = if form.uses_current_location() {
            INDIGO
        } else {
            Color32::GRAY
        };
        let pin = RichText::new("📍").color(pin_color);
        if ui
            .add_enabled(editing, egui::SelectableLabel::new(form.uses_current_location(), pin))
            .clicked()
        {
            actions.push(AppAction::ToggleCurrentLocation);
        }
    });
    ui.add_space(8.0);

    ui.label(RichText::new("Add Photos or Video (Optional)").strong());
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("📷").size(22.0).color(Color32::GRAY));
            ui.label(muted("Drop photos or video here"));
            if form.media_count() > 0 {
                ui.label(muted(&format!("{} file(s) attached", form.media_count())));
            }
        });
    });
    ui.add_space(8.0);

    if editing {
        for error in &missing {
            ui.label(RichText::new(error.to_string()).size(11.0).color(Color32::GRAY));
        }
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let submit = egui::Button::new(RichText::new(form.submit_label()).color(Color32::WHITE))
                .fill(if form.is_valid() { INDIGO } else { Color32::from_gray(200) });
            if ui.add_enabled(form.submit_enabled(), submit).clicked() {
                actions.push(AppAction::SubmitReport);
            }
            if ui.add_enabled(editing, egui::Button::new("Cancel")).clicked() {
                actions.push(AppAction::CloseReport);
            }
        });
    });
}

/// Los archivos soltados sobre la ventana se aceptan como adjuntos, sin procesarlos.
fn collect_dropped_media(ctx: &Context, form: &ReportForm, actions: &mut Vec<AppAction>) {
    if form.phase() != FormPhase::Editing {
        return;
    }

    let files: Vec<PathBuf> = ctx.input(|i| {
        i.raw
            .dropped_files
            .iter()
            .filter_map(|file| file.path.clone())
            .collect()
    });
    if !files.is_empty() {
        actions.push(AppAction::AttachMedia(files));
    }
}
