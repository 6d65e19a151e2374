mod alerts_view;
mod map_view;
mod navigation_bar;
mod profile_view;
mod report_window;
mod theme;
mod tips_view;
mod windows;

use std::path::PathBuf;

use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::{CentralPanel, Color32, RichText, TopBottomPanel};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use community_watch::{
    app::{
        app_state::{AppAction, AppState},
        navigation::Tab,
    },
    config::app_config::AppConfig,
    utils::clock::SystemClock,
};
use theme::INDIGO;
use windows::*;

struct MyApp {
    state: AppState,
}

impl MyApp {
    /// Barra superior con el nombre de la app y el indicador "Live".
    fn handle_status_bar(&self, ctx: &egui::Context) {
        TopBottomPanel::top("status_bar")
            .frame(egui::Frame::none().fill(INDIGO).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("🧭 Vigilancia de seguridad")
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new("Live").size(11.0).color(Color32::WHITE));
                    });
                });
            });
    }

    /// Dibuja la pantalla de la pestaña activa y los modales, y devuelve las
    /// acciones que pidio el usuario en este frame.
    fn handle_views(&self, ctx: &egui::Context) -> Vec<AppAction> {
        let mut actions = Vec::new();

        TopBottomPanel::bottom("navigation_bar").show(ctx, |ui| {
            navigation_bar::show(ui, self.state.active_tab(), &mut actions);
        });

        CentralPanel::default().show(ctx, |ui| match self.state.active_tab() {
            Tab::Map => map_view::show(ui, self.state.incidents()),
            Tab::Alerts => alerts_view::show(
                ui,
                &self.state.alert_summary(),
                &self.state.alert_rows(),
                &mut actions,
            ),
            Tab::Tips => tips_view::show(ui, self.state.chat().is_some(), &mut actions),
            Tab::Profile => profile_view::show(ui),
        });

        add_report_button(ctx, &mut actions);
        if self.state.active_tab() == Tab::Alerts {
            add_alert_detail_window(ctx, self.state.selected_detail(), &mut actions);
        }
        if let Some(chat) = self.state.chat() {
            add_chat_window(ctx, chat, &mut actions);
        }
        report_window::add_report_window(ctx, self.state.report_form(), &mut actions);

        actions
    }

    /// Pide un nuevo frame justo cuando vence el proximo paso diferido.
    fn schedule_repaint(&self, ctx: &egui::Context) {
        if let Some(deadline) = self.state.next_deadline() {
            let wait = (deadline - self.state.now())
                .to_std()
                .unwrap_or(std::time::Duration::ZERO);
            ctx.request_repaint_after(wait);
        }
    }
}

impl App for MyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Err(e) = self.state.dispatch(AppAction::Tick) {
            tracing::error!("Error: {}", e);
        }

        self.handle_status_bar(ctx);
        for action in self.handle_views(ctx) {
            if let Err(e) = self.state.dispatch(action) {
                tracing::warn!("Accion rechazada: {}", e);
            }
        }

        self.schedule_repaint(ctx);
    }
}

impl Drop for MyApp {
    fn drop(&mut self) {
        self.state.shutdown();
    }
}

/// Funcion que se encarga de inicializar la aplicacion con el estado ya cargado
fn create_my_app(cc: &CreationContext<'_>, state: AppState) -> Box<dyn App> {
    egui_extras::install_image_loaders(&cc.egui_ctx);
    cc.egui_ctx.set_visuals(egui::Visuals::light());
    Box::new(MyApp { state })
}

fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

// Entry point of the application, sets up window options and runs the main event loop
fn main() {
    // El primer argumento, si existe, es el path al archivo de configuracion.
    let explicit_path = std::env::args().nth(1).map(PathBuf::from);
    let (config, config_error) = match AppConfig::load(explicit_path.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_logging(config.get_log_level());
    if let Some(e) = config_error {
        tracing::error!("{}. Se usa la configuracion por defecto.", e);
    }

    let state = AppState::from_config(&config, Box::new(SystemClock));

    let app_name = "Vigilancia de seguridad";
    let win_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.get_window_size())
            .with_title(app_name),
        ..Default::default()
    };
    if let Err(e) = run_native(
        app_name,
        win_options,
        Box::new(|cc| Ok(create_my_app(cc, state))),
    ) {
        tracing::error!("Error: {}", e);
    }
}
