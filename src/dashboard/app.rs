//! Panel application entry point

use eframe::egui;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::dashboard::state::PanelState;
use crate::dashboard::theme;
use crate::dashboard::views::{render_parameters_panel, render_queue_list};
use crate::shared::{MenuOpenStore, MenuWatcher, QueueCommand, SharedAppState};

/// The main application window
pub struct ParamsApp {
    /// Shared application state
    shared_state: Arc<RwLock<SharedAppState>>,
    /// Style-preset menu flag, flipped by the trigger and the menu
    menu: MenuOpenStore,
    /// Last menu flag value seen by the panel
    menu_watcher: MenuWatcher,
    /// Panel view state
    panel_state: PanelState,
    /// Width of the parameters side panel
    panel_width: f32,
    /// Whether theme has been applied
    theme_applied: bool,
}

impl ParamsApp {
    /// Create a new application
    pub fn new(shared_state: Arc<RwLock<SharedAppState>>, menu: MenuOpenStore) -> Self {
        let (panel_state, panel_width) = {
            let state = shared_state.read();
            (
                PanelState::from_settings(&state.config.panel),
                state.config.panel.width,
            )
        };

        Self {
            menu_watcher: MenuWatcher::new(&menu),
            shared_state,
            menu,
            panel_state,
            panel_width,
            theme_applied: false,
        }
    }

    /// Create eframe options for the window
    pub fn options() -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 760.0])
                .with_min_inner_size([640.0, 480.0])
                .with_title("ParamDeck"),
            ..Default::default()
        }
    }

    /// Process queue commands from the UI
    fn process_queue_commands(&mut self) {
        let mut guard = self.shared_state.write();
        let state = &mut *guard;

        let Some(command) = state.runtime.queue_command.take() else {
            return;
        };

        match command {
            QueueCommand::Enqueue { batch_count } => {
                let prompts = state.presets.resolve(&state.params.prompts);
                let mut rng = rand::rng();
                match state
                    .queue
                    .enqueue(&state.params, prompts, batch_count, || rng.random())
                {
                    Ok(_) => state.runtime.clear_error(),
                    Err(e) => {
                        warn!("Invoke rejected: {}", e);
                        state.runtime.set_error(e.to_string());
                    }
                }
            }
            QueueCommand::CancelNext => {
                state.queue.cancel_next();
            }
            QueueCommand::Clear => {
                state.queue.cancel_all();
            }
        }
    }

    /// Keep the panel width and accordion flags in the config so they are saved on exit
    fn sync_panel_settings(&self) {
        let mut state = self.shared_state.write();
        state.config.panel.width = self.panel_width;
        self.panel_state.store_into(&mut state.config.panel);
    }
}

impl eframe::App for ParamsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_theme(ctx);
            self.theme_applied = true;
        }

        self.process_queue_commands();

        if self.menu_watcher.poll() {
            debug!(open = self.menu_watcher.is_open(), "Menu flag changed");
            ctx.request_repaint();
        }

        let panel = egui::SidePanel::left("parameters_panel")
            .resizable(true)
            .default_width(self.panel_width)
            .width_range(320.0..=720.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                render_parameters_panel(
                    ui,
                    &mut self.panel_state,
                    &self.shared_state,
                    &self.menu,
                    self.menu_watcher.is_open(),
                );
            });
        self.panel_width = panel.response.rect.width();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::none().inner_margin(24.0).show(ui, |ui| {
                render_queue_list(ui, &self.shared_state);
            });
        });

        self.sync_panel_settings();
    }
}

/// Run the application window
pub fn run_app(
    shared_state: Arc<RwLock<SharedAppState>>,
    menu: MenuOpenStore,
) -> Result<(), eframe::Error> {
    let app = ParamsApp::new(shared_state, menu);
    eframe::run_native(
        "ParamDeck",
        ParamsApp::options(),
        Box::new(|_cc| Ok(Box::new(app))),
    )
}
