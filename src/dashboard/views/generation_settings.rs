//! Generation settings accordion

use egui::RichText;
use parking_lot::RwLock;
use rand::Rng;
use std::sync::Arc;
use tracing::debug;

use crate::dashboard::components::{accordion, param_slider, SliderOptions};
use crate::dashboard::layout::SettingsSection;
use crate::dashboard::theme::ThemeColors;
use crate::params::{
    snap_to_grid, Scheduler, CFG_RANGE, DIMENSION_GRID, MAX_DIMENSION, MIN_DIMENSION, STEPS_RANGE,
};
use crate::shared::SharedAppState;

const MAIN_MODELS: [&str; 4] = [
    "stable-diffusion-v1-5",
    "stable-diffusion-2-1",
    "sdxl-base-1.0",
    "dreamshaper-8",
];

/// Render the generation accordion
pub fn render_generation_settings(
    ui: &mut egui::Ui,
    open: &mut bool,
    shared_state: &Arc<RwLock<SharedAppState>>,
) {
    let mut state = shared_state.write();
    let summary = {
        let generation = &state.params.generation;
        format!("{} · {} steps", generation.model, generation.steps)
    };

    accordion(ui, SettingsSection::Generation.name(), Some(&summary), open, |ui| {
        let generation = &mut state.params.generation;

        ui.horizontal(|ui| {
            ui.label(RichText::new("Model").color(ThemeColors::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt("main_model")
                .selected_text(generation.model.clone())
                .show_ui(ui, |ui| {
                    for model in MAIN_MODELS {
                        ui.selectable_value(&mut generation.model, model.to_string(), model);
                    }
                });
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new("Scheduler").color(ThemeColors::TEXT_SECONDARY));
            egui::ComboBox::from_id_salt("scheduler")
                .selected_text(generation.scheduler.name())
                .show_ui(ui, |ui| {
                    for scheduler in Scheduler::ALL {
                        ui.selectable_value(&mut generation.scheduler, scheduler, scheduler.name());
                    }
                });
        });

        param_slider(ui, "Steps", &mut generation.steps, STEPS_RANGE, SliderOptions::step(1.0));
        param_slider(
            ui,
            "CFG Scale",
            &mut generation.cfg_scale,
            CFG_RANGE,
            SliderOptions::step(0.5).decimals(1),
        );

        ui.add_space(4.0);

        let grid = DIMENSION_GRID as f64;
        let width_changed = param_slider(
            ui,
            "Width",
            &mut generation.width,
            MIN_DIMENSION..=MAX_DIMENSION,
            SliderOptions::step(grid).suffix(" px"),
        )
        .changed();
        let height_changed = param_slider(
            ui,
            "Height",
            &mut generation.height,
            MIN_DIMENSION..=MAX_DIMENSION,
            SliderOptions::step(grid).suffix(" px"),
        )
        .changed();
        if width_changed || height_changed {
            generation.width = snap_to_grid(generation.width);
            generation.height = snap_to_grid(generation.height);
        }

        if ui.button("Swap").on_hover_text("Swap width and height").clicked() {
            generation.swap_dimensions();
        }

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("Seed").color(ThemeColors::TEXT_SECONDARY));
            ui.add_enabled(
                !generation.randomize_seed,
                egui::DragValue::new(&mut generation.seed),
            );
            if ui
                .add_enabled(!generation.randomize_seed, egui::Button::new("Shuffle"))
                .on_hover_text("Draw a new seed")
                .clicked()
            {
                generation.seed = rand::rng().random();
                debug!(seed = generation.seed, "Shuffled seed");
            }
            ui.checkbox(&mut generation.randomize_seed, "Random");
        });
    });
}
