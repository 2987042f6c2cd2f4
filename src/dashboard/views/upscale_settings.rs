//! Upscale settings accordion

use egui::RichText;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::dashboard::components::{accordion, param_slider, SliderOptions};
use crate::dashboard::layout::SettingsSection;
use crate::dashboard::theme::ThemeColors;
use crate::params::{UpscaleFactor, UPSCALE_ADJUST_RANGE};
use crate::shared::SharedAppState;

const UPSCALE_MODELS: [&str; 3] = ["RealESRGAN_x4plus", "RealESRGAN_x4plus_anime_6B", "SwinIR_x4"];

/// Render the upscale accordion
pub fn render_upscale_settings(
    ui: &mut egui::Ui,
    open: &mut bool,
    shared_state: &Arc<RwLock<SharedAppState>>,
) {
    let mut state = shared_state.write();
    let summary = if state.params.upscale.enabled {
        format!("x{}", state.params.upscale.scale.multiplier())
    } else {
        "Off".to_string()
    };

    let (width, height) = (state.params.generation.width, state.params.generation.height);

    accordion(ui, SettingsSection::Upscale.name(), Some(&summary), open, |ui| {
        let upscale = &mut state.params.upscale;

        ui.checkbox(&mut upscale.enabled, "Upscale after generation");

        ui.add_enabled_ui(upscale.enabled, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Model").color(ThemeColors::TEXT_SECONDARY));
                egui::ComboBox::from_id_salt("upscale_model")
                    .selected_text(upscale.model.clone())
                    .show_ui(ui, |ui| {
                        for model in UPSCALE_MODELS {
                            ui.selectable_value(&mut upscale.model, model.to_string(), model);
                        }
                    });
            });

            ui.horizontal(|ui| {
                ui.label(RichText::new("Scale").color(ThemeColors::TEXT_SECONDARY));
                ui.radio_value(&mut upscale.scale, UpscaleFactor::X2, "2x");
                ui.radio_value(&mut upscale.scale, UpscaleFactor::X4, "4x");
            });

            param_slider(ui, "Creativity", &mut upscale.creativity, UPSCALE_ADJUST_RANGE, SliderOptions::step(1.0));
            param_slider(ui, "Structure", &mut upscale.structure, UPSCALE_ADJUST_RANGE, SliderOptions::step(1.0));

            let (out_w, out_h) = upscale.output_size(width, height);
            ui.label(
                RichText::new(format!("Output {}x{}", out_w, out_h))
                    .size(12.0)
                    .color(ThemeColors::TEXT_MUTED),
            );
        });
    });
}
