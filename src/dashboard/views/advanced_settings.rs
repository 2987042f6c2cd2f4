//! Advanced settings accordion

use egui::RichText;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::dashboard::components::{accordion, param_slider, SliderOptions};
use crate::dashboard::layout::SettingsSection;
use crate::dashboard::theme::ThemeColors;
use crate::params::{VaePrecision, CFG_RESCALE_RANGE, CLIP_SKIP_RANGE};
use crate::shared::SharedAppState;

/// Render the advanced accordion
pub fn render_advanced_settings(
    ui: &mut egui::Ui,
    open: &mut bool,
    shared_state: &Arc<RwLock<SharedAppState>>,
) {
    let mut state = shared_state.write();
    let summary = {
        let advanced = &state.params.advanced;
        let mut parts = vec![advanced.vae_precision.name().to_string()];
        if advanced.clip_skip > 0 {
            parts.push(format!("Clip skip {}", advanced.clip_skip));
        }
        if advanced.tiled_vae {
            parts.push("Tiled".to_string());
        }
        parts.join(" · ")
    };

    accordion(ui, SettingsSection::Advanced.name(), Some(&summary), open, |ui| {
        let advanced = &mut state.params.advanced;

        param_slider(ui, "CLIP Skip", &mut advanced.clip_skip, CLIP_SKIP_RANGE, SliderOptions::step(1.0));
        param_slider(
            ui,
            "CFG Rescale",
            &mut advanced.cfg_rescale,
            CFG_RESCALE_RANGE,
            SliderOptions::step(0.05).decimals(2),
        );

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(RichText::new("VAE Precision").color(ThemeColors::TEXT_SECONDARY));
            for precision in [VaePrecision::Fp16, VaePrecision::Fp32] {
                ui.radio_value(&mut advanced.vae_precision, precision, precision.name());
            }
        });

        ui.checkbox(&mut advanced.tiled_vae, "Tiled VAE")
            .on_hover_text("Encode and decode in tiles to reduce memory use");

        ui.horizontal(|ui| {
            ui.label(RichText::new("Seamless").color(ThemeColors::TEXT_SECONDARY));
            ui.checkbox(&mut advanced.seamless_x, "X");
            ui.checkbox(&mut advanced.seamless_y, "Y");
        });
    });
}
