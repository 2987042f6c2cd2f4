//! Prompt editor

use egui::{RichText, TextEdit};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::dashboard::layout::SettingsSection;
use crate::dashboard::state::PanelState;
use crate::dashboard::theme::ThemeColors;
use crate::shared::SharedAppState;

/// Render the positive/negative prompt editors
pub fn render_prompts(
    ui: &mut egui::Ui,
    panel_state: &mut PanelState,
    shared_state: &Arc<RwLock<SharedAppState>>,
) {
    let mut guard = shared_state.write();
    let state = &mut *guard;

    ui.label(RichText::new(SettingsSection::Prompts.name()).size(15.0).strong());
    ui.add_space(4.0);

    ui.label(RichText::new("Positive Prompt").size(13.0).color(ThemeColors::TEXT_SECONDARY));
    ui.add(
        TextEdit::multiline(&mut state.params.prompts.positive)
            .hint_text("Describe what you want to see")
            .desired_rows(4)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(6.0);

    ui.label(RichText::new("Negative Prompt").size(13.0).color(ThemeColors::TEXT_SECONDARY));
    ui.add(
        TextEdit::multiline(&mut state.params.prompts.negative)
            .hint_text("Describe what to avoid")
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );

    let Some(preset) = state.presets.active() else {
        return;
    };

    ui.add_space(6.0);
    ui.checkbox(
        &mut panel_state.show_resolved_prompts,
        format!("Preview with \"{}\"", preset.name),
    );

    if panel_state.show_resolved_prompts {
        let resolved = preset.apply(&state.params.prompts);
        egui::Frame::none()
            .fill(ThemeColors::BG_LIGHT)
            .rounding(egui::Rounding::same(4.0))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(&resolved.positive).size(12.0));
                if !resolved.negative.is_empty() {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&resolved.negative)
                            .size(12.0)
                            .color(ThemeColors::TEXT_MUTED),
                    );
                }
            });
    }
}
