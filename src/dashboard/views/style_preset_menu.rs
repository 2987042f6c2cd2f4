//! Style-preset menu - search and pick a preset

use egui::{Id, RichText, Rounding, Sense, TextEdit};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{info, warn};

use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::presets::StylePreset;
use crate::shared::{MenuOpenStore, SharedAppState};

/// Render the preset list. Picking an entry selects it and closes the menu.
pub fn render_style_preset_menu(
    ui: &mut egui::Ui,
    shared_state: &Arc<RwLock<SharedAppState>>,
    menu: &MenuOpenStore,
) {
    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
        menu.close();
        return;
    }

    let mut state = shared_state.write();

    ui.add(
        TextEdit::singleline(&mut state.presets.search)
            .hint_text("Search presets")
            .desired_width(f32::INFINITY),
    );
    ui.add_space(8.0);

    let active_id = state.presets.active_id().map(str::to_string);
    let mut picked: Option<Option<String>> = None;

    if preset_row(ui, None, "None", "No style applied", active_id.is_none()) {
        picked = Some(None);
    }

    let matches: Vec<&StylePreset> = state.presets.filtered().collect();
    if matches.is_empty() {
        ui.add_space(12.0);
        ui.label(RichText::new("No presets match").color(ThemeColors::TEXT_MUTED));
    }
    for preset in matches {
        let selected = active_id.as_deref() == Some(preset.id.as_str());
        if preset_row(ui, Some(&preset.id), &preset.name, &preset.positive_prompt, selected) {
            picked = Some(Some(preset.id.clone()));
        }
    }

    if let Some(choice) = picked {
        match state.presets.set_active(choice.as_deref()) {
            Ok(()) => info!("Style preset set to {}", choice.as_deref().unwrap_or("none")),
            Err(e) => {
                warn!("Could not select style preset: {}", e);
                state.runtime.set_error(e.to_string());
            }
        }
        drop(state);
        menu.close();
    }
}

/// Id of the row for `preset_id`; `None` is the "no preset" row
pub fn preset_row_id(preset_id: Option<&str>) -> Id {
    Id::new(("style_preset_row", preset_id))
}

/// Render one selectable row. Returns true when clicked.
fn preset_row(
    ui: &mut egui::Ui,
    preset_id: Option<&str>,
    name: &str,
    detail: &str,
    selected: bool,
) -> bool {
    let response = egui::Frame::none()
        .fill(if selected {
            color_with_alpha(ThemeColors::ACCENT_PRIMARY, 40)
        } else {
            ThemeColors::BG_MEDIUM
        })
        .rounding(Rounding::same(4.0))
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            let color = if selected {
                ThemeColors::ACCENT_PRIMARY
            } else {
                ThemeColors::TEXT_PRIMARY
            };
            ui.label(RichText::new(name).strong().color(color));
            if !detail.is_empty() {
                ui.add(
                    egui::Label::new(
                        RichText::new(detail).size(12.0).color(ThemeColors::TEXT_MUTED),
                    )
                    .truncate(),
                );
            }
        })
        .response;

    ui.add_space(4.0);
    ui.interact(response.rect, preset_row_id(preset_id), Sense::click())
        .clicked()
}
