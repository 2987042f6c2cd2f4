//! Style-preset menu trigger

use egui::{Button, RichText, Rounding};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

use crate::dashboard::theme::ThemeColors;
use crate::shared::{MenuOpenStore, SharedAppState};

/// Render the button that opens and closes the style-preset menu
pub fn render_style_preset_trigger(
    ui: &mut egui::Ui,
    shared_state: &Arc<RwLock<SharedAppState>>,
    menu: &MenuOpenStore,
) -> egui::Response {
    let active_name = shared_state
        .read()
        .presets
        .active()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "None".to_string());

    let arrow = if menu.is_open() { "^" } else { "v" };
    let text = RichText::new(format!("Style Preset: {}   {}", active_name, arrow))
        .size(14.0)
        .color(ThemeColors::TEXT_PRIMARY);

    let button = Button::new(text)
        .fill(ThemeColors::BG_MEDIUM)
        .rounding(Rounding::same(4.0))
        .min_size(egui::vec2(ui.available_width(), 30.0));

    let response = ui.add(button);
    if response.clicked() {
        let open = menu.toggle();
        info!("Style preset menu {}", if open { "opened" } else { "closed" });
    }
    response
}
