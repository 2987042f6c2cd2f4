//! Queue controls - Invoke, cancel and clear

use egui::{Button, RichText, Rounding};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::dashboard::theme::{color_with_alpha, ThemeColors};
use crate::params::BATCH_RANGE;
use crate::shared::{QueueCommand, SharedAppState};

/// Render the queue-control bar. Returns the Invoke button's response.
pub fn render_queue_controls(
    ui: &mut egui::Ui,
    shared_state: &Arc<RwLock<SharedAppState>>,
) -> egui::Response {
    let mut state = shared_state.write();
    let pending = state.queue.pending_count();
    let has_items = !state.queue.items().is_empty();

    let invoke = ui.horizontal(|ui| {
        let invoke = Button::new(
            RichText::new("Invoke")
                .size(15.0)
                .strong()
                .color(ThemeColors::TEXT_PRIMARY),
        )
        .fill(ThemeColors::ACCENT_INVOKE)
        .rounding(Rounding::same(4.0))
        .min_size(egui::vec2(110.0, 32.0));

        let invoke = ui.add(invoke).on_hover_text("Queue a batch from the current parameters");
        if invoke.clicked() {
            let batch_count = state.runtime.batch_count;
            state.runtime.queue_command = Some(QueueCommand::Enqueue { batch_count });
        }

        ui.add(
            egui::DragValue::new(&mut state.runtime.batch_count)
                .range(BATCH_RANGE)
                .prefix("x"),
        )
        .on_hover_text("Batch count");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.add_enabled(has_items, Button::new("Clear")).clicked() {
                state.runtime.queue_command = Some(QueueCommand::Clear);
            }
            if ui.add_enabled(pending > 0, Button::new("Cancel")).clicked() {
                state.runtime.queue_command = Some(QueueCommand::CancelNext);
            }
        });

        invoke
    })
    .inner;

    ui.label(
        RichText::new(format!("{} pending", pending))
            .size(12.0)
            .color(ThemeColors::TEXT_MUTED),
    );

    // Error banner
    let mut dismiss = false;
    if let Some(error) = &state.runtime.last_error {
        egui::Frame::none()
            .fill(color_with_alpha(ThemeColors::ACCENT_ERROR, 40))
            .rounding(Rounding::same(4.0))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(error).color(ThemeColors::ACCENT_ERROR));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        dismiss = ui.small_button("x").clicked();
                    });
                });
            });
    }
    if dismiss {
        state.runtime.clear_error();
    }

    invoke
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::test_support::UiHarness;

    #[test]
    fn test_invoke_sets_enqueue_command() {
        let shared_state = Arc::new(RwLock::new(SharedAppState::default()));
        shared_state.write().runtime.batch_count = 4;
        let mut harness = UiHarness::new(400.0, 200.0);

        let invoke = harness
            .frame(|ui| render_queue_controls(ui, &shared_state))
            .rect
            .center();
        assert!(shared_state.read().runtime.queue_command.is_none());

        harness.click(invoke, |ui| render_queue_controls(ui, &shared_state));
        assert_eq!(
            shared_state.read().runtime.queue_command,
            Some(QueueCommand::Enqueue { batch_count: 4 })
        );
    }
}
