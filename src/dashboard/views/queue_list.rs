//! Queue list - what has been submitted so far

use egui::RichText;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::dashboard::theme::ThemeColors;
use crate::queue::QueueStatus;
use crate::shared::SharedAppState;

/// Render the submitted items, newest first
pub fn render_queue_list(ui: &mut egui::Ui, shared_state: &Arc<RwLock<SharedAppState>>) {
    let state = shared_state.read();

    ui.heading(RichText::new("Queue").size(22.0).strong());
    ui.add_space(4.0);
    ui.label(
        RichText::new(format!(
            "{} submitted, {} pending",
            state.queue.items().len(),
            state.queue.pending_count()
        ))
        .size(13.0)
        .color(ThemeColors::TEXT_SECONDARY),
    );
    ui.add_space(12.0);

    if state.queue.items().is_empty() {
        ui.label(RichText::new("Nothing queued yet. Press Invoke to submit.").color(ThemeColors::TEXT_MUTED));
        return;
    }

    let now = Instant::now();
    egui::ScrollArea::vertical().id_salt("queue_list").show(ui, |ui| {
        egui::Grid::new("queue_grid")
            .num_columns(6)
            .striped(true)
            .spacing([16.0, 6.0])
            .show(ui, |ui| {
                ui.label(RichText::new("Status").strong());
                ui.label(RichText::new("Batch").strong());
                ui.label(RichText::new("Queued").strong());
                ui.label(RichText::new("Seed").strong());
                ui.label(RichText::new("Size").strong());
                ui.label(RichText::new("Prompt").strong());
                ui.end_row();

                for item in state.queue.items().iter().rev() {
                    let (label, color) = match item.status {
                        QueueStatus::Pending => ("Pending", ThemeColors::ACCENT_INVOKE),
                        QueueStatus::Canceled => ("Canceled", ThemeColors::TEXT_MUTED),
                    };
                    let generation = &item.params.generation;
                    ui.label(RichText::new(label).color(color));
                    ui.label(format!("#{}", item.batch_index + 1));
                    ui.label(
                        RichText::new(format_age(now.saturating_duration_since(item.enqueued_at)))
                            .color(ThemeColors::TEXT_MUTED),
                    );
                    ui.label(generation.seed.to_string());
                    ui.label(format!("{}x{}", generation.width, generation.height));
                    ui.add(egui::Label::new(item.prompts.positive.as_str()).truncate());
                    ui.end_row();
                }
            });
    });
}

/// Short relative time for the "Queued" column
fn format_age(age: Duration) -> String {
    let secs = age.as_secs();
    match secs {
        0..=4 => "just now".to_string(),
        5..=59 => format!("{}s ago", secs),
        60..=3599 => format!("{}m ago", secs / 60),
        _ => format!("{}h ago", secs / 3600),
    }
}
