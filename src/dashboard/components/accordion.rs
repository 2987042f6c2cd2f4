//! Collapsible settings card

use egui::{Id, RichText, Rounding, Sense};
use crate::dashboard::theme::ThemeColors;

/// Id of the clickable header of the accordion titled `title`
pub fn accordion_header_id(title: &str) -> Id {
    Id::new(("accordion_header", title))
}

/// Render a collapsible card. The header toggles `open`; the body is only
/// built while expanded. `summary` is shown dimmed next to the title.
pub fn accordion<R>(
    ui: &mut egui::Ui,
    title: &str,
    summary: Option<&str>,
    open: &mut bool,
    add_body: impl FnOnce(&mut egui::Ui) -> R,
) -> Option<R> {
    let mut body = None;

    egui::Frame::none()
        .fill(ThemeColors::BG_MEDIUM)
        .rounding(Rounding::same(6.0))
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let header = ui.horizontal(|ui| {
                let arrow = if *open { "v" } else { ">" };
                header_label(ui, RichText::new(arrow).size(12.0).color(ThemeColors::TEXT_MUTED));
                ui.add_space(4.0);
                header_label(ui, RichText::new(title).size(15.0).strong());
                if let Some(summary) = summary {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        header_label(
                            ui,
                            RichText::new(summary).size(12.0).color(ThemeColors::TEXT_MUTED),
                        );
                    });
                }
            }).response;

            if ui
                .interact(header.rect, accordion_header_id(title), Sense::click())
                .clicked()
            {
                *open = !*open;
            }

            if *open {
                ui.add_space(8.0);
                ui.separator();
                ui.add_space(6.0);
                body = Some(add_body(ui));
            }
        });

    body
}

/// Header text must not take clicks away from the header itself
fn header_label(ui: &mut egui::Ui, text: RichText) {
    ui.add(egui::Label::new(text).selectable(false));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::test_support::UiHarness;

    #[test]
    fn test_header_click_toggles_open() {
        let mut harness = UiHarness::new(400.0, 300.0);
        let mut open = false;
        let mut body_built = false;

        harness.frame(|ui| accordion(ui, "Upscale", None, &mut open, |_| ()));
        let header = harness.center_of(accordion_header_id("Upscale"));

        harness.click(header, |ui| {
            body_built = accordion(ui, "Upscale", None, &mut open, |_| ()).is_some();
        });
        assert!(open);
        assert!(body_built);

        harness.click(header, |ui| {
            body_built = accordion(ui, "Upscale", None, &mut open, |_| ()).is_some();
        });
        assert!(!open);
        assert!(!body_built);
    }
}
