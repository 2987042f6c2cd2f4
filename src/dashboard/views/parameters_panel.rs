//! Parameters panel - queue controls, style-preset trigger and the settings panes
//!
//! The panel only reads the menu flag. Both scroll panes share one
//! rectangle; while the flag is set the preset pane is painted over the
//! settings pane and swallows pointer input across the whole region,
//! wheel scrolling included.

use egui::{Align, Layout, Rounding, Sense, UiBuilder};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::trace;

use crate::dashboard::layout::{ContentPane, MenuBranch, PanelLayout, PanelSlot, SettingsSection};
use crate::dashboard::state::PanelState;
use crate::dashboard::theme::ThemeColors;
use crate::dashboard::views::{
    render_advanced_settings, render_generation_settings, render_prompts,
    render_queue_controls, render_style_preset_menu, render_style_preset_trigger,
    render_upscale_settings,
};
use crate::shared::{MenuOpenStore, SharedAppState};

/// What a call to [`render_parameters_panel`] actually drew, in order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedPanel {
    pub slots: Vec<PanelSlot>,
    pub panes: Vec<ContentPane>,
    pub sections: Vec<SettingsSection>,
    /// Vertical scroll offset of each drawn pane at the end of the frame
    pub offsets: Vec<(ContentPane, f32)>,
}

/// Render the parameters panel for the given value of the menu flag
pub fn render_parameters_panel(
    ui: &mut egui::Ui,
    panel_state: &mut PanelState,
    shared_state: &Arc<RwLock<SharedAppState>>,
    menu: &MenuOpenStore,
    menu_open: bool,
) -> RenderedPanel {
    let layout = PanelLayout::for_menu(menu_open);
    let mut rendered = RenderedPanel::default();

    for slot in &layout.slots {
        match slot {
            PanelSlot::QueueControls => {
                render_queue_controls(ui, shared_state);
            }
            PanelSlot::StylePresetTrigger => {
                render_style_preset_trigger(ui, shared_state, menu);
            }
            PanelSlot::Content => {
                render_content(ui, &layout, panel_state, shared_state, menu, &mut rendered)
            }
        }
        rendered.slots.push(*slot);
        ui.add_space(8.0);
    }

    trace!(
        branch = ?layout.branch,
        slots = rendered.slots.len(),
        panes = ?rendered.panes,
        sections = rendered.sections.len(),
        offsets = ?rendered.offsets,
        "Rendered parameters panel"
    );
    rendered
}

/// Stack the panes of `layout` on the remaining space
fn render_content(
    ui: &mut egui::Ui,
    layout: &PanelLayout,
    panel_state: &mut PanelState,
    shared_state: &Arc<RwLock<SharedAppState>>,
    menu: &MenuOpenStore,
    rendered: &mut RenderedPanel,
) {
    let rect = ui.available_rect_before_wrap();

    for pane in &layout.panes {
        let mut pane_ui = ui.new_child(
            UiBuilder::new()
                .id_salt(pane_id(*pane))
                .max_rect(rect)
                .layout(Layout::top_down(Align::Min)),
        );

        let offset = match pane {
            ContentPane::Settings => {
                let (sections, offset) =
                    render_settings_pane(&mut pane_ui, layout, panel_state, shared_state);
                rendered.sections.extend(sections);
                offset
            }
            ContentPane::StylePresets => {
                render_preset_pane(&mut pane_ui, panel_state, shared_state, menu)
            }
        };
        rendered.panes.push(*pane);
        rendered.offsets.push((*pane, offset));
    }

    ui.advance_cursor_after_rect(rect);
}

fn pane_id(pane: ContentPane) -> &'static str {
    match pane {
        ContentPane::Settings => "settings_pane",
        ContentPane::StylePresets => "style_preset_pane",
    }
}

/// Returns the sections drawn and the pane's scroll offset
fn render_settings_pane(
    ui: &mut egui::Ui,
    layout: &PanelLayout,
    panel_state: &mut PanelState,
    shared_state: &Arc<RwLock<SharedAppState>>,
) -> (Vec<SettingsSection>, f32) {
    let margin = panel_state.scroll.content_margin;
    let mut drawn = Vec::with_capacity(layout.sections.len());

    // The wheel belongs to the preset pane while it covers this one
    let output = panel_state
        .scroll
        .scroll_area(pane_id(ContentPane::Settings))
        .enable_scrolling(layout.branch == MenuBranch::MenuClosed)
        .show(ui, |ui| {
            ui.set_width(ui.available_width() - margin);
            for section in &layout.sections {
                match section {
                    SettingsSection::Prompts => render_prompts(ui, panel_state, shared_state),
                    SettingsSection::Upscale => {
                        render_upscale_settings(ui, &mut panel_state.upscale_open, shared_state)
                    }
                    SettingsSection::Generation => {
                        render_generation_settings(ui, &mut panel_state.generation_open, shared_state)
                    }
                    SettingsSection::Advanced => {
                        render_advanced_settings(ui, &mut panel_state.advanced_open, shared_state)
                    }
                }
                drawn.push(*section);
                ui.add_space(8.0);
            }
        });

    (drawn, output.state.offset.y)
}

/// Returns the pane's scroll offset
fn render_preset_pane(
    ui: &mut egui::Ui,
    panel_state: &PanelState,
    shared_state: &Arc<RwLock<SharedAppState>>,
    menu: &MenuOpenStore,
) -> f32 {
    let rect = ui.max_rect();
    ui.painter().rect_filled(rect, Rounding::ZERO, ThemeColors::BG_DARK);
    // Registered after the settings widgets, so it wins hit-testing over them
    ui.interact(rect, ui.id().with("input_shield"), Sense::click_and_drag());

    let margin = panel_state.scroll.content_margin;
    panel_state
        .scroll
        .scroll_area(pane_id(ContentPane::StylePresets))
        .show(ui, |ui| {
            ui.set_width(ui.available_width() - margin);
            render_style_preset_menu(ui, shared_state, menu);
        })
        .state
        .offset
        .y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::dashboard::components::accordion::accordion_header_id;
    use crate::dashboard::test_support::UiHarness;
    use crate::dashboard::views::style_preset_menu::preset_row_id;
    use crate::presets::default_presets;

    struct Harness {
        ui: UiHarness,
        panel_state: PanelState,
        shared_state: Arc<RwLock<SharedAppState>>,
        menu: MenuOpenStore,
    }

    impl Harness {
        fn new() -> Self {
            Self::with_size(420.0, 900.0)
        }

        fn with_size(width: f32, height: f32) -> Self {
            Self {
                ui: UiHarness::new(width, height),
                panel_state: PanelState::default(),
                shared_state: Arc::new(RwLock::new(SharedAppState::new(
                    AppConfig::default(),
                    default_presets(),
                ))),
                menu: MenuOpenStore::new(false),
            }
        }

        /// Run one headless frame with the menu flag as it is now
        fn frame(&mut self) -> RenderedPanel {
            let menu_open = self.menu.is_open();
            let Self {
                ui: driver,
                panel_state,
                shared_state,
                menu,
            } = self;
            driver.frame(|ui| render_parameters_panel(ui, panel_state, shared_state, menu, menu_open))
        }

        /// Click at `pos`, re-reading the menu flag before every frame
        fn click(&mut self, pos: egui::Pos2) -> RenderedPanel {
            self.ui.push(egui::Event::PointerMoved(pos));
            self.frame();
            self.ui.push(egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            });
            self.frame();
            self.ui.push(egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed: false,
                modifiers: egui::Modifiers::NONE,
            });
            self.frame()
        }
    }

    fn offset(rendered: &RenderedPanel, pane: ContentPane) -> Option<f32> {
        rendered
            .offsets
            .iter()
            .find(|(drawn, _)| *drawn == pane)
            .map(|(_, offset)| *offset)
    }

    const ALL_SECTIONS: [SettingsSection; 4] = [
        SettingsSection::Prompts,
        SettingsSection::Upscale,
        SettingsSection::Generation,
        SettingsSection::Advanced,
    ];

    #[test]
    fn test_closed_menu_renders_settings_pane_only() {
        let mut harness = Harness::new();
        let rendered = harness.frame();

        assert_eq!(rendered.panes, vec![ContentPane::Settings]);
        assert_eq!(rendered.sections, ALL_SECTIONS.to_vec());
    }

    #[test]
    fn test_open_menu_mounts_both_panes() {
        let mut harness = Harness::new();
        harness.menu.set(true);
        let rendered = harness.frame();

        assert_eq!(
            rendered.panes,
            vec![ContentPane::Settings, ContentPane::StylePresets]
        );
        assert_eq!(rendered.sections, ALL_SECTIONS.to_vec());
    }

    #[test]
    fn test_top_rows_present_in_both_branches() {
        let mut harness = Harness::new();
        let expected = vec![
            PanelSlot::QueueControls,
            PanelSlot::StylePresetTrigger,
            PanelSlot::Content,
        ];

        assert_eq!(harness.frame().slots, expected);
        harness.menu.set(true);
        assert_eq!(harness.frame().slots, expected);
    }

    #[test]
    fn test_sections_render_even_when_collapsed() {
        let mut harness = Harness::new();
        harness.panel_state.upscale_open = false;
        harness.panel_state.generation_open = false;
        harness.panel_state.advanced_open = false;

        assert_eq!(harness.frame().sections, ALL_SECTIONS.to_vec());
    }

    #[test]
    fn test_toggle_round_trip_restores_output() {
        let mut harness = Harness::new();
        let before = harness.frame();

        harness.menu.toggle();
        let opened = harness.frame();
        harness.menu.toggle();
        let after = harness.frame();

        assert_ne!(before, opened);
        assert_eq!(before, after);
    }

    #[test]
    fn test_panel_does_not_write_menu_flag() {
        let mut harness = Harness::new();
        let mut watcher = crate::shared::MenuWatcher::new(&harness.menu);

        harness.frame();
        harness.frame();
        assert!(!watcher.poll());
        assert!(!harness.menu.is_open());
    }

    #[test]
    fn test_open_menu_takes_wheel_input_from_settings_pane() {
        let mut harness = Harness::with_size(420.0, 300.0);
        harness.menu.set(true);
        harness.frame();

        let pointer = egui::pos2(200.0, 250.0);
        harness.ui.push(egui::Event::PointerMoved(pointer));
        harness.frame();
        harness.ui.scroll(20, -5.0);
        let rendered = harness.frame();

        assert_eq!(offset(&rendered, ContentPane::Settings), Some(0.0));
        assert!(offset(&rendered, ContentPane::StylePresets).unwrap_or(0.0) > 0.0);
    }

    #[test]
    fn test_closed_menu_scrolls_settings_pane() {
        let mut harness = Harness::with_size(420.0, 300.0);
        harness.frame();

        let pointer = egui::pos2(200.0, 250.0);
        harness.ui.push(egui::Event::PointerMoved(pointer));
        harness.frame();
        harness.ui.scroll(20, -5.0);
        let rendered = harness.frame();

        assert!(offset(&rendered, ContentPane::Settings).unwrap_or(0.0) > 0.0);
        assert_eq!(offset(&rendered, ContentPane::StylePresets), None);
    }

    #[test]
    fn test_covered_settings_ignore_clicks() {
        let mut harness = Harness::new();
        // Leave only the "None" row so the click lands on the empty part of the preset pane
        harness.shared_state.write().presets.search = "no such preset".to_string();
        harness.frame();
        let header = harness
            .ui
            .center_of(accordion_header_id(SettingsSection::Upscale.name()));

        harness.menu.set(true);
        harness.click(header);
        assert!(!harness.panel_state.upscale_open);
        assert!(harness.menu.is_open());

        harness.menu.set(false);
        harness.click(header);
        assert!(harness.panel_state.upscale_open);
    }

    #[test]
    fn test_picking_preset_in_panel_unmounts_preset_pane() {
        let mut harness = Harness::new();
        harness.menu.set(true);
        harness.frame();

        let row = harness.ui.center_of(preset_row_id(Some("concept-art")));
        harness.click(row);

        assert!(!harness.menu.is_open());
        assert_eq!(
            harness.shared_state.read().presets.active_id(),
            Some("concept-art")
        );
        assert_eq!(harness.frame().panes, vec![ContentPane::Settings]);
    }
}
