//! Parameters panel layout
//!
//! The panel is a fixed tree. The only variable part is whether the
//! style-preset pane is mounted above the settings pane, selected by the
//! menu-open flag.

use crate::config::ScrollbarVisibility;

/// The two layouts the panel can take
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuBranch {
    /// Preset pane mounted over the settings pane
    MenuOpen,
    /// Settings pane only
    MenuClosed,
}

impl MenuBranch {
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuBranch::MenuOpen
        } else {
            MenuBranch::MenuClosed
        }
    }
}

/// Top-level rows of the panel's vertical stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSlot {
    QueueControls,
    StylePresetTrigger,
    Content,
}

/// Scroll panes stacked inside the content region, bottom first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPane {
    Settings,
    StylePresets,
}

/// Children of the settings pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Prompts,
    Upscale,
    Generation,
    Advanced,
}

impl SettingsSection {
    /// Render order inside the settings pane
    pub const ORDER: [SettingsSection; 4] = [
        SettingsSection::Prompts,
        SettingsSection::Upscale,
        SettingsSection::Generation,
        SettingsSection::Advanced,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SettingsSection::Prompts => "Prompts",
            SettingsSection::Upscale => "Upscale",
            SettingsSection::Generation => "Generation",
            SettingsSection::Advanced => "Advanced",
        }
    }
}

/// The panel tree for one value of the menu flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelLayout {
    pub branch: MenuBranch,
    pub slots: Vec<PanelSlot>,
    pub panes: Vec<ContentPane>,
    pub sections: Vec<SettingsSection>,
}

impl PanelLayout {
    pub fn for_menu(open: bool) -> Self {
        let branch = MenuBranch::from_open(open);
        let panes = match branch {
            MenuBranch::MenuOpen => vec![ContentPane::Settings, ContentPane::StylePresets],
            MenuBranch::MenuClosed => vec![ContentPane::Settings],
        };

        Self {
            branch,
            slots: vec![
                PanelSlot::QueueControls,
                PanelSlot::StylePresetTrigger,
                PanelSlot::Content,
            ],
            panes,
            sections: SettingsSection::ORDER.to_vec(),
        }
    }
}

/// Options shared by both scroll panes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneScrollOptions {
    pub scrollbar: ScrollbarVisibility,
    /// Gap between the content and the scroll bar
    pub content_margin: f32,
}

impl Default for PaneScrollOptions {
    fn default() -> Self {
        Self {
            scrollbar: ScrollbarVisibility::Auto,
            content_margin: 4.0,
        }
    }
}

impl PaneScrollOptions {
    pub fn new(scrollbar: ScrollbarVisibility) -> Self {
        Self {
            scrollbar,
            ..Default::default()
        }
    }

    /// Vertical-only scroll area filling its pane; horizontal overflow is clipped
    pub fn scroll_area(&self, id_salt: &str) -> egui::ScrollArea {
        let visibility = match self.scrollbar {
            ScrollbarVisibility::Auto => egui::scroll_area::ScrollBarVisibility::VisibleWhenNeeded,
            ScrollbarVisibility::Always => egui::scroll_area::ScrollBarVisibility::AlwaysVisible,
            ScrollbarVisibility::Hidden => egui::scroll_area::ScrollBarVisibility::AlwaysHidden,
        };
        egui::ScrollArea::vertical()
            .id_salt(id_salt)
            .auto_shrink([false, false])
            .scroll_bar_visibility(visibility)
    }
}
