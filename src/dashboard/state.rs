//! Panel view state management

use crate::config::PanelSettings;
use crate::dashboard::layout::PaneScrollOptions;

/// View state of the parameters panel that is not part of the parameters
#[derive(Debug, Clone)]
pub struct PanelState {
    /// Upscale accordion expanded
    pub upscale_open: bool,
    /// Generation accordion expanded
    pub generation_open: bool,
    /// Advanced accordion expanded
    pub advanced_open: bool,
    /// Show the preset-resolved prompts under the prompt editor
    pub show_resolved_prompts: bool,
    /// Options for both scroll panes
    pub scroll: PaneScrollOptions,
}

impl Default for PanelState {
    fn default() -> Self {
        Self::from_settings(&PanelSettings::default())
    }
}

impl PanelState {
    /// Seed view state from configuration
    pub fn from_settings(settings: &PanelSettings) -> Self {
        Self {
            upscale_open: settings.upscale_open,
            generation_open: settings.generation_open,
            advanced_open: settings.advanced_open,
            show_resolved_prompts: true,
            scroll: PaneScrollOptions::new(settings.scrollbar),
        }
    }

    /// Write the expanded flags back so they survive a restart
    pub fn store_into(&self, settings: &mut PanelSettings) {
        settings.upscale_open = self.upscale_open;
        settings.generation_open = self.generation_open;
        settings.advanced_open = self.advanced_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScrollbarVisibility;

    #[test]
    fn test_seeded_from_settings() {
        let settings = PanelSettings {
            advanced_open: true,
            generation_open: false,
            scrollbar: ScrollbarVisibility::Always,
            ..Default::default()
        };
        let state = PanelState::from_settings(&settings);
        assert!(state.advanced_open);
        assert!(!state.generation_open);
        assert!(!state.upscale_open);
        assert_eq!(state.scroll.scrollbar, ScrollbarVisibility::Always);
    }

    #[test]
    fn test_store_into_settings() {
        let mut state = PanelState::default();
        state.upscale_open = true;
        state.generation_open = false;

        let mut settings = PanelSettings::default();
        state.store_into(&mut settings);
        assert!(settings.upscale_open);
        assert!(!settings.generation_open);
    }
}
