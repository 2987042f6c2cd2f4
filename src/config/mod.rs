//! Application Configuration
//!
//! User settings and the last-used generation parameters, stored in TOML format.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::params::ParameterSet;

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General settings
    pub general: GeneralConfig,
    /// Panel appearance settings
    pub panel: PanelSettings,
    /// Last-used generation parameters
    pub parameters: ParameterSet,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Save parameters back to the config file on exit
    pub persist_parameters: bool,
    /// Last selected style preset
    pub active_style_preset: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            persist_parameters: true,
            active_style_preset: None,
        }
    }
}

/// When the scroll panes show their scroll bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollbarVisibility {
    /// Only while the content overflows
    #[default]
    Auto,
    Always,
    Hidden,
}

/// Panel appearance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    /// Width of the parameters panel in points
    pub width: f32,
    /// Scroll bar behavior of the panes
    pub scrollbar: ScrollbarVisibility,
    /// Accordions expanded at startup
    pub upscale_open: bool,
    pub generation_open: bool,
    pub advanced_open: bool,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            width: 420.0,
            scrollbar: ScrollbarVisibility::default(),
            upscale_open: false,
            generation_open: true,
            advanced_open: false,
        }
    }
}

/// Load configuration from file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {:?}", path))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("parsing config {:?}", path))?;
    Ok(config)
}

/// Save configuration to file
pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).with_context(|| format!("writing config {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Scheduler;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_app_config() {
        let config = AppConfig::default();

        assert!(config.general.persist_parameters);
        assert!(config.general.active_style_preset.is_none());

        assert!((config.panel.width - 420.0).abs() < 0.01);
        assert_eq!(config.panel.scrollbar, ScrollbarVisibility::Auto);
        assert!(!config.panel.upscale_open);
        assert!(config.panel.generation_open);
        assert!(!config.panel.advanced_open);

        assert_eq!(config.parameters, ParameterSet::default());
    }

    #[test]
    fn test_config_with_custom_values() {
        let mut config = AppConfig::default();
        config.panel.scrollbar = ScrollbarVisibility::Hidden;
        config.parameters.prompts.positive = "a lighthouse at dusk".to_string();
        config.parameters.generation.scheduler = Scheduler::Dpmpp2mKarras;
        config.parameters.generation.cfg_scale = 5.0;

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.panel.scrollbar, ScrollbarVisibility::Hidden);
        assert_eq!(parsed.parameters, config.parameters);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: AppConfig = toml::from_str("[panel]\nadvanced_open = true\n").unwrap();
        assert!(parsed.panel.advanced_open);
        assert!(parsed.panel.generation_open);
        assert!(parsed.general.persist_parameters);
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = AppConfig::default();
        config.general.active_style_preset = Some("line-art".to_string());

        let temp_file = NamedTempFile::new().unwrap();
        save_config(&config, temp_file.path()).unwrap();
        let loaded = load_config(temp_file.path()).unwrap();

        assert_eq!(loaded.general.active_style_preset.as_deref(), Some("line-art"));
        assert_eq!(loaded.parameters, config.parameters);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "this is not valid toml {{{{").unwrap();

        let result = load_config(temp_file.path());
        assert!(result.is_err());
    }
}
