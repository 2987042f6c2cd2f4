//! Storage Layer
//!
//! Platform paths and persistence of the style-preset library.

pub mod presets;

use anyhow::Result;
use std::path::PathBuf;

/// Get the configuration directory
pub fn get_config_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "paramdeck", "ParamDeck")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(config_dir)
}

/// Default location of `config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.toml"))
}

/// Default location of the preset library
pub fn default_presets_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("style_presets.json"))
}
