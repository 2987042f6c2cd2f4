//! Style-preset library storage

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::presets::StylePreset;

/// On-disk preset library
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PresetFile {
    /// File format version
    version: u32,
    presets: Vec<StylePreset>,
}

const PRESET_FILE_VERSION: u32 = 1;

/// Load style presets from file
pub fn load_presets(path: &Path) -> Result<Vec<StylePreset>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading presets {:?}", path))?;
    let file: PresetFile = serde_json::from_str(&content)
        .with_context(|| format!("parsing presets {:?}", path))?;
    if file.version > PRESET_FILE_VERSION {
        anyhow::bail!(
            "preset file {:?} has version {}, newest supported is {}",
            path,
            file.version,
            PRESET_FILE_VERSION
        );
    }
    Ok(file.presets)
}

/// Save style presets to file
pub fn save_presets(presets: &[StylePreset], path: &Path) -> Result<()> {
    let file = PresetFile {
        version: PRESET_FILE_VERSION,
        presets: presets.to_vec(),
    };
    let content = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, content).with_context(|| format!("writing presets {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::default_presets;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_save_and_load_presets() {
        let presets = default_presets();
        let temp_file = NamedTempFile::new().unwrap();

        save_presets(&presets, temp_file.path()).unwrap();
        let loaded = load_presets(temp_file.path()).unwrap();

        assert_eq!(loaded, presets);
    }

    #[test]
    fn test_missing_prompt_fields_default_to_empty() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(
            temp_file,
            r#"{{"version":1,"presets":[{{"id":"bare","name":"Bare"}}]}}"#
        )
        .unwrap();

        let loaded = load_presets(temp_file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].positive_prompt.is_empty());
        assert!(loaded[0].negative_prompt.is_empty());
    }

    #[test]
    fn test_newer_version_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, r#"{{"version":99,"presets":[]}}"#).unwrap();
        assert!(load_presets(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_presets_file_not_found() {
        assert!(load_presets(Path::new("/nonexistent/style_presets.json")).is_err());
    }
}
