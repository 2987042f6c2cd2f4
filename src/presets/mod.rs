//! Style Presets
//!
//! Named prompt templates that wrap the user's prompts at submission time.

use serde::{Deserialize, Serialize};

use crate::params::{ParamsError, PromptParams};

/// Placeholder replaced by the user's prompt inside a preset template
pub const PROMPT_PLACEHOLDER: &str = "{prompt}";

/// A style preset definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylePreset {
    /// Preset identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Positive prompt template
    #[serde(default)]
    pub positive_prompt: String,
    /// Negative prompt template
    #[serde(default)]
    pub negative_prompt: String,
}

impl StylePreset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        positive_prompt: impl Into<String>,
        negative_prompt: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            positive_prompt: positive_prompt.into(),
            negative_prompt: negative_prompt.into(),
        }
    }

    /// Wrap the user's prompts with this preset's templates
    pub fn apply(&self, prompts: &PromptParams) -> PromptParams {
        PromptParams {
            positive: merge_prompt(&self.positive_prompt, &prompts.positive),
            negative: merge_prompt(&self.negative_prompt, &prompts.negative),
        }
    }
}

/// Merge a user prompt into a preset template.
///
/// Templates containing `{prompt}` have every placeholder substituted.
/// Otherwise the user prompt comes first and the template is appended,
/// joined by `", "`, with empty sides skipped.
pub fn merge_prompt(template: &str, user: &str) -> String {
    if template.contains(PROMPT_PLACEHOLDER) {
        return template.replace(PROMPT_PLACEHOLDER, user);
    }

    let user = user.trim();
    let template = template.trim();
    match (user.is_empty(), template.is_empty()) {
        (true, _) => template.to_string(),
        (false, true) => user.to_string(),
        (false, false) => format!("{}, {}", user, template),
    }
}

/// The loaded presets plus the current selection
#[derive(Debug, Clone, Default)]
pub struct PresetLibrary {
    presets: Vec<StylePreset>,
    active_id: Option<String>,
    /// Search text typed into the preset menu
    pub search: String,
}

impl PresetLibrary {
    pub fn new(presets: Vec<StylePreset>) -> Self {
        Self {
            presets,
            active_id: None,
            search: String::new(),
        }
    }

    /// Get the active preset if one is selected
    pub fn active(&self) -> Option<&StylePreset> {
        self.active_id
            .as_ref()
            .and_then(|id| self.presets.iter().find(|p| &p.id == id))
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Select a preset by ID, or clear the selection with `None`
    pub fn set_active(&mut self, preset_id: Option<&str>) -> Result<(), ParamsError> {
        match preset_id {
            Some(id) if !self.presets.iter().any(|p| p.id == id) => {
                Err(ParamsError::UnknownPreset(id.to_string()))
            }
            Some(id) => {
                self.active_id = Some(id.to_string());
                Ok(())
            }
            None => {
                self.active_id = None;
                Ok(())
            }
        }
    }

    /// Presets whose name contains the search text, ignoring case
    pub fn filtered(&self) -> impl Iterator<Item = &StylePreset> {
        let needle = self.search.trim().to_lowercase();
        self.presets
            .iter()
            .filter(move |p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
    }

    /// Prompts after applying the active preset (unchanged when none is active)
    pub fn resolve(&self, prompts: &PromptParams) -> PromptParams {
        match self.active() {
            Some(preset) => preset.apply(prompts),
            None => prompts.clone(),
        }
    }
}

/// Presets shipped with the application
pub fn default_presets() -> Vec<StylePreset> {
    vec![
        StylePreset::new(
            "photographic",
            "Photography (General)",
            "{prompt}. photography. f/2.8 macro photo, bokeh, photorealism",
            "painting, digital art, sketch, blurry",
        ),
        StylePreset::new(
            "illustration",
            "Illustration (General)",
            "{prompt}. illustration, vibrant colors, clean lines",
            "photo, photograph, realistic",
        ),
        StylePreset::new(
            "concept-art",
            "Concept Art (Character)",
            "character concept art of {prompt}, full body, detailed, artstation",
            "blurry, low detail, cropped",
        ),
        StylePreset::new(
            "environment",
            "Environment Art",
            "environment concept art, {prompt}, wide shot, atmospheric lighting, matte painting",
            "characters, people, text",
        ),
        StylePreset::new(
            "line-art",
            "Line Art",
            "{prompt}, black and white line art, ink drawing, high contrast",
            "color, shading, gradient, photo",
        ),
    ]
}
