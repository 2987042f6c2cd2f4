//! Generation Parameters
//!
//! The values edited by the prompt editor and the three settings accordions,
//! plus the validation that runs before anything is queued.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Image dimensions must land on the latent grid (latents are 1/8 resolution)
pub const DIMENSION_GRID: u32 = 8;
/// Smallest supported image edge in pixels
pub const MIN_DIMENSION: u32 = 64;
/// Largest supported image edge in pixels
pub const MAX_DIMENSION: u32 = 4096;
/// Supported denoising step range
pub const STEPS_RANGE: std::ops::RangeInclusive<u32> = 1..=150;
/// Supported classifier-free guidance range
pub const CFG_RANGE: std::ops::RangeInclusive<f32> = 1.0..=30.0;
/// Supported batch sizes for a single invoke
pub const BATCH_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
/// CLIP layers that can be skipped
pub const CLIP_SKIP_RANGE: std::ops::RangeInclusive<u32> = 0..=12;
/// Guidance rescale multiplier
pub const CFG_RESCALE_RANGE: std::ops::RangeInclusive<f32> = 0.0..=0.99;
/// Range of the upscaler's creativity and structure adjustments
pub const UPSCALE_ADJUST_RANGE: std::ops::RangeInclusive<i32> = -10..=10;

/// Errors raised when parameters cannot be submitted
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("{axis} of {value}px is not a multiple of 8")]
    OffGrid { axis: &'static str, value: u32 },
    #[error("{axis} of {value}px is outside 64..=4096")]
    DimensionOutOfRange { axis: &'static str, value: u32 },
    #[error("{0} steps is outside the supported range")]
    StepsOutOfRange(u32),
    #[error("CFG scale {0} is outside the supported range")]
    CfgOutOfRange(f32),
    #[error("batch count {0} is outside the supported range")]
    BatchOutOfRange(u32),
    #[error("CLIP skip {0} is outside 0..=12")]
    ClipSkipOutOfRange(u32),
    #[error("CFG rescale {0} is outside 0.0..=0.99")]
    CfgRescaleOutOfRange(f32),
    #[error("upscale {name} {value} is outside -10..=10")]
    UpscaleAdjustOutOfRange { name: &'static str, value: i32 },
    #[error("no style preset with id '{0}'")]
    UnknownPreset(String),
}

/// Positive and negative prompts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptParams {
    pub positive: String,
    pub negative: String,
}

/// Sampling scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheduler {
    #[default]
    Euler,
    EulerAncestral,
    Dpmpp2m,
    Dpmpp2mKarras,
    Ddim,
    Lms,
}

impl Scheduler {
    pub const ALL: [Scheduler; 6] = [
        Scheduler::Euler,
        Scheduler::EulerAncestral,
        Scheduler::Dpmpp2m,
        Scheduler::Dpmpp2mKarras,
        Scheduler::Ddim,
        Scheduler::Lms,
    ];

    /// Get the display name for this scheduler
    pub fn name(&self) -> &'static str {
        match self {
            Scheduler::Euler => "Euler",
            Scheduler::EulerAncestral => "Euler Ancestral",
            Scheduler::Dpmpp2m => "DPM++ 2M",
            Scheduler::Dpmpp2mKarras => "DPM++ 2M Karras",
            Scheduler::Ddim => "DDIM",
            Scheduler::Lms => "LMS",
        }
    }
}

/// Core generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParams {
    /// Main model name
    pub model: String,
    pub scheduler: Scheduler,
    pub steps: u32,
    pub cfg_scale: f32,
    pub width: u32,
    pub height: u32,
    pub seed: u32,
    /// Draw a fresh seed for every queued item
    pub randomize_seed: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            model: "stable-diffusion-v1-5".to_string(),
            scheduler: Scheduler::default(),
            steps: 30,
            cfg_scale: 7.5,
            width: 512,
            height: 512,
            seed: 0,
            randomize_seed: true,
        }
    }
}

impl GenerationParams {
    /// Validate dimensions, step count and guidance scale
    pub fn validate(&self) -> Result<(), ParamsError> {
        validate_dimension("width", self.width)?;
        validate_dimension("height", self.height)?;
        if !STEPS_RANGE.contains(&self.steps) {
            return Err(ParamsError::StepsOutOfRange(self.steps));
        }
        if !CFG_RANGE.contains(&self.cfg_scale) {
            return Err(ParamsError::CfgOutOfRange(self.cfg_scale));
        }
        Ok(())
    }

    /// Swap width and height
    pub fn swap_dimensions(&mut self) {
        std::mem::swap(&mut self.width, &mut self.height);
    }
}

fn validate_dimension(axis: &'static str, value: u32) -> Result<(), ParamsError> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(ParamsError::DimensionOutOfRange { axis, value });
    }
    if value % DIMENSION_GRID != 0 {
        return Err(ParamsError::OffGrid { axis, value });
    }
    Ok(())
}

/// Snap a pixel dimension down onto the latent grid, clamped to the supported range
pub fn snap_to_grid(value: u32) -> u32 {
    let snapped = value - value % DIMENSION_GRID;
    snapped.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Upscale factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UpscaleFactor {
    #[default]
    X2,
    X4,
}

impl UpscaleFactor {
    pub fn multiplier(&self) -> u32 {
        match self {
            UpscaleFactor::X2 => 2,
            UpscaleFactor::X4 => 4,
        }
    }
}

/// Upscale settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpscaleParams {
    pub enabled: bool,
    /// Upscale model name
    pub model: String,
    pub scale: UpscaleFactor,
    /// -10 follows the source closely, +10 lets the model invent detail
    pub creativity: i32,
    /// -10 loosens, +10 preserves the source composition
    pub structure: i32,
}

impl Default for UpscaleParams {
    fn default() -> Self {
        Self {
            enabled: false,
            model: "RealESRGAN_x4plus".to_string(),
            scale: UpscaleFactor::default(),
            creativity: 0,
            structure: 0,
        }
    }
}

impl UpscaleParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [("creativity", self.creativity), ("structure", self.structure)] {
            if !UPSCALE_ADJUST_RANGE.contains(&value) {
                return Err(ParamsError::UpscaleAdjustOutOfRange { name, value });
            }
        }
        Ok(())
    }

    /// Output size for an image of the given size
    pub fn output_size(&self, width: u32, height: u32) -> (u32, u32) {
        let m = self.scale.multiplier();
        (width * m, height * m)
    }
}

/// VAE precision used for encode/decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaePrecision {
    #[default]
    Fp16,
    Fp32,
}

impl VaePrecision {
    pub fn name(&self) -> &'static str {
        match self {
            VaePrecision::Fp16 => "FP16",
            VaePrecision::Fp32 => "FP32",
        }
    }
}

/// Advanced settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedParams {
    pub clip_skip: u32,
    pub vae_precision: VaePrecision,
    /// Encode/decode the VAE in tiles to save memory
    pub tiled_vae: bool,
    pub seamless_x: bool,
    pub seamless_y: bool,
    pub cfg_rescale: f32,
}

impl Default for AdvancedParams {
    fn default() -> Self {
        Self {
            clip_skip: 0,
            vae_precision: VaePrecision::default(),
            tiled_vae: false,
            seamless_x: false,
            seamless_y: false,
            cfg_rescale: 0.0,
        }
    }
}

/// Everything the settings pane edits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterSet {
    pub prompts: PromptParams,
    pub generation: GenerationParams,
    pub upscale: UpscaleParams,
    pub advanced: AdvancedParams,
}

impl AdvancedParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !CLIP_SKIP_RANGE.contains(&self.clip_skip) {
            return Err(ParamsError::ClipSkipOutOfRange(self.clip_skip));
        }
        if !CFG_RESCALE_RANGE.contains(&self.cfg_rescale) {
            return Err(ParamsError::CfgRescaleOutOfRange(self.cfg_rescale));
        }
        Ok(())
    }
}

impl ParameterSet {
    /// Validate every section, generation first
    pub fn validate(&self) -> Result<(), ParamsError> {
        self.generation.validate()?;
        self.upscale.validate()?;
        self.advanced.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_are_valid() {
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn test_off_grid_width_rejected() {
        let mut params = GenerationParams::default();
        params.width = 515;
        assert_eq!(
            params.validate(),
            Err(ParamsError::OffGrid { axis: "width", value: 515 })
        );
    }

    #[test]
    fn test_dimension_range_checked_before_grid() {
        let mut params = GenerationParams::default();
        params.height = 60;
        assert_eq!(
            params.validate(),
            Err(ParamsError::DimensionOutOfRange { axis: "height", value: 60 })
        );

        params.height = MAX_DIMENSION + 8;
        assert!(matches!(
            params.validate(),
            Err(ParamsError::DimensionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_steps_and_cfg_bounds() {
        let mut params = GenerationParams::default();
        params.steps = 0;
        assert_eq!(params.validate(), Err(ParamsError::StepsOutOfRange(0)));

        params.steps = 150;
        assert!(params.validate().is_ok());

        params.cfg_scale = 0.5;
        assert_eq!(params.validate(), Err(ParamsError::CfgOutOfRange(0.5)));
    }

    #[test]
    fn test_advanced_ranges_checked() {
        let mut params = ParameterSet::default();
        params.advanced.clip_skip = 13;
        assert_eq!(params.validate(), Err(ParamsError::ClipSkipOutOfRange(13)));

        params.advanced.clip_skip = 12;
        params.advanced.cfg_rescale = 1.5;
        assert_eq!(params.validate(), Err(ParamsError::CfgRescaleOutOfRange(1.5)));
    }

    #[test]
    fn test_upscale_adjustments_checked() {
        let mut params = ParameterSet::default();
        params.upscale.structure = -11;
        assert_eq!(
            params.validate(),
            Err(ParamsError::UpscaleAdjustOutOfRange { name: "structure", value: -11 })
        );

        params.upscale.structure = -10;
        params.upscale.creativity = 10;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_hand_edited_toml_rejected_on_validate() {
        let toml_str = r#"
            [advanced]
            clip_skip = 40
        "#;
        let params: ParameterSet = toml::from_str(toml_str).unwrap();
        assert_eq!(params.validate(), Err(ParamsError::ClipSkipOutOfRange(40)));
    }

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(515), 512);
        assert_eq!(snap_to_grid(512), 512);
        assert_eq!(snap_to_grid(10), MIN_DIMENSION);
        assert_eq!(snap_to_grid(9000), MAX_DIMENSION);
    }

    #[test]
    fn test_swap_dimensions() {
        let mut params = GenerationParams::default();
        params.width = 768;
        params.height = 512;
        params.swap_dimensions();
        assert_eq!((params.width, params.height), (512, 768));
    }

    #[test]
    fn test_upscale_output_size() {
        let mut upscale = UpscaleParams::default();
        assert_eq!(upscale.output_size(512, 768), (1024, 1536));
        upscale.scale = UpscaleFactor::X4;
        assert_eq!(upscale.output_size(512, 768), (2048, 3072));
    }

    #[test]
    fn test_error_messages() {
        let err = ParamsError::OffGrid { axis: "width", value: 515 };
        assert_eq!(err.to_string(), "width of 515px is not a multiple of 8");
    }

    #[test]
    fn test_partial_parameter_set_deserializes_with_defaults() {
        let json = r#"{ "prompts": { "positive": "a cat", "negative": "" } }"#;
        let params: ParameterSet = serde_json::from_str(json).unwrap();
        assert_eq!(params.prompts.positive, "a cat");
        assert_eq!(params.generation, GenerationParams::default());
    }
}
