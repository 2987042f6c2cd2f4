//! Shared application state between the panel views

use tracing::warn;

use crate::config::AppConfig;
use crate::params::ParameterSet;
use crate::presets::{PresetLibrary, StylePreset};
use crate::queue::GenerationQueue;

/// Central state edited by the parameters panel
#[derive(Debug)]
pub struct SharedAppState {
    /// Application configuration
    pub config: AppConfig,
    /// Parameters currently shown in the settings pane
    pub params: ParameterSet,
    /// Loaded style presets and the active selection
    pub presets: PresetLibrary,
    /// Submitted generations
    pub queue: GenerationQueue,
    /// Runtime state (not persisted)
    pub runtime: RuntimeState,
}

impl Default for SharedAppState {
    fn default() -> Self {
        Self::new(AppConfig::default(), Vec::new())
    }
}

impl SharedAppState {
    /// Create a new shared state from configuration and the loaded presets
    pub fn new(config: AppConfig, presets: Vec<StylePreset>) -> Self {
        let mut library = PresetLibrary::new(presets);
        if let Some(id) = config.general.active_style_preset.as_deref() {
            if let Err(e) = library.set_active(Some(id)) {
                warn!("Ignoring saved style preset: {}", e);
            }
        }

        Self {
            params: config.parameters.clone(),
            presets: library,
            queue: GenerationQueue::new(),
            runtime: RuntimeState::default(),
            config,
        }
    }

    /// Configuration with the current parameters and preset folded back in
    pub fn config_snapshot(&self) -> AppConfig {
        let mut config = self.config.clone();
        config.parameters = self.params.clone();
        config.general.active_style_preset = self.presets.active_id().map(str::to_string);
        config
    }
}

/// Command to control the queue from UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueCommand {
    /// Queue a batch of generations from the current parameters
    Enqueue { batch_count: u32 },
    /// Cancel the oldest pending item
    CancelNext,
    /// Cancel every pending item
    Clear,
}

/// Runtime state that is not persisted
#[derive(Debug, Clone)]
pub struct RuntimeState {
    /// Number of generations queued per invoke
    pub batch_count: u32,
    /// Pending queue command from UI
    pub queue_command: Option<QueueCommand>,
    /// Last error message (if any)
    pub last_error: Option<String>,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            batch_count: 1,
            queue_command: None,
            last_error: None,
        }
    }
}

impl RuntimeState {
    /// Clear any error state
    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    /// Set an error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.last_error = Some(error.into());
    }
}
