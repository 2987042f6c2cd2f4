//! ParamDeck - Parameters panel for an image-generation front end
//!
//! Prompts, generation settings, style presets and queue controls in a
//! single native window.

mod config;
mod dashboard;
mod params;
mod presets;
mod queue;
mod shared;
mod storage;

use anyhow::Result;
use clap::Parser;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::AppConfig;
use crate::presets::{default_presets, StylePreset};
use crate::shared::{MenuOpenStore, SharedAppState};

/// ParamDeck - image-generation parameters panel
#[derive(Parser, Debug)]
#[command(name = "paramdeck")]
#[command(about = "Edit prompts and generation settings, pick style presets and queue generations")]
struct Args {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the style-preset library (defaults to the platform config directory)
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Start with the style-preset menu open
    #[arg(long)]
    menu_open: bool,

    /// Ignore the saved configuration and start from defaults
    #[arg(long)]
    reset: bool,
}

fn main() -> Result<()> {
    // Initialize logging; RUST_LOG refines the default INFO level
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("ParamDeck starting...");

    let config_path = match args.config {
        Some(path) => path,
        None => storage::default_config_path()?,
    };
    let presets_path = match args.presets {
        Some(path) => path,
        None => storage::default_presets_path()?,
    };

    let config = if args.reset {
        info!("Starting from default configuration");
        AppConfig::default()
    } else {
        load_or_create_config(&config_path)
    };
    let presets = load_or_seed_presets(&presets_path);

    let shared_state = Arc::new(RwLock::new(SharedAppState::new(config, presets)));
    let menu = MenuOpenStore::new(args.menu_open);

    // Run the window (blocking)
    if let Err(e) = dashboard::app::run_app(shared_state.clone(), menu) {
        tracing::error!("Window error: {}", e);
    }

    let config = shared_state.read().config_snapshot();
    if config.general.persist_parameters {
        match config::save_config(&config, &config_path) {
            Ok(()) => info!("Saved configuration to {:?}", config_path),
            Err(e) => warn!("Could not save configuration: {:#}", e),
        }
    }

    info!("ParamDeck shutdown complete");

    Ok(())
}

/// Load configuration from file or fall back to defaults
fn load_or_create_config(path: &Path) -> AppConfig {
    if path.exists() {
        match config::load_config(path) {
            Ok(config) => {
                info!("Loaded configuration from {:?}", path);
                return config;
            }
            Err(e) => warn!("Ignoring configuration: {:#}", e),
        }
    }
    info!("Using default configuration");
    AppConfig::default()
}

/// Load the preset library, writing the built-in presets on first run
fn load_or_seed_presets(path: &Path) -> Vec<StylePreset> {
    if path.exists() {
        match storage::presets::load_presets(path) {
            Ok(presets) => {
                info!("Loaded {} style presets from {:?}", presets.len(), path);
                return presets;
            }
            Err(e) => {
                warn!("Ignoring style presets: {:#}", e);
                return default_presets();
            }
        }
    }

    let presets = default_presets();
    if let Err(e) = storage::presets::save_presets(&presets, path) {
        warn!("Could not write default style presets: {:#}", e);
    }
    presets
}
