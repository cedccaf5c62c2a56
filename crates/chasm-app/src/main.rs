//! Binary entry point for the chasm viewer.
//!
//! Loads configuration, applies CLI overrides, initializes logging, and
//! runs the event loop. Run with: `cargo run -p chasm-app`

use clap::Parser;
use tracing::{info, warn};

use chasm_config::{CliArgs, Config, default_config_dir};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let (mut config, load_error) = match Config::load_or_create(&config_dir) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    config.apply_cli_overrides(&args);

    chasm_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    if let Some(e) = load_error {
        warn!("Using default config, could not load {}: {e}", config_dir.display());
    }

    info!("Chasm viewer");
    info!(
        "Window: {}x{} | Title: {}",
        config.window.width, config.window.height, config.window.title
    );
    info!(
        "Input: wheel x{}, touch x{}, touch-primary: {}",
        config.input.wheel_sensitivity, config.input.touch_sensitivity, config.input.touch_primary
    );

    chasm_app::window::run(config);
}
