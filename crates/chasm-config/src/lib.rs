//! Configuration for the chasm viewer.
//!
//! Runtime-configurable settings persisted to disk as RON files, with CLI
//! overrides via clap and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, InputConfig, WindowConfig, default_config_dir};
pub use error::ConfigError;
