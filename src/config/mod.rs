//! Configuration module for Airlift
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (AIRLIFT_*)
//! 3. User config (`<config dir>/config.toml`)
//! 4. Built-in defaults (lowest priority)
//!
//! The config directory is `$AIRLIFT_CONFIG_DIR` when set, otherwise
//! `airlift/` under the platform config directory.

mod loader;
mod types;

pub use loader::{config_dir, ConfigError, ConfigWarning, CONFIG_DIR_ENV, HOSTED_URL_ENV};
pub use types::{
    ColorMode, Config, NetworkConfig, OutputConfig, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_HOSTED_URL,
};
