//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::loader::{self, ConfigError, ConfigWarning};

pub const DEFAULT_HOSTED_URL: &str = "https://api.airlift.dev";

fn default_hosted_url() -> String {
    DEFAULT_HOSTED_URL.to_string()
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,

    /// Live spinner rewrites; plain lines when off
    #[serde(default = "default_true")]
    pub animation: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
            animation: true,
        }
    }
}

fn default_connect_timeout_secs() -> u64 {
    DEFAULT_CONNECT_TIMEOUT_SECS
}

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Network configuration
///
/// `request_timeout_secs` bounds a whole exchange, body included. It is
/// unset by default so large artifact uploads are never cut off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: None,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the code-push service
    #[serde(default = "default_hosted_url")]
    pub hosted_url: String,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hosted_url: default_hosted_url(),
            output: OutputConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (or defaults) with environment overrides applied.
    pub fn load_user() -> Result<(Self, Vec<ConfigWarning>), ConfigError> {
        loader::load_user()
    }

    /// Apply environment variable overrides (AIRLIFT_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_overrides(self, |key| std::env::var(key).ok())
    }
}
