//! Project Config Port
//!
//! Read access to the local project's persisted configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading project configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectConfigError {
    #[error("{} not found", file.display())]
    Missing { file: PathBuf },

    #[error("failed to read {}: {message}", file.display())]
    Read { file: PathBuf, message: String },

    #[error("invalid {}: {message}", file.display())]
    Invalid { file: PathBuf, message: String },

    #[error("'{key}' is missing from {}", file.display())]
    MissingKey { key: String, file: PathBuf },
}

/// Local project configuration.
pub trait ProjectConfig {
    /// Whether the project has been set up for code push.
    fn is_initialized(&self) -> bool;

    /// The remote app id this project publishes to.
    fn app_id(&self) -> Result<String, ProjectConfigError>;

    /// The version string the project declares for its current build.
    fn project_version(&self) -> Result<String, ProjectConfigError>;
}
