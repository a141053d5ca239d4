//! Build Invoker Port
//!
//! Runs the native release build that produces the patch artifact.

use thiserror::Error;

/// Build invocation failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The build tool could not be started at all
    #[error("failed to start `{program}`: {message}")]
    Spawn { program: String, message: String },

    /// The build tool ran and exited unsuccessfully
    #[error("{0}")]
    ProcessFailed(String),
}

/// Trait for invoking a release build.
pub trait BuildInvoker {
    /// Build the release artifact, blocking until the build tool exits.
    fn build_release(&self) -> Result<(), BuildError>;
}
