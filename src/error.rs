//! Error types for Airlift
//!
//! Every failure of the patch workflow is a `PatchError`. The binary turns
//! it into exactly one message and one process exit status.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{BuildError, ProjectConfigError, PromptError, RemoteError, PatchStep};

/// Result type alias for Airlift operations
pub type PatchResult<T> = Result<T, PatchError>;

/// Process exit status, following BSD sysexits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    /// EX_NOUSER
    NoUser,
    /// EX_SOFTWARE
    Software,
    /// EX_CONFIG
    Config,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::NoUser => 67,
            ExitStatus::Software => 70,
            ExitStatus::Config => 78,
        }
    }
}

/// Main error type for the patch workflow
#[derive(Error, Debug)]
pub enum PatchError {
    /// Project has no code-push configuration
    #[error("project is not initialized")]
    NotInitialized,

    /// Project configuration exists but cannot be used
    #[error(transparent)]
    ProjectConfig(#[from] ProjectConfigError),

    /// No session available
    #[error("you must be logged in to publish a patch")]
    NotLoggedIn,

    /// Native release build failed
    #[error("build failed: {0}")]
    BuildFailed(#[from] BuildError),

    /// Build reported success but left no artifact behind
    #[error("artifact not found at {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("failed to read artifact {}: {source}", path.display())]
    ArtifactRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Local app id is unknown to the service
    #[error("app not found: {app_id}")]
    AppNotFound { app_id: String },

    /// No release with this exact version exists for the app
    #[error("release not found: \"{version}\"")]
    ReleaseNotFound { version: String },

    /// A remote call failed. `patch_id` is set once a patch exists remotely.
    #[error("{step} failed: {source}")]
    Remote {
        step: PatchStep,
        patch_id: Option<String>,
        #[source]
        source: RemoteError,
    },

    /// Interactive surface could not answer
    #[error("prompt failed: {0}")]
    Prompt(#[from] PromptError),
}

impl PatchError {
    pub fn remote(step: PatchStep, source: RemoteError) -> Self {
        Self::Remote {
            step,
            patch_id: None,
            source,
        }
    }

    pub fn remote_after_patch(step: PatchStep, patch_id: &str, source: RemoteError) -> Self {
        Self::Remote {
            step,
            patch_id: Some(patch_id.to_string()),
            source,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        match self {
            PatchError::NotInitialized | PatchError::ProjectConfig(_) => ExitStatus::Config,
            PatchError::NotLoggedIn => ExitStatus::NoUser,
            PatchError::BuildFailed(_)
            | PatchError::ArtifactMissing { .. }
            | PatchError::ArtifactRead { .. }
            | PatchError::AppNotFound { .. }
            | PatchError::ReleaseNotFound { .. }
            | PatchError::Remote { .. }
            | PatchError::Prompt(_) => ExitStatus::Software,
        }
    }

    /// Remediation text shown under the error message
    pub fn hint(&self) -> Option<String> {
        match self {
            PatchError::NotInitialized => {
                Some("Run `airlift init` in the project root first.".to_string())
            }
            PatchError::ProjectConfig(_) => {
                Some("Check airlift.yaml and pubspec.yaml in the project root.".to_string())
            }
            PatchError::NotLoggedIn => {
                Some("Run `airlift login` or set AIRLIFT_API_KEY.".to_string())
            }
            PatchError::ArtifactMissing { .. } => Some(
                "The build reported success but produced no artifact. Check the build output."
                    .to_string(),
            ),
            PatchError::AppNotFound { .. } => Some(
                "The app in airlift.yaml is unknown to the server. Run `airlift init` first."
                    .to_string(),
            ),
            PatchError::ReleaseNotFound { .. } => Some(
                "Patches can only be published for existing releases. Create a release with `airlift release` and try again."
                    .to_string(),
            ),
            PatchError::Remote {
                step,
                patch_id: Some(patch_id),
                ..
            } if *step != PatchStep::CreatePatch => Some(format!(
                "Patch {} was created but is not live. It will not reach any channel.",
                patch_id
            )),
            _ => None,
        }
    }
}
