//! Code Push Client Port
//!
//! The remote operations the patch workflow needs from the code-push
//! service. Each call is independent; the service offers no transaction
//! spanning several of them.

use thiserror::Error;

use crate::domain::entities::{App, Channel, Patch, Release};
use crate::domain::value_objects::{BuildTarget, BuiltArtifact};

use super::session_provider::Session;

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote operation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RemoteError {
    /// Request never produced a response (DNS, TLS, connection, timeout)
    #[error("{0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    /// Response body did not have the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Remote code-push service operations.
pub trait CodePushClient {
    fn list_apps(&self) -> RemoteResult<Vec<App>>;

    fn list_releases(&self, app_id: &str) -> RemoteResult<Vec<Release>>;

    fn create_patch(&self, release_id: &str) -> RemoteResult<Patch>;

    /// Attach the built artifact to an existing patch.
    ///
    /// The bytes, hash and size sent are those of `artifact` as read and
    /// hashed; the file on disk is not consulted again.
    fn upload_patch_artifact(
        &self,
        patch_id: &str,
        artifact: &BuiltArtifact,
        target: BuildTarget,
    ) -> RemoteResult<()>;

    fn list_channels(&self, app_id: &str) -> RemoteResult<Vec<Channel>>;

    fn create_channel(&self, app_id: &str, name: &str) -> RemoteResult<Channel>;

    /// Make `patch_id` live on `channel_id`.
    fn promote_patch(&self, patch_id: &str, channel_id: &str) -> RemoteResult<()>;
}

/// Builds a client bound to an authenticated session.
pub trait CodePushClientFactory {
    fn connect(&self, session: &Session) -> Box<dyn CodePushClient>;
}
