//! Airlift - code-push patch publishing for Flutter apps
//!
//! Airlift builds a release artifact locally, uploads it as a patch to an
//! existing release on the code-push service, and promotes that patch to a
//! distribution channel so installed apps pick it up.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{PatchOptions, PatchOutcome, PatchUseCase};
pub use config::Config;
pub use domain::services::sha256_hex;
pub use error::{ExitStatus, PatchError, PatchResult};
