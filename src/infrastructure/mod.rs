//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `auth/` - Session from stored credentials or the environment
//! - `build/` - Flutter release build
//! - `project/` - `airlift.yaml` and `pubspec.yaml` readers
//! - `remote/` - HTTP code-push client

pub mod auth;
pub mod build;
pub mod project;
pub mod remote;

// Re-export for convenience
pub use auth::FileSessionProvider;
pub use build::FlutterBuild;
pub use project::YamlProjectConfig;
pub use remote::{HttpClientFactory, HttpCodePushClient, Timeouts};
