//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_invoker;
pub mod code_push_client;
pub mod patch_events;
pub mod project_config;
pub mod prompter;
pub mod session_provider;

pub use build_invoker::{BuildError, BuildInvoker};
pub use code_push_client::{CodePushClient, CodePushClientFactory, RemoteError, RemoteResult};
pub use patch_events::{NoopEventSink, PatchEvent, PatchEventSink, PatchStep, PatchSummary};
pub use project_config::{ProjectConfig, ProjectConfigError};
pub use prompter::{NonInteractivePrompter, PromptError, Prompter};
pub use session_provider::{Session, SessionProvider};
