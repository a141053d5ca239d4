//! Domain Entities
//!
//! Records owned by the remote code-push service.
//! - `App` - A registered application
//! - `Release` - A published build baseline, keyed by version string
//! - `Patch` - An update bound to exactly one release
//! - `Channel` - A named distribution target within an app

mod app;
mod channel;
mod patch;
mod release;

pub use app::App;
pub use channel::Channel;
pub use patch::Patch;
pub use release::Release;
