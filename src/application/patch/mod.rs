//! Patch Module
//!
//! Publishes a freshly built artifact as a patch on an existing release
//! and promotes it onto a channel.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`PatchOptions`)
//! - `result` - Outcome types (`PatchOutcome`, `PublishedPatch`)
//! - `artifact` - Locating and hashing the build output
//! - `identity` - Resolving the remote app and release
//! - `use_case` - The ordered workflow (`PatchUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use airlift::application::patch::{PatchOptions, PatchUseCase};
//!
//! let use_case = PatchUseCase::new(sessions, builder, project, clients, sha256_hex);
//! let outcome = use_case.execute(&PatchOptions::new(root), &prompter, &events)?;
//! ```

mod artifact;
mod identity;
mod options;
mod result;
mod use_case;

pub use artifact::read_artifact;
pub use options::PatchOptions;
pub use result::{PatchOutcome, PublishedPatch};
pub use use_case::PatchUseCase;
