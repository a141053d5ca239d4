//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod artifact;
mod hash;
mod target;

pub use artifact::BuiltArtifact;
pub use hash::ArtifactHash;
pub use target::{Arch, BuildTarget, Platform};
