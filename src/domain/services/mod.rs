//! Domain Services
//!
//! Pure business logic with no I/O dependencies.

mod artifact_locator;
mod content_hasher;

pub use artifact_locator::ArtifactLocator;
pub use content_hasher::{sha256_hex, HashFn};
