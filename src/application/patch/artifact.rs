//! Locating and hashing the native build output.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::services::{ArtifactLocator, HashFn};
use crate::domain::value_objects::{ArtifactHash, BuiltArtifact};
use crate::error::{PatchError, PatchResult};

/// Find the release artifact under `project_root` and hash its bytes.
///
/// The file is read exactly once. A missing file means the build tool
/// produced nothing where it should have, which is fatal.
pub fn read_artifact(
    locator: &ArtifactLocator,
    project_root: &Path,
    hash_fn: HashFn,
) -> PatchResult<BuiltArtifact> {
    let path = locator.expected_path(project_root);
    if !path.is_file() {
        return Err(PatchError::ArtifactMissing { path });
    }

    let bytes = fs::read(&path).map_err(|source| PatchError::ArtifactRead {
        path: path.clone(),
        source,
    })?;
    let hash = ArtifactHash::new(hash_fn(&bytes));
    debug!(path = %path.display(), size = bytes.len(), hash = %hash, "artifact hashed");

    Ok(BuiltArtifact {
        path,
        hash,
        contents: bytes,
    })
}
