//! Built Artifact Value Object

use std::path::PathBuf;

use super::hash::ArtifactHash;

/// The artifact a successful build left on disk, read into memory once.
///
/// Hash, size and uploaded bytes all derive from `contents`, so the
/// service receives exactly the bytes that were fingerprinted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltArtifact {
    pub path: PathBuf,
    pub hash: ArtifactHash,
    pub contents: Vec<u8>,
}

impl BuiltArtifact {
    pub fn size(&self) -> u64 {
        self.contents.len() as u64
    }

    /// Name the upload is labelled with
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "artifact".to_string())
    }
}
