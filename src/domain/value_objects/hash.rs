//! Artifact Hash Value Object
//!
//! The content fingerprint the service stores alongside an uploaded
//! artifact. It is the integrity token clients verify downloads against.

use std::fmt;

/// Content hash of an artifact, as produced by the injected hash function.
///
/// The value is opaque to the workflow: whatever the hash function returns
/// is exactly what gets uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactHash(String);

impl ArtifactHash {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters for compact display
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(12)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for ArtifactHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ArtifactHash {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ArtifactHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_kept_verbatim() {
        let hash = ArtifactHash::new("abc123");
        assert_eq!(hash.as_str(), "abc123");
        assert_eq!(hash.to_string(), "abc123");
    }

    #[test]
    fn short_truncates_long_hashes() {
        let hash = ArtifactHash::new("0123456789abcdef0123");
        assert_eq!(hash.short(), "0123456789ab");
    }

    #[test]
    fn short_keeps_short_hashes() {
        let hash = ArtifactHash::new("abc");
        assert_eq!(hash.short(), "abc");
    }
}
