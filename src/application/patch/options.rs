//! Patch Options
//!
//! Configuration for a single patch run.

use std::path::PathBuf;

/// Options for the patch use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOptions {
    /// Project root (where the build runs and the artifact lands)
    pub project_root: PathBuf,
    /// Release version given on the command line; skips the version prompt
    pub release_version: Option<String>,
    /// Channel the patch is promoted to
    pub channel: String,
    /// Publish without asking for confirmation
    pub force: bool,
    /// Stop after the summary, before any remote write
    pub dry_run: bool,
}

impl PatchOptions {
    pub const DEFAULT_CHANNEL: &'static str = "stable";

    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            release_version: None,
            channel: Self::DEFAULT_CHANNEL.to_string(),
            force: false,
            dry_run: false,
        }
    }

    pub fn with_release_version(mut self, version: impl Into<String>) -> Self {
        self.release_version = Some(version.into());
        self
    }

    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stable_channel() {
        let options = PatchOptions::new(".");
        assert_eq!(options.channel, "stable");
        assert!(options.release_version.is_none());
        assert!(!options.force);
        assert!(!options.dry_run);
    }

    #[test]
    fn builders_set_fields() {
        let options = PatchOptions::new("/app")
            .with_release_version("1.2.3")
            .with_channel("beta")
            .with_force(true)
            .with_dry_run(true);
        assert_eq!(options.release_version.as_deref(), Some("1.2.3"));
        assert_eq!(options.channel, "beta");
        assert!(options.force);
        assert!(options.dry_run);
    }
}
