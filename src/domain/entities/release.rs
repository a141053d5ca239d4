use serde::{Deserialize, Serialize};

/// A published build baseline that patches can target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub id: String,
    pub app_id: String,
    pub version: String,
}

impl Release {
    pub fn new(id: impl Into<String>, app_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            app_id: app_id.into(),
            version: version.into(),
        }
    }

    /// Find the release whose version string is exactly `version`.
    ///
    /// Matching is plain string equality: `1.0.0` never matches `1.0.0+1`
    /// or `1.0`.
    pub fn find_by_version<'a>(releases: &'a [Release], version: &str) -> Option<&'a Release> {
        releases.iter().find(|release| release.version == version)
    }
}
