//! Project configuration from YAML files in the project root
//!
//! - `airlift.yaml` marks the project as initialized and holds `app_id`
//! - `pubspec.yaml` declares the app `version`

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::ports::{ProjectConfig, ProjectConfigError};

pub const PROJECT_FILE: &str = "airlift.yaml";
pub const PUBSPEC_FILE: &str = "pubspec.yaml";

#[derive(Debug, Deserialize)]
struct ProjectFile {
    app_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PubspecFile {
    version: Option<serde_yaml_ng::Value>,
}

pub struct YamlProjectConfig {
    root: PathBuf,
}

impl YamlProjectConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Result<T, ProjectConfigError> {
        let file = self.root.join(name);
        let content = fs::read_to_string(&file).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProjectConfigError::Missing { file: file.clone() },
            _ => ProjectConfigError::Read {
                file: file.clone(),
                message: e.to_string(),
            },
        })?;
        serde_yaml_ng::from_str(&content).map_err(|e| ProjectConfigError::Invalid {
            file,
            message: e.to_string(),
        })
    }
}

fn required(
    value: Option<String>,
    key: &str,
    file: PathBuf,
) -> Result<String, ProjectConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ProjectConfigError::MissingKey {
            key: key.to_string(),
            file,
        })
}

/// Scalar YAML value as the text the user wrote (`1.0` parses as a float).
fn scalar_text(value: serde_yaml_ng::Value) -> Option<String> {
    match value {
        serde_yaml_ng::Value::String(s) => Some(s),
        serde_yaml_ng::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

impl ProjectConfig for YamlProjectConfig {
    fn is_initialized(&self) -> bool {
        self.root.join(PROJECT_FILE).is_file()
    }

    fn app_id(&self) -> Result<String, ProjectConfigError> {
        let project: ProjectFile = self.read(PROJECT_FILE)?;
        required(project.app_id, "app_id", self.root.join(PROJECT_FILE))
    }

    fn project_version(&self) -> Result<String, ProjectConfigError> {
        let pubspec: PubspecFile = self.read(PUBSPEC_FILE)?;
        required(
            pubspec.version.and_then(scalar_text),
            "version",
            self.root.join(PUBSPEC_FILE),
        )
    }
}
