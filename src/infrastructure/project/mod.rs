//! Project configuration adapters

mod yaml_project;

pub use yaml_project::{YamlProjectConfig, PROJECT_FILE, PUBSPEC_FILE};
