//! Artifact layout of the native release build.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{BuildTarget, Platform};

/// File name of the compiled Dart AOT library on Android
const ANDROID_LIBRARY: &str = "libapp.so";

/// Computes where the native build tool leaves the release artifact.
///
/// The locator only knows the layout; checking that the file is actually
/// there is the caller's job.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactLocator {
    target: BuildTarget,
}

impl ArtifactLocator {
    pub fn new(target: BuildTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> BuildTarget {
        self.target
    }

    /// Expected artifact path below `project_root`.
    pub fn expected_path(&self, project_root: &Path) -> PathBuf {
        match self.target.platform {
            Platform::Android => project_root
                .join("build")
                .join("app")
                .join("intermediates")
                .join("stripped_native_libs")
                .join("release")
                .join("out")
                .join("lib")
                .join(self.target.arch.android_abi())
                .join(ANDROID_LIBRARY),
        }
    }
}

impl Default for ArtifactLocator {
    fn default() -> Self {
        Self::new(BuildTarget::default())
    }
}
