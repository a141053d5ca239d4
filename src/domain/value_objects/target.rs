//! Build target value objects - which platform/architecture a patch is for

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating system family an artifact runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Android,
}

impl Platform {
    /// Wire name used by the code-push service
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Android => "android",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture an artifact was compiled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Aarch64,
}

impl Arch {
    /// Wire name used by the code-push service
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Aarch64 => "aarch64",
        }
    }

    /// Android ABI directory the native build tool writes this arch to
    pub fn android_abi(&self) -> &'static str {
        match self {
            Arch::Aarch64 => "arm64-v8a",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A platform/architecture pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BuildTarget {
    pub platform: Platform,
    pub arch: Arch,
}

impl BuildTarget {
    /// The only target patches are currently published for.
    pub const ANDROID_AARCH64: BuildTarget = BuildTarget {
        platform: Platform::Android,
        arch: Arch::Aarch64,
    };
}

impl Default for BuildTarget {
    fn default() -> Self {
        Self::ANDROID_AARCH64
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.platform, self.arch)
    }
}
