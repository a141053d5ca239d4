//! Flutter release build
//!
//! Runs `flutter build apk --release` in the project root and waits for
//! it. Output is captured rather than streamed; on failure the captured
//! stderr (or stdout when stderr is empty) becomes the error message.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tracing::{debug, info};

use crate::domain::ports::{BuildError, BuildInvoker};

/// Overrides the `flutter` executable
pub const FLUTTER_ENV: &str = "AIRLIFT_FLUTTER";

const DEFAULT_PROGRAM: &str = "flutter";
const BUILD_ARGS: &[&str] = &["build", "apk", "--release"];

pub struct FlutterBuild {
    program: String,
    project_root: PathBuf,
}

impl FlutterBuild {
    /// Build in `project_root`, honouring `AIRLIFT_FLUTTER`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        let program = std::env::var(FLUTTER_ENV)
            .ok()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
        Self::with_program(program, project_root)
    }

    pub fn with_program(program: impl Into<String>, project_root: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            project_root: project_root.into(),
        }
    }
}

/// Failure text for a finished build: stderr, else stdout, else the status.
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = if stderr.trim().is_empty() {
        stdout.trim()
    } else {
        stderr.trim()
    };
    if text.is_empty() {
        format!("build exited with {}", output.status)
    } else {
        text.to_string()
    }
}

impl BuildInvoker for FlutterBuild {
    fn build_release(&self) -> Result<(), BuildError> {
        info!(program = %self.program, root = %self.project_root.display(), "building release");

        let output = Command::new(&self.program)
            .args(BUILD_ARGS)
            .current_dir(&self.project_root)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BuildError::Spawn {
                program: self.program.clone(),
                message: e.to_string(),
            })?;

        if output.status.success() {
            debug!(bytes = output.stdout.len(), "build finished");
            Ok(())
        } else {
            Err(BuildError::ProcessFailed(failure_message(&output)))
        }
    }
}
