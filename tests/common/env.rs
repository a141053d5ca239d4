//! Test environment builder for isolated Airlift runs.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Artifact location the Android arm64 release build leaves behind.
pub const ARTIFACT_PATH: &str =
    "build/app/intermediates/stripped_native_libs/release/out/lib/arm64-v8a/libapp.so";

/// Result of running an Airlift CLI command
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated project and config directory.
pub struct TestEnv {
    pub project_root: TempDir,
    pub config_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project with no configuration and no credentials.
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("Failed to create project dir"),
            config_dir: tempfile::tempdir().expect("Failed to create config dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_airlift")),
        }
    }

    /// Project with `airlift.yaml`, `pubspec.yaml` and stored credentials.
    pub fn initialized(app_id: &str, version: &str) -> Self {
        let env = Self::new();
        env.write_project_file("airlift.yaml", &format!("app_id: {app_id}\n"));
        env.write_project_file(
            "pubspec.yaml",
            &format!("name: counter\nversion: {version}\n"),
        );
        env.login("test-key");
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        let full_path = self.project_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    pub fn login(&self, api_key: &str) {
        std::fs::write(
            self.config_dir.path().join("credentials.json"),
            format!("{{\"api_key\": \"{api_key}\"}}"),
        )
        .expect("Failed to write credentials");
    }

    /// Install an executable stand-in for the flutter tool and return its path.
    #[cfg(unix)]
    pub fn fake_flutter(&self, script_body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.config_dir.path().join("flutter");
        std::fs::write(&path, format!("#!/bin/sh\n{script_body}\n"))
            .expect("Failed to write fake flutter");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake flutter");
        path
    }

    /// Fake flutter that succeeds and writes `content` as the artifact.
    #[cfg(unix)]
    pub fn successful_build(&self, content: &str) -> PathBuf {
        let dir = Path::new(ARTIFACT_PATH)
            .parent()
            .expect("artifact path has a parent")
            .display()
            .to_string();
        self.fake_flutter(&format!(
            "mkdir -p {dir}\nprintf '%s' '{content}' > {ARTIFACT_PATH}"
        ))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run airlift from the project root. Stdin is never a terminal here.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .stdin(Stdio::null())
            .env("AIRLIFT_CONFIG_DIR", self.config_dir.path())
            .env("NO_COLOR", "1")
            .env_remove("AIRLIFT_API_KEY")
            .env_remove("AIRLIFT_HOSTED_URL")
            .env_remove("AIRLIFT_FLUTTER")
            .env_remove("AIRLIFT_LOG")
            .env_remove("GITHUB_ACTIONS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute airlift");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
