//! Session from `credentials.json`
//!
//! `AIRLIFT_API_KEY` wins over the stored file so CI can publish without
//! a login step.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::ports::{Session, SessionProvider};

pub const API_KEY_ENV: &str = "AIRLIFT_API_KEY";
pub const CREDENTIALS_FILE: &str = "credentials.json";

#[derive(Debug, Deserialize)]
struct StoredCredentials {
    api_key: String,
}

/// Reads the stored credentials from the airlift config directory.
pub struct FileSessionProvider {
    credentials_path: Option<PathBuf>,
    env_key: Option<String>,
}

impl FileSessionProvider {
    /// Provider for `config_dir`, honouring `AIRLIFT_API_KEY`.
    pub fn new(config_dir: Option<&Path>) -> Self {
        Self {
            credentials_path: config_dir.map(|dir| dir.join(CREDENTIALS_FILE)),
            env_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    /// Provider that ignores the environment.
    pub fn from_file(credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            credentials_path: Some(credentials_path.into()),
            env_key: None,
        }
    }

    pub fn with_env_key(mut self, key: Option<String>) -> Self {
        self.env_key = key;
        self
    }

    fn read_file(&self) -> Option<String> {
        let path = self.credentials_path.as_ref()?;
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no stored credentials");
                return None;
            }
        };
        match serde_json::from_str::<StoredCredentials>(&content) {
            Ok(creds) => Some(creds.api_key),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable credentials");
                None
            }
        }
    }
}

fn non_blank(key: String) -> Option<String> {
    let trimmed = key.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl SessionProvider for FileSessionProvider {
    fn current_session(&self) -> Option<Session> {
        if let Some(key) = self.env_key.clone().and_then(non_blank) {
            debug!("using API key from {}", API_KEY_ENV);
            return Some(Session::new(key));
        }
        self.read_file().and_then(non_blank).map(Session::new)
    }
}
