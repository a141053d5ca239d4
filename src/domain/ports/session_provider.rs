//! Session Provider Port
//!
//! Gives the workflow read-only access to the logged-in user.

use std::fmt;

/// Authenticated user context.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    api_key: String,
}

impl Session {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

// Keep the key out of logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Source of the current session, if any.
pub trait SessionProvider {
    fn current_session(&self) -> Option<Session>;
}
