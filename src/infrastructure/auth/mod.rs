//! Session adapters

mod session_file;

pub use session_file::{FileSessionProvider, API_KEY_ENV, CREDENTIALS_FILE};
