//! Artifact content hashing.

use sha2::{Digest, Sha256};

/// Hash capability injected into the patch workflow.
///
/// A plain function pointer keeps the capability pure: tests pass a
/// deterministic stand-in, production passes [`sha256_hex`].
pub type HashFn = fn(&[u8]) -> String;

/// SHA-256 of `bytes` as 64 lowercase hex characters.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}
