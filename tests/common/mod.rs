//! Common utilities for Airlift CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project and config directories plus CLI helpers
//! - `FakeService`: a tiny HTTP server standing in for the code-push API

pub mod env;
pub mod service;

pub use env::*;
pub use service::*;
