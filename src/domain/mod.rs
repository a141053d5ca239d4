//! Domain Layer
//!
//! The core of Airlift: remote records, value types and the ports the
//! patch workflow talks through.
//!
//! ## Structure
//!
//! - `entities/` - Remote records (App, Release, Patch, Channel)
//! - `value_objects/` - Immutable value types (BuildTarget, ArtifactHash)
//! - `services/` - Pure domain services (artifact layout, hashing)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
