//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PatchUseCase` - Orchestrates the patch flow (build, hash, resolve, publish, promote)

pub mod patch;

pub use patch::{PatchOptions, PatchOutcome, PatchUseCase, PublishedPatch};
