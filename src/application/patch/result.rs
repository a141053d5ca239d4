//! Patch Result
//!
//! Result types for patch operations.

use crate::domain::entities::{App, Channel, Patch, Release};
use crate::domain::ports::PatchSummary;
use crate::domain::value_objects::ArtifactHash;
use crate::error::ExitStatus;

/// A patch that is live on its channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedPatch {
    pub app: App,
    pub release: Release,
    pub patch: Patch,
    pub channel: Channel,
    /// Whether the channel was created by this run
    pub channel_created: bool,
    pub hash: ArtifactHash,
}

/// How a patch run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    Published(PublishedPatch),
    /// User answered "no" at the confirmation prompt
    Declined,
    /// Dry run stopped after the summary
    DryRun(PatchSummary),
}

impl PatchOutcome {
    pub fn is_published(&self) -> bool {
        matches!(self, PatchOutcome::Published(_))
    }

    /// Every non-error outcome exits successfully, declining included.
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::Success
    }
}
