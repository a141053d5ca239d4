//! Patch Event Port
//!
//! Observable progress of the patch workflow. Sinks turn these into
//! spinners, plain log lines, or recorded test fixtures.

use std::fmt;
use std::path::PathBuf;

use crate::domain::entities::App;
use crate::domain::value_objects::{ArtifactHash, BuildTarget};

/// A labelled unit of work with its own progress indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchStep {
    Build,
    HashArtifact,
    FetchApps,
    FetchReleases,
    CreatePatch,
    UploadArtifact,
    FetchChannels,
    CreateChannel,
    PromotePatch,
}

impl PatchStep {
    /// Progress label shown while the step runs
    pub fn label(&self) -> &'static str {
        match self {
            PatchStep::Build => "Building release",
            PatchStep::HashArtifact => "Hashing artifact",
            PatchStep::FetchApps => "Fetching apps",
            PatchStep::FetchReleases => "Fetching releases",
            PatchStep::CreatePatch => "Creating patch",
            PatchStep::UploadArtifact => "Uploading artifact",
            PatchStep::FetchChannels => "Fetching channels",
            PatchStep::CreateChannel => "Creating channel",
            PatchStep::PromotePatch => "Promoting patch",
        }
    }

    /// Whether the step changes remote state
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            PatchStep::CreatePatch
                | PatchStep::UploadArtifact
                | PatchStep::CreateChannel
                | PatchStep::PromotePatch
        )
    }
}

impl fmt::Display for PatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user confirms before anything is published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSummary {
    pub app: App,
    pub release_version: String,
    pub channel: String,
    pub target: BuildTarget,
    pub hash: ArtifactHash,
    pub artifact_path: PathBuf,
    pub artifact_size: u64,
}

/// Event emitted during the patch workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchEvent {
    StepStarted { step: PatchStep },

    StepCompleted { step: PatchStep },

    StepFailed { step: PatchStep, error: String },

    /// Identity is resolved and the patch is ready to publish
    Summary(PatchSummary),

    /// User declined to publish
    Declined,

    /// Dry run stopped before the first mutating call
    DryRunComplete,

    /// Patch is live on its channel
    Published { patch_number: u32, channel: String },
}

/// Trait for receiving patch events
pub trait PatchEventSink {
    fn on_event(&self, event: PatchEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PatchEventSink for NoopEventSink {
    fn on_event(&self, _event: PatchEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: Arc<Mutex<Vec<PatchEvent>>>,
    }

    impl PatchEventSink for RecordingEventSink {
        fn on_event(&self, event: PatchEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = RecordingEventSink {
            events: events.clone(),
        };

        sink.on_event(PatchEvent::StepStarted {
            step: PatchStep::Build,
        });
        sink.on_event(PatchEvent::StepCompleted {
            step: PatchStep::Build,
        });

        assert_eq!(events.lock().unwrap().len(), 2);
    }

    #[test]
    fn only_remote_writes_are_mutating() {
        assert!(!PatchStep::Build.is_mutating());
        assert!(!PatchStep::FetchChannels.is_mutating());
        assert!(PatchStep::CreatePatch.is_mutating());
        assert!(PatchStep::PromotePatch.is_mutating());
    }

    #[test]
    fn display_is_label() {
        assert_eq!(PatchStep::UploadArtifact.to_string(), "Uploading artifact");
    }
}
