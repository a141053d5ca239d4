//! Patch Use Case
//!
//! Orchestrates the patch flow:
//! 1. Check the project is initialized and a session exists
//! 2. Build the release artifact
//! 3. Locate and hash the artifact
//! 4. Resolve app, release version and release
//! 5. Show the summary and ask for confirmation
//! 6. Create the patch
//! 7. Upload the artifact to it
//! 8. Find or create the channel
//! 9. Promote the patch to the channel
//!
//! Steps run strictly in order and the first failure ends the run. Remote
//! state written before the failure stays as it is: a patch created before
//! a failed upload or promotion is left unpromoted on the service.

use std::fmt::Display;

use tracing::{info, warn};

use crate::domain::entities::{App, Channel};
use crate::domain::ports::{
    BuildInvoker, CodePushClient, CodePushClientFactory, PatchEvent, PatchEventSink, PatchStep,
    PatchSummary, ProjectConfig, Prompter, RemoteError, SessionProvider,
};
use crate::domain::services::{ArtifactLocator, HashFn};
use crate::error::{PatchError, PatchResult};

use super::artifact::read_artifact;
use super::identity::IdentityResolver;
use super::options::PatchOptions;
use super::result::{PatchOutcome, PublishedPatch};

pub(super) const CONFIRM_QUESTION: &str = "Would you like to continue?";

/// Run `f` as `step`, reporting start, completion or failure to `events`.
pub(super) fn track_step<T, E: Display>(
    events: &dyn PatchEventSink,
    step: PatchStep,
    f: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    events.on_event(PatchEvent::StepStarted { step });
    match f() {
        Ok(value) => {
            events.on_event(PatchEvent::StepCompleted { step });
            Ok(value)
        }
        Err(e) => {
            events.on_event(PatchEvent::StepFailed {
                step,
                error: e.to_string(),
            });
            Err(e)
        }
    }
}

/// A failure after the patch exists remotely. The patch stays behind unpromoted.
fn orphaned(step: PatchStep, patch_id: &str, error: RemoteError) -> PatchError {
    warn!(patch_id, step = %step, error = %error, "patch left unpromoted");
    PatchError::remote_after_patch(step, patch_id, error)
}

/// Patch use case - publishes a built artifact as a live patch
///
/// Parameterized by its ports so tests can drive every step with
/// recording doubles.
pub struct PatchUseCase<S, B, P, F>
where
    S: SessionProvider,
    B: BuildInvoker,
    P: ProjectConfig,
    F: CodePushClientFactory,
{
    session_provider: S,
    build_invoker: B,
    project_config: P,
    client_factory: F,
    hash_fn: HashFn,
    locator: ArtifactLocator,
}

impl<S, B, P, F> PatchUseCase<S, B, P, F>
where
    S: SessionProvider,
    B: BuildInvoker,
    P: ProjectConfig,
    F: CodePushClientFactory,
{
    pub fn new(
        session_provider: S,
        build_invoker: B,
        project_config: P,
        client_factory: F,
        hash_fn: HashFn,
    ) -> Self {
        Self {
            session_provider,
            build_invoker,
            project_config,
            client_factory,
            hash_fn,
            locator: ArtifactLocator::default(),
        }
    }

    /// Execute the patch workflow
    pub fn execute(
        &self,
        options: &PatchOptions,
        prompter: &dyn Prompter,
        events: &dyn PatchEventSink,
    ) -> PatchResult<PatchOutcome> {
        if !self.project_config.is_initialized() {
            return Err(PatchError::NotInitialized);
        }
        let session = self
            .session_provider
            .current_session()
            .ok_or(PatchError::NotLoggedIn)?;

        track_step(events, PatchStep::Build, || self.build_invoker.build_release())?;

        let artifact = track_step(events, PatchStep::HashArtifact, || {
            read_artifact(&self.locator, &options.project_root, self.hash_fn)
        })?;

        let client = self.client_factory.connect(&session);
        let client = client.as_ref();

        let identity = IdentityResolver::new(client, &self.project_config, prompter, events);
        let app = identity.resolve_app()?;
        let release_version = identity.target_version(options.release_version.as_deref())?;
        let release = identity.resolve_release(&app, &release_version)?;

        let target = self.locator.target();
        let summary = PatchSummary {
            app: app.clone(),
            release_version: release.version.clone(),
            channel: options.channel.clone(),
            target,
            hash: artifact.hash.clone(),
            artifact_path: artifact.path.clone(),
            artifact_size: artifact.size(),
        };
        events.on_event(PatchEvent::Summary(summary.clone()));

        if options.dry_run {
            info!(app_id = %app.id, release_id = %release.id, "dry run, nothing published");
            events.on_event(PatchEvent::DryRunComplete);
            return Ok(PatchOutcome::DryRun(summary));
        }

        if !options.force && !prompter.confirm(CONFIRM_QUESTION)? {
            events.on_event(PatchEvent::Declined);
            return Ok(PatchOutcome::Declined);
        }

        let patch = track_step(events, PatchStep::CreatePatch, || {
            client.create_patch(&release.id)
        })
        .map_err(|e| PatchError::remote(PatchStep::CreatePatch, e))?;
        info!(patch_id = %patch.id, number = patch.number, release_id = %release.id, "patch created");

        track_step(events, PatchStep::UploadArtifact, || {
            client.upload_patch_artifact(&patch.id, &artifact, target)
        })
        .map_err(|e| orphaned(PatchStep::UploadArtifact, &patch.id, e))?;
        info!(
            patch_id = %patch.id,
            size = artifact.size(),
            hash = artifact.hash.short(),
            "artifact uploaded"
        );

        let (channel, channel_created) =
            self.resolve_channel(client, events, &app, &options.channel, &patch.id)?;

        track_step(events, PatchStep::PromotePatch, || {
            client.promote_patch(&patch.id, &channel.id)
        })
        .map_err(|e| orphaned(PatchStep::PromotePatch, &patch.id, e))?;
        info!(patch_id = %patch.id, channel = %channel.name, "patch promoted");

        events.on_event(PatchEvent::Published {
            patch_number: patch.number,
            channel: channel.name.clone(),
        });

        Ok(PatchOutcome::Published(PublishedPatch {
            app,
            release,
            patch,
            channel,
            channel_created,
            hash: artifact.hash,
        }))
    }

    /// Look the channel up by name, creating it only when absent.
    fn resolve_channel(
        &self,
        client: &dyn CodePushClient,
        events: &dyn PatchEventSink,
        app: &App,
        name: &str,
        patch_id: &str,
    ) -> PatchResult<(Channel, bool)> {
        let channels = track_step(events, PatchStep::FetchChannels, || {
            client.list_channels(&app.id)
        })
        .map_err(|e| orphaned(PatchStep::FetchChannels, patch_id, e))?;

        if let Some(existing) = Channel::find_by_name(&channels, name) {
            return Ok((existing.clone(), false));
        }

        let created = track_step(events, PatchStep::CreateChannel, || {
            client.create_channel(&app.id, name)
        })
        .map_err(|e| orphaned(PatchStep::CreateChannel, patch_id, e))?;
        info!(channel_id = %created.id, channel = %created.name, "channel created");
        Ok((created, true))
    }
}
