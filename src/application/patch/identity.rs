//! Identity resolution: which remote app and release a patch belongs to.

use tracing::debug;

use crate::domain::entities::{App, Release};
use crate::domain::ports::{CodePushClient, PatchEventSink, PatchStep, ProjectConfig, Prompter};
use crate::error::{PatchError, PatchResult};

use super::use_case::track_step;

pub(super) const RELEASE_VERSION_QUESTION: &str = "What release version would you like to patch?";

/// Resolves the local project against records on the service.
pub(super) struct IdentityResolver<'a> {
    client: &'a dyn CodePushClient,
    project: &'a dyn ProjectConfig,
    prompter: &'a dyn Prompter,
    events: &'a dyn PatchEventSink,
}

impl<'a> IdentityResolver<'a> {
    pub(super) fn new(
        client: &'a dyn CodePushClient,
        project: &'a dyn ProjectConfig,
        prompter: &'a dyn Prompter,
        events: &'a dyn PatchEventSink,
    ) -> Self {
        Self {
            client,
            project,
            prompter,
            events,
        }
    }

    /// The remote app whose id the project is configured with.
    pub(super) fn resolve_app(&self) -> PatchResult<App> {
        let app_id = self.project.app_id()?;
        let apps = track_step(self.events, PatchStep::FetchApps, || self.client.list_apps())
            .map_err(|e| PatchError::remote(PatchStep::FetchApps, e))?;

        let app = App::find(&apps, &app_id)
            .cloned()
            .ok_or(PatchError::AppNotFound { app_id })?;
        debug!(app_id = %app.id, app = %app.display_name, "app resolved");
        Ok(app)
    }

    /// The version string to look the release up by.
    ///
    /// An explicit version wins outright. Otherwise the user is asked,
    /// with the project's declared version offered as the default.
    pub(super) fn target_version(&self, explicit: Option<&str>) -> PatchResult<String> {
        if let Some(version) = explicit {
            return Ok(version.to_string());
        }

        let declared = self.project.project_version()?;
        let answer = self.prompter.prompt(RELEASE_VERSION_QUESTION, &declared)?;
        let answer = answer.trim();
        Ok(if answer.is_empty() {
            declared
        } else {
            answer.to_string()
        })
    }

    /// The app's release whose version is exactly `version`.
    pub(super) fn resolve_release(&self, app: &App, version: &str) -> PatchResult<Release> {
        let releases = track_step(self.events, PatchStep::FetchReleases, || {
            self.client.list_releases(&app.id)
        })
        .map_err(|e| PatchError::remote(PatchStep::FetchReleases, e))?;

        let release = Release::find_by_version(&releases, version)
            .cloned()
            .ok_or_else(|| PatchError::ReleaseNotFound {
                version: version.to_string(),
            })?;
        debug!(release_id = %release.id, version = %release.version, "release resolved");
        Ok(release)
    }
}
