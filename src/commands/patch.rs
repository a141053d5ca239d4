//! `airlift patch`

use std::path::Path;

use airlift::application::patch::{PatchOptions, PatchOutcome};
use airlift::config::Config;
use airlift::domain::ports::NonInteractivePrompter;
use airlift::presentation::factory::create_patch_use_case;
use airlift::presentation::ColorWhen;
use airlift::ExitStatus;
use tracing::debug;

use super::project_root::discover_project_root;
use crate::ui::context::UiContext;
use crate::ui::error::{format_config_warning, print_error, print_patch_error};
use crate::ui::progress::TerminalEventSink;
use crate::ui::prompter::DialoguerPrompter;
use crate::ui::views::patch::{
    render_declined, render_dry_run, render_patch_header, render_published,
};

#[allow(clippy::too_many_arguments)]
pub fn cmd_patch(
    release_version: Option<String>,
    channel: String,
    force: bool,
    dry_run: bool,
    project: &Path,
    verbose: u8,
    color: Option<ColorWhen>,
    no_animation: bool,
) -> ExitStatus {
    let (config, warnings) = match Config::load_user() {
        Ok(loaded) => loaded,
        Err(e) => {
            let ui = UiContext::new(verbose, color, no_animation, &Config::default());
            print_error(
                &e.to_string(),
                Some("Fix or remove the config file and try again."),
                &ui,
            );
            return ExitStatus::Config;
        }
    };
    let ui = UiContext::new(verbose, color, no_animation, &config);
    for warning in &warnings {
        eprint!("{}", format_config_warning(warning, ui.color, ui.unicode));
    }

    let project_root = match project.canonicalize() {
        Ok(path) => discover_project_root(&path),
        Err(e) => {
            print_error(
                &format!("cannot open project {}: {}", project.display(), e),
                Some("Pass the Flutter project directory with --project."),
                &ui,
            );
            return ExitStatus::Config;
        }
    };
    debug!(root = %project_root.display(), hosted_url = %config.hosted_url, "patch");

    let use_case = match create_patch_use_case(&project_root, &config) {
        Ok(use_case) => use_case,
        Err(e) => {
            print_error(&format!("failed to initialise HTTP client: {e}"), None, &ui);
            return ExitStatus::Software;
        }
    };

    eprint!(
        "{}",
        render_patch_header(&project_root, &channel, ui.color, ui.unicode)
    );

    let mut options = PatchOptions::new(&project_root)
        .with_channel(channel)
        .with_force(force)
        .with_dry_run(dry_run);
    if let Some(version) = release_version {
        options = options.with_release_version(version);
    }

    let sink = TerminalEventSink::new(ui);
    let result = if ui.interactive {
        use_case.execute(&options, &DialoguerPrompter::new(&ui), &sink)
    } else {
        use_case.execute(&options, &NonInteractivePrompter, &sink)
    };
    drop(sink);

    match result {
        Ok(outcome) => {
            let rendered = match &outcome {
                PatchOutcome::Published(published) => {
                    render_published(published, ui.color, ui.unicode)
                }
                PatchOutcome::Declined => render_declined(ui.color, ui.unicode),
                PatchOutcome::DryRun(_) => render_dry_run(ui.color, ui.unicode),
            };
            print!("{rendered}");
            outcome.exit_status()
        }
        Err(err) => {
            print_patch_error(&err, &ui);
            err.exit_status()
        }
    }
}
