//! Airlift CLI - code-push patch publishing for Flutter apps
//!
//! Usage: airlift patch [OPTIONS]

mod commands;
mod logging;
mod ui;

use clap::Parser;
use is_terminal::IsTerminal;

use airlift::presentation::{Cli, ColorWhen, Commands};

fn main() {
    let cli = Cli::parse();

    let ansi = match cli.color {
        Some(ColorWhen::Always) => true,
        Some(ColorWhen::Never) => false,
        Some(ColorWhen::Auto) | None => {
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    };
    if let Err(e) = logging::init_logging(cli.verbose, ansi) {
        eprintln!("warning: {e:#}");
    }

    let status = match cli.command {
        Commands::Patch {
            release_version,
            channel,
            force,
            dry_run,
            project,
        } => commands::patch::cmd_patch(
            release_version,
            channel,
            force,
            dry_run,
            &project,
            cli.verbose,
            cli.color,
            cli.no_animation,
        ),
    };

    std::process::exit(status.code());
}
