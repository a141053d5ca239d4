//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--color, --verbose, --no-animation) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::application::patch::PatchOptions;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Airlift - publish code-push patches for Flutter apps
#[derive(Parser, Debug)]
#[command(name = "airlift")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Patches can only target releases that already exist on the server.")]
pub struct Cli {
    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Disable animations (spinners, live updates)
    #[arg(long, global = true)]
    pub no_animation: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the app and publish the result as a patch to an existing release
    Patch {
        /// Release version to patch (prompted for when omitted)
        #[arg(long, value_name = "VERSION")]
        release_version: Option<String>,

        /// Channel to promote the patch to (created when missing)
        #[arg(long, default_value = PatchOptions::DEFAULT_CHANNEL)]
        channel: String,

        /// Publish without asking for confirmation
        #[arg(short, long)]
        force: bool,

        /// Build and resolve everything, then stop before publishing
        #[arg(long)]
        dry_run: bool,

        /// Flutter project root
        #[arg(long, value_name = "PATH", default_value = ".")]
        project: PathBuf,
    },
}
