//! Tracing subscriber setup.
//!
//! Logs go to stderr so stdout stays clean for results. `AIRLIFT_LOG`
//! takes an `EnvFilter` directive and beats `-v`.

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "AIRLIFT_LOG";

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbose: u8, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let layer = fmt::layer()
        .with_target(false)
        .with_ansi(ansi)
        .with_timer(fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to install log subscriber")
}
