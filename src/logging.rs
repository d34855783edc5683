//! Tracing setup for the `insights` binary
//!
//! The filter comes from `INSIGHTS_LOG` when set, otherwise from the
//! verbosity flag. CLI commands log to stderr; the dashboard logs to a file
//! because stderr shares the terminal with the alternate screen.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{InsightsError, InsightsResult};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "INSIGHTS_LOG";

/// Where log lines go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Default directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global tracing subscriber
pub fn init_tracing(verbosity: u8, target: LogTarget<'_>) -> InsightsResult<()> {
    let registry = tracing_subscriber::registry().with(build_filter(verbosity));

    let result = match target {
        LogTarget::Stderr => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    InsightsError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    result.map_err(|e| InsightsError::Config(format!("Failed to initialize logging: {}", e)))
}
