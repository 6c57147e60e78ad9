//! Structured logging setup
//!
//! The filter comes from `BOOKFINDER_LOG` when set, otherwise from the
//! configured `log_level`. A configured `log_file` takes precedence as the
//! sink. Without one, the CLI logs to stderr while the terminal UI stays
//! silent so log lines never land on the alternate screen.

use crate::config::BookFinderConfig;
use std::fs::OpenOptions;
use std::error::Error;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "BOOKFINDER_LOG";

/// Where log output may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Plain CLI commands
    Stderr,
    /// Full-screen UI; only a configured file is used
    FileOnly,
}

fn directive(from_env: Option<String>, configured: &str) -> String {
    from_env
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn env_filter(config: &BookFinderConfig) -> EnvFilter {
    let directive = directive(std::env::var(LOG_ENV).ok(), &config.log_level);
    EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Report whether a subscriber was installed; a second install keeps the first
fn installed(result: Result<(), Box<dyn Error + Send + Sync>>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            debug!(error = %err, "log subscriber already installed");
            false
        }
    }
}

/// Install the global subscriber
///
/// Returns `Ok(false)` when nothing was installed, either because the UI has no
/// log file or because a subscriber already exists.
///
/// Calling this twice is harmless; the second subscriber is ignored.
///
/// # Errors
///
/// Returns an I/O error if the configured log file cannot be opened.
pub fn init(config: &BookFinderConfig, target: LogTarget) -> std::io::Result<bool> {
    let filter = env_filter(config);

    if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        return Ok(installed(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
        ));
    }

    if target == LogTarget::Stderr {
        return Ok(installed(
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        ));
    }

    Ok(false)
}
