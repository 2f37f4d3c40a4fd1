//! Tracing setup.
//!
//! The TUI owns stdout, so events go to a log file in the data directory
//! (see [`AppPaths::log_file`]). `RUST_LOG` overrides the default filter.

use std::path::Path;

use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*, registry};

use crate::state::platform::paths::{AppPaths, LOG_FILE_NAME};

/// Filter used when `RUST_LOG` is unset.
fn default_directives() -> &'static str {
    if cfg!(debug_assertions) {
        "parsepoint=debug,reqwest=info"
    } else {
        "parsepoint=info,reqwest=warn"
    }
}

/// Installs the global subscriber writing to the default log file.
///
/// The returned guard flushes pending lines on drop; keep it alive for the
/// lifetime of the program.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init() -> Result<WorkerGuard> {
    let log_file = AppPaths::new().log_file()?;
    let dir = log_file
        .parent()
        .ok_or_else(|| eyre!("log file has no parent directory"))?;
    init_in(dir)
}

/// Installs the global subscriber writing to `dir`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_in(dir: &Path) -> Result<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives()));

    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    registry().with(env_filter).with(file_layer).try_init()?;

    tracing::debug!(dir = %dir.display(), "logging initialised");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_target_crate() {
        assert!(default_directives().starts_with("parsepoint="));
    }
}
