//! Log file setup. The terminal belongs to the UI, so logs go to
//! ~/.neon-snake/neon-snake.log.

use super::persistence::save_path;
use crate::error::StoreError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the `EnvFilter` directive.
pub const LOG_ENV: &str = "NEON_SNAKE_LOG";
pub const LOG_FILE: &str = "neon-snake.log";

/// Install the global subscriber, appending to the log file.
///
/// Returns the log path. Calling it again after a subscriber is installed
/// leaves the existing one in place.
pub fn init_logging() -> Result<PathBuf, StoreError> {
    let path = save_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "info".into());
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .try_init();
    if installed.is_ok() {
        tracing::info!(path = %path.display(), "logging started");
    }
    Ok(path)
}
