#![forbid(unsafe_code)]

//! File-backed tracing setup.
//!
//! The terminal is owned by the renderer, so logs never go to stderr while
//! the program runs; they go to a file, and only when one is configured.
//! The filter comes from `MINIAPPS_LOG` (tracing env-filter syntax),
//! defaulting to `info`.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Environment variable that sets the log filter.
pub const LOG_ENV: &str = "MINIAPPS_LOG";

/// Install a file-appending subscriber.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let writer = Arc::new(file);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(move || Arc::clone(&writer))
        .with_ansi(false)
        .init();
    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}
