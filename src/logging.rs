//! File logging setup
//!
//! The slideshow owns the terminal, so log output goes to
//! `<data dir>/storyline/storyline.log` instead of stderr. `STORYLINE_LOG`
//! overrides the configured filter.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "STORYLINE_LOG";

/// Log file name inside the log directory.
pub const LOG_FILE: &str = "storyline.log";

/// Build the filter: environment first, then the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing into `dir`.
///
/// Returns the log file path, or `None` when logging is disabled.
pub fn init(config: &LoggingConfig, dir: Option<&Path>) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }
    let Some(dir) = dir else {
        return Ok(None);
    };

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(Some(path))
}
