//! Diagnostics setup.
//!
//! The game owns the terminal (raw mode, alternate screen), so log records
//! never go to stdout/stderr. They are written to `FLAPPY_LOG_PATH` when set
//! and dropped otherwise.

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use crate::config::GameConfig;

/// Install the global logger if a log file is configured.
///
/// Returns `Ok(false)` when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    env_logger::Builder::new()
        .parse_filters(&config.log_filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("logger already initialized")?;

    Ok(true)
}
