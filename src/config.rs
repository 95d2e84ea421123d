//! Runtime configuration read from environment variables.
//!
//! - `FLAPPY_SEED`: fixed pipe sequence (default: random per launch)
//! - `FLAPPY_FPS`: frame-rate cap, 1..=240 (default: 60)
//! - `FLAPPY_LOG_PATH`: write diagnostics to this file (default: off)
//! - `FLAPPY_LOG`: log filter, `env_logger` syntax (default: "info")
//!
//! Invalid values fall back to the defaults.

use crate::types::TARGET_FPS;

const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub fps: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fps: TARGET_FPS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("FLAPPY_SEED").and_then(|s| s.trim().parse().ok());

        let fps = lookup("FLAPPY_FPS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|fps| (1..=MAX_FPS).contains(fps))
            .unwrap_or(defaults.fps);

        let log_path = lookup("FLAPPY_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("FLAPPY_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed,
            fps,
            log_path,
            log_filter,
        }
    }
}
