//! Fixed-rate frame cadence for the game loop.
//!
//! The clock is pure: callers pass `now` in, so the cadence is testable
//! without sleeping.

use std::time::{Duration, Instant};

use crate::types::TARGET_FPS;

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: None,
        }
    }

    /// Clock ticking `fps` times per second (0 is treated as 1).
    pub fn with_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time to wait for input before the next frame is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.last_tick {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Whether a frame is due; if so, the clock advances to `now`.
    ///
    /// Late frames are not replayed: after a stall the next tick is one
    /// interval after the stall ended.
    pub fn should_tick(&mut self, now: Instant) -> bool {
        let due = match self.last_tick {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if due {
            self.last_tick = Some(now);
        }
        due
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::with_fps(TARGET_FPS)
    }
}
