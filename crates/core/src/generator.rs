//! Pipe generator - spawns pipes at a fixed spacing with random gap placement.
//!
//! The generator owns its RNG so a seed fully determines the pipe sequence,
//! which keeps replays and tests reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pipe::Pipe;
use crate::types::{GAP_HEIGHT_MAX, GAP_HEIGHT_MIN, PIPE_DISTANCE, SCREEN_WIDTH};

#[derive(Debug, Clone)]
pub struct PipeGenerator {
    rng: StdRng,
    seed: Option<u64>,
}

impl PipeGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from the OS.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this generator was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Build the next pipe, `PIPE_DISTANCE` to the right of `last_x`.
    pub fn generate(&mut self, last_x: i32) -> Pipe {
        let gap_height = self.rng.gen_range(GAP_HEIGHT_MIN..GAP_HEIGHT_MAX);
        Pipe::new(last_x + PIPE_DISTANCE, gap_height)
    }

    /// Spawn policy: spawn when there is no pipe yet, or when the newest pipe
    /// has travelled at least one spacing unit in from the right edge.
    pub fn should_spawn(last: Option<&Pipe>) -> bool {
        match last {
            None => true,
            Some(pipe) => SCREEN_WIDTH - pipe.x() >= PIPE_DISTANCE,
        }
    }
}
