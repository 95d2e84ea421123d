//! Bird entity - the only player-controlled body.

use crate::types::{Rect, BIRD_SIZE, BIRD_X, GRAVITY, JUMP_VELOCITY, SCREEN_HEIGHT};

/// Vertical kinematic state of the bird.
///
/// The horizontal position is fixed at [`BIRD_X`]; the world scrolls instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    y: f32,
    velocity: f32,
}

impl Bird {
    /// Create a bird at the spawn position (vertical center, at rest).
    pub fn new() -> Self {
        Self {
            y: (SCREEN_HEIGHT / 2) as f32,
            velocity: 0.0,
        }
    }

    /// Create a bird at an arbitrary height and velocity.
    pub fn with_state(y: f32, velocity: f32) -> Self {
        Self { y, velocity }
    }

    pub fn x(&self) -> i32 {
        BIRD_X
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Integrate one frame: velocity first, then position with the new velocity.
    ///
    /// There is no clamping; the bird may leave the top of the surface.
    pub fn step(&mut self) {
        self.velocity += GRAVITY;
        self.y += self.velocity;
    }

    /// Set (not add) the jump impulse.
    pub fn jump(&mut self) {
        self.velocity = JUMP_VELOCITY;
    }

    pub fn advance(&mut self) {
        self.step();
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(BIRD_X as f32, self.y, BIRD_SIZE as f32, BIRD_SIZE as f32)
    }

    /// Return to the spawn state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Bird {
    fn default() -> Self {
        Self::new()
    }
}
