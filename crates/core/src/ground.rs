//! Ground entity - the static strip at the bottom of the surface.

use crate::types::{Rect, GROUND_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    rect: Rect,
}

impl Ground {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                0.0,
                (SCREEN_HEIGHT - GROUND_HEIGHT) as f32,
                SCREEN_WIDTH as f32,
                GROUND_HEIGHT as f32,
            ),
        }
    }

    /// The ground never moves.
    pub fn advance(&mut self) {}

    pub fn bounds(&self) -> Rect {
        self.rect
    }
}

impl Default for Ground {
    fn default() -> Self {
        Self::new()
    }
}
