//! Pipe entity - a pair of obstacles sharing one column with a gap between.

use crate::types::{Rect, PIPE_GAP, PIPE_WIDTH, SCREEN_HEIGHT, SCROLL_SPEED};

/// A scrolling pipe.
///
/// Only `x` changes after creation. The two obstacle rectangles are derived,
/// so they can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pipe {
    x: i32,
    gap_height: i32,
}

impl Pipe {
    pub fn new(x: i32, gap_height: i32) -> Self {
        Self { x, gap_height }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    /// Height of the top obstacle, i.e. where the gap starts.
    pub fn gap_height(&self) -> i32 {
        self.gap_height
    }

    /// Right edge of the pipe column.
    pub fn right(&self) -> i32 {
        self.x + PIPE_WIDTH
    }

    /// Scroll one frame to the left.
    pub fn advance(&mut self) {
        self.x -= SCROLL_SPEED;
    }

    /// Whether the whole pipe has left the surface on the left side.
    pub fn is_offscreen(&self) -> bool {
        self.right() < 0
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(
            self.x as f32,
            0.0,
            PIPE_WIDTH as f32,
            self.gap_height as f32,
        )
    }

    /// Bottom obstacle; extends to the bottom of the surface (the ground
    /// covers its tail).
    pub fn bottom_rect(&self) -> Rect {
        let top = self.gap_height + PIPE_GAP;
        Rect::new(
            self.x as f32,
            top as f32,
            PIPE_WIDTH as f32,
            (SCREEN_HEIGHT - top) as f32,
        )
    }

    pub fn bounds(&self) -> [Rect; 2] {
        [self.top_rect(), self.bottom_rect()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GAP_HEIGHT_MAX, GAP_HEIGHT_MIN};

    #[test]
    fn test_obstacles_share_column_and_keep_gap() {
        for gap_height in GAP_HEIGHT_MIN..GAP_HEIGHT_MAX {
            let pipe = Pipe::new(123, gap_height);
            let top = pipe.top_rect();
            let bottom = pipe.bottom_rect();

            assert_eq!(top.x, bottom.x);
            assert_eq!(top.w, bottom.w);
            assert_eq!(bottom.y - top.bottom(), PIPE_GAP as f32);
            assert!(!top.intersects(&bottom));
        }
    }

    #[test]
    fn test_bottom_obstacle_reaches_surface_bottom() {
        let pipe = Pipe::new(0, 100);
        let bottom = pipe.bottom_rect();
        assert_eq!(bottom.y, 300.0);
        assert_eq!(bottom.bottom(), SCREEN_HEIGHT as f32);
    }

    #[test]
    fn test_advance_scrolls_left() {
        let mut pipe = Pipe::new(200, 80);
        pipe.advance();
        assert_eq!(pipe.x(), 197);
        assert_eq!(pipe.top_rect().x, 197.0);
        assert_eq!(pipe.bottom_rect().x, 197.0);
    }

    #[test]
    fn test_offscreen_only_when_right_edge_negative() {
        assert!(!Pipe::new(-50, 80).is_offscreen());
        assert!(Pipe::new(-51, 80).is_offscreen());
        assert!(!Pipe::new(0, 80).is_offscreen());
    }
}
