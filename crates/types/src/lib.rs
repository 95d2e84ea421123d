//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests, benches).
//!
//! # Logical Surface
//!
//! The game is simulated on a fixed logical surface, independent of the
//! terminal size it is eventually projected onto:
//!
//! - **Width**: 700 units
//! - **Height**: 800 units
//! - **Ground**: 100 units tall, anchored to the bottom edge
//!
//! # Physics Constants
//!
//! All values are per frame; nothing is scaled by wall-clock time.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.6 | Added to the bird's velocity every frame |
//! | `JUMP_VELOCITY` | -9.0 | Velocity assigned (not added) on jump |
//! | `SCROLL_SPEED` | 3 | Pixels a pipe moves left per frame |
//! | `PIPE_GAP` | 200 | Vertical gap between top and bottom pipe |
//! | `PIPE_DISTANCE` | 200 | Horizontal spacing between spawned pipes |
//! | `PIPE_WIDTH` | 50 | Pipe width |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Phase, Rect, SCREEN_HEIGHT, SCREEN_WIDTH};
//!
//! let bird = Rect::new(50.0, 750.0, 30.0, 30.0);
//! let ground = Rect::new(0.0, 700.0, 700.0, 100.0);
//! assert!(bird.intersects(&ground));
//!
//! assert_eq!(Phase::default(), Phase::WaitingForStart);
//! assert!(Phase::GameOver.accepts_start());
//! assert_eq!((SCREEN_WIDTH, SCREEN_HEIGHT), (700, 800));
//! ```

/// Logical surface width (700 units)
pub const SCREEN_WIDTH: i32 = 700;

/// Logical surface height (800 units)
pub const SCREEN_HEIGHT: i32 = 800;

/// Ground strip height, anchored to the bottom of the surface
pub const GROUND_HEIGHT: i32 = 100;

/// Fixed horizontal position of the bird's left edge
pub const BIRD_X: i32 = 50;

/// Bird bounding box edge length (the box is square)
pub const BIRD_SIZE: i32 = 30;

/// Per-frame gravity acceleration
pub const GRAVITY: f32 = 0.6;

/// Velocity set on jump (negative is up)
pub const JUMP_VELOCITY: f32 = -9.0;

/// Vertical gap between the top and bottom obstacle of a pipe
pub const PIPE_GAP: i32 = 200;

/// Horizontal distance between consecutively spawned pipes
pub const PIPE_DISTANCE: i32 = 200;

/// Pipe width
pub const PIPE_WIDTH: i32 = 50;

/// Pixels a pipe scrolls left each frame
pub const SCROLL_SPEED: i32 = 3;

/// Smallest gap height (inclusive)
pub const GAP_HEIGHT_MIN: i32 = 50;

/// Largest gap height (exclusive)
pub const GAP_HEIGHT_MAX: i32 = 400;

/// Target frame rate of the game loop
pub const TARGET_FPS: u32 = 60;

/// Title shown by the presentation surface
pub const WINDOW_TITLE: &str = "Flappy Bird Clone";

/// Message shown while the game is over
pub const GAME_OVER_TEXT: &str = "Game Over - Press SPACE to restart";


/// Axis-aligned rectangle in logical surface units.
///
/// Rectangles are half-open: `[x, x + w) × [y, y + h)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test; touching edges do not collide.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_flappy_types::Rect;
    ///
    /// let a = Rect::new(0.0, 0.0, 30.0, 30.0);
    /// assert!(a.intersects(&Rect::new(29.0, 29.0, 5.0, 5.0)));
    /// assert!(!a.intersects(&Rect::new(30.0, 0.0, 5.0, 5.0)));
    /// ```
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Top-level game mode.
///
/// The cycle is: WaitingForStart → Playing → GameOver → Playing → ...
/// Only `Playing` advances the world; the other two only render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    WaitingForStart,
    Playing,
    GameOver,
}

impl Phase {
    /// Whether a start input moves this phase into `Playing`.
    pub fn accepts_start(&self) -> bool {
        matches!(self, Phase::WaitingForStart | Phase::GameOver)
    }
}

/// Discrete actions produced by input.
///
/// The jump itself is level-triggered and travels as held state, not as an
/// action; `Start` is the edge-triggered press of the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start (or restart) a round
    Start,
    /// Terminate the program
    Quit,
}

/// Closed set of entity kinds that make up the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Bird,
    Pipe,
    Ground,
}
