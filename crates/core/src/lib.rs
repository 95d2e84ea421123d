//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminal, or I/O, making it:
//!
//! - **Deterministic**: Same seed and inputs produce identical rounds
//! - **Testable**: Unit tests for physics, spawning, collision and scoring
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for frame updates and snapshots
//!
//! # Module Structure
//!
//! - [`bird`]: The player body (gravity, jump impulse)
//! - [`pipe`]: Scrolling obstacle pairs with a fixed gap
//! - [`ground`]: Static floor strip
//! - [`entity`]: Kind-tagged uniform view over the entities
//! - [`generator`]: Seeded pipe spawning
//! - [`world`]: Per-frame update, pipe lifecycle, collision and scoring
//! - [`game`]: Phase state machine (waiting, playing, game over)
//! - [`snapshot`]: Frame draw list handed to the presentation layer
//!
//! # Example
//!
//! ```
//! use tui_flappy_core::Game;
//! use tui_flappy_types::{GameAction, Phase};
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.phase(), Phase::WaitingForStart);
//!
//! game.apply_action(GameAction::Start);
//! game.tick(false);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.world().pipes()[0].x(), 197);
//! ```
//!
//! # Timing
//!
//! Physics is per frame, not per elapsed millisecond. Call
//! [`Game::tick`](game::Game::tick) once per frame at the target rate.

pub mod bird;
pub mod entity;
pub mod game;
pub mod generator;
pub mod ground;
pub mod pipe;
pub mod snapshot;
pub mod world;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use entity::Entity;
pub use game::Game;
pub use generator::PipeGenerator;
pub use ground::Ground;
pub use pipe::Pipe;
pub use snapshot::{DrawCmd, FrameSnapshot, MAX_DRAW_CMDS};
pub use world::{StepOutcome, World, MAX_PIPES};
