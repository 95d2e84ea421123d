//! Terminal "game renderer" module.
//!
//! This is the presentation collaborator of the game: a small, game-oriented
//! rendering layer for terminal gameplay. It avoids widget/layout libraries
//! and instead renders into a simple framebuffer that is flushed to the
//! terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Provide a rendering pipeline that feels closer to a game renderer
//! - Letterbox the fixed logical surface into any terminal size

pub mod fb;
pub mod frame_clock;
pub mod game_view;
pub mod renderer;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use frame_clock::FrameClock;
pub use game_view::{AnchorY, GameView, Palette, Projection, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
