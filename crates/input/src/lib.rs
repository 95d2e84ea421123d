//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the
//! held state of the jump key, including on terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use tui_flappy_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_jump_key, should_quit};
