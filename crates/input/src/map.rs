//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Whether `code` is the single "action" key (jump / start).
pub fn is_jump_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char(' ')
            | KeyCode::Up
            | KeyCode::Char('w')
            | KeyCode::Char('W')
            | KeyCode::Char('k')
            | KeyCode::Char('K')
    )
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if should_quit(key) {
        return Some(GameAction::Quit);
    }
    if is_jump_key(key.code) {
        return Some(GameAction::Start);
    }
    None
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
