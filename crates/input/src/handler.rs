//! Held-state tracking for the jump key.
//!
//! The game polls "is the jump key down right now" every frame, and restarts
//! a round only on a fresh press. How that is recovered depends on the
//! terminal:
//!
//! - With keyboard enhancement (repeat and release events), a press or
//!   repeat marks the key held and a release clears it.
//! - Without it, an OS autorepeat arrives as yet another press and no release
//!   ever arrives. The key counts as held until `key_release_timeout_ms`
//!   passes without a press, and a press while the key still counts as held is
//!   treated as a repeat.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, is_jump_key};
use crate::types::GameAction;

// A single tap must not read as a long hold. The first OS repeat typically
// comes 250-600 ms after the press, so a hold longer than this flickers off
// until repeats start; only terminals without release events are affected.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct InputHandler {
    held: bool,
    last_key_time: Instant,
    key_release_timeout_ms: u32,
    /// The terminal reports `Repeat` and `Release` events.
    release_events: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: false,
            last_key_time: Instant::now(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Trust release events instead of the timeout.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Feed one key event and return the action for a fresh press.
    ///
    /// Repeats (reported ones, or presses of a jump key that is still held)
    /// only keep the jump held; they never start a round.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<GameAction> {
        self.handle_key_at(key, Instant::now())
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Option<GameAction> {
        match key.kind {
            KeyEventKind::Release => {
                self.handle_key_release(key.code);
                None
            }
            KeyEventKind::Repeat => {
                self.handle_key_press_at(key.code, now);
                None
            }
            KeyEventKind::Press => {
                let repeat = is_jump_key(key.code) && self.jump_held_at(now);
                self.handle_key_press_at(key.code, now);
                if repeat {
                    None
                } else {
                    handle_key_event(key)
                }
            }
        }
    }

    pub fn handle_key_press(&mut self, code: KeyCode) {
        self.handle_key_press_at(code, Instant::now());
    }

    pub fn handle_key_press_at(&mut self, code: KeyCode, now: Instant) {
        if is_jump_key(code) {
            self.held = true;
            self.last_key_time = now;
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if is_jump_key(code) {
            self.held = false;
        }
    }

    /// Instantaneous pressed-state of the jump key.
    pub fn jump_held(&mut self) -> bool {
        self.jump_held_at(Instant::now())
    }

    pub fn jump_held_at(&mut self, now: Instant) -> bool {
        if self.held && !self.release_events {
            let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
            if now.saturating_duration_since(self.last_key_time) > timeout {
                self.held = false;
            }
        }
        self.held
    }

    pub fn reset(&mut self) {
        self.held = false;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
