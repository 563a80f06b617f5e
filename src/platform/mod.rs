//! Platform abstraction layer
//!
//! Turns held keys into `TickInput` and spots the quit key. Everything
//! macroquad-specific about input stays in here.

use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

use crate::sim::TickInput;

/// Keys that move the player left
pub const LEFT_KEYS: [KeyCode; 2] = [KeyCode::Left, KeyCode::A];
/// Keys that move the player right
pub const RIGHT_KEYS: [KeyCode; 2] = [KeyCode::Right, KeyCode::D];
pub const QUIT_KEY: KeyCode = KeyCode::Escape;

/// Build a tick input from a "is this key held" query
pub fn input_from<F: Fn(KeyCode) -> bool>(held: F) -> TickInput {
    TickInput {
        left: LEFT_KEYS.iter().any(|&k| held(k)),
        right: RIGHT_KEYS.iter().any(|&k| held(k)),
    }
}

/// Sample the keyboard for this tick
pub fn poll_input() -> TickInput {
    input_from(is_key_down)
}

pub fn quit_requested() -> bool {
    is_key_pressed(QUIT_KEY)
}
