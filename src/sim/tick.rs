//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use rand::Rng;

use super::state::GameState;
use crate::config::GameConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move left held
    pub left: bool,
    /// Move right held
    pub right: bool,
}

/// Source of uniform rolls for spawning.
///
/// Any `rand::Rng` works; tests plug in scripted rolls.
pub trait Dice {
    /// Uniform integer in `[0, sides)`; `sides` is always at least 1
    fn roll(&mut self, sides: u32) -> u32;
}

impl<R: Rng> Dice for R {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(0..sides.max(1))
    }
}

/// Spawn rate for a given score: one roll in `rate` drops a burger.
///
/// Starts at `initial_burger_rate` and speeds up by one per burger eaten,
/// never dropping below `max_burger_rate`.
pub fn burger_rate(config: &GameConfig, eaten_count: u64) -> u32 {
    let initial = u64::from(config.initial_burger_rate);
    let rate = initial.saturating_sub(eaten_count) as u32;
    rate.max(config.max_burger_rate)
}

/// Advance the game state by one fixed timestep
pub fn tick<D: Dice + ?Sized>(state: &mut GameState, input: &TickInput, dice: &mut D) {
    if state.config.halt_on_game_over && state.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    // Score and clear burgers finished last tick
    let reaped = state.reap_eaten();
    if reaped > 0 {
        log::debug!("Ate {} burger(s), total {}", reaped, state.eaten_count);
    }

    state.player.update();
    for burger in &mut state.hamburgers {
        burger.update();
    }
    state.player.eat_burgers(&mut state.hamburgers);

    // Both may be held at once; each applies independently
    if input.left {
        state.player.move_left();
    }
    if input.right {
        state.player.move_right();
    }

    let rate = state.burger_rate();
    if dice.roll(rate) == 1 {
        let x = dice.roll(state.config.spawn_span()) as f32 + state.config.spawn_margin;
        let id = state.spawn_hamburger(x);
        log::debug!("Spawned burger {} at x={} (rate 1/{})", id, x, rate);
    }
}
