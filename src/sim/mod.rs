//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Randomness only through the `Dice` passed to `tick`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod hamburger;
pub mod player;
pub mod state;
pub mod tick;

pub use hamburger::{Hamburger, HamburgerId, HamburgerState};
pub use player::{Player, PlayerState};
pub use state::{GamePhase, GameState};
pub use tick::{Dice, TickInput, burger_rate, tick};
