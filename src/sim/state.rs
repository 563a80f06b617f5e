//! Game state owned by the controller
//!
//! Holds every live entity plus the running score. The per-frame rules live
//! in `tick`; this module only knows how to build and query the state.

use super::hamburger::{Hamburger, HamburgerId};
use super::player::Player;
use crate::config::GameConfig;

/// Session phase, derived from the burgers on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Too many burgers hit the floor
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Live burgers, in spawn order
    pub hamburgers: Vec<Hamburger>,
    pub player: Player,
    /// Burgers eaten this session (never decreases)
    pub eaten_count: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub config: GameConfig,
    /// Next entity ID
    next_id: HamburgerId,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            hamburgers: Vec::new(),
            player: Player::new(config.player()),
            eaten_count: 0,
            time_ticks: 0,
            config,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> HamburgerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Drop a fresh burger at `x`, returning its id
    pub fn spawn_hamburger(&mut self, x: f32) -> HamburgerId {
        let id = self.next_entity_id();
        self.hamburgers.push(Hamburger::new(id, x, self.config.hamburger()));
        id
    }

    /// Burgers currently lying on the floor
    pub fn floor_count(&self) -> usize {
        self.hamburgers.iter().filter(|b| b.is_on_floor()).count()
    }

    pub fn phase(&self) -> GamePhase {
        if self.floor_count() >= self.config.max_floor_burgers {
            GamePhase::GameOver
        } else {
            GamePhase::Playing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase() == GamePhase::GameOver
    }

    /// Current spawn rate (one successful roll in `burger_rate`)
    pub fn burger_rate(&self) -> u32 {
        super::tick::burger_rate(&self.config, self.eaten_count)
    }

    pub fn hamburger(&self, id: HamburgerId) -> Option<&Hamburger> {
        self.hamburgers.iter().find(|b| b.id == id)
    }

    /// Remove eaten burgers, returning how many were reaped
    pub fn reap_eaten(&mut self) -> usize {
        let before = self.hamburgers.len();
        self.hamburgers.retain(|b| !b.is_eaten());
        let reaped = before - self.hamburgers.len();
        self.eaten_count += reaped as u64;
        reaped
    }
}
