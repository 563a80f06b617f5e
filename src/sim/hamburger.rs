//! Falling hamburger entity

use glam::Vec2;

use crate::config::HamburgerConfig;

/// Stable entity id, allocated by `GameState`
pub type HamburgerId = u32;

/// Lifecycle of a burger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HamburgerState {
    /// Falling, nobody has touched it yet
    #[default]
    Delicious,
    /// The player is chewing on it (countdown running)
    Eating,
    /// Fully eaten; reaped at the start of the next tick
    Eaten,
    /// Landed on the floor, counts toward game over
    OnFloor,
}

/// A burger falling from the top of the screen
#[derive(Debug, Clone)]
pub struct Hamburger {
    pub id: HamburgerId,
    pub pos: Vec2,
    /// Vertical speed (pixels per tick)
    pub vel: f32,
    pub state: HamburgerState,
    /// Ticks left before an `Eating` burger turns `Eaten`
    pub eating_timer: u32,
    config: HamburgerConfig,
}

impl Hamburger {
    pub fn new(id: HamburgerId, x: f32, config: HamburgerConfig) -> Self {
        Self {
            id,
            pos: Vec2::new(x, config.spawn_y),
            vel: 0.0,
            state: HamburgerState::Delicious,
            eating_timer: config.eating_time,
            config,
        }
    }

    /// Advance one tick: fall (or rest on the floor), then chew.
    ///
    /// Both halves run every tick, so a burger that is being eaten mid-air
    /// keeps falling while its countdown runs.
    pub fn update(&mut self) {
        if self.pos.y >= self.config.floor {
            self.pos.y = self.config.floor;
            self.state = HamburgerState::OnFloor;
        } else {
            self.vel += self.config.gravity;
            self.pos.y += self.vel;
        }

        if self.state == HamburgerState::Eating {
            if self.eating_timer > 1 {
                self.eating_timer -= 1;
            } else {
                self.state = HamburgerState::Eaten;
            }
        }
    }

    /// Start (or keep) eating this burger. Floor burgers are off limits.
    pub fn start_eating(&mut self) {
        if self.state != HamburgerState::OnFloor {
            self.state = HamburgerState::Eating;
        }
    }

    pub fn is_eating(&self) -> bool {
        self.state == HamburgerState::Eating
    }

    pub fn is_eaten(&self) -> bool {
        self.state == HamburgerState::Eaten
    }

    pub fn is_on_floor(&self) -> bool {
        self.state == HamburgerState::OnFloor
    }
}
