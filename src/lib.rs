//! Hamburger Time - catch the falling burgers before they pile up
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling burgers, eating, spawning)
//! - `config`: Data-driven game balance, loaded from JSON
//! - `renderer`: Read-only draw pass over the game state
//! - `platform`: Keyboard polling and quit detection

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, HamburgerConfig, PlayerConfig};

/// Game configuration defaults
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per classic frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window dimensions
    pub const WIDTH: f32 = 640.0;
    pub const HEIGHT: f32 = 480.0;
    pub const CAPTION: &str = "Hamburger time!";

    /// Distance between the window edge and the player's travel limits
    pub const WALL: f32 = 10.0;
    /// Sprite edge length (player and burger art are 100px squares)
    pub const SPRITE_SIZE: f32 = 100.0;
    /// Floor line sits this far above the bottom edge
    pub const FLOOR_MARGIN: f32 = 50.0;

    /// Game over once this many burgers lie on the floor
    pub const MAX_FLOOR_BURGERS: usize = 10;
    /// Max distance between player and burger for a bite
    pub const EAT_DISTANCE: f32 = 50.0;
    /// Fastest spawn rate: one roll in 30 succeeds (two per second)
    pub const MAX_BURGER_RATE: u32 = 30;
    /// Starting spawn rate: one roll in 120 succeeds (one every ~2s)
    pub const INITIAL_BURGER_RATE: u32 = 120;

    /// Burger defaults
    pub const GRAVITY: f32 = 0.01;
    pub const EATING_TIME: u32 = 10;
    pub const SPAWN_Y: f32 = 50.0;
    /// Burgers spawn at least this far from either side of the window
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const DIGESTION_TIME: u32 = 60;
}
