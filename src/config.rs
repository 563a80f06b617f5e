//! Game balance configuration
//!
//! Every constant the simulation uses lives here. Entities receive their
//! slice of it (`HamburgerConfig`, `PlayerConfig`) at construction time.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "hamburger_time.json";
/// Environment variable overriding `DEFAULT_CONFIG_PATH`
pub const CONFIG_PATH_ENV: &str = "HAMBURGER_TIME_CONFIG";

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub width: f32,
    pub height: f32,
    pub wall: f32,
    pub sprite_size: f32,
    pub floor_margin: f32,

    // === Rules ===
    pub max_floor_burgers: usize,
    pub eat_distance: f32,
    pub initial_burger_rate: u32,
    pub max_burger_rate: u32,
    /// Stop simulating once the game is over (the classic game keeps going
    /// behind the overlay)
    pub halt_on_game_over: bool,

    // === Burgers ===
    pub gravity: f32,
    pub eating_time: u32,
    pub spawn_y: f32,
    pub spawn_margin: f32,

    // === Player ===
    pub player_speed: f32,
    pub digestion_time: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            wall: WALL,
            sprite_size: SPRITE_SIZE,
            floor_margin: FLOOR_MARGIN,

            max_floor_burgers: MAX_FLOOR_BURGERS,
            eat_distance: EAT_DISTANCE,
            initial_burger_rate: INITIAL_BURGER_RATE,
            max_burger_rate: MAX_BURGER_RATE,
            halt_on_game_over: false,

            gravity: GRAVITY,
            eating_time: EATING_TIME,
            spawn_y: SPAWN_Y,
            spawn_margin: SPAWN_MARGIN,

            player_speed: PLAYER_SPEED,
            digestion_time: DIGESTION_TIME,
        }
    }
}

/// Per-burger constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HamburgerConfig {
    pub gravity: f32,
    pub eating_time: u32,
    pub spawn_y: f32,
    pub floor: f32,
}

impl Default for HamburgerConfig {
    fn default() -> Self {
        GameConfig::default().hamburger()
    }
}

/// Per-player constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    pub speed: f32,
    pub digestion_time: u32,
    pub eat_distance: f32,
    pub left_wall: f32,
    pub right_wall: f32,
    pub start_x: f32,
    pub y: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        GameConfig::default().player()
    }
}

impl GameConfig {
    /// Y coordinate burgers come to rest at
    pub fn floor(&self) -> f32 {
        self.height - self.floor_margin
    }

    pub fn left_wall(&self) -> f32 {
        self.wall
    }

    /// Rightmost player x (the sprite's left edge, so the art stays on screen)
    pub fn right_wall(&self) -> f32 {
        self.width - (self.wall + self.sprite_size)
    }

    /// Number of distinct spawn columns; a burger lands at `spawn_margin + roll(span)`
    pub fn spawn_span(&self) -> u32 {
        (self.width - 2.0 * self.spawn_margin).max(1.0) as u32
    }

    pub fn hamburger(&self) -> HamburgerConfig {
        HamburgerConfig {
            gravity: self.gravity,
            eating_time: self.eating_time,
            spawn_y: self.spawn_y,
            floor: self.floor(),
        }
    }

    pub fn player(&self) -> PlayerConfig {
        PlayerConfig {
            speed: self.player_speed,
            digestion_time: self.digestion_time,
            eat_distance: self.eat_distance,
            left_wall: self.left_wall(),
            right_wall: self.right_wall(),
            start_x: self.width / 2.0,
            // Hover one bite above a sprite standing on the floor
            y: self.floor() - self.sprite_size - self.eat_distance,
        }
    }

    /// Reject configs the simulation can't run with
    pub fn validate(&self) -> Result<()> {
        ensure!(self.max_burger_rate >= 1, "max_burger_rate must be at least 1");
        ensure!(
            self.initial_burger_rate >= self.max_burger_rate,
            "initial_burger_rate ({}) must not be below max_burger_rate ({})",
            self.initial_burger_rate,
            self.max_burger_rate
        );
        ensure!(
            self.width > 2.0 * self.spawn_margin,
            "width ({}) leaves no room to spawn burgers with spawn_margin {}",
            self.width,
            self.spawn_margin
        );
        ensure!(
            self.left_wall() < self.right_wall(),
            "walls overlap: left {} >= right {}",
            self.left_wall(),
            self.right_wall()
        );
        ensure!(
            self.spawn_y < self.floor(),
            "spawn_y ({}) must be above the floor ({})",
            self.spawn_y,
            self.floor()
        );
        ensure!(self.gravity > 0.0, "gravity must be positive");
        ensure!(self.eating_time >= 1, "eating_time must be at least 1");
        ensure!(self.player_speed > 0.0, "player_speed must be positive");
        ensure!(self.sprite_size >= 0.0, "sprite_size must not be negative");
        self.validate_player_track()?;
        ensure!(self.eat_distance >= 0.0, "eat_distance must not be negative");
        Ok(())
    }

    /// The player starts between the walls and reaches each wall in whole
    /// steps. Moves step before they clamp, so any remainder overshoots.
    fn validate_player_track(&self) -> Result<()> {
        let player = self.player();
        for (name, value) in [
            ("player_speed", player.speed),
            ("player start x", player.start_x),
            ("left wall", player.left_wall),
            ("right wall", player.right_wall),
        ] {
            ensure!(value.fract() == 0.0, "{} ({}) must be a whole pixel", name, value);
        }
        ensure!(
            player.left_wall <= player.start_x && player.start_x <= player.right_wall,
            "player start x ({}) must lie between the walls ({}..={})",
            player.start_x,
            player.left_wall,
            player.right_wall
        );
        ensure!(
            (player.start_x - player.left_wall) % player.speed == 0.0
                && (player.right_wall - player.start_x) % player.speed == 0.0,
            "player_speed ({}) must evenly divide the distance from start x ({}) to each wall ({}, {})",
            player.speed,
            player.start_x,
            player.left_wall,
            player.right_wall
        );
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("malformed config JSON")?;
        config.validate().context("invalid config")?;
        Ok(config)
    }

    /// Read a config file from disk
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Config path, honoring the env override
    pub fn path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load the config file, falling back to defaults
    pub fn load() -> Self {
        let path = Self::path();
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }
}
