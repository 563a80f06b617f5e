//! Read-only draw pass over the game state
//!
//! Knows what goes where on screen, but not how to put pixels there; that is
//! the `Canvas` implementation's job.

use crate::sim::{GamePhase, GameState, PlayerState};

/// Score line colors (ARGB)
pub const SCORE_COLOR: u32 = 0xffff_ff00;
pub const FLOOR_COLOR: u32 = 0xffff_00ff;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Burger,
    PlayerHungry,
    PlayerEating,
    PlayerFull,
}

impl Sprite {
    pub const ALL: [Sprite; 4] = [
        Sprite::Burger,
        Sprite::PlayerHungry,
        Sprite::PlayerEating,
        Sprite::PlayerFull,
    ];

    /// Asset path, relative to the working directory
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::Burger => "media/burger.png",
            Sprite::PlayerHungry => "media/monsters/blue01.png",
            Sprite::PlayerEating => "media/monsters/blue02.png",
            Sprite::PlayerFull => "media/monsters/blue03.png",
        }
    }

    pub fn for_player(state: PlayerState) -> Self {
        match state {
            PlayerState::Hungry => Sprite::PlayerHungry,
            PlayerState::Eating => Sprite::PlayerEating,
            PlayerState::Full => Sprite::PlayerFull,
        }
    }
}

/// Minimal drawing surface
pub trait Canvas {
    /// Blit a sprite with its top-left corner at (x, y)
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, z: i32);

    /// Draw a line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, z: i32, scale: f32, color: u32);
}

/// Draw one frame
pub fn draw_scene<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    match state.phase() {
        GamePhase::GameOver => {
            draw_scores(state, canvas);
            canvas.draw_text("Game Over :(", 10.0, 50.0, 0, 1.0, FLOOR_COLOR);
        }
        GamePhase::Playing => {
            let player = &state.player;
            canvas.draw_sprite(Sprite::for_player(player.state()), player.x(), player.y(), 0);
            for burger in &state.hamburgers {
                canvas.draw_sprite(Sprite::Burger, burger.pos.x, burger.pos.y, 0);
            }
            draw_scores(state, canvas);
        }
    }
}

fn draw_scores<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.draw_text(&format!(":D {}", state.eaten_count), 10.0, 10.0, 0, 1.0, SCORE_COLOR);
    canvas.draw_text(&format!(":( {}", state.floor_count()), 10.0, 30.0, 0, 1.0, FLOOR_COLOR);
}
