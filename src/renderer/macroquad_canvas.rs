//! `Canvas` backed by macroquad's immediate-mode drawing

use std::collections::HashMap;

use anyhow::{Result, anyhow};
use macroquad::prelude::{
    BLACK, Color, FilterMode, TextParams, Texture2D, WHITE, clear_background, draw_text_ex,
    draw_texture, load_texture, measure_text,
};

use super::scene::{Canvas, Sprite};

/// Default font height in pixels
pub const FONT_SIZE: u16 = 20;

/// Unpack an ARGB word into a macroquad color
pub fn argb_to_color(argb: u32) -> Color {
    let [a, r, g, b] = argb.to_be_bytes();
    Color::from_rgba(r, g, b, a)
}

/// Loaded sprite textures, drawn straight to the screen
pub struct MacroquadCanvas {
    textures: HashMap<Sprite, Texture2D>,
}

impl MacroquadCanvas {
    /// Load every sprite; any missing file is fatal
    pub async fn load() -> Result<Self> {
        let mut textures = HashMap::with_capacity(Sprite::ALL.len());
        for sprite in Sprite::ALL {
            let path = sprite.path();
            let texture = load_texture(path)
                .await
                .map_err(|e| anyhow!("failed to load sprite {}: {:?}", path, e))?;
            texture.set_filter(FilterMode::Nearest);
            log::info!("Loaded {} ({}x{})", path, texture.width(), texture.height());
            textures.insert(sprite, texture);
        }
        Ok(Self { textures })
    }

    pub fn begin_frame(&mut self) {
        clear_background(BLACK);
    }
}

impl Canvas for MacroquadCanvas {
    // Draw order stands in for z: every layer the game uses is 0
    fn draw_sprite(&mut self, sprite: Sprite, x: f32, y: f32, _z: i32) {
        if let Some(texture) = self.textures.get(&sprite) {
            draw_texture(texture, x, y, WHITE);
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, _z: i32, scale: f32, color: u32) {
        // macroquad anchors text at the baseline; callers pass the top edge
        let dims = measure_text(text, None, FONT_SIZE, scale);
        draw_text_ex(
            text,
            x,
            y + dims.offset_y,
            TextParams {
                font_size: FONT_SIZE,
                font_scale: scale,
                color: argb_to_color(color),
                ..Default::default()
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_unpacking() {
        let yellow = argb_to_color(0xffff_ff00);
        assert_eq!((yellow.r, yellow.g, yellow.b, yellow.a), (1.0, 1.0, 0.0, 1.0));

        let magenta = argb_to_color(0xffff_00ff);
        assert_eq!((magenta.r, magenta.g, magenta.b, magenta.a), (1.0, 0.0, 1.0, 1.0));
    }
}
