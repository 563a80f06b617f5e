//! Rendering module
//!
//! `scene` decides what to draw; `macroquad_canvas` puts it on screen.

pub mod macroquad_canvas;
pub mod scene;

pub use macroquad_canvas::MacroquadCanvas;
pub use scene::{Canvas, Sprite, draw_scene};
