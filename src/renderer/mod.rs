//! Rendering collaborator
//!
//! The simulation only ever asks for three things: fill a rectangle, clear a
//! rectangle, and write a line of text. Backends decide how.

pub mod commands;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use commands::{CommandRecorder, DrawCommand};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// Palette used by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Brown,
    Green,
    Red,
    Black,
    White,
}

impl Color {
    /// CSS color name
    pub fn css(&self) -> &'static str {
        match self {
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Red => "red",
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

/// Drawing surface
pub trait Renderer {
    /// Fill `rect` with `color`
    fn draw_rect(&mut self, rect: Rect, color: Color);
    /// Clear `rect` back to the background
    fn erase_rect(&mut self, rect: Rect);
    /// Draw `text` horizontally centered on `at`
    fn draw_text(&mut self, text: &str, size: u32, color: Color, at: IVec2);
}

/// Anything with a box and a color that can paint itself
pub trait Drawable {
    fn bounds(&self) -> Rect;
    fn color(&self) -> Color;

    fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw_rect(self.bounds(), self.color());
    }

    fn erase<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.erase_rect(self.bounds());
    }
}
