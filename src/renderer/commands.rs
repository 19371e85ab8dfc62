//! Command-recording renderer
//!
//! Keeps every draw call in order instead of painting. Used by the headless
//! native build and by tests that need to see what a frame drew.

use glam::IVec2;

use super::{Color, Renderer};
use crate::sim::Rect;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect { rect: Rect, color: Color },
    Erase { rect: Rect },
    Text { text: String, size: u32, color: Color, at: IVec2 },
}

#[derive(Debug, Clone, Default)]
pub struct CommandRecorder {
    pub commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Number of filled rectangles of the given color
    pub fn rects_of(&self, color: Color) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { color: drawn, .. } if *drawn == color))
            .count()
    }

    /// All text drawn so far, oldest first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for CommandRecorder {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn erase_rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Erase { rect });
    }

    fn draw_text(&mut self, text: &str, size: u32, color: Color, at: IVec2) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            size,
            color,
            at,
        });
    }
}
