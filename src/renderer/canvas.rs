//! Canvas 2D backend (WASM only)

use glam::IVec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{Color, Renderer};
use crate::sim::Rect;

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Renderer for CanvasRenderer {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(color.css());
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn erase_rect(&mut self, rect: Rect) {
        self.ctx.clear_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }

    fn draw_text(&mut self, text: &str, size: u32, color: Color, at: IVec2) {
        self.ctx.set_font(&format!("{}px sans-serif", size));
        self.ctx.set_fill_style_str(color.css());
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(text, at.x as f64, at.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
