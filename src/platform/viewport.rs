//! Viewport measurement

/// Side of the square arena for a window of `inner_width` × `inner_height`
/// CSS pixels, leaving `margin` free. Never negative.
pub fn arena_side(inner_width: f64, inner_height: f64, margin: i32) -> i32 {
    let short = inner_width.min(inner_height).floor() as i32;
    (short - margin).max(0)
}

/// Measure the browser window
#[cfg(target_arch = "wasm32")]
pub fn measure(margin: i32) -> Option<i32> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some(arena_side(w, h, margin))
}
