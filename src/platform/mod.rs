//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (frame stamps in milliseconds)
//! - Input events (keys and swipes reduced to directions)
//! - Viewport measurement

pub mod input;
pub mod time;
pub mod viewport;

pub use input::{SwipeTracker, key_to_direction, reduce_swipe};
pub use time::{Clock, ManualClock};
#[cfg(not(target_arch = "wasm32"))]
pub use time::SystemClock;
#[cfg(target_arch = "wasm32")]
pub use time::PerformanceClock;
pub use viewport::arena_side;
