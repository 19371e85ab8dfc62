//! Horse Dash - A single-screen arcade game
//!
//! Core modules:
//! - `sim`: Simulation (motion, item placement, collisions, game state)
//! - `game`: Frame controller tying the simulation to its collaborators
//! - `renderer`: Drawing collaborator and its backends
//! - `platform`: Browser/native platform abstraction (time, input, viewport)
//! - `persistence`: Best-score key-value storage
//! - `settings`: Gameplay constants and variant knobs

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Command, FrameResult, Game};
pub use highscores::GameOverMessage;
pub use settings::{InitialDirection, Settings, SwipeMode, Variant, WallCheck};

/// Game configuration constants
pub mod consts {
    /// Horse travel speed (pixels/second)
    pub const ACTOR_SPEED: f32 = 260.0;
    /// Horse body: length along the travel axis, width across it
    pub const ACTOR_LENGTH: i32 = 40;
    pub const ACTOR_WIDTH: i32 = 20;

    /// Food and poison squares
    pub const ITEM_SIZE: i32 = 20;

    /// Minimum swipe distance (pixels)
    pub const SWIPE_THRESHOLD: f32 = 80.0;
    /// Space left around the arena inside the window
    pub const VIEWPORT_MARGIN: i32 = 60;

    /// Rejection-sampling budget per placed item
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;
    /// Suggested step cap for `Settings::max_step_secs` (off by default)
    pub const MAX_STEP_SECS: f32 = 0.1;

    /// Game over banner text size
    pub const BANNER_TEXT_SIZE: u32 = 28;
}

/// Pixels covered at `speed` px/s over `secs`, rounded to the nearest pixel
#[inline]
pub fn travel_px(speed: f32, secs: f32) -> i32 {
    (speed * secs).round() as i32
}
