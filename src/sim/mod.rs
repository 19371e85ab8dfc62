//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (one `Pcg32` per session)
//! - Time enters as frame timestamps; nothing here reads a clock
//! - Drawing goes through the `Renderer` trait, never a concrete backend

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod placement;
pub mod state;
pub mod tick;

pub use autopilot::choose_direction;
pub use collision::{Collision, detect, first_poison_hit, hits_wall, touches_food};
pub use geometry::Rect;
pub use placement::{PlacementError, generate_food, generate_poisons};
pub use state::{
    Actor, Arena, Direction, GameOverReason, GamePhase, GameSession, GenerationFlags, Item,
    ItemKind,
};
pub use tick::{StepOutcome, elapsed_secs, step};
