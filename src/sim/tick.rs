//! Per-frame simulation step
//!
//! One call per display refresh while the game runs:
//! place poisons → place food → erase/move/redraw the horse → collisions.

use super::collision::{self, Collision};
use super::placement::{generate_food, generate_poisons};
use super::state::{GameOverReason, GameSession};
use crate::renderer::{Drawable, Renderer};

/// Result of one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing happened, keep going
    Continue,
    /// Food eaten; carries the new score
    Ate { score: u32 },
    /// The game ended (this step or earlier)
    GameOver(GameOverReason),
}

/// Seconds between two frame timestamps (ms), never negative, optionally capped
pub fn elapsed_secs(previous_ms: f64, now_ms: f64, cap: Option<f32>) -> f32 {
    let secs = (((now_ms - previous_ms) / 1000.0) as f32).max(0.0);
    match cap {
        Some(cap) => secs.min(cap),
        None => secs,
    }
}

/// Advance the game by one frame stamped `now_ms`
pub fn step<R: Renderer + ?Sized>(
    session: &mut GameSession,
    now_ms: f64,
    renderer: &mut R,
) -> StepOutcome {
    if let Some(reason) = session.game_over_reason() {
        return StepOutcome::GameOver(reason);
    }

    let dt = elapsed_secs(session.last_frame_ms, now_ms, session.settings.max_step_secs);
    session.last_frame_ms = now_ms;
    session.steps += 1;

    if let Err(e) = generate_poisons(session, renderer) {
        log::warn!("{}", e);
        return end(session, GameOverReason::Crowded);
    }
    if let Err(e) = generate_food(session, renderer) {
        log::warn!("{}", e);
        return end(session, GameOverReason::Crowded);
    }

    session.actor.erase(renderer);
    session.actor.advance(dt);
    session.actor.draw(renderer);

    match collision::detect(session) {
        Some(Collision::Wall) => end(session, GameOverReason::Wall),
        Some(Collision::Poison(_)) => end(session, GameOverReason::Poison),
        Some(Collision::Food) => eat_food(session, renderer),
        None => StepOutcome::Continue,
    }
}

fn end(session: &mut GameSession, reason: GameOverReason) -> StepOutcome {
    session.end(reason);
    log::info!(
        "Game over ({:?}) with score {} after {} steps",
        reason,
        session.score(),
        session.steps
    );
    StepOutcome::GameOver(reason)
}

/// Score the food and open a new generation epoch
fn eat_food<R: Renderer + ?Sized>(session: &mut GameSession, renderer: &mut R) -> StepOutcome {
    session.actor.score += 1;

    if let Some(food) = session.food.take() {
        food.erase(renderer);
    }
    for poison in session.poisons.drain(..) {
        poison.erase(renderer);
    }
    session.generated.food = false;
    session.generated.poison = false;

    // Erasing the food took a bite out of the horse
    session.actor.draw(renderer);

    let score = session.score();
    log::info!("Food eaten, score {}", score);
    StepOutcome::Ate { score }
}
