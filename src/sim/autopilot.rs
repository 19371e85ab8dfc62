//! Demo-mode steering
//!
//! Picks a heading for the horse: never a reversal, never one that runs into
//! a wall or poison within the lookahead, and among the rest the one that
//! ends up closest to the food.

use super::collision::{first_poison_hit, hits_wall};
use super::state::{Direction, GameSession};

/// Fractions of the lookahead window probed for hazards
const PROBES: [f32; 4] = [0.25, 0.5, 0.75, 1.0];

/// Choose the next heading, looking `lookahead_secs` ahead
pub fn choose_direction(session: &GameSession, lookahead_secs: f32) -> Direction {
    let actor = &session.actor;
    let target = session
        .food
        .map(|f| f.rect.center())
        .unwrap_or_else(|| session.arena.center());

    let mut best: Option<(i32, Direction)> = None;
    for direction in Direction::ALL {
        if direction.is_opposite(actor.direction) {
            continue;
        }

        let safe = PROBES.iter().all(|&t| {
            let mut ghost = actor.clone();
            ghost.direction = direction;
            ghost.advance(lookahead_secs * t);
            !hits_wall(&ghost, &session.arena, session.settings.wall_check)
                && first_poison_hit(&ghost.rect, &session.poisons).is_none()
        });
        if !safe {
            continue;
        }

        let landing = actor.projected(direction, lookahead_secs);
        let distance = (target - landing.center()).abs().element_sum();
        // Ties keep the current heading
        let better = match best {
            None => true,
            Some((d, _)) => distance < d || (distance == d && direction == actor.direction),
        };
        if better {
            best = Some((distance, direction));
        }
    }

    // Boxed in: hold course
    best.map(|(_, d)| d).unwrap_or(actor.direction)
}
