//! Input reduction
//!
//! Keys and swipes both come out as a single [`Direction`] (or nothing).
//! Rejecting reversals is the horse's job, not ours.

use glam::Vec2;

use crate::settings::{Settings, SwipeMode};
use crate::sim::Direction;

/// Map a `KeyboardEvent.code` to a direction
pub fn key_to_direction(code: &str) -> Option<Direction> {
    match code {
        "ArrowUp" => Some(Direction::Up),
        "ArrowDown" => Some(Direction::Down),
        "ArrowLeft" => Some(Direction::Left),
        "ArrowRight" => Some(Direction::Right),
        _ => None,
    }
}

/// Reduce a finished swipe to at most one direction.
///
/// `DominantAxis`: the travel must exceed the threshold along the longer
/// axis; equal axes give nothing. `CrossAxis`: only travel across the
/// horse's current axis counts, so every accepted swipe is a 90° turn.
pub fn reduce_swipe(
    start: Vec2,
    end: Vec2,
    current: Direction,
    settings: &Settings,
) -> Option<Direction> {
    let delta = end - start;
    let threshold = settings.swipe_threshold;

    let horizontal = |dx: f32| {
        if dx > threshold {
            Some(Direction::Right)
        } else if dx < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    };
    let vertical = |dy: f32| {
        if dy > threshold {
            Some(Direction::Down)
        } else if dy < -threshold {
            Some(Direction::Up)
        } else {
            None
        }
    };

    match settings.swipe_mode {
        SwipeMode::DominantAxis => {
            if delta.x.abs() > delta.y.abs() {
                horizontal(delta.x)
            } else if delta.y.abs() > delta.x.abs() {
                vertical(delta.y)
            } else {
                None
            }
        }
        SwipeMode::CrossAxis => {
            if current.is_horizontal() {
                vertical(delta.y)
            } else {
                horizontal(delta.x)
            }
        }
    }
}

/// Pairs touchstart with touchend
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, at: Vec2) {
        self.start = Some(at);
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Finish the gesture. An end without a start yields nothing.
    pub fn end(&mut self, at: Vec2, current: Direction, settings: &Settings) -> Option<Direction> {
        let start = self.start.take()?;
        reduce_swipe(start, at, current, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Variant;

    fn swipe(dx: f32, dy: f32, current: Direction, settings: &Settings) -> Option<Direction> {
        let start = Vec2::new(200.0, 200.0);
        reduce_swipe(start, start + Vec2::new(dx, dy), current, settings)
    }

    #[test]
    fn test_keys() {
        assert_eq!(key_to_direction("ArrowUp"), Some(Direction::Up));
        assert_eq!(key_to_direction("ArrowLeft"), Some(Direction::Left));
        assert_eq!(key_to_direction("KeyW"), None);
        assert_eq!(key_to_direction("Space"), None);
    }

    #[test]
    fn test_dominant_axis() {
        let s = Settings::default();
        assert_eq!(swipe(120.0, 30.0, Direction::Up, &s), Some(Direction::Right));
        assert_eq!(swipe(-120.0, 30.0, Direction::Up, &s), Some(Direction::Left));
        assert_eq!(swipe(10.0, 100.0, Direction::Right, &s), Some(Direction::Down));
        assert_eq!(swipe(10.0, -100.0, Direction::Right, &s), Some(Direction::Up));
    }

    #[test]
    fn test_short_or_diagonal_swipes_are_ignored() {
        let s = Settings::default();
        // Threshold is strict
        assert_eq!(swipe(80.0, 0.0, Direction::Up, &s), None);
        assert_eq!(swipe(50.0, 10.0, Direction::Up, &s), None);
        assert_eq!(swipe(100.0, 100.0, Direction::Up, &s), None);
    }

    #[test]
    fn test_cross_axis_uses_current_heading() {
        let s = Settings::from_variant(Variant::Touch);
        // Mostly-horizontal swipe while heading right still turns vertically
        assert_eq!(swipe(150.0, 90.0, Direction::Right, &s), Some(Direction::Down));
        assert_eq!(swipe(150.0, 20.0, Direction::Right, &s), None);
        assert_eq!(swipe(-90.0, -300.0, Direction::Up, &s), Some(Direction::Left));
    }

    #[test]
    fn test_tracker_pairs_start_and_end() {
        let s = Settings::default();
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.end(Vec2::new(500.0, 0.0), Direction::Up, &s), None);

        tracker.begin(Vec2::new(0.0, 0.0));
        assert!(tracker.is_tracking());
        assert_eq!(
            tracker.end(Vec2::new(100.0, 0.0), Direction::Up, &s),
            Some(Direction::Right)
        );
        assert!(!tracker.is_tracking());
    }
}
