//! Procedural item placement
//!
//! Rejection sampling: draw uniform positions until one satisfies the
//! separation rule for its kind. Each item gets at most
//! `max_placement_attempts` draws; running out (or an arena too small to
//! sample from at all) is reported instead of spinning forever.

use glam::IVec2;
use rand::Rng;

use super::geometry::Rect;
use super::state::{Arena, GameSession, Item, ItemKind};
use crate::renderer::{Drawable, Renderer};
use crate::settings::Settings;

/// Item placement failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Sampling range is empty: the arena cannot hold the item at all
    NoRoom { kind: ItemKind, side: i32 },
    /// Every candidate within the budget was rejected
    Exhausted { kind: ItemKind, attempts: u32 },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::NoRoom { kind, side } => {
                write!(f, "No room for {} in a {}px arena", kind.as_str(), side)
            }
            PlacementError::Exhausted { kind, attempts } => {
                write!(f, "Gave up placing {} after {} attempts", kind.as_str(), attempts)
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Poison must clear the horse on BOTH axes.
///
/// Offsets are measured between top-left corners. On the far side the
/// poison must be more than `clearance` away; on the near side the poison's
/// own size is credited back, so `clearance - item_size` (60px with the
/// default knobs) is enough.
pub fn poison_clear_of_actor(candidate: IVec2, actor: IVec2, clearance: i32, item_size: i32) -> bool {
    let clear = |p: i32, a: i32| p > a + clearance || p < a - clearance + item_size;
    clear(candidate.x, actor.x) && clear(candidate.y, actor.y)
}

/// Food must not come within `margin` of any poison
pub fn food_clear_of_poisons(candidate: &Rect, poisons: &[Item], margin: i32) -> bool {
    !poisons
        .iter()
        .any(|p| p.rect.overlaps_with_margin(candidate, margin))
}

/// Draw positions in `[lo, hi)` on both axes until `accept` passes
fn sample_until<R, F>(
    rng: &mut R,
    lo: i32,
    hi: i32,
    max_attempts: u32,
    kind: ItemKind,
    side: i32,
    accept: F,
) -> Result<IVec2, PlacementError>
where
    R: Rng + ?Sized,
    F: Fn(IVec2) -> bool,
{
    if hi <= lo {
        return Err(PlacementError::NoRoom { kind, side });
    }

    for _ in 0..max_attempts {
        let candidate = IVec2::new(rng.random_range(lo..hi), rng.random_range(lo..hi));
        if accept(candidate) {
            return Ok(candidate);
        }
    }

    Err(PlacementError::Exhausted {
        kind,
        attempts: max_attempts,
    })
}

/// One poison anywhere in the arena, away from the horse
pub fn sample_poison<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena,
    settings: &Settings,
    actor_pos: IVec2,
) -> Result<Item, PlacementError> {
    let size = settings.item_size;
    let pos = sample_until(
        rng,
        0,
        arena.side - size,
        settings.max_placement_attempts,
        ItemKind::Poison,
        arena.side,
        |c| poison_clear_of_actor(c, actor_pos, settings.poison_clearance, size),
    )?;
    Ok(Item::new(ItemKind::Poison, pos, size))
}

/// One food away from the walls and every poison
pub fn sample_food<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena,
    settings: &Settings,
    poisons: &[Item],
) -> Result<Item, PlacementError> {
    let size = settings.item_size;
    let inset = settings.food_inset;
    let pos = sample_until(
        rng,
        inset,
        arena.side - inset,
        settings.max_placement_attempts,
        ItemKind::Food,
        arena.side,
        |c| food_clear_of_poisons(&Rect::square(c, size), poisons, settings.food_margin),
    )?;
    Ok(Item::new(ItemKind::Food, pos, size))
}

/// Place `score` poisons for this epoch, once.
///
/// Returns the number placed. Poisons are drawn as soon as they land.
pub fn generate_poisons<R: Renderer + ?Sized>(
    session: &mut GameSession,
    renderer: &mut R,
) -> Result<usize, PlacementError> {
    if session.generated.poison {
        return Ok(0);
    }

    let GameSession {
        settings,
        arena,
        actor,
        poisons,
        rng,
        ..
    } = session;

    let count = actor.score as usize;
    for _ in 0..count {
        let poison = sample_poison(rng, arena, settings, actor.pos())?;
        poison.draw(renderer);
        poisons.push(poison);
    }

    session.generated.poison = true;
    log::debug!("Placed {} poisons", count);
    Ok(count)
}

/// Place the food for this epoch, once
pub fn generate_food<R: Renderer + ?Sized>(
    session: &mut GameSession,
    renderer: &mut R,
) -> Result<(), PlacementError> {
    if session.generated.food {
        return Ok(());
    }

    let food = sample_food(
        &mut session.rng,
        &session.arena,
        &session.settings,
        &session.poisons,
    )?;
    food.draw(renderer);
    session.food = Some(food);
    session.generated.food = true;
    log::debug!("Placed food at {:?}", food.pos());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Color, CommandRecorder};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_poison_far_side_needs_80px() {
        let actor = IVec2::new(200, 200);
        // Far on both axes
        assert!(poison_clear_of_actor(IVec2::new(281, 100), actor, 80, 20));
        // Far on x only
        assert!(!poison_clear_of_actor(IVec2::new(281, 200), actor, 80, 20));
        // Exactly at the far boundary is not enough
        assert!(!poison_clear_of_actor(IVec2::new(280, 281), actor, 80, 20));
    }

    #[test]
    fn test_poison_near_side_needs_60px() {
        let actor = IVec2::new(200, 200);
        // 139 < 200 - 80 + 20
        assert!(poison_clear_of_actor(IVec2::new(139, 139), actor, 80, 20));
        assert!(!poison_clear_of_actor(IVec2::new(140, 139), actor, 80, 20));
        // 70px short of the horse on both axes is accepted
        assert!(poison_clear_of_actor(IVec2::new(130, 130), actor, 80, 20));
        assert!(!poison_clear_of_actor(IVec2::new(130, 270), actor, 80, 20));
    }

    #[test]
    fn test_food_margin_rule() {
        let poisons = vec![Item::new(ItemKind::Poison, IVec2::new(200, 200), 20)];
        // 59px away: inside the grown boxes (20 + 40)
        assert!(!food_clear_of_poisons(
            &Rect::square(IVec2::new(259, 200), 20),
            &poisons,
            40
        ));
        assert!(food_clear_of_poisons(
            &Rect::square(IVec2::new(260, 200), 20),
            &poisons,
            40
        ));
        assert!(food_clear_of_poisons(
            &Rect::square(IVec2::new(0, 0), 20),
            &[],
            40
        ));
    }

    #[test]
    fn test_food_stays_off_walls() {
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Arena::new(300, 40);
        let settings = Settings::default();
        for _ in 0..500 {
            let food = sample_food(&mut rng, &arena, &settings, &[]).unwrap();
            assert!(food.pos().x >= 40 && food.pos().x < 260);
            assert!(food.pos().y >= 40 && food.pos().y < 260);
        }
    }

    #[test]
    fn test_tiny_arena_reports_no_room() {
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Arena::new(80, 40);
        let settings = Settings::default();
        assert_eq!(
            sample_food(&mut rng, &arena, &settings, &[]),
            Err(PlacementError::NoRoom {
                kind: ItemKind::Food,
                side: 80
            })
        );
    }

    #[test]
    fn test_impossible_poison_gives_up() {
        // Clearance wider than the arena on every side: nothing is ever accepted
        let mut rng = Pcg32::seed_from_u64(5);
        let arena = Arena::new(200, 40);
        let settings = Settings {
            poison_clearance: 1000,
            max_placement_attempts: 50,
            ..Settings::default()
        };
        assert_eq!(
            sample_poison(&mut rng, &arena, &settings, IVec2::new(100, 100)),
            Err(PlacementError::Exhausted {
                kind: ItemKind::Poison,
                attempts: 50
            })
        );
    }

    #[test]
    fn test_generation_runs_once_per_epoch() {
        let mut session = GameSession::new(Settings::default(), 600, 11, 0.0);
        let mut rec = CommandRecorder::new();
        session.actor.score = 3;

        assert_eq!(generate_poisons(&mut session, &mut rec).unwrap(), 3);
        generate_food(&mut session, &mut rec).unwrap();
        let food = session.food;
        assert!(food.is_some());

        // Flags are set: nothing moves
        assert_eq!(generate_poisons(&mut session, &mut rec).unwrap(), 0);
        generate_food(&mut session, &mut rec).unwrap();
        assert_eq!(session.poisons.len(), 3);
        assert_eq!(session.food, food);

        assert_eq!(rec.rects_of(Color::Red), 3);
        assert_eq!(rec.rects_of(Color::Green), 1);
    }

    #[test]
    fn test_zero_score_places_no_poison() {
        let mut session = GameSession::new(Settings::default(), 600, 11, 0.0);
        let mut rec = CommandRecorder::new();
        assert_eq!(generate_poisons(&mut session, &mut rec).unwrap(), 0);
        assert!(session.generated.poison);
        assert!(session.poisons.is_empty());
    }

    proptest! {
        #[test]
        fn prop_poisons_respect_clearance(seed in any::<u64>(), score in 0u32..12) {
            let mut session = GameSession::new(Settings::default(), 600, seed, 0.0);
            let mut rec = CommandRecorder::new();
            session.actor.score = score;
            let actor = session.actor.pos();

            generate_poisons(&mut session, &mut rec).unwrap();
            prop_assert_eq!(session.poisons.len(), score as usize);
            for p in &session.poisons {
                let off = p.pos() - actor;
                // More than 80px past the corner, or more than 60px short of it
                prop_assert!(off.x > 80 || off.x < -60);
                prop_assert!(off.y > 80 || off.y < -60);
                prop_assert!(poison_clear_of_actor(p.pos(), actor, 80, 20));
                prop_assert!(p.pos().x >= 0 && p.pos().x < 580);
            }
        }

        #[test]
        fn prop_food_never_near_poison(seed in any::<u64>(), score in 0u32..12) {
            let mut session = GameSession::new(Settings::default(), 600, seed, 0.0);
            let mut rec = CommandRecorder::new();
            session.actor.score = score;

            generate_poisons(&mut session, &mut rec).unwrap();
            generate_food(&mut session, &mut rec).unwrap();
            let food = session.food.unwrap();
            for p in &session.poisons {
                prop_assert!(!p.rect.overlaps_with_margin(&food.rect, 40));
            }
        }
    }
}
