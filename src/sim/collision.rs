//! Collision detection
//!
//! All tests are axis-aligned box overlaps. The order matters: a wall or
//! poison hit ends the game before food gets a chance to score.

use super::geometry::Rect;
use super::state::{Actor, Arena, GameSession, Item};
use crate::settings::WallCheck;

/// What the horse ran into this step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    /// Index into the poison set
    Poison(usize),
    Food,
}

/// Has the horse left the arena?
///
/// `Corner` only compares the top-left corner with the wall positions, which
/// are laid out for a body of full length. The real box is ignored: a body
/// overshoots by up to one step's travel before this fires, and a narrow
/// (cross-axis) body is flagged before it reaches the wall. `FullExtent`
/// tests the actual box against the arena.
pub fn hits_wall(actor: &Actor, arena: &Arena, mode: WallCheck) -> bool {
    match mode {
        WallCheck::Corner => {
            let pos = actor.pos();
            pos.x > arena.right || pos.x < arena.left || pos.y > arena.bottom || pos.y < arena.top
        }
        WallCheck::FullExtent => !arena.bounds().contains(&actor.rect),
    }
}

/// First poison overlapping `body`, in generation order
pub fn first_poison_hit(body: &Rect, poisons: &[Item]) -> Option<usize> {
    poisons.iter().position(|p| p.rect.overlaps(body))
}

pub fn touches_food(body: &Rect, food: Option<&Item>) -> bool {
    food.is_some_and(|f| f.rect.overlaps(body))
}

/// Run the wall, poison and food checks in that order; first hit wins
pub fn detect(session: &GameSession) -> Option<Collision> {
    let actor = &session.actor;

    if hits_wall(actor, &session.arena, session.settings.wall_check) {
        return Some(Collision::Wall);
    }

    if let Some(index) = first_poison_hit(&actor.rect, &session.poisons) {
        return Some(Collision::Poison(index));
    }

    if touches_food(&actor.rect, session.food.as_ref()) {
        return Some(Collision::Food);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Direction, ItemKind};
    use glam::IVec2;

    fn session_at(pos: IVec2, direction: Direction) -> GameSession {
        let mut session = GameSession::new(Settings::default(), 500, 1, 0.0);
        session.actor.place(pos, direction);
        session
    }

    #[test]
    fn test_corner_wall_check() {
        let arena = Arena::new(500, 40);
        let mut actor = Actor::new(IVec2::new(460, 200), 40, 20, Direction::Right, 260.0);
        assert!(!hits_wall(&actor, &arena, WallCheck::Corner));

        actor.rect.pos.x = 461;
        assert!(hits_wall(&actor, &arena, WallCheck::Corner));

        actor.rect.pos = IVec2::new(0, -1);
        assert!(hits_wall(&actor, &arena, WallCheck::Corner));
    }

    #[test]
    fn test_full_extent_wall_check() {
        let arena = Arena::new(500, 40);
        // Heading up at x=470 the 20px wide body ends at 490. The corner
        // check compares against a wall placed for a 40px body and fires;
        // the full-extent check sees the body is still inside.
        let actor = Actor::new(IVec2::new(470, 100), 40, 20, Direction::Up, 260.0);
        assert!(hits_wall(&actor, &arena, WallCheck::Corner));
        assert!(!hits_wall(&actor, &arena, WallCheck::FullExtent));

        // A horizontal body at x=461 ends at 501: out for both
        let actor = Actor::new(IVec2::new(461, 100), 40, 20, Direction::Right, 260.0);
        assert!(hits_wall(&actor, &arena, WallCheck::Corner));
        assert!(hits_wall(&actor, &arena, WallCheck::FullExtent));

        // Sitting exactly on both wall limits: in for both
        let actor = Actor::new(IVec2::new(460, 460), 40, 20, Direction::Right, 260.0);
        assert!(!hits_wall(&actor, &arena, WallCheck::Corner));
        assert!(!hits_wall(&actor, &arena, WallCheck::FullExtent));
    }

    #[test]
    fn test_first_poison_short_circuits() {
        let body = Rect::new(IVec2::new(100, 100), IVec2::new(40, 20));
        let poisons = vec![
            Item::new(ItemKind::Poison, IVec2::new(300, 300), 20),
            Item::new(ItemKind::Poison, IVec2::new(130, 110), 20),
            Item::new(ItemKind::Poison, IVec2::new(100, 100), 20),
        ];
        assert_eq!(first_poison_hit(&body, &poisons), Some(1));
        assert_eq!(first_poison_hit(&body, &poisons[..1]), None);
    }

    #[test]
    fn test_food_touch() {
        let body = Rect::new(IVec2::new(100, 100), IVec2::new(40, 20));
        let food = Item::new(ItemKind::Food, IVec2::new(139, 119), 20);
        assert!(touches_food(&body, Some(&food)));
        let food = Item::new(ItemKind::Food, IVec2::new(140, 100), 20);
        assert!(!touches_food(&body, Some(&food)));
        assert!(!touches_food(&body, None));
    }

    #[test]
    fn test_detect_wall_beats_food() {
        let mut session = session_at(IVec2::new(470, 200), Direction::Right);
        session.food = Some(Item::new(ItemKind::Food, IVec2::new(475, 200), 20));
        assert_eq!(detect(&session), Some(Collision::Wall));
    }

    #[test]
    fn test_detect_poison_beats_food() {
        let mut session = session_at(IVec2::new(200, 200), Direction::Right);
        session.food = Some(Item::new(ItemKind::Food, IVec2::new(205, 200), 20));
        session
            .poisons
            .push(Item::new(ItemKind::Poison, IVec2::new(220, 200), 20));
        assert_eq!(detect(&session), Some(Collision::Poison(0)));
    }

    #[test]
    fn test_detect_nothing() {
        let session = session_at(IVec2::new(200, 200), Direction::Right);
        assert_eq!(detect(&session), None);
    }
}
