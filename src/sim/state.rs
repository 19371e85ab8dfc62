//! Game state and core simulation types
//!
//! Everything that changes during a game lives in one [`GameSession`].

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::renderer::{Color, Drawable};
use crate::settings::{InitialDirection, Settings};
use crate::travel_px;

/// Cardinal travel direction (screen space, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    #[inline]
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Unit step in screen coordinates
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }
}

/// The square playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    /// Side length (pixels)
    pub side: i32,
    pub top: i32,
    pub left: i32,
    /// Largest legal y for the horse's top-left corner
    pub bottom: i32,
    /// Largest legal x for the horse's top-left corner
    pub right: i32,
}

impl Arena {
    pub fn new(side: i32, actor_length: i32) -> Self {
        Self {
            side,
            top: 0,
            left: 0,
            bottom: side - actor_length,
            right: side - actor_length,
        }
    }

    /// Middle of the field, where the horse starts
    pub fn center(&self) -> IVec2 {
        IVec2::splat(self.side.div_euclid(2))
    }

    /// The whole field as a box
    pub fn bounds(&self) -> Rect {
        Rect::square(IVec2::ZERO, self.side)
    }
}

/// The player-controlled horse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Current box; its size follows the travel axis
    pub rect: Rect,
    pub length: i32,
    pub width: i32,
    pub direction: Direction,
    /// Pixels per second
    pub speed: f32,
    pub score: u32,
}

impl Actor {
    pub fn new(pos: IVec2, length: i32, width: i32, direction: Direction, speed: f32) -> Self {
        let mut actor = Self {
            rect: Rect::new(pos, IVec2::ZERO),
            length,
            width,
            direction,
            speed,
            score: 0,
        };
        actor.rect.size = actor.extent_for(direction);
        actor
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }

    /// (width, height) of the body when travelling in `direction`
    pub fn extent_for(&self, direction: Direction) -> IVec2 {
        if direction.is_horizontal() {
            IVec2::new(self.length, self.width)
        } else {
            IVec2::new(self.width, self.length)
        }
    }

    /// Request a new heading. Reversing onto itself is refused.
    pub fn turn(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.direction) {
            return false;
        }
        self.direction = requested;
        true
    }

    /// Move along the current heading for `elapsed_secs`.
    ///
    /// The body is re-oriented to the travel axis first. No bounds checks:
    /// leaving the arena is the collision engine's business.
    pub fn advance(&mut self, elapsed_secs: f32) {
        self.rect.size = self.extent_for(self.direction);
        let distance = travel_px(self.speed, elapsed_secs);
        self.rect.pos += self.direction.unit() * distance;
    }

    /// Box the horse would occupy after heading `direction` for `secs`
    pub fn projected(&self, direction: Direction, secs: f32) -> Rect {
        let mut ghost = self.clone();
        ghost.direction = direction;
        ghost.advance(secs);
        ghost.rect
    }

    /// Put the horse back at `pos`, heading `direction`
    pub fn place(&mut self, pos: IVec2, direction: Direction) {
        self.direction = direction;
        self.rect = Rect::new(pos, self.extent_for(direction));
    }
}

impl Drawable for Actor {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn color(&self) -> Color {
        Color::Brown
    }
}

/// Item types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Food,
    Poison,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Food => "food",
            ItemKind::Poison => "poison",
        }
    }
}

/// A square food or poison item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub rect: Rect,
}

impl Item {
    pub fn new(kind: ItemKind, pos: IVec2, size: i32) -> Self {
        Self {
            kind,
            rect: Rect::square(pos, size),
        }
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.rect.pos
    }
}

impl Drawable for Item {
    fn bounds(&self) -> Rect {
        self.rect
    }

    fn color(&self) -> Color {
        match self.kind {
            ItemKind::Food => Color::Green,
            ItemKind::Poison => Color::Red,
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    Wall,
    Poison,
    /// No legal spot was left for an item
    Crowded,
}

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    GameOver(GameOverReason),
}

/// Placement guard flags for the current generation epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerationFlags {
    pub food: bool,
    pub poison: bool,
}

/// One player's game: horse, items, flags and lifecycle
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub arena: Arena,
    pub actor: Actor,
    /// The single active food, if placed
    pub food: Option<Item>,
    /// Active poisons in generation order
    pub poisons: Vec<Item>,
    pub generated: GenerationFlags,
    pub phase: GamePhase,
    /// Timestamp (ms) of the previous step
    pub last_frame_ms: f64,
    /// Steps run since the last reset
    pub steps: u64,
    pub(crate) rng: Pcg32,
}

impl GameSession {
    /// Create a session on an arena of `side` pixels and start it
    pub fn new(settings: Settings, side: i32, seed: u64, now_ms: f64) -> Self {
        let arena = Arena::new(side, settings.actor_length);
        let actor = Actor::new(
            arena.center(),
            settings.actor_length,
            settings.actor_width,
            Direction::Right,
            settings.speed,
        );
        let mut session = Self {
            settings,
            arena,
            actor,
            food: None,
            poisons: Vec::new(),
            generated: GenerationFlags::default(),
            phase: GamePhase::Running,
            last_frame_ms: now_ms,
            steps: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        session.reset(side, now_ms);
        session
    }

    /// Start a fresh game on an arena of `side` pixels
    pub fn reset(&mut self, side: i32, now_ms: f64) {
        self.arena = Arena::new(side, self.settings.actor_length);
        let direction = self.initial_direction();
        self.actor.place(self.arena.center(), direction);
        self.actor.score = 0;
        self.food = None;
        self.poisons.clear();
        self.generated = GenerationFlags::default();
        self.phase = GamePhase::Running;
        self.last_frame_ms = now_ms;
        self.steps = 0;
    }

    fn initial_direction(&mut self) -> Direction {
        match self.settings.initial_direction {
            InitialDirection::Fixed(direction) => direction,
            InitialDirection::Random => Direction::ALL[self.rng.random_range(0..Direction::ALL.len())],
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.actor.score
    }

    /// Why the game ended, if it has
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            GamePhase::Running => None,
            GamePhase::GameOver(reason) => Some(reason),
        }
    }

    /// Player asked for a new heading. Ignored once the game is over.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if !self.is_running() {
            return false;
        }
        self.actor.turn(direction)
    }

    pub(crate) fn end(&mut self, reason: GameOverReason) {
        self.phase = GamePhase::GameOver(reason);
    }
}
