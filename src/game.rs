//! Frame controller
//!
//! [`Game`] owns a session together with its score store and renderer and
//! is what a frontend drives: one [`Game::frame`] per display refresh, one
//! [`Game::handle`] per input event.

use glam::IVec2;

use crate::consts::BANNER_TEXT_SIZE;
use crate::highscores::{GameOverMessage, settle};
use crate::persistence::ScoreStore;
use crate::renderer::{Color, Renderer};
use crate::settings::Settings;
use crate::sim::{Direction, GameSession, Rect, StepOutcome, step};

/// What the frontend should do after a frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameResult {
    /// Schedule another frame
    Continue,
    /// Game over; stop scheduling
    Stop(GameOverMessage),
}

/// Player input, already reduced from keys or gestures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    /// Key or touch that maps to no direction
    Poke,
}

/// Session plus its collaborators
pub struct Game<S: ScoreStore, R: Renderer> {
    pub session: GameSession,
    store: S,
    renderer: R,
    message: Option<GameOverMessage>,
}

impl<S: ScoreStore, R: Renderer> Game<S, R> {
    /// Create a game and start it on an arena of `side` pixels
    pub fn new(
        settings: Settings,
        side: i32,
        seed: u64,
        now_ms: f64,
        store: S,
        renderer: R,
    ) -> Self {
        // The session comes out of `new` already reset
        let mut game = Self {
            session: GameSession::new(settings, side, seed, now_ms),
            store,
            renderer,
            message: None,
        };
        game.clear_arena();
        game
    }

    /// Reset to a fresh running game on a cleared arena
    pub fn start(&mut self, side: i32, now_ms: f64) {
        self.session.reset(side, now_ms);
        self.message = None;
        self.clear_arena();
    }

    fn clear_arena(&mut self) {
        let side = self.session.arena.side;
        self.renderer.erase_rect(self.session.arena.bounds());
        log::info!(
            "New game on a {}px arena, heading {:?}",
            side,
            self.session.actor.direction
        );
    }

    /// Run one frame stamped `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> FrameResult {
        if let Some(message) = &self.message {
            return FrameResult::Stop(message.clone());
        }

        match step(&mut self.session, now_ms, &mut self.renderer) {
            StepOutcome::Continue | StepOutcome::Ate { .. } => FrameResult::Continue,
            StepOutcome::GameOver(_) => {
                let message = settle(self.session.score(), &mut self.store);
                self.draw_banner(&message);
                self.message = Some(message.clone());
                FrameResult::Stop(message)
            }
        }
    }

    /// Apply an input. Returns true when a new game was started and the
    /// frontend needs to schedule frames again.
    pub fn handle(&mut self, command: Command, side: i32, now_ms: f64) -> bool {
        if self.session.is_running() {
            if let Command::Turn(direction) = command {
                self.session.request_direction(direction);
            }
            false
        } else {
            self.start(side, now_ms);
            true
        }
    }

    /// Steer only. Never restarts, so a gesture that began before the game
    /// ended cannot revive it. Returns true if the heading was accepted.
    pub fn steer(&mut self, direction: Direction) -> bool {
        self.session.request_direction(direction)
    }

    pub fn is_over(&self) -> bool {
        !self.session.is_running()
    }

    /// Banner message of the finished game
    pub fn message(&self) -> Option<&GameOverMessage> {
        self.message.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Black band a quarter of the arena tall, message centered on it
    fn draw_banner(&mut self, message: &GameOverMessage) {
        let side = self.session.arena.side;
        let quarter = side as f64 / 4.0;
        let top = ((side as f64 - quarter) / 2.0).floor() as i32;
        let band = Rect::new(IVec2::new(0, top), IVec2::new(side, quarter as i32));
        self.renderer.draw_rect(band, Color::Black);

        let half = side / 2;
        self.renderer.draw_text(
            &message.text(),
            BANNER_TEXT_SIZE,
            Color::White,
            IVec2::new(half, half),
        );
    }
}
