//! Game-over settlement
//!
//! Compares the final score with the stored best, records a new best, and
//! picks the message shown on the game-over banner.

use crate::persistence::ScoreStore;

/// What the game-over banner says
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOverMessage {
    NewHighscore { score: u32 },
    ScoreVsHighscore { score: u32, highscore: u32 },
}

impl GameOverMessage {
    pub fn text(&self) -> String {
        match self {
            GameOverMessage::NewHighscore { score } => format!("New Highscore {}", score),
            GameOverMessage::ScoreVsHighscore { score, highscore } => {
                format!("Score {}  -  Highscore {}", score, highscore)
            }
        }
    }

    pub fn is_new_highscore(&self) -> bool {
        matches!(self, GameOverMessage::NewHighscore { .. })
    }
}

impl std::fmt::Display for GameOverMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text())
    }
}

/// Settle a finished game against the stored best score.
///
/// Unreadable storage counts as no best yet; a failed write is logged and
/// the player still sees their new best.
pub fn settle<S: ScoreStore + ?Sized>(score: u32, store: &mut S) -> GameOverMessage {
    let highscore = match store.get_highscore() {
        Ok(stored) => stored.unwrap_or(0),
        Err(e) => {
            log::warn!("Could not read highscore: {}", e);
            0
        }
    };

    if score > highscore {
        if let Err(e) = store.set_highscore(score) {
            log::warn!("Could not save highscore: {}", e);
        }
        log::info!("New highscore {} (was {})", score, highscore);
        GameOverMessage::NewHighscore { score }
    } else {
        GameOverMessage::ScoreVsHighscore { score, highscore }
    }
}
