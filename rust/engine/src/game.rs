use serde::{Deserialize, Serialize};

/// Lifecycle of a game, derived from the round counters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No round played yet
    Initialized,
    /// At least one round played, more remaining
    InProgress,
    /// Every round has been played; only a reset allows more
    Complete,
}

impl GameStatus {
    pub fn from_counts(rounds_played: u32, rounds_to_play: u32) -> Self {
        if rounds_played == 0 {
            GameStatus::Initialized
        } else if rounds_played < rounds_to_play {
            GameStatus::InProgress
        } else {
            GameStatus::Complete
        }
    }

    pub fn is_complete(self) -> bool {
        self == GameStatus::Complete
    }
}
