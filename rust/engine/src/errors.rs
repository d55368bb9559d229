use thiserror::Error;

/// Broad classification of a [`GameError`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// An argument was outside its permitted range.
    Range,
    /// The operation is not allowed in the current state.
    State,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Only 2-5 rounds allowed, got {value}")]
    InvalidRoundsToPlay { value: u32 },
    #[error("Only 2-6 players allowed, got {value}")]
    InvalidPlayersCount { value: u32 },
    #[error("Deck shuffle times should be greater than 0, got {value}")]
    InvalidShuffleTimes { value: u32 },
    #[error("Cannot pop {requested} cards from a deck of {available}")]
    InvalidPopCount { requested: usize, available: usize },
    #[error("No more rounds left to play ({rounds_played} played), reset the game")]
    GameComplete { rounds_played: u32 },
    #[error("Player {player_id} has no cards; hand ranking requires 2 cards")]
    NoCardsDealt { player_id: usize },
    #[error("Player {player_id} must receive exactly 2 cards, got {received}")]
    InvalidHandSize { player_id: usize, received: usize },
    #[error("No players in the game")]
    NoPlayers,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidRoundsToPlay { .. }
            | GameError::InvalidPlayersCount { .. }
            | GameError::InvalidShuffleTimes { .. }
            | GameError::InvalidPopCount { .. } => ErrorKind::Range,
            GameError::GameComplete { .. }
            | GameError::NoCardsDealt { .. }
            | GameError::InvalidHandSize { .. }
            | GameError::NoPlayers => ErrorKind::State,
        }
    }
}
