use std::ops::RangeInclusive;

use crate::errors::GameError;

/// Allowed number of rounds in a game.
pub const ROUNDS_RANGE: RangeInclusive<u32> = 2..=5;
/// Allowed number of players in a game.
pub const PLAYERS_RANGE: RangeInclusive<u32> = 2..=6;

/// Validates the shape of a game before any state is created.
///
/// # Errors
///
/// - [`GameError::InvalidRoundsToPlay`] - `rounds_to_play` outside 2-5
/// - [`GameError::InvalidPlayersCount`] - `players_count` outside 2-6
///
/// # Examples
///
/// ```
/// use twocard_engine::rules::validate_game_setup;
/// use twocard_engine::errors::GameError;
///
/// assert!(validate_game_setup(3, 5).is_ok());
/// assert_eq!(
///     validate_game_setup(6, 5),
///     Err(GameError::InvalidRoundsToPlay { value: 6 })
/// );
/// assert_eq!(
///     validate_game_setup(3, 1),
///     Err(GameError::InvalidPlayersCount { value: 1 })
/// );
/// ```
pub fn validate_game_setup(rounds_to_play: u32, players_count: u32) -> Result<(), GameError> {
    validate_rounds_to_play(rounds_to_play)?;
    validate_players_count(players_count)
}

pub fn validate_rounds_to_play(rounds_to_play: u32) -> Result<(), GameError> {
    if !ROUNDS_RANGE.contains(&rounds_to_play) {
        return Err(GameError::InvalidRoundsToPlay {
            value: rounds_to_play,
        });
    }
    Ok(())
}

pub fn validate_players_count(players_count: u32) -> Result<(), GameError> {
    if !PLAYERS_RANGE.contains(&players_count) {
        return Err(GameError::InvalidPlayersCount {
            value: players_count,
        });
    }
    Ok(())
}

/// A round needs at least one shuffle pass.
pub fn validate_shuffle_times(times: u32) -> Result<(), GameError> {
    if times < 1 {
        Err(GameError::InvalidShuffleTimes { value: times })
    } else {
        Ok(())
    }
}
