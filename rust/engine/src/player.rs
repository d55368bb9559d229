use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{pair_rank, HandRank};
use serde::{Deserialize, Serialize};

/// Number of cards dealt to each player per round.
pub const HAND_SIZE: usize = 2;

/// Represents a seat in the game with its hand and score accumulators.
/// Scores are written by the engine only; callers see them through accessors.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Player identifier, assigned once (0..players_count)
    id: usize,
    /// Current hand, empty until the first deal
    hand: Option<[Card; HAND_SIZE]>,
    /// Score gained in the most recent round
    last_round_score: u32,
    /// Score accumulated over the whole game
    overall_score: u32,
}

impl Player {
    pub fn new(id: usize) -> Self {
        Self {
            id,
            hand: None,
            last_round_score: 0,
            overall_score: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn last_round_score(&self) -> u32 {
        self.last_round_score
    }
    pub fn overall_score(&self) -> u32 {
        self.overall_score
    }

    pub fn hand(&self) -> Option<[Card; HAND_SIZE]> {
        self.hand
    }

    /// Replaces the current hand with the given cards.
    ///
    /// The batch must hold exactly two cards; anything else leaves the
    /// previous hand untouched.
    pub fn receive_two_cards(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        let received = cards.len();
        let hand: [Card; HAND_SIZE] =
            cards
                .try_into()
                .map_err(|_| GameError::InvalidHandSize {
                    player_id: self.id,
                    received,
                })?;
        self.hand = Some(hand);
        Ok(())
    }

    pub fn current_hand_rank(&self) -> Result<HandRank, GameError> {
        let [c1, c2] = self
            .hand
            .ok_or(GameError::NoCardsDealt { player_id: self.id })?;
        Ok(pair_rank(&c1, &c2))
    }

    pub(crate) fn record_round_score(&mut self, score: u32) {
        self.last_round_score = score;
        self.overall_score += score;
    }
}

/// Builds the roster for a new or reset game: ids `0..count`, zero scores.
pub fn create_players(count: usize) -> Vec<Player> {
    (0..count).map(Player::new).collect()
}
