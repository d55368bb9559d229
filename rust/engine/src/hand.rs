use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Numeric value of a pair of equal ranks.
pub const PAIR: u32 = 200;
/// Numeric value of two adjacent ranks in different suits.
pub const STRAIGHT: u32 = 300;
/// Numeric value of two cards of the same suit.
pub const FLUSH: u32 = 400;
/// Numeric value of two adjacent ranks in the same suit.
pub const STRAIGHT_FLUSH: u32 = 500;

/// Classification of a two-card hand.
///
/// Every named category has a fixed value above the highest possible card value
/// (144, the ace of spades), so any named category beats any high card. High
/// cards compare by the [`Card::value`] of the better card.
///
/// Equality, hashing and ordering all go through [`HandRank::value`].
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
pub enum HandRank {
    /// No category applies; carries the higher card's value (21-144)
    HighCard(u32),
    /// Two cards of equal rank
    Pair,
    /// Adjacent ranks, different suits
    Straight,
    /// Same suit, non-adjacent ranks
    Flush,
    /// Adjacent ranks, same suit
    StraightFlush,
}

impl HandRank {
    /// The integer the hand is ranked by.
    pub fn value(&self) -> u32 {
        match *self {
            HandRank::HighCard(v) => v,
            HandRank::Pair => PAIR,
            HandRank::Straight => STRAIGHT,
            HandRank::Flush => FLUSH,
            HandRank::StraightFlush => STRAIGHT_FLUSH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandRank::HighCard(_) => "High Card",
            HandRank::Pair => "Pair",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::StraightFlush => "Straight Flush",
        }
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.value() == other.value()
    }
}

impl Eq for HandRank {}

impl Hash for HandRank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value().hash(state);
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Classifies an unordered pair of cards.
///
/// The checks run in a fixed order: straight flush, flush, straight, pair,
/// then high card. Order matters because the tests overlap (a straight flush
/// is also same-suit).
///
/// # Examples
///
/// ```
/// use twocard_engine::cards::{Card, Rank, Suit};
/// use twocard_engine::hand::{pair_rank, HandRank};
///
/// let four = Card::new(Rank::Four, Suit::Clubs);
/// let five = Card::new(Rank::Five, Suit::Clubs);
/// assert_eq!(pair_rank(&four, &five), HandRank::StraightFlush);
///
/// let king = Card::new(Rank::King, Suit::Spades);
/// let two = Card::new(Rank::Two, Suit::Hearts);
/// assert_eq!(pair_rank(&king, &two), HandRank::HighCard(king.value()));
/// ```
pub fn pair_rank(c1: &Card, c2: &Card) -> HandRank {
    let adjacent = c1.rank.is_adjacent(c2.rank);
    let same_suit = c1.suit == c2.suit;

    if adjacent && same_suit {
        HandRank::StraightFlush
    } else if same_suit {
        HandRank::Flush
    } else if adjacent {
        HandRank::Straight
    } else if c1.rank == c2.rank {
        HandRank::Pair
    } else {
        HandRank::HighCard(c1.value().max(c2.value()))
    }
}
