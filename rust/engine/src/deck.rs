use rand::seq::SliceRandom;
use rand::Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// Number of cards in a freshly built deck.
pub const DECK_SIZE: usize = 52;

/// An ordered pile of unique cards, dealt from the top.
///
/// The deck never regenerates cards; the engine builds a new one per round.
/// Randomness is supplied by the caller on every shuffle so a seeded source
/// makes the order reproducible.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
/// use twocard_engine::deck::Deck;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let mut deck = Deck::new(&mut rng);
/// let hand = deck.pop_from_top(2).expect("deck has 52 cards");
/// assert_eq!(hand.len(), 2);
/// assert_eq!(deck.size(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the 52-card deck and applies one shuffle pass.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::unshuffled();
        deck.shuffle(1, rng);
        deck
    }

    /// Builds the 52-card deck in ascending (rank, suit) order.
    pub fn unshuffled() -> Self {
        Self { cards: full_deck() }
    }

    /// Applies `times` Fisher-Yates passes over the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, times: u32, rng: &mut R) {
        for _ in 0..times {
            self.cards.shuffle(&mut *rng);
        }
    }

    /// Removes and returns the first `n` cards, keeping the rest in order.
    pub fn pop_from_top(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n == 0 || n > self.cards.len() {
            return Err(GameError::InvalidPopCount {
                requested: n,
                available: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
