use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use twocard_engine::cards::{full_deck, Card};
use twocard_engine::deck::{Deck, DECK_SIZE};
use twocard_engine::errors::{ErrorKind, GameError};

#[test]
fn new_deck_has_52_unique_cards() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let deck = Deck::new(&mut rng);
    assert_eq!(deck.size(), DECK_SIZE);

    let set: HashSet<Card> = deck.cards().iter().copied().collect();
    let expected: HashSet<Card> = full_deck().into_iter().collect();
    assert_eq!(set, expected, "one card per rank and suit");
}

#[test]
fn pop_rejects_zero_and_oversized_requests() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let mut deck = Deck::new(&mut rng);

    let err = deck.pop_from_top(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(
        deck.pop_from_top(53),
        Err(GameError::InvalidPopCount {
            requested: 53,
            available: 52
        })
    );
    assert_eq!(deck.size(), 52, "failed pops must not change the deck");
}

#[test]
fn pop_reduces_size_by_exactly_n() {
    for n in [1, 2, 12, 51, 52] {
        let mut rng = ChaCha20Rng::seed_from_u64(n as u64);
        let mut deck = Deck::new(&mut rng);
        let popped = deck.pop_from_top(n).expect("n within deck size");
        assert_eq!(popped.len(), n);
        assert_eq!(deck.size(), 52 - n);
    }
}

#[test]
fn pop_takes_from_the_top_and_keeps_remaining_order() {
    let mut deck = Deck::unshuffled();
    let all = full_deck();
    let top = deck.pop_from_top(3).unwrap();
    assert_eq!(top, all[..3].to_vec());
    assert_eq!(deck.cards(), &all[3..]);

    let next = deck.pop_from_top(2).unwrap();
    assert_eq!(next, all[3..5].to_vec());
}

#[test]
fn emptied_deck_rejects_further_pops() {
    let mut deck = Deck::unshuffled();
    deck.pop_from_top(52).unwrap();
    assert_eq!(deck.size(), 0);
    assert!(deck.pop_from_top(1).is_err());
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut r1 = ChaCha20Rng::seed_from_u64(12345);
    let mut r2 = ChaCha20Rng::seed_from_u64(12345);
    let mut d1 = Deck::new(&mut r1);
    let mut d2 = Deck::new(&mut r2);
    d1.shuffle(3, &mut r1);
    d2.shuffle(3, &mut r2);
    assert_eq!(d1.cards(), d2.cards(), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let d1 = Deck::new(&mut ChaCha20Rng::seed_from_u64(1));
    let d2 = Deck::new(&mut ChaCha20Rng::seed_from_u64(2));
    assert_ne!(
        d1.cards()[..10],
        d2.cards()[..10],
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn shuffle_permutes_without_losing_cards() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let mut deck = Deck::unshuffled();
    deck.pop_from_top(10).unwrap();
    let before: HashSet<Card> = deck.cards().iter().copied().collect();
    deck.shuffle(5, &mut rng);
    let after: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(deck.size(), 42);
    assert_eq!(before, after);
}

#[test]
fn zero_shuffle_passes_leave_order_unchanged() {
    let mut rng = ChaCha20Rng::seed_from_u64(9);
    let mut deck = Deck::unshuffled();
    deck.shuffle(0, &mut rng);
    assert_eq!(deck.cards(), full_deck().as_slice());
}
