use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use twocard_engine::engine::GameEngine;
use twocard_engine::errors::{ErrorKind, GameError};
use twocard_engine::game::GameStatus;

/// Wraps a seeded RNG and counts how often the engine draws from it.
struct CountingRng {
    inner: ChaCha20Rng,
    draws: Rc<Cell<u64>>,
}

impl CountingRng {
    fn tick(&self) {
        self.draws.set(self.draws.get() + 1);
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.tick();
        self.inner.next_u32()
    }
    fn next_u64(&mut self) -> u64 {
        self.tick();
        self.inner.next_u64()
    }
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.tick();
        self.inner.fill_bytes(dst)
    }
}

fn play_all(eng: &mut GameEngine) {
    while !eng.status().is_complete() {
        eng.play_new_round(1).expect("round should be playable");
    }
}

#[test]
fn round_deals_two_cards_to_every_player() {
    let mut eng = GameEngine::with_seed(3, 6, 1).unwrap();
    let record = eng.play_new_round(1).unwrap();
    assert_eq!(eng.rounds_played(), 1);
    assert_eq!(eng.status(), GameStatus::InProgress);
    assert_eq!(eng.deck_remaining(), Some(52 - 12));
    assert_eq!(record.round, 1);
    assert_eq!(record.results.len(), 6);

    let mut seen = HashSet::new();
    for p in eng.players_read_only() {
        let hand = p.hand().expect("every player is dealt");
        assert!(seen.insert(hand[0]) && seen.insert(hand[1]), "cards are unique");
    }
}

#[test]
fn round_scores_follow_ascending_hand_rank() {
    let mut eng = GameEngine::with_seed(5, 6, 99).unwrap();
    let record = eng.play_new_round(2).unwrap();

    for (i, seat) in record.results.iter().enumerate() {
        assert_eq!(seat.round_score, i as u32);
    }
    for pair in record.results.windows(2) {
        assert!(pair[0].hand_rank <= pair[1].hand_rank);
    }
    // the roster is left in scoring order
    let roster: Vec<(usize, u32)> = eng
        .players_read_only()
        .iter()
        .map(|p| (p.id(), p.last_round_score()))
        .collect();
    let recorded: Vec<(usize, u32)> = record
        .results
        .iter()
        .map(|s| (s.player_id, s.round_score))
        .collect();
    assert_eq!(roster, recorded);
    for p in eng.players_read_only() {
        assert_eq!(
            p.current_hand_rank().unwrap(),
            record.results[p.last_round_score() as usize].hand_rank
        );
    }
}

#[test]
fn equal_hand_ranks_keep_previous_roster_order() {
    let mut ties_seen = 0;
    for seed in 0..200u64 {
        let mut eng = GameEngine::with_seed(5, 6, seed).unwrap();
        while !eng.status().is_complete() {
            let before: Vec<usize> = eng.players_read_only().iter().map(|p| p.id()).collect();
            let position = |id: usize| before.iter().position(|&x| x == id).unwrap();
            let record = eng.play_new_round(1).unwrap();
            for pair in record.results.windows(2) {
                if pair[0].hand_rank == pair[1].hand_rank {
                    ties_seen += 1;
                    assert!(
                        position(pair[0].player_id) < position(pair[1].player_id),
                        "seed {seed}: tie between {} and {} broke prior order",
                        pair[0].player_id,
                        pair[1].player_id
                    );
                }
            }
        }
    }
    assert!(ties_seen > 0, "sample should contain tied hands");
}

#[test]
fn ordering_by_id_between_rounds_scores_ties_lower_id_first() {
    let mut ties_seen = 0;
    for seed in 0..200u64 {
        let mut eng = GameEngine::with_seed(5, 6, seed).unwrap();
        while !eng.status().is_complete() {
            let record = eng.play_new_round(1).unwrap();
            eng.order_players_by_id();
            let ids: Vec<usize> = eng.players_read_only().iter().map(|p| p.id()).collect();
            assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
            for pair in record.results.windows(2) {
                if pair[0].hand_rank == pair[1].hand_rank {
                    ties_seen += 1;
                    assert!(
                        pair[0].player_id < pair[1].player_id,
                        "seed {seed} round {}: tie between {} and {}",
                        record.round,
                        pair[0].player_id,
                        pair[1].player_id
                    );
                }
            }
        }
    }
    assert!(ties_seen > 0, "sample should contain tied hands");
}

#[test]
fn winner_after_ordering_by_id_is_lowest_id_among_leaders() {
    for seed in 0..100u64 {
        let mut eng = GameEngine::with_seed(2, 6, seed).unwrap();
        play_all(&mut eng);
        eng.order_players_by_id();
        let best = eng
            .players_read_only()
            .iter()
            .map(|p| p.overall_score())
            .max()
            .unwrap();
        let expected = eng
            .players_read_only()
            .iter()
            .find(|p| p.overall_score() == best)
            .map(|p| p.id())
            .unwrap();
        assert_eq!(eng.the_winner().unwrap().id(), expected, "seed {seed}");
    }
}

#[test]
fn zero_shuffle_times_is_rejected_without_advancing() {
    let mut eng = GameEngine::with_seed(3, 4, 5).unwrap();
    let err = eng.play_new_round(0).unwrap_err();
    assert_eq!(err, GameError::InvalidShuffleTimes { value: 0 });
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(eng.rounds_played(), 0);
    assert!(eng.players_read_only().iter().all(|p| p.hand().is_none()));
}

#[test]
fn completed_game_rejects_more_rounds() {
    let mut eng = GameEngine::with_seed(2, 3, 8).unwrap();
    play_all(&mut eng);
    assert_eq!(eng.rounds_played(), 2);
    assert_eq!(eng.status(), GameStatus::Complete);

    let err = eng.play_new_round(1).unwrap_err();
    assert_eq!(err, GameError::GameComplete { rounds_played: 2 });
    assert_eq!(err.kind(), ErrorKind::State);
    // completion is checked before the shuffle count
    assert_eq!(
        eng.play_new_round(0).unwrap_err().kind(),
        ErrorKind::State
    );
    assert_eq!(eng.rounds_played(), 2);
}

#[test]
fn overall_scores_sum_to_triangular_total_per_round() {
    let mut eng = GameEngine::with_seed(4, 5, 2024).unwrap();
    play_all(&mut eng);
    let total: u32 = eng
        .players_read_only()
        .iter()
        .map(|p| p.overall_score())
        .sum();
    assert_eq!(total, 4 * (5 * 4 / 2));
}

#[test]
fn winner_has_the_maximum_overall_score() {
    for seed in 0..20u64 {
        let mut eng = GameEngine::with_seed(5, 6, seed).unwrap();
        eng.play_new_round(1).unwrap();
        eng.play_new_round(3).unwrap();
        let max = eng
            .players_read_only()
            .iter()
            .map(|p| p.overall_score())
            .max()
            .unwrap();
        let winner = eng.the_winner().unwrap();
        assert_eq!(winner.overall_score(), max);
    }
}

#[test]
fn winner_sorts_roster_descending_by_overall_score() {
    let mut eng = GameEngine::with_seed(3, 4, 77).unwrap();
    play_all(&mut eng);
    let winner_id = eng.the_winner().unwrap().id();
    let players = eng.players_read_only();
    assert_eq!(players[0].id(), winner_id);
    for pair in players.windows(2) {
        assert!(pair[0].overall_score() >= pair[1].overall_score());
    }
}

#[test]
fn winner_before_any_round_is_first_player() {
    let mut eng = GameEngine::with_seed(3, 4, 0).unwrap();
    let winner = eng.the_winner().unwrap();
    assert_eq!(winner.id(), 0);
    assert_eq!(winner.overall_score(), 0);
}

#[test]
fn reset_restores_initial_state_and_keeps_shape() {
    let mut eng = GameEngine::with_seed(3, 5, 31).unwrap();
    play_all(&mut eng);
    eng.reset_game();

    assert_eq!(eng.rounds_played(), 0);
    assert_eq!(eng.status(), GameStatus::Initialized);
    assert_eq!(eng.rounds_to_play(), 3);
    assert_eq!(eng.players_count(), 5);
    let ids: Vec<usize> = eng.players_read_only().iter().map(|p| p.id()).collect();
    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert!(eng
        .players_read_only()
        .iter()
        .all(|p| p.last_round_score() == 0 && p.overall_score() == 0));

    // a reset game is playable again
    play_all(&mut eng);
    assert_eq!(eng.rounds_played(), 3);
}

#[test]
fn same_seed_produces_identical_games() {
    let mut e1 = GameEngine::with_seed(5, 6, 42).unwrap();
    let mut e2 = GameEngine::with_seed(5, 6, 42).unwrap();
    for times in [1, 4, 2, 9, 1] {
        assert_eq!(
            e1.play_new_round(times).unwrap(),
            e2.play_new_round(times).unwrap()
        );
    }
}

#[test]
fn injected_rng_drives_every_shuffle() {
    let draws = Rc::new(Cell::new(0));
    let rng = CountingRng {
        inner: ChaCha20Rng::seed_from_u64(3),
        draws: Rc::clone(&draws),
    };
    let mut eng = GameEngine::with_rng(2, 2, rng).unwrap();
    assert_eq!(eng.seed(), None);
    let record = eng.play_new_round(2).unwrap();
    assert!(draws.get() > 0, "shuffles must draw from the injected source");
    assert_eq!(record.seed, None);
    assert_eq!(record.shuffle_times, 2);
    assert_eq!(eng.players_read_only().len(), 2);
}
