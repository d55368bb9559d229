use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameStatus;
use crate::logger::{RoundRecord, SeatResult};
use crate::player::{create_players, Player, HAND_SIZE};
use crate::rules::{validate_game_setup, validate_shuffle_times};

/// Core game engine that plays a fixed number of two-card rounds.
/// Owns the roster, the current deck and the random source used for every shuffle.
///
/// # Examples
///
/// ```
/// use twocard_engine::engine::GameEngine;
///
/// let mut engine = GameEngine::with_seed(3, 5, 12345).expect("valid setup");
///
/// while !engine.status().is_complete() {
///     engine.play_new_round(1).expect("round should be playable");
/// }
/// assert_eq!(engine.rounds_played(), 3);
///
/// let winner = engine.the_winner().expect("game has players");
/// println!("winner: {} with {}", winner.id(), winner.overall_score());
/// ```
#[derive(Debug)]
pub struct GameEngine<R = ChaCha20Rng> {
    /// Total rounds in a game (2-5), fixed at construction
    rounds_to_play: u32,
    /// Number of players (2-6), fixed at construction
    players_count: u32,
    /// Rounds completed since construction or the last reset
    rounds_played: u32,
    /// Roster, in the order left by the last sort
    players: Vec<Player>,
    /// Deck of the most recent round
    deck: Option<Deck>,
    /// Random source for every shuffle
    rng: R,
    /// Seed of `rng` when the engine created it
    seed: Option<u64>,
}

impl GameEngine<ChaCha20Rng> {
    /// Creates an engine seeded from the thread RNG.
    pub fn new(rounds_to_play: u32, players_count: u32) -> Result<Self, GameError> {
        Self::with_seed(rounds_to_play, players_count, rand::random())
    }

    /// Creates an engine whose shuffles are reproducible from `seed`.
    pub fn with_seed(
        rounds_to_play: u32,
        players_count: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        let mut engine = Self::with_rng(
            rounds_to_play,
            players_count,
            ChaCha20Rng::seed_from_u64(seed),
        )?;
        engine.seed = Some(seed);
        Ok(engine)
    }
}

impl<R: RngCore> GameEngine<R> {
    /// Creates an engine driven by an injected random source.
    pub fn with_rng(rounds_to_play: u32, players_count: u32, rng: R) -> Result<Self, GameError> {
        validate_game_setup(rounds_to_play, players_count)?;
        Ok(Self {
            rounds_to_play,
            players_count,
            rounds_played: 0,
            players: create_players(players_count as usize),
            deck: None,
            rng,
            seed: None,
        })
    }

    pub fn rounds_to_play(&self) -> u32 {
        self.rounds_to_play
    }
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }
    pub fn players_count(&self) -> u32 {
        self.players_count
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from_counts(self.rounds_played, self.rounds_to_play)
    }

    /// Cards left in the most recent round's deck.
    pub fn deck_remaining(&self) -> Option<usize> {
        self.deck.as_ref().map(Deck::size)
    }

    /// Plays one round: fresh deck, `shuffle_times` shuffles, two cards per
    /// player, then scores by hand rank.
    ///
    /// Players are stable-sorted ascending by hand rank and the i-th player
    /// (weakest first) scores `i`. Equal ranks keep their previous relative
    /// order, which decides their scores.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameComplete`] - every round has already been played
    /// - [`GameError::InvalidShuffleTimes`] - `shuffle_times` is 0
    ///
    /// Neither error changes the engine state.
    pub fn play_new_round(&mut self, shuffle_times: u32) -> Result<RoundRecord, GameError> {
        if self.status().is_complete() {
            return Err(GameError::GameComplete {
                rounds_played: self.rounds_played,
            });
        }
        validate_shuffle_times(shuffle_times)?;

        let mut deck = Deck::new(&mut self.rng);
        deck.shuffle(shuffle_times, &mut self.rng);

        for p in &mut self.players {
            p.receive_two_cards(deck.pop_from_top(HAND_SIZE)?)?;
        }

        let dealt = self
            .players
            .iter()
            .map(|p| {
                let rank = p.current_hand_rank()?;
                let cards = p
                    .hand()
                    .ok_or(GameError::NoCardsDealt { player_id: p.id() })?;
                debug!(player = p.id(), cards = ?cards, rank = rank.value(), "dealt");
                Ok((rank, cards))
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        let mut ranked: Vec<_> = dealt.into_iter().zip(self.players.drain(..)).collect();
        // Vec::sort_by is stable
        ranked.sort_by(|(a, _), (b, _)| a.0.cmp(&b.0));

        let mut results = Vec::with_capacity(ranked.len());
        for (score, ((hand_rank, cards), mut player)) in ranked.into_iter().enumerate() {
            let score = score as u32;
            player.record_round_score(score);
            results.push(SeatResult {
                player_id: player.id(),
                cards,
                hand_rank,
                round_score: score,
                overall_score: player.overall_score(),
            });
            self.players.push(player);
        }

        self.deck = Some(deck);
        self.rounds_played += 1;
        info!(
            round = self.rounds_played,
            rounds_to_play = self.rounds_to_play,
            shuffle_times,
            "round complete"
        );

        Ok(RoundRecord {
            round_id: None,
            round: self.rounds_played,
            seed: self.seed,
            shuffle_times,
            results,
            ts: None,
        })
    }

    /// Immutable view of the roster in the engine's current order.
    pub fn players_read_only(&self) -> &[Player] {
        &self.players
    }

    /// Puts the roster back in id order.
    ///
    /// The next round's stable sort starts from this order, so tied hands
    /// then score lower ids first. `the_winner` likewise favours the lowest
    /// id among equal totals.
    pub fn order_players_by_id(&mut self) {
        self.players.sort_by_key(Player::id);
    }

    /// Orders the roster by overall score (highest first, stable) and returns the leader.
    pub fn the_winner(&mut self) -> Result<&Player, GameError> {
        self.players
            .sort_by(|a, b| b.overall_score().cmp(&a.overall_score()));
        self.players.first().ok_or(GameError::NoPlayers)
    }

    /// Starts the game over with fresh players; the game shape is unchanged.
    pub fn reset_game(&mut self) {
        self.rounds_played = 0;
        self.players = create_players(self.players_count as usize);
        self.deck = None;
        info!(players = self.players_count, "game reset");
    }
}
