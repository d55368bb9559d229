//! # twocard-engine: Two-Card Poker Game Engine
//!
//! A small poker simulation where every player is dealt two cards per round.
//! Hands are ranked, players are scored by their position in the round's
//! ranking, and the player with the highest overall score wins the game.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and card values
//! - [`hand`] - Two-card hand classification ([`hand::HandRank`])
//! - [`deck`] - 52-card deck with injected-RNG shuffling
//! - [`player`] - Player hand and score accumulators
//! - [`engine`] - Round orchestration, scoring and winner selection
//! - [`game`] - Game lifecycle status
//! - [`rules`] - Game setup and round argument validation
//! - [`logger`] - Round records and JSONL round history
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use twocard_engine::cards::{Card, Rank, Suit};
//! use twocard_engine::hand::{pair_rank, HandRank};
//!
//! let hand = pair_rank(
//!     &Card::new(Rank::King, Suit::Spades),
//!     &Card::new(Rank::King, Suit::Hearts),
//! );
//! assert_eq!(hand, HandRank::Pair);
//! assert_eq!(hand.value(), 200);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All shuffles come from the engine's own RNG, so a seed fixes every round:
//!
//! ```rust
//! use twocard_engine::engine::GameEngine;
//!
//! let mut e1 = GameEngine::with_seed(2, 4, 42).unwrap();
//! let mut e2 = GameEngine::with_seed(2, 4, 42).unwrap();
//! assert_eq!(e1.play_new_round(3).unwrap(), e2.play_new_round(3).unwrap());
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
