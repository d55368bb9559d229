//! Command-line argument definitions.

use clap::{Parser, Subcommand};

/// Top-level parser for the `twocard` binary.
#[derive(Debug, Parser)]
#[command(
    name = "twocard",
    version,
    about = "Two-card poker simulator",
    long_about = "Deals two cards per player each round, ranks the hands and keeps score until a winner is found."
)]
pub struct TwocardCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a full game and print every round
    Play {
        /// Rounds to play (2-5)
        #[arg(long)]
        rounds: Option<u32>,
        /// Number of players (2-6)
        #[arg(long)]
        players: Option<u32>,
        /// RNG seed for a reproducible game
        #[arg(long)]
        seed: Option<u64>,
        /// Each round shuffles the deck between 1 and this many times
        #[arg(long)]
        max_shuffles: Option<u32>,
        /// Append every round as a JSON line to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal a single hand to each player without scoring
    Deal {
        /// Number of players (2-6)
        #[arg(long)]
        players: Option<u32>,
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
