//! # Play Command
//!
//! Plays a complete game and prints every round.
//!
//! Settings come from the command line first, then from the resolved
//! configuration (environment, config file, defaults). Each round shuffles the
//! deck a random number of times between 1 and `max_shuffles`, drawn from a
//! separate stream of the game seed so a seeded game is fully reproducible.
//!
//! After every round the engine roster is put back in id order before it is
//! printed, so tied hands in the next round score lower ids first and a tied
//! overall total goes to the lowest id.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_player_round;
use crate::ui;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use twocard_engine::engine::GameEngine;
use twocard_engine::logger::RoundLogger;
use twocard_engine::rules::validate_shuffle_times;

/// Command-line overrides for a game; `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub rounds: Option<u32>,
    pub players: Option<u32>,
    pub seed: Option<u64>,
    pub max_shuffles: Option<u32>,
    pub log: Option<String>,
}

/// Handle the play command: simulate a whole game.
///
/// # Returns
///
/// * `Ok(())` once every round has been played and the winner printed
/// * `Err(CliError)` if configuration is invalid, the engine rejects the
///   game shape, or writing output or the round log fails
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;

    let rounds = opts.rounds.unwrap_or(cfg.rounds);
    let players = opts.players.unwrap_or(cfg.players);
    let max_shuffles = opts.max_shuffles.unwrap_or(cfg.max_shuffles);
    let seed = match opts.seed.or(cfg.seed) {
        Some(s) => s,
        None => {
            let s = rand::random();
            ui::display_warning(
                err,
                &format!("No seed given; using {}. Pass --seed to replay this game.", s),
            )?;
            s
        }
    };
    validate_shuffle_times(max_shuffles)?;

    let mut eng = GameEngine::with_seed(rounds, players, seed)?;

    let mut logger = opts.log.as_deref().map(RoundLogger::create).transpose()?;

    let mut shuffle_rng = ChaCha20Rng::seed_from_u64(seed);
    shuffle_rng.set_stream(1);

    writeln!(
        out,
        "play: rounds={} players={} seed={}",
        rounds, players, seed
    )?;
    writeln!(out, "--------------Game Started--------------")?;

    while !eng.status().is_complete() {
        let shuffle_times = shuffle_rng.random_range(1..=max_shuffles);
        let record = eng.play_new_round(shuffle_times)?;
        if let Some(logger) = logger.as_mut() {
            logger.write(&record)?;
        }

        eng.order_players_by_id();
        for p in eng.players_read_only() {
            writeln!(out, "{}", format_player_round(record.round, p))?;
        }
        writeln!(out)?;
    }

    writeln!(out, "--------------Game Over--------------")?;
    let winner = eng.the_winner()?;
    writeln!(
        out,
        "The winner is: {}. With overall score: {}",
        winner.id(),
        winner.overall_score()
    )?;
    Ok(())
}
