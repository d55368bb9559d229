//! Deal command: one fresh deck, two cards for each player, no scoring.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_hand_rank};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::io::Write;
use twocard_engine::deck::Deck;
use twocard_engine::player::{HAND_SIZE, create_players};
use twocard_engine::rules::validate_players_count;

/// Handle the deal command.
///
/// Builds and shuffles a deck, deals [`HAND_SIZE`] cards to each player in
/// id order and prints every hand with its rank.
///
/// # Errors
///
/// Returns `CliError::Engine` when the player count is outside 2-6 and
/// `CliError::Config` when the configuration cannot be resolved.
pub fn handle_deal_command(
    players: Option<u32>,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(e.to_string()))?
        .config;
    let players = players.unwrap_or(cfg.players);
    validate_players_count(players)?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut deck = Deck::new(&mut rng);
    let mut roster = create_players(players as usize);

    writeln!(out, "deal: players={} seed={}", players, seed)?;
    for p in &mut roster {
        p.receive_two_cards(deck.pop_from_top(HAND_SIZE)?)?;
        let cards = p.hand().map(|h| format_cards(&h)).unwrap_or_default();
        let rank = p.current_hand_rank()?;
        writeln!(
            out,
            "Player {}: {}  {}",
            p.id(),
            cards,
            format_hand_rank(&rank)
        )?;
    }
    writeln!(out, "Deck remaining: {}", deck.size())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deal_prints_one_line_per_player() {
        let mut out = Vec::new();
        handle_deal_command(Some(4), Some(42), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().filter(|l| l.starts_with("Player ")).count(), 4);
        assert!(output.contains("Deck remaining: 44"));
    }

    #[test]
    fn test_deal_is_deterministic_with_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(6), Some(5), &mut out1).unwrap();
        handle_deal_command(Some(6), Some(5), &mut out2).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_deal_rejects_single_player() {
        let mut out = Vec::new();
        let result = handle_deal_command(Some(1), Some(1), &mut out);
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(out.is_empty());
    }
}
