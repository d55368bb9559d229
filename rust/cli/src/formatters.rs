//! Card, hand and player formatters for terminal display.
//!
//! Pure functions for rendering game elements. Suits use Unicode symbols
//! with an ASCII fallback for terminals that cannot render them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use twocard_engine::cards::{Card, Rank, Suit};
//! use twocard_cli::formatters::format_card;
//!
//! let ten_clubs = Card::new(Rank::Ten, Suit::Clubs);
//! assert!(format_card(&ten_clubs) == "10♣" || format_card(&ten_clubs) == "10c");
//! ```

use twocard_engine::cards::{Card, Suit};
use twocard_engine::hand::HandRank;
use twocard_engine::player::Player;

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

fn ascii_suit(suit: Suit) -> char {
    match suit {
        Suit::Hearts => 'h',
        Suit::Diamonds => 'd',
        Suit::Clubs => 'c',
        Suit::Spades => 's',
    }
}

/// Format a Card, e.g. "10♣", or "10c" where Unicode is unavailable.
pub fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if supports_unicode() {
        text
    } else {
        text.replace(card.suit.symbol(), &ascii_suit(card.suit).to_string())
    }
}

/// Format cards separated by spaces, e.g. "A♠ K♥".
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// Format a hand rank with its category, e.g. "Straight (300)".
pub fn format_hand_rank(rank: &HandRank) -> String {
    format!("{} ({})", rank.name(), rank.value())
}

/// One line of the per-round report for a player.
///
/// Players who were never dealt show an empty hand and `-` as rank.
pub fn format_player_round(round: u32, player: &Player) -> String {
    let cards = player
        .hand()
        .map(|h| format_cards(&h))
        .unwrap_or_default();
    let rank = player
        .current_hand_rank()
        .map(|r| r.value().to_string())
        .unwrap_or_else(|_| "-".to_string());
    format!(
        "Round #{} > Player {} -> Cards: {}\tRound Score: {}\tHand rank: {}",
        round,
        player.id(),
        cards,
        player.last_round_score(),
        rank
    )
}
