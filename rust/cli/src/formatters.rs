//! Card, hand, and snapshot formatters for terminal display.
//!
//! Pure functions that turn engine snapshots into text. Two card styles are
//! supported:
//!
//! - **Text**: rank label plus suit symbol ("10♦", "A♠"), with ASCII suit
//!   letters ("10d", "As") where the terminal cannot show Unicode symbols.
//! - **Glyphs**: single characters from the Unicode Playing Cards block
//!   (U+1F0A0..U+1F0DF), enabled with `--glyphs`.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_cards(&[ace_spades]).starts_with("[A"));
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::game::{CardView, Snapshot};
use blackjack_engine::rules::{Outcome, ResultReason, RoundResult};

/// Card back in the Unicode Playing Cards block.
pub const CARD_BACK_GLYPH: char = '\u{1F0A0}';

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
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

/// Format a Suit as a symbol, or a lowercase letter without Unicode support.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// # use blackjack_cli::formatters::format_card;
///
/// let ten = Card::new(Rank::Ten, Suit::Diamonds);
/// let formatted = format_card(&ten);
/// assert!(formatted == "10♦" || formatted == "10d");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit))
}

/// Glyph from the Unicode Playing Cards block.
///
/// Each suit occupies a row of 16 code points; the Knight at offset 0xC is
/// skipped, so Queen and King sit at 0xD and 0xE.
pub fn card_glyph(card: &Card) -> char {
    let base: u32 = match card.suit {
        Suit::Spades => 0x1F0A0,
        Suit::Hearts => 0x1F0B0,
        Suit::Diamonds => 0x1F0C0,
        Suit::Clubs => 0x1F0D0,
    };
    let offset: u32 = match card.rank {
        Rank::Jack => 0xB,
        Rank::Queen => 0xD,
        Rank::King => 0xE,
        r => r as u32,
    };
    char::from_u32(base + offset).unwrap_or(char::REPLACEMENT_CHARACTER)
}

pub fn format_card_view(view: &CardView, glyphs: bool) -> String {
    match (view, glyphs) {
        (CardView::Up(c), false) => format_card(c),
        (CardView::Up(c), true) => card_glyph(c).to_string(),
        (CardView::Down, false) => "??".to_string(),
        (CardView::Down, true) => CARD_BACK_GLYPH.to_string(),
    }
}

/// Format cards in bracket notation, e.g. "[A♠ K♥]" or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let views: Vec<CardView> = cards.iter().copied().map(CardView::Up).collect();
    format_views(&views, false)
}

pub fn format_views(views: &[CardView], glyphs: bool) -> String {
    let formatted: Vec<String> = views.iter().map(|v| format_card_view(v, glyphs)).collect();
    format!("[{}]", formatted.join(" "))
}

/// Short, player-facing description of a settled round.
///
/// ```rust
/// use blackjack_engine::rules::{Outcome, ResultReason, RoundResult};
/// # use blackjack_cli::formatters::format_result;
///
/// let r = RoundResult { outcome: Outcome::Win, reason: ResultReason::DealerBust };
/// assert_eq!(format_result(&r), "Dealer busts. You win.");
/// ```
pub fn format_result(result: &RoundResult) -> &'static str {
    match (result.outcome, result.reason) {
        (_, ResultReason::PlayerBust) => "Bust. You lose.",
        (_, ResultReason::DealerBust) => "Dealer busts. You win.",
        (Outcome::Win, _) => "You win.",
        (Outcome::Lose, _) => "You lose.",
        (Outcome::Push, _) => "Push.",
    }
}

/// Two- or three-line rendering of a snapshot: dealer, player, and the
/// result once the round is settled.
pub fn format_snapshot(snap: &Snapshot, glyphs: bool) -> Vec<String> {
    let player_views: Vec<CardView> = snap.player.iter().copied().map(CardView::Up).collect();
    let mut lines = vec![
        format!(
            "Dealer: {} ({})",
            format_views(&snap.dealer, glyphs),
            snap.dealer_visible_total
        ),
        format!(
            "Player: {} ({})",
            format_views(&player_views, glyphs),
            snap.player_total
        ),
    ];
    if let Some(result) = &snap.result {
        lines.push(format!("Result: {}", format_result(result)));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::all_ranks;
    use blackjack_engine::game::Phase;

    #[test]
    fn glyphs_skip_knight() {
        assert_eq!(card_glyph(&Card::new(Rank::Ace, Suit::Spades)), '\u{1F0A1}');
        assert_eq!(card_glyph(&Card::new(Rank::Ten, Suit::Hearts)), '\u{1F0BA}');
        assert_eq!(card_glyph(&Card::new(Rank::Jack, Suit::Diamonds)), '\u{1F0CB}');
        assert_eq!(card_glyph(&Card::new(Rank::Queen, Suit::Clubs)), '\u{1F0DD}');
        assert_eq!(card_glyph(&Card::new(Rank::King, Suit::Clubs)), '\u{1F0DE}');
    }

    #[test]
    fn glyphs_are_unique_per_suit() {
        let mut seen = std::collections::HashSet::new();
        for r in all_ranks() {
            assert!(seen.insert(card_glyph(&Card::new(r, Suit::Hearts))));
        }
        assert!(!seen.contains(&CARD_BACK_GLYPH));
    }

    #[test]
    fn face_down_card_never_shows_rank() {
        assert_eq!(format_card_view(&CardView::Down, false), "??");
        assert_eq!(format_card_view(&CardView::Down, true), "\u{1F0A0}");
    }

    #[test]
    fn empty_cards_format_as_brackets() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn snapshot_lines_include_result_only_when_settled() {
        let mut snap = Snapshot {
            player: vec![Card::new(Rank::Ten, Suit::Clubs), Card::new(Rank::Nine, Suit::Clubs)],
            dealer: vec![CardView::Down, CardView::Up(Card::new(Rank::Six, Suit::Clubs))],
            player_total: 19,
            dealer_visible_total: 6,
            phase: Phase::PlayerTurn,
            finished: false,
            result: None,
            wins: 0,
        };
        let lines = format_snapshot(&snap, false);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Dealer: [?? 6"));
        assert!(lines[0].ends_with("(6)"));
        assert!(lines[1].ends_with("(19)"));

        snap.result = Some(RoundResult {
            outcome: Outcome::Push,
            reason: ResultReason::Comparison,
        });
        let lines = format_snapshot(&snap, false);
        assert_eq!(lines[2], "Result: Push.");
    }
}
