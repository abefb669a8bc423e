//! Input validation and parsing for interactive play and command options.
//!
//! Parsing returns plain enums or `Result<_, String>` so callers decide how
//! to surface a problem (re-prompt, warning, or exit code).

use blackjack_engine::player::PlayerAction;

/// Lowest threshold the automated player accepts for `stand_on`.
pub const MIN_STAND_ON: u8 = 12;
/// Highest threshold; at 21 the automated player hits until it cannot.
pub const MAX_STAND_ON: u8 = 21;

/// Result type for parsing user input into player actions.
///
/// - Valid action (hit or stand)
/// - Quit command (user wants to exit)
/// - Invalid input with error message
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or the quit command.
///
/// Accepts (case-insensitive): "h"/"hit", "s"/"stand", "q"/"quit".
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_player_action, ParseResult};
/// use blackjack_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("HIT"), ParseResult::Action(PlayerAction::Hit));
/// assert_eq!(parse_player_action(" s "), ParseResult::Action(PlayerAction::Stand));
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("double") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "q" | "quit" => ParseResult::Quit,
        "h" | "hit" => ParseResult::Action(PlayerAction::Hit),
        "s" | "stand" => ParseResult::Action(PlayerAction::Stand),
        other => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Use hit (h), stand (s) or quit (q)",
            other
        )),
    }
}

pub fn validate_rounds(rounds: u32) -> Result<u32, String> {
    if rounds == 0 {
        return Err("rounds must be >= 1".to_string());
    }
    Ok(rounds)
}

pub fn validate_stand_on(stand_on: u8) -> Result<u8, String> {
    if !(MIN_STAND_ON..=MAX_STAND_ON).contains(&stand_on) {
        return Err(format!(
            "stand_on must be between {} and {}, got {}",
            MIN_STAND_ON, MAX_STAND_ON, stand_on
        ));
    }
    Ok(stand_on)
}
