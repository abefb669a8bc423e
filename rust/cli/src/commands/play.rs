//! # Play Command
//!
//! Interactive Blackjack against the automated dealer.
//!
//! Each round is dealt from a fresh deck; the player answers prompts with
//! hit (`h`), stand (`s`) or quit (`q`). The dealer turn and settlement are
//! driven by the engine, and the table is re-rendered after every action.
//!
//! ## Features
//!
//! - Interactive input validation with re-prompt on bad input
//! - Graceful quit handling (`q` or `quit`)
//! - End of input while a round is open is reported as an interruption
//! - Session tally of wins, losses and pushes

use crate::commands::Tally;
use crate::error::CliError;
use crate::formatters::{format_snapshot, supports_unicode};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_rounds};
use blackjack_engine::engine::Engine;
use blackjack_engine::game::Snapshot;
use std::io::{BufRead, Write};

/// Handle the play command: interactive rounds against the dealer
///
/// # Arguments
///
/// * `rounds` - Number of rounds to play (must be >= 1)
/// * `seed` - RNG seed for reproducible decks (default: random)
/// * `glyphs` - Render cards as Unicode playing-card glyphs
/// * `out` - Output stream for the table display
/// * `err` - Error stream for invalid input messages
/// * `stdin` - Input stream for player actions
///
/// # Returns
///
/// * `Ok(())` when all rounds were played or the player quit
/// * `Err(CliError::Interrupted)` if input ends while the player is to act
/// * `Err(CliError)` if `rounds` is 0, the engine fails, or I/O fails
pub fn handle_play_command(
    rounds: u32,
    seed: Option<u64>,
    glyphs: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if let Err(msg) = validate_rounds(rounds) {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    if glyphs && !supports_unicode() {
        ui::display_warning(err, "terminal may not render playing-card glyphs")?;
    }

    let seed = seed.unwrap_or_else(rand::random);
    writeln!(out, "play: rounds={} seed={}", rounds, seed)?;

    let mut eng = Engine::new(Some(seed));
    let mut tally = Tally::default();
    let mut quit_requested = false;
    let mut input_closed = false;

    for i in 1..=rounds {
        writeln!(out, "Round {}", i)?;
        let mut snap = eng.start_round()?;
        render(out, &snap, glyphs)?;

        while !snap.finished {
            ui::prompt_action(out)?;
            let Some(input) = read_stdin_line(stdin) else {
                writeln!(out)?;
                input_closed = true;
                break;
            };
            match parse_player_action(&input) {
                ParseResult::Action(action) => {
                    snap = eng.apply(action)?;
                    writeln!(out, "Action: {}", action.as_str())?;
                    render(out, &snap, glyphs)?;
                }
                ParseResult::Quit => {
                    quit_requested = true;
                    break;
                }
                ParseResult::Invalid(msg) => {
                    ui::write_error(err, &msg)?;
                }
            }
        }

        if quit_requested || input_closed {
            break;
        }
        if let Some(result) = snap.result {
            tally.record(result.outcome);
        }
    }

    writeln!(
        out,
        "Rounds played: {} (wins: {}, losses: {}, pushes: {})",
        tally.rounds(),
        tally.wins,
        tally.losses,
        tally.pushes
    )?;
    if input_closed {
        return Err(CliError::Interrupted(
            "input closed before the round was settled".into(),
        ));
    }
    Ok(())
}

fn render(out: &mut dyn Write, snap: &Snapshot, glyphs: bool) -> std::io::Result<()> {
    for line in format_snapshot(snap, glyphs) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(rounds: u32, seed: u64, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let res = handle_play_command(rounds, Some(seed), false, &mut out, &mut err, &mut stdin);
        (
            res,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let (res, _, err) = play(0, 1, "");
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
        assert!(err.contains("rounds must be >= 1"));
    }

    #[test]
    fn standing_settles_every_round() {
        let (res, out, _) = play(3, 42, "s\ns\ns\n");
        assert!(res.is_ok());
        assert!(out.contains("play: rounds=3 seed=42"));
        assert!(out.contains("Round 3"));
        assert!(out.contains("Rounds played: 3"));
        assert_eq!(out.matches("Result:").count(), 3);
    }

    #[test]
    fn quit_stops_before_settlement() {
        let (res, out, _) = play(2, 7, "q\n");
        assert!(res.is_ok());
        // a round dealt 21 settles without input; the quit ends the session
        assert!(!out.contains("Rounds played: 2"));
    }

    #[test]
    fn eof_mid_round_is_an_interruption() {
        // runs until a round waits for input, then finds none
        let (res, out, _) = play(50, 9, "");
        assert!(matches!(res, Err(CliError::Interrupted(_))));
        assert!(out.contains("Rounds played:"));
    }

    #[test]
    fn eof_after_last_round_is_not_read() {
        let (res, out, _) = play(1, 9, "s
s
");
        assert!(res.is_ok());
        assert!(out.contains("Rounds played: 1"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (res, out, err) = play(1, 3, "double\ns\n");
        assert!(res.is_ok());
        // unless the player was dealt 21 the bad input is reported
        if !err.is_empty() {
            assert!(err.contains("Unrecognized action"));
            assert!(out.contains("Action: stand"));
        }
        assert!(out.contains("Rounds played: 1"));
    }

    #[test]
    fn same_seed_and_input_replay_identically() {
        let (_, a, _) = play(4, 1234, "h\ns\nh\nh\ns\ns\ns\ns\n");
        let (_, b, _) = play(4, 1234, "h\ns\nh\nh\ns\ns\ns\ns\n");
        assert_eq!(a, b);
    }
}
