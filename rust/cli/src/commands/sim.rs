//! # Sim Command
//!
//! Plays many rounds without input. The automated player follows a single
//! threshold rule: hit while the hand is below `stand_on`, otherwise stand.
//! Results are tallied and, with `--output`, every round is written as one
//! JSON line for later inspection.

use crate::commands::Tally;
use crate::error::CliError;
use crate::ui;
use crate::validation::{validate_rounds, validate_stand_on};
use blackjack_engine::engine::Engine;
use blackjack_engine::game::Snapshot;
use blackjack_engine::logger::{RoundLogger, RoundRecord};
use blackjack_engine::player::PlayerAction;
use std::io::Write;
use std::path::PathBuf;

/// Handle the sim command.
///
/// # Arguments
///
/// * `rounds` - Number of rounds to simulate (must be >= 1)
/// * `seed` - RNG seed (default: random)
/// * `stand_on` - Threshold total at which the automated player stands
/// * `output` - Optional JSONL file receiving one `RoundRecord` per round
/// * `out` - Output stream for the summary
/// * `err` - Error stream for validation messages
pub fn handle_sim_command(
    rounds: u32,
    seed: Option<u64>,
    stand_on: u8,
    output: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let validated = validate_rounds(rounds).and_then(|_| validate_stand_on(stand_on));
    if let Err(msg) = validated {
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut logger = match &output {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "sim: rounds={} seed={} stand_on={}",
        rounds, seed, stand_on
    )?;

    let mut eng = Engine::new(Some(seed));
    let mut tally = Tally::default();
    for _ in 0..rounds {
        let mut snap = eng.start_round()?;
        while !snap.finished {
            snap = eng.apply(choose_action(&snap, stand_on))?;
        }
        if let Some(result) = snap.result {
            tally.record(result.outcome);
        }
        if let Some(logger) = logger.as_mut()
            && let Some(record) = RoundRecord::from_state(logger.next_id(), eng.seed(), eng.state())
        {
            logger.write(&record)?;
        }
    }

    writeln!(
        out,
        "Wins: {} Losses: {} Pushes: {}",
        tally.wins, tally.losses, tally.pushes
    )?;
    writeln!(out, "Win rate: {:.2}%", tally.win_rate())?;
    if let Some(path) = output {
        writeln!(out, "Records: {}", path.display())?;
    }
    Ok(())
}

fn choose_action(snap: &Snapshot, stand_on: u8) -> PlayerAction {
    if snap.player_total < u32::from(stand_on) {
        PlayerAction::Hit
    } else {
        PlayerAction::Stand
    }
}
