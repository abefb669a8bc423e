//! Deal command handler for a single opening table.
//!
//! Deals one round and prints what the player would see before acting:
//! the dealer's hole card face down and the upcard, plus the player's two
//! cards. A player dealt 21 stands automatically, so the settled table and
//! result are shown instead.

use crate::error::CliError;
use crate::formatters::format_snapshot;
use blackjack_engine::engine::Engine;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `glyphs` - Render cards as Unicode playing-card glyphs
/// * `out` - Output stream for command results
///
/// # Returns
///
/// Returns `Ok(())` on success, or `CliError` on I/O or engine errors.
pub fn handle_deal_command(
    seed: Option<u64>,
    glyphs: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut eng = Engine::new(Some(seed));
    let snap = eng.start_round()?;

    writeln!(out, "Seed: {}", seed)?;
    for line in format_snapshot(&snap, glyphs) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
