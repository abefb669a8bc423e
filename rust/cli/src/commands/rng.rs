//! Random number generator verification command.
//!
//! The `rng` command shows what a seed produces: raw ChaCha20 output and the
//! first cards of the deck that seed shuffles. Useful for checking that a
//! seed reproduces the same table across machines.

use crate::error::CliError;
use crate::formatters::format_cards;
use blackjack_engine::deck::Deck;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Number of cards shown from the top of the seeded deck.
const DECK_PREVIEW: usize = 5;

/// Handle the rng command - verify random number generator properties.
///
/// # Arguments
///
/// * `seed` - Optional seed value for the RNG (uses random seed if None)
/// * `out` - Output stream for RNG sample values
///
/// # Returns
///
/// * `Ok(())` on success
/// * `Err(CliError)` on write failure
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut deck = Deck::new_with_seed(s);
    let mut top = Vec::with_capacity(DECK_PREVIEW);
    for _ in 0..DECK_PREVIEW {
        top.push(deck.draw()?);
    }
    writeln!(out, "Deck top: {}", format_cards(&top))?;
    Ok(())
}
