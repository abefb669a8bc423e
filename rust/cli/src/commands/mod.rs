//! Command handler modules for the blackjack CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) and, for `play`,
//!   the input stream are passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

mod cfg;
mod deal;
mod play;
mod rng;
mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;

use blackjack_engine::rules::Outcome;

/// Per-session outcome counts shared by `play` and `sim`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Lose => self.losses += 1,
            Outcome::Push => self.pushes += 1,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.wins + self.losses + self.pushes
    }

    /// Wins as a percentage of settled rounds; 0 when nothing was played.
    pub fn win_rate(&self) -> f64 {
        match self.rounds() {
            0 => 0.0,
            n => f64::from(self.wins) * 100.0 / f64::from(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_counts_each_outcome() {
        let mut t = Tally::default();
        t.record(Outcome::Win);
        t.record(Outcome::Lose);
        t.record(Outcome::Lose);
        t.record(Outcome::Push);
        assert_eq!(t.rounds(), 4);
        assert_eq!(t.win_rate(), 25.0);
        assert_eq!(Tally::default().win_rate(), 0.0);
    }
}
