//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player Blackjack against an automated dealer"
)]
pub struct BlackjackCli {
    /// Show engine debug events on stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play rounds interactively (hit / stand from stdin)
    Play {
        /// Number of rounds to play
        #[arg(long)]
        rounds: Option<u32>,
        /// RNG seed for reproducible decks
        #[arg(long)]
        seed: Option<u64>,
        /// Render cards as Unicode playing-card glyphs.
        /// Only turns glyphs on; a config file or BLACKJACK_GLYPHS setting
        /// cannot be switched off from the command line.
        #[arg(long)]
        glyphs: bool,
    },
    /// Deal one round and show the opening table
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Auto-play rounds with a fixed stand threshold
    Sim {
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Player hits while below this total
        #[arg(long)]
        stand_on: Option<u8>,
        /// Write one JSON record per round to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a sample from the seeded RNG and the top of its deck
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration and where each value came from
    Cfg,
}
