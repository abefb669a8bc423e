//! # Blackjack CLI Library
//!
//! Terminal front end for the blackjack engine. The engine decides every
//! rule; this crate parses commands, resolves configuration, reads player
//! input and renders snapshots.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the subcommand,
//! reading player input from stdin. [`run_with_input`] takes the input
//! stream explicitly.
//!
//! ## Example Usage
//!
//! ```
//! use std::io::{self, Cursor};
//! let args = vec!["blackjack", "play", "--rounds", "1", "--seed", "42"];
//! let mut input = Cursor::new(b"s\n".to_vec());
//! let code = blackjack_cli::run_with_input(args, &mut input, &mut io::sink(), &mut io::sink());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively
//! - `deal`: Deal a single round for inspection
//! - `sim`: Auto-play rounds with a stand threshold, optionally writing JSONL records
//! - `rng`: Show what a seed produces
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "deal", "sim", "rng", "cfg"];

/// Main entry point for the CLI application, reading player input from stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`] with an explicit input stream for `play`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Blackjack CLI");
                    write_or_exit!(err, "Usage: blackjack <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: blackjack --help");
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ CliError::Interrupted(_)) => {
            write_or_exit!(err, "{}", e);
            exit_code::INTERRUPTED
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Deal { seed } => {
            let cfg = config::load()?;
            handle_deal_command(seed.or(cfg.seed), cfg.glyphs, out)
        }
        Commands::Play {
            rounds,
            seed,
            glyphs,
        } => {
            let cfg = config::load()?;
            handle_play_command(
                rounds.unwrap_or(cfg.rounds),
                seed.or(cfg.seed),
                glyphs || cfg.glyphs,
                out,
                err,
                input,
            )
        }
        Commands::Sim {
            rounds,
            seed,
            stand_on,
            output,
        } => {
            let cfg = config::load()?;
            handle_sim_command(
                rounds.unwrap_or(cfg.rounds),
                seed.or(cfg.seed),
                stand_on.unwrap_or(cfg.stand_on),
                output,
                out,
                err,
            )
        }
    }
}
