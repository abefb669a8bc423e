//! UI helper functions for terminal output formatting.
//!
//! Shared by every command so errors and warnings look the same everywhere.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Prompt shown while the player is to act; flushed so it appears before input.
pub fn prompt_action(out: &mut dyn Write) -> std::io::Result<()> {
    write!(out, "Action (h)it / (s)tand / (q)uit: ")?;
    out.flush()
}
