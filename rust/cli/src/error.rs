//! Error types for the CLI application.
//!
//! Every command handler returns `Result<(), CliError>`; [`crate::run`]
//! maps the variants to exit codes.

use std::fmt;

use blackjack_engine::errors::GameError;

use crate::config::ConfigError;

/// Custom error type for CLI operations.
///
/// This enum encompasses all error types that can occur during CLI execution,
/// allowing for proper error propagation using the `?` operator.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine invariant violation (e.g. a deck ran out mid-round)
    Engine(GameError),

    /// Input ended while a round was waiting for the player
    Interrupted(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
            CliError::Interrupted(msg) => write!(f, "Interrupted: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

// Automatic conversion from std::io::Error to CliError
impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        CliError::Engine(error)
    }
}

impl From<ConfigError> for CliError {
    fn from(error: ConfigError) -> Self {
        CliError::Config(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn engine_error_keeps_source() {
        let err = CliError::from(GameError::EmptyDeck);
        assert!(err.to_string().starts_with("Engine error:"));
        assert!(err.source().is_some());
    }

    #[test]
    fn interrupted_has_no_source() {
        let err = CliError::Interrupted("input closed".into());
        assert_eq!(err.to_string(), "Interrupted: input closed");
        assert!(err.source().is_none());
    }

    #[test]
    fn config_error_is_flattened_to_message() {
        let err = CliError::from(ConfigError::Invalid("Invalid seed".into()));
        assert_eq!(err.to_string(), "Configuration error: Invalid seed");
    }
}
