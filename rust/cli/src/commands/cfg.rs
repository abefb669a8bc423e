//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "seed": {
//!     "value": null,
//!     "source": "default"
//!   },
//!   "stand_on": {
//!     "value": 17,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "stand_on": {
            "value": config.stand_on,
            "source": sources.stand_on,
        },
        "glyphs": {
            "value": config.glyphs,
            "source": sources.glyphs,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
