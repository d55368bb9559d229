//! Failures of `twocard` commands, carried up to [`crate::run`] with `?`.

use std::fmt;

use twocard_engine::errors::GameError;

/// Why a `twocard` command stopped. [`crate::run`] prints it after `Error: `
/// and exits with status 2.
#[derive(Debug)]
pub enum CliError {
    /// Writing output or the round log failed
    Io(std::io::Error),

    /// The config file or a `TWOCARD_*` variable could not be used
    Config(String),

    /// The engine refused the game shape or a round
    Engine(GameError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(e) => write!(f, "Engine error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Engine(e) => Some(e),
            CliError::Config(_) => None,
        }
    }
}

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
