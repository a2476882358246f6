//! Error types for forage_core.
//!
//! The core performs no I/O, so the taxonomy is narrow: bad construction
//! parameters and bad commands from the shell. Degenerate ticks are not
//! errors; see [`crate::update::TickStatus`].

use thiserror::Error;

/// Main error type for forage_core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Counts, arena size or tuning values outside their accepted ranges
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A command referenced a player that does not exist
    #[error("Unknown player: {0}")]
    UnknownPlayer(u32),

    /// A command carried a value the simulation cannot use
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type alias for forage_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

impl SimError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new invalid command error.
    #[must_use]
    pub fn invalid_command<S: Into<String>>(msg: S) -> Self {
        Self::InvalidCommand(msg.into())
    }
}

/// Returns `InvalidConfiguration` with the formatted message unless `$cond` holds.
macro_rules! ensure_config {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::SimError::invalid_configuration(format!($($arg)+)));
        }
    };
}

pub(crate) use ensure_config;
