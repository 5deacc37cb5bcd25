//! Shared error types for the services crate.

use thiserror::Error;

use guess_core::model::{RangeError, RoundError};

/// Errors emitted by a `Console`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConsoleError {
    #[error("console input was closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors emitted while running the game.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Console(#[from] ConsoleError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Round(#[from] RoundError),
}

impl GameError {
    /// True when the game stopped because the player closed the input stream.
    #[must_use]
    pub fn is_input_closed(&self) -> bool {
        matches!(self, GameError::Console(ConsoleError::Closed))
    }
}
