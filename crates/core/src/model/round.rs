use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("no round has been started")]
    NotStarted,

    #[error("the current round has already been won")]
    AlreadyWon,
}

/// Classification of one validated guess against the hidden target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    Correct {
        /// Attempts used for the round, including the winning guess.
        attempts: u32,
        /// Whether this round set a new best score.
        new_best: bool,
    },
}
