use std::fmt;
use std::num::IntErrorKind;

use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeError {
    #[error("range minimum ({min}) must be below maximum ({max})")]
    Empty { min: u32, max: u32 },

    #[error("target {target} lies outside {min}-{max}")]
    OutOfRange { target: u32, min: u32, max: u32 },
}

/// Why a line of player input was not accepted as a guess.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuessError {
    #[error("not a number: {raw:?}")]
    NotANumber { raw: String },

    #[error("guess must be between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
}

//
// ─── RANGE ─────────────────────────────────────────────────────────────────────
//

/// Inclusive range of numbers the hidden target is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuessRange {
    min: u32,
    max: u32,
}

impl GuessRange {
    pub const DEFAULT_MIN: u32 = 1;
    pub const DEFAULT_MAX: u32 = 100;

    /// Creates a range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::Empty` unless `min < max`.
    pub fn new(min: u32, max: u32) -> Result<Self, RangeError> {
        if min >= max {
            return Err(RangeError::Empty { min, max });
        }
        Ok(Self { min, max })
    }

    /// The classic 1 to 100 game.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            min: Self::DEFAULT_MIN,
            max: Self::DEFAULT_MAX,
        }
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Parses one line of player input as a guess inside this range.
    ///
    /// Surrounding whitespace is ignored. Integers that overflow are reported
    /// as out of range rather than as malformed.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::NotANumber` for anything that is not a base-10
    /// integer, and `GuessError::OutOfRange` for integers outside the range.
    pub fn parse_guess(&self, input: &str) -> Result<u32, GuessError> {
        let trimmed = input.trim();
        let out_of_range = GuessError::OutOfRange {
            min: self.min,
            max: self.max,
        };

        let value = match trimmed.parse::<i64>() {
            Ok(value) => value,
            Err(err) => {
                return match err.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(out_of_range),
                    _ => Err(GuessError::NotANumber {
                        raw: trimmed.to_string(),
                    }),
                };
            }
        };

        match u32::try_from(value) {
            Ok(guess) if self.contains(guess) => Ok(guess),
            _ => Err(out_of_range),
        }
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
