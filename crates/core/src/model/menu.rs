use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChoiceError {
    #[error("unknown menu choice: {raw:?}")]
    Unknown { raw: String },
}

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play,
    ViewStats,
    ResetStats,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Play,
        MenuChoice::ViewStats,
        MenuChoice::ResetStats,
        MenuChoice::Exit,
    ];

    /// Key the player types to pick this entry.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::Play => "1",
            MenuChoice::ViewStats => "2",
            MenuChoice::ResetStats => "3",
            MenuChoice::Exit => "4",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Play => "Play Game",
            MenuChoice::ViewStats => "View Statistics",
            MenuChoice::ResetStats => "Reset Statistics",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|choice| choice.key() == trimmed)
            .ok_or_else(|| ChoiceError::Unknown {
                raw: trimmed.to_string(),
            })
    }
}

/// Answer to "play another session?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueAnswer {
    Yes,
    No,
}

impl ContinueAnswer {
    /// Only `y` and `yes` (any case) continue; everything else declines.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let answer = input.trim().to_ascii_lowercase();
        if answer == "y" || answer == "yes" {
            ContinueAnswer::Yes
        } else {
            ContinueAnswer::No
        }
    }
}
