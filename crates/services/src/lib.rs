#![forbid(unsafe_code)]

pub mod console;
pub mod error;
pub mod game;
pub mod picker;
pub mod screens;

pub use guess_core::model::{GuessRange, SessionState, SessionStats};

pub use console::{Console, TextConsole};
pub use error::{ConsoleError, GameError};
pub use game::{GameSession, MenuState, play_round, read_guess};
pub use picker::{FixedPicker, RandomPicker, TargetPicker};
