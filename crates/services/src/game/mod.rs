mod menu;
mod round;

// Public API of the game subsystem.
pub use menu::{GameSession, MenuState};
pub use round::{play_round, read_guess};
