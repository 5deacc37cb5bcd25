mod menu;
mod range;
mod round;
mod session;

pub use menu::{ChoiceError, ContinueAnswer, MenuChoice};
pub use range::{GuessError, GuessRange, RangeError};
pub use round::{GuessOutcome, RoundError};
pub use session::{SessionState, SessionStats};
