use guess_core::model::{GuessError, GuessOutcome, GuessRange, SessionState};

use crate::console::Console;
use crate::error::{ConsoleError, GameError};
use crate::picker::TargetPicker;
use crate::screens;

/// Prompts until the player enters a number inside `range`.
///
/// Malformed and out-of-range lines are answered with a hint and asked again;
/// they never reach the caller.
///
/// # Errors
///
/// Returns `ConsoleError` if the console cannot be read or written.
pub fn read_guess<C>(console: &mut C, range: GuessRange) -> Result<u32, ConsoleError>
where
    C: Console + ?Sized,
{
    let prompt = screens::guess_prompt(range);
    loop {
        let line = console.prompt(&prompt)?;
        match range.parse_guess(&line) {
            Ok(guess) => return Ok(guess),
            Err(GuessError::NotANumber { .. }) => console.say(screens::INVALID_INPUT)?,
            Err(_) => console.say(&screens::out_of_range(range))?,
        }
    }
}

/// Plays one round to the winning guess.
///
/// Draws a fresh target, then reads and classifies guesses, writing one
/// feedback line per guess. Attempts, best score and rounds played are
/// recorded on `state`.
///
/// # Errors
///
/// Returns `GameError::Range` if the picker yields a target outside the
/// session range, and `GameError::Console` on console failures.
pub fn play_round<C, P>(
    state: &mut SessionState,
    console: &mut C,
    picker: &mut P,
) -> Result<(), GameError>
where
    C: Console + ?Sized,
    P: TargetPicker + ?Sized,
{
    let range = state.range();
    state.reset_round(picker.pick(range))?;
    console.say(screens::ROUND_START)?;

    loop {
        let guess = read_guess(console, range)?;
        let outcome = state.submit_guess(guess)?;
        console.say(&screens::feedback(outcome))?;

        if matches!(outcome, GuessOutcome::Correct { .. }) {
            return Ok(());
        }
    }
}
