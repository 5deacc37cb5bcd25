use guess_core::model::{ContinueAnswer, MenuChoice, SessionState};

use crate::console::Console;
use crate::error::GameError;
use crate::picker::TargetPicker;
use crate::screens;

use super::round::play_round;

/// States of the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Menu,
    Playing,
    Stats,
    Reset,
    ConfirmContinue,
    Exit,
}

/// Owns the session state and drives the menu loop over a console.
///
/// Each visit to the menu handles one action; afterwards the player is asked
/// whether to start another session.
pub struct GameSession<C, P> {
    state: SessionState,
    console: C,
    picker: P,
    current: MenuState,
}

impl<C: Console, P: TargetPicker> GameSession<C, P> {
    #[must_use]
    pub fn new(state: SessionState, console: C, picker: P) -> Self {
        Self {
            state,
            console,
            picker,
            current: MenuState::Menu,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    #[must_use]
    pub fn current(&self) -> MenuState {
        self.current
    }

    /// Shows the welcome screen and runs until the player exits.
    ///
    /// # Errors
    ///
    /// Returns `GameError` on console failures, including closed input.
    pub fn run(&mut self) -> Result<(), GameError> {
        self.show_welcome()?;
        while self.current != MenuState::Exit {
            self.step()?;
        }
        Ok(())
    }

    /// Handles the current state once and moves to the next one.
    ///
    /// # Errors
    ///
    /// Returns `GameError` on console failures, including closed input.
    pub fn step(&mut self) -> Result<MenuState, GameError> {
        let next = match self.current {
            MenuState::Menu => self.choose()?,
            MenuState::Playing => {
                play_round(&mut self.state, &mut self.console, &mut self.picker)?;
                self.console.prompt(screens::ACKNOWLEDGE_PROMPT)?;
                MenuState::ConfirmContinue
            }
            MenuState::Stats => {
                for line in screens::statistics(self.state.stats()) {
                    self.console.say(&line)?;
                }
                MenuState::ConfirmContinue
            }
            MenuState::Reset => {
                self.state.reset_statistics();
                self.console.say(screens::STATS_RESET)?;
                MenuState::ConfirmContinue
            }
            MenuState::ConfirmContinue => self.confirm_continue()?,
            MenuState::Exit => MenuState::Exit,
        };
        self.current = next;
        Ok(next)
    }

    fn show_welcome(&mut self) -> Result<(), GameError> {
        self.console.clear()?;
        for line in screens::welcome(self.state.range()) {
            self.console.say(&line)?;
        }
        Ok(())
    }

    fn choose(&mut self) -> Result<MenuState, GameError> {
        for line in screens::menu() {
            self.console.say(&line)?;
        }
        let input = self.console.prompt(screens::MENU_PROMPT)?;

        let next = match input.parse::<MenuChoice>() {
            Ok(MenuChoice::Play) => MenuState::Playing,
            Ok(MenuChoice::ViewStats) => MenuState::Stats,
            Ok(MenuChoice::ResetStats) => MenuState::Reset,
            Ok(MenuChoice::Exit) => {
                self.console.say(screens::GOODBYE)?;
                MenuState::Exit
            }
            Err(_) => {
                self.console.say(screens::INVALID_CHOICE)?;
                MenuState::Menu
            }
        };
        Ok(next)
    }

    fn confirm_continue(&mut self) -> Result<MenuState, GameError> {
        let input = self.console.prompt(screens::CONTINUE_PROMPT)?;
        match ContinueAnswer::parse(&input) {
            ContinueAnswer::Yes => {
                self.show_welcome()?;
                Ok(MenuState::Menu)
            }
            ContinueAnswer::No => {
                self.console.say(screens::GOODBYE)?;
                Ok(MenuState::Exit)
            }
        }
    }
}
