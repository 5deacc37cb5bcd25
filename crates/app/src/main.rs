use std::fmt;
use std::io::{self, IsTerminal};

use guess_core::model::{GuessRange, SessionState};
use services::{GameSession, RandomPicker, TextConsole};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Interactive number guessing game. Takes no arguments;");
    eprintln!("follow the on-screen menu to play, view or reset statistics, and exit.");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Help,
}

impl Command {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        match args.next() {
            None => Ok(Self::Play),
            Some(arg) if arg == "--help" || arg == "-h" => Ok(Self::Help),
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cmd = Command::parse(std::env::args().skip(1)).inspect_err(|e| {
        eprintln!("{e}");
        print_usage();
    })?;

    if cmd == Command::Help {
        print_usage();
        return Ok(());
    }

    // Only clear the screen when a person is watching the output.
    let clear_screen = io::stdout().is_terminal();
    let console = TextConsole::new(io::stdin().lock(), io::stdout().lock())
        .with_clear_screen(clear_screen);
    let mut session = GameSession::new(
        SessionState::new(GuessRange::standard()),
        console,
        RandomPicker::from_os_rng(),
    );

    match session.run() {
        Ok(()) => Ok(()),
        // Closing stdin is how a piped or Ctrl-D player leaves.
        Err(err) if err.is_input_closed() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn main() {
    if let Err(err) = run() {
        // Report once here; library crates never print diagnostics.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
