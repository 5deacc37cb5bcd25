use std::io::{BufRead, Write};

use crate::error::ConsoleError;

/// ANSI "erase display" followed by "cursor home".
const CLEAR_SEQUENCE: &str = "\x1B[2J\x1B[1;1H";

/// Line-oriented text I/O used by the game.
pub trait Console {
    /// Writes `prompt` without a line break and reads one line of input.
    ///
    /// The returned line has its trailing line terminator removed. Bytes that
    /// are not valid UTF-8 are replaced rather than reported as an error.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Closed` once the input has no more lines.
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Writes one full line of output.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the output cannot be written.
    fn say(&mut self, line: &str) -> Result<(), ConsoleError>;

    /// Clears the display. Implementations without a screen do nothing.
    ///
    /// # Errors
    ///
    /// Returns `ConsoleError::Io` if the output cannot be written.
    fn clear(&mut self) -> Result<(), ConsoleError>;
}

/// `Console` over any buffered reader and writer.
///
/// Production wires it to stdin/stdout; tests use `Cursor` input and a `Vec<u8>` sink.
pub struct TextConsole<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> TextConsole<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clear_screen: false,
        }
    }

    /// Enable or disable writing the ANSI clear sequence on `clear`.
    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    #[must_use]
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TextConsole<R, W> {
    fn prompt(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(ConsoleError::Closed);
        }
        // Undecodable bytes become U+FFFD and are rejected by the parsers.
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), ConsoleError> {
        if self.clear_screen {
            self.output.write_all(CLEAR_SEQUENCE.as_bytes())?;
            self.output.flush()?;
        }
        Ok(())
    }
}
