#![cfg(feature = "std")]

//! Line-oriented prompts over injected input and output streams.
//!
//! Malformed answers are retried here and never reach the caller. End of
//! input is reported as [`InputError::EndOfInput`] so callers decide how to
//! wind down.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::core::GameError;

/// Outcome of a prompt that could not produce a value.
#[derive(Debug)]
pub enum InputError {
    /// The input stream is exhausted.
    EndOfInput,
    /// Reading input or writing a prompt failed.
    Io(io::Error),
    /// The engine rejected a configuration or guess.
    Game(GameError),
}

impl From<io::Error> for InputError {
    fn from(err: io::Error) -> Self {
        InputError::Io(err)
    }
}

impl From<GameError> for InputError {
    fn from(err: GameError) -> Self {
        InputError::Game(err)
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::EndOfInput => write!(f, "End of input"),
            InputError::Io(e) => write!(f, "Console I/O error: {}", e),
            InputError::Game(e) => write!(f, "Game error: {}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::EndOfInput => None,
            InputError::Io(e) => Some(e),
            InputError::Game(e) => Some(e),
        }
    }
}

/// Interactive prompts. Implementors are also the sink for game output.
pub trait Prompt: Write {
    /// Read one line without its terminator.
    fn read_line(&mut self) -> Result<String, InputError>;

    /// Ask until the answer is an integer in `[min, max]`.
    fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, InputError>;

    /// Ask until the answer starts with `y` or `n`.
    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, InputError>;
}

/// [`Prompt`] over any buffered reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

fn strip_line_ending(line: &mut String) {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    fn read_line(&mut self) -> Result<String, InputError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(InputError::EndOfInput);
        }
        // invalid UTF-8 is replaced so it falls into the normal retry paths
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        Ok(line)
    }

    fn read_int(&mut self, prompt: &str, min: i64, max: i64) -> Result<i64, InputError> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;
            let line = self.read_line()?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                writeln!(self.output, "Please enter a value.")?;
                continue;
            }
            match trimmed.parse::<i64>() {
                Ok(value) if value >= min && value <= max => return Ok(value),
                Ok(_) => {
                    writeln!(self.output, "Enter a number between {} and {}.", min, max)?;
                }
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter an integer.")?;
                }
            }
        }
    }

    fn read_yes_no(&mut self, prompt: &str) -> Result<bool, InputError> {
        loop {
            write!(self.output, "{} (y/n): ", prompt)?;
            self.output.flush()?;
            let line = self.read_line()?;
            let Some(first) = line.trim_start().chars().next() else {
                continue;
            };
            match first.to_ascii_lowercase() {
                'y' => return Ok(true),
                'n' => return Ok(false),
                _ => writeln!(self.output, "Please reply with 'y' or 'n'.")?,
            }
        }
    }
}
