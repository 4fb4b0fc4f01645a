use crate::console::{InputError, Prompt};

use super::Player;

const GUESS_PROMPT: &str = "Enter guess (or 0 to give up): ";

/// Human player typing guesses at the console.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn select_guess(
        &mut self,
        console: &mut dyn Prompt,
        _low: i64,
        _high: i64,
    ) -> Result<i64, InputError> {
        // any 32-bit value is accepted, even outside the hint range
        console.read_int(GUESS_PROMPT, i32::MIN as i64, i32::MAX as i64)
    }
}
