use crate::console::{InputError, Prompt};
use crate::core::GIVE_UP;

use super::Player;

/// Guesses the midpoint of the remaining range.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }

    /// Midpoint of `low..=high`, stepping off the give-up sentinel when the
    /// range allows it.
    pub fn bisect(low: i64, high: i64) -> i64 {
        let mid = low + (high - low) / 2;
        if mid != GIVE_UP {
            return mid;
        }
        if high > GIVE_UP {
            GIVE_UP + 1
        } else if low < GIVE_UP {
            GIVE_UP - 1
        } else {
            // 0 is the only candidate left
            GIVE_UP
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_guess(
        &mut self,
        console: &mut dyn Prompt,
        low: i64,
        high: i64,
    ) -> Result<i64, InputError> {
        let guess = Self::bisect(low, high);
        writeln!(console, "AI guesses {}", guess)?;
        Ok(guess)
    }
}
