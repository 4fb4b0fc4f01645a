//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - CliPlayer: Interactive command-line player
//! - AiPlayer: Bisection guesser used by the simulator

#![cfg(feature = "std")]

use crate::console::{InputError, Prompt};
use crate::core::GuessResult;

/// Source of guesses for a round.
pub trait Player {
    /// Choose the next guess. `low..=high` is the range still consistent
    /// with the feedback so far.
    fn select_guess(
        &mut self,
        console: &mut dyn Prompt,
        low: i64,
        high: i64,
    ) -> Result<i64, InputError>;

    /// Inform the player of the feedback for its last guess.
    fn handle_guess_result(&mut self, _guess: i64, _result: GuessResult) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
