//! Commonly used types and utilities for ease of import.

pub use crate::{compute_score, Difficulty, GameConfig, GameEngine, GameStatus, GuessResult};

#[cfg(feature = "std")]
pub use crate::{AiPlayer, CliPlayer, Console, GameResult, Leaderboard, Player, Prompt};
