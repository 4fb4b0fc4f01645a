//! Core guessing game engine (no_std compatible)
//!
//! This module contains the pure game logic: difficulty presets, the round
//! state machine and the scoring formula. It only depends on `rand`, `libm`
//! and the `log` facade.

pub mod common;
pub mod config;
pub mod game;
pub mod scoring;

// Re-export commonly used types
pub use common::{GameError, GuessResult};
pub use config::*;
pub use game::{GameEngine, GameStatus};
pub use scoring::compute_score;
