#![cfg(feature = "std")]

use chrono::Local;
use serde::Serialize;

use crate::core::GameConfig;

/// Name recorded when the player leaves the name prompt blank.
pub const ANONYMOUS: &str = "Anonymous";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of one finished round, as shown in the summary and stored on the
/// leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameResult {
    pub player_name: String,
    pub difficulty: String,
    pub attempts: u32,
    pub elapsed_seconds: f64,
    pub secret_number: i64,
    pub score: f64,
    pub timestamp: String,
}

impl GameResult {
    /// Anonymous results are never written to the leaderboard.
    pub fn is_anonymous(&self) -> bool {
        self.player_name == ANONYMOUS
    }
}

/// Label stored with a result, e.g. `Medium (1-100)`.
pub fn difficulty_label(config: &GameConfig) -> String {
    format!(
        "{} ({}-{})",
        config.difficulty().label(),
        config.min_value(),
        config.max_value()
    )
}

/// Normalize a name typed at the prompt; blank becomes [`ANONYMOUS`].
pub fn player_name(input: &str) -> String {
    let name = input.trim();
    if name.is_empty() {
        ANONYMOUS.to_string()
    } else {
        name.to_string()
    }
}

/// Local wall-clock time, for display only.
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
