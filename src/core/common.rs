//! Common types for the guessing game: guess feedback and engine errors.

/// Feedback for a single guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess was above the secret.
    TooHigh,
    /// Guess was below the secret.
    TooLow,
    /// Guess matched the secret.
    Correct,
    /// The give-up sentinel was entered.
    GaveUp,
}

/// Errors returned by configuration and engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Minimum is not strictly below maximum.
    InvalidRange { min: i64, max: i64 },
    /// A fixed secret lies outside the configured range.
    SecretOutOfRange(i64),
    /// The round already ended.
    GameOver,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidRange { min, max } => {
                write!(f, "Invalid range: minimum {} must be below maximum {}", min, max)
            }
            GameError::SecretOutOfRange(secret) => {
                write!(f, "Secret {} lies outside the configured range", secret)
            }
            GameError::GameOver => write!(f, "The round is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
