use rand::rngs::SmallRng;
use rand::Rng;

use super::{
    common::{GameError, GuessResult},
    config::{GameConfig, GIVE_UP},
};

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingGuess,
    Correct,
    GaveUp,
    AttemptsExhausted,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::AwaitingGuess)
    }
}

/// Core round logic: the secret, the attempt counter and the hint range.
pub struct GameEngine {
    config: GameConfig,
    secret: i64,
    attempts: u32,
    low: i64,
    high: i64,
    status: GameStatus,
}

impl GameEngine {
    /// Start a round with a secret drawn uniformly from the configured range.
    pub fn new(config: GameConfig, rng: &mut SmallRng) -> Self {
        let secret = rng.random_range(config.min_value()..=config.max_value());
        log::trace!("secret drawn: {}", secret);
        Self::start(config, secret)
    }

    /// Start a round with a known secret.
    pub fn with_secret(config: GameConfig, secret: i64) -> Result<Self, GameError> {
        if secret < config.min_value() || secret > config.max_value() {
            return Err(GameError::SecretOutOfRange(secret));
        }
        Ok(Self::start(config, secret))
    }

    fn start(config: GameConfig, secret: i64) -> Self {
        Self {
            config,
            secret,
            attempts: 0,
            low: config.min_value(),
            high: config.max_value(),
            status: GameStatus::AwaitingGuess,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Guesses counted so far. The give-up sentinel is never counted.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Range still consistent with the feedback given so far.
    pub fn hint_range(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    /// Apply one guess and return its feedback.
    ///
    /// After a wrong guess the status may move to
    /// [`GameStatus::AttemptsExhausted`] if the attempt limit was reached.
    pub fn guess(&mut self, guess: i64) -> Result<GuessResult, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if guess == GIVE_UP {
            self.status = GameStatus::GaveUp;
            return Ok(GuessResult::GaveUp);
        }

        self.attempts += 1;
        if guess == self.secret {
            self.status = GameStatus::Correct;
            return Ok(GuessResult::Correct);
        }

        let result = if guess > self.secret {
            self.high = self.high.min(guess.saturating_sub(1));
            GuessResult::TooHigh
        } else {
            self.low = self.low.max(guess.saturating_add(1));
            GuessResult::TooLow
        };

        if self.config.has_attempt_limit() && self.attempts >= self.config.max_attempts() {
            self.status = GameStatus::AttemptsExhausted;
        }
        Ok(result)
    }
}
