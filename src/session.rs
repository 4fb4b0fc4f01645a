#![cfg(feature = "std")]

//! One round of play: the guess loop, then the name prompt and result
//! bookkeeping.

use std::time::{Duration, Instant};

use rand::rngs::SmallRng;

use crate::console::{InputError, Prompt};
use crate::core::{compute_score, GameConfig, GameEngine, GameStatus, GuessResult};
use crate::leaderboard::{Leaderboard, RecordFormat};
use crate::player::Player;
use crate::record::{self, GameResult};

const NAME_PROMPT: &str = "\nEnter your name for the leaderboard (leave blank to skip): ";

/// How the guess loop ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundOutcome {
    pub status: GameStatus,
    pub attempts: u32,
    pub secret: i64,
    pub elapsed: Duration,
}

/// Run the guess loop until the engine reaches a terminal state.
pub fn play_round(
    engine: &mut GameEngine,
    player: &mut dyn Player,
    console: &mut dyn Prompt,
) -> Result<RoundOutcome, InputError> {
    let config = *engine.config();
    writeln!(
        console,
        "\nI have selected a number between {} and {}.",
        config.min_value(),
        config.max_value()
    )?;
    if config.has_attempt_limit() {
        writeln!(console, "You have up to {} attempts.", config.max_attempts())?;
    }
    writeln!(console, "Type your guess and press Enter.")?;
    log::debug!(
        "round started: {} ({}..={}), max attempts {}",
        config.difficulty().label(),
        config.min_value(),
        config.max_value(),
        config.max_attempts()
    );

    let start = Instant::now();
    while !engine.status().is_over() {
        let (low, high) = engine.hint_range();
        write!(console, "Allowed range: [{} - {}] ", low, high)?;
        console.flush()?;
        let guess = player.select_guess(console, low, high)?;
        let result = engine.guess(guess)?;
        log::trace!("guess {} -> {:?}", guess, result);
        player.handle_guess_result(guess, result);

        match result {
            GuessResult::GaveUp => {
                writeln!(console, "You gave up. The number was {}.", engine.secret())?;
            }
            GuessResult::Correct => {
                writeln!(
                    console,
                    "Congratulations! You guessed correctly in {} attempts.",
                    engine.attempts()
                )?;
            }
            GuessResult::TooHigh => writeln!(console, "Too high.")?,
            GuessResult::TooLow => writeln!(console, "Too low.")?,
        }

        if engine.status() == GameStatus::AttemptsExhausted {
            writeln!(
                console,
                "Reached maximum attempts ({}). You lose. The number was {}.",
                config.max_attempts(),
                engine.secret()
            )?;
        }
    }
    let elapsed = start.elapsed();

    log::debug!(
        "round over: {:?} after {} attempts in {:.2}s",
        engine.status(),
        engine.attempts(),
        elapsed.as_secs_f64()
    );
    Ok(RoundOutcome {
        status: engine.status(),
        attempts: engine.attempts(),
        secret: engine.secret(),
        elapsed,
    })
}

/// Assemble the result for a finished round.
pub fn build_result(config: &GameConfig, outcome: &RoundOutcome, player_name: String) -> GameResult {
    let elapsed_seconds = outcome.elapsed.as_secs_f64();
    GameResult {
        player_name,
        difficulty: record::difficulty_label(config),
        attempts: outcome.attempts,
        elapsed_seconds,
        secret_number: outcome.secret,
        score: compute_score(outcome.attempts, elapsed_seconds, config),
        timestamp: record::now_timestamp(),
    }
}

/// Play a full session: draw a secret, run the guess loop, ask for a name and
/// record the result unless the player stays anonymous.
pub fn play_session<F: RecordFormat>(
    config: &GameConfig,
    rng: &mut SmallRng,
    player: &mut dyn Player,
    console: &mut dyn Prompt,
    leaderboard: &Leaderboard<F>,
) -> Result<GameResult, InputError> {
    let mut engine = GameEngine::new(*config, rng);
    let outcome = play_round(&mut engine, player, console)?;

    write!(console, "{}", NAME_PROMPT)?;
    console.flush()?;
    let name = record::player_name(&console.read_line()?);
    let result = build_result(config, &outcome, name);

    if !result.is_anonymous() {
        if let Err(e) = leaderboard.append(&result) {
            log::warn!(
                "could not write leaderboard {}: {}",
                leaderboard.path().display(),
                e
            );
            eprintln!("Warning: could not write leaderboard file: {}", e);
        }
    }
    Ok(result)
}
