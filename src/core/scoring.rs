//! Score for a finished round.
//!
//! The base score shrinks with the size of the range (the information needed
//! to find the secret), then loses 20 points per extra attempt and half a
//! point per second. Limited rounds finished in under half the allowance get
//! up to a 50% bonus.

use super::config::GameConfig;

const BASE_POINTS: f64 = 1000.0;
const ATTEMPT_PENALTY: f64 = 20.0;
const SECONDS_PER_POINT: f64 = 2.0;

/// Compute the score for a round. `attempts` is floored at 1.
pub fn compute_score(attempts: u32, elapsed_seconds: f64, config: &GameConfig) -> f64 {
    let attempts = attempts.max(1);
    let range_size = config.range_size() as f64;
    let base = BASE_POINTS / libm::log2(range_size + 1.0);
    let attempt_penalty = ATTEMPT_PENALTY * (attempts - 1) as f64;
    let time_penalty = elapsed_seconds / SECONDS_PER_POINT;

    let mut score = base - attempt_penalty - time_penalty;
    if config.has_attempt_limit() {
        let frac = attempts as f64 / config.max_attempts() as f64;
        score *= 1.0 + (0.5 - frac).max(0.0);
    }
    score.max(0.0)
}
