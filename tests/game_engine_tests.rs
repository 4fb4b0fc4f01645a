use numguess::{Difficulty, GameConfig, GameEngine, GameError, GameStatus, GuessResult};
use rand::{rngs::SmallRng, SeedableRng};

fn config(min: i64, max: i64, max_attempts: u32) -> GameConfig {
    GameConfig::new(Difficulty::Custom, min, max, max_attempts).unwrap()
}

#[test]
fn presets_match_menu() {
    let easy = Difficulty::Easy.preset().unwrap();
    assert_eq!((easy.min_value(), easy.max_value(), easy.max_attempts()), (1, 20, 0));
    let medium = Difficulty::Medium.preset().unwrap();
    assert_eq!((medium.min_value(), medium.max_value(), medium.max_attempts()), (1, 100, 10));
    let hard = Difficulty::Hard.preset().unwrap();
    assert_eq!((hard.min_value(), hard.max_value(), hard.max_attempts()), (1, 1000, 12));
    assert!(Difficulty::Custom.preset().is_none());

    for d in Difficulty::ALL {
        assert_eq!(Difficulty::from_menu_index(d.menu_index()), Some(d));
    }
    assert_eq!(Difficulty::from_menu_index(0), None);
    assert_eq!(Difficulty::from_menu_index(5), None);
}

#[test]
fn config_rejects_inverted_or_empty_range() {
    assert_eq!(
        GameConfig::new(Difficulty::Custom, 5, 5, 0),
        Err(GameError::InvalidRange { min: 5, max: 5 })
    );
    assert!(GameConfig::new(Difficulty::Custom, 10, 1, 0).is_err());
    assert!(GameConfig::new(Difficulty::Custom, -3, -2, 0).is_ok());
}

#[test]
fn with_secret_rejects_out_of_range() {
    let cfg = config(1, 10, 0);
    assert_eq!(
        GameEngine::with_secret(cfg, 11).err(),
        Some(GameError::SecretOutOfRange(11))
    );
    assert!(GameEngine::with_secret(cfg, 1).is_ok());
    assert!(GameEngine::with_secret(cfg, 10).is_ok());
}

#[test]
fn random_secret_stays_in_range() {
    let cfg = config(-5, 5, 0);
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..200 {
        let engine = GameEngine::new(cfg, &mut rng);
        assert!((-5..=5).contains(&engine.secret()));
        assert_eq!(engine.hint_range(), (-5, 5));
        assert_eq!(engine.status(), GameStatus::AwaitingGuess);
    }
}

#[test]
fn same_seed_same_secret() {
    let cfg = Difficulty::Hard.preset().unwrap();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    assert_eq!(
        GameEngine::new(cfg, &mut rng1).secret(),
        GameEngine::new(cfg, &mut rng2).secret()
    );
}

#[test]
fn feedback_narrows_hint_range() {
    let mut engine = GameEngine::with_secret(config(1, 100, 0), 42).unwrap();

    assert_eq!(engine.guess(50), Ok(GuessResult::TooHigh));
    assert_eq!(engine.hint_range(), (1, 49));
    assert_eq!(engine.guess(20), Ok(GuessResult::TooLow));
    assert_eq!(engine.hint_range(), (21, 49));
    // a guess outside the hint range never widens it
    assert_eq!(engine.guess(90), Ok(GuessResult::TooHigh));
    assert_eq!(engine.hint_range(), (21, 49));
    assert_eq!(engine.guess(-7), Ok(GuessResult::TooLow));
    assert_eq!(engine.hint_range(), (21, 49));

    assert_eq!(engine.guess(42), Ok(GuessResult::Correct));
    assert_eq!(engine.status(), GameStatus::Correct);
    assert_eq!(engine.attempts(), 5);
}

#[test]
fn give_up_does_not_count() {
    let mut engine = GameEngine::with_secret(config(1, 100, 0), 77).unwrap();
    engine.guess(10).unwrap();
    assert_eq!(engine.guess(0), Ok(GuessResult::GaveUp));
    assert_eq!(engine.status(), GameStatus::GaveUp);
    assert_eq!(engine.attempts(), 1);
    assert_eq!(engine.secret(), 77);
}

#[test]
fn give_up_on_first_guess() {
    let mut engine = GameEngine::with_secret(config(1, 20, 0), 3).unwrap();
    assert_eq!(engine.guess(0), Ok(GuessResult::GaveUp));
    assert_eq!(engine.attempts(), 0);
}

#[test]
fn attempt_limit_exhausts_round() {
    let mut engine = GameEngine::with_secret(config(1, 100, 3), 60).unwrap();
    assert_eq!(engine.guess(10), Ok(GuessResult::TooLow));
    assert_eq!(engine.guess(90), Ok(GuessResult::TooHigh));
    assert_eq!(engine.status(), GameStatus::AwaitingGuess);
    assert_eq!(engine.guess(59), Ok(GuessResult::TooLow));
    assert_eq!(engine.status(), GameStatus::AttemptsExhausted);
    assert_eq!(engine.attempts(), 3);
}

#[test]
fn correct_on_last_attempt_wins() {
    let mut engine = GameEngine::with_secret(config(1, 10, 2), 4).unwrap();
    engine.guess(9).unwrap();
    assert_eq!(engine.guess(4), Ok(GuessResult::Correct));
    assert_eq!(engine.status(), GameStatus::Correct);
}

#[test]
fn guessing_after_round_over_fails() {
    let mut engine = GameEngine::with_secret(config(1, 10, 0), 4).unwrap();
    engine.guess(4).unwrap();
    assert_eq!(engine.guess(5), Err(GameError::GameOver));
    assert_eq!(engine.attempts(), 1);
}
