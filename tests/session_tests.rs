use std::io::{self, Cursor};

use numguess::{
    play_round, play_session, AiPlayer, CliPlayer, Console, Difficulty, GameConfig, GameEngine,
    GameStatus, InputError, Leaderboard, ANONYMOUS,
};
use rand::{rngs::SmallRng, SeedableRng};
use tempfile::tempdir;

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).expect("non utf8 output")
}

fn engine(max_attempts: u32, secret: i64) -> GameEngine {
    let cfg = GameConfig::new(Difficulty::Custom, 1, 100, max_attempts).unwrap();
    GameEngine::with_secret(cfg, secret).unwrap()
}

#[test]
fn round_with_hints_until_correct() {
    let mut engine = engine(0, 42);
    let mut c = console("50\n20\n42\n");
    let outcome = play_round(&mut engine, &mut CliPlayer::new(), &mut c).unwrap();
    assert_eq!(outcome.status, GameStatus::Correct);
    assert_eq!(outcome.attempts, 3);
    assert_eq!(outcome.secret, 42);

    let out = output(c);
    assert!(out.contains("I have selected a number between 1 and 100."));
    assert!(!out.contains("You have up to"));
    assert!(out.contains("Allowed range: [1 - 100] Enter guess (or 0 to give up): "));
    assert!(out.contains("Too high.\nAllowed range: [1 - 49] "));
    assert!(out.contains("Too low.\nAllowed range: [21 - 49] "));
    assert!(out.contains("Congratulations! You guessed correctly in 3 attempts."));
}

#[test]
fn round_give_up_reveals_secret() {
    let mut engine = engine(0, 42);
    let mut c = console("10\n0\n");
    let outcome = play_round(&mut engine, &mut CliPlayer::new(), &mut c).unwrap();
    assert_eq!(outcome.status, GameStatus::GaveUp);
    assert_eq!(outcome.attempts, 1);
    assert!(output(c).contains("You gave up. The number was 42."));
}

#[test]
fn round_exhausts_attempts() {
    let mut engine = engine(2, 42);
    let mut c = console("1\n99\n42\n");
    let outcome = play_round(&mut engine, &mut CliPlayer::new(), &mut c).unwrap();
    assert_eq!(outcome.status, GameStatus::AttemptsExhausted);
    assert_eq!(outcome.attempts, 2);
    let out = output(c);
    assert!(out.contains("You have up to 2 attempts."));
    assert!(out.contains("Reached maximum attempts (2). You lose. The number was 42."));
    assert!(!out.contains("Congratulations"));
}

#[test]
fn round_retries_bad_guess() {
    let mut engine = engine(0, 42);
    let mut c = console("forty\n42\n");
    let outcome = play_round(&mut engine, &mut CliPlayer::new(), &mut c).unwrap();
    assert_eq!(outcome.attempts, 1);
    assert!(output(c).contains("Invalid input. Please enter an integer."));
}

#[test]
fn round_stops_on_end_of_input() {
    let mut engine = engine(0, 42);
    let mut c = console("50\n");
    let err = play_round(&mut engine, &mut CliPlayer::new(), &mut c).unwrap_err();
    assert!(matches!(err, InputError::EndOfInput));
}

#[test]
fn ai_player_always_finds_secret() {
    for secret in 1..=100 {
        let mut engine = engine(0, secret);
        let mut c = Console::new(io::empty(), io::sink());
        let outcome = play_round(&mut engine, &mut AiPlayer::new(), &mut c).unwrap();
        assert_eq!(outcome.status, GameStatus::Correct);
        assert!(outcome.attempts <= 7);
    }
}

#[test]
fn ai_player_avoids_give_up_sentinel() {
    assert_eq!(AiPlayer::bisect(-1, 1), 1);
    assert_eq!(AiPlayer::bisect(-1, 0), -1);
    assert_eq!(AiPlayer::bisect(0, 0), 0);
    assert_eq!(AiPlayer::bisect(1, 100), 50);

    let cfg = GameConfig::new(Difficulty::Custom, -10, 10, 0).unwrap();
    for secret in (-10..=10).filter(|s| *s != 0) {
        let mut engine = GameEngine::with_secret(cfg, secret).unwrap();
        let mut c = Console::new(io::empty(), io::sink());
        let outcome = play_round(&mut engine, &mut AiPlayer::new(), &mut c).unwrap();
        assert_eq!(outcome.status, GameStatus::Correct);
    }
}

#[test]
fn blank_name_is_anonymous_and_not_recorded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("leaderboard.csv");
    let board = Leaderboard::new(&path);
    let cfg = Difficulty::Easy.preset().unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut c = console("0\n   \n");

    let result = play_session(&cfg, &mut rng, &mut CliPlayer::new(), &mut c, &board).unwrap();
    assert_eq!(result.player_name, ANONYMOUS);
    assert!(!path.exists());
    assert!(output(c).contains("Enter your name for the leaderboard (leave blank to skip): "));
}

#[test]
fn typed_anonymous_is_not_recorded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("leaderboard.csv");
    let board = Leaderboard::new(&path);
    let cfg = Difficulty::Easy.preset().unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let mut c = console("0\nAnonymous\n");

    play_session(&cfg, &mut rng, &mut CliPlayer::new(), &mut c, &board).unwrap();
    assert!(!path.exists());
}

#[test]
fn named_result_is_recorded() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::new(dir.path().join("leaderboard.csv"));
    let cfg = Difficulty::Medium.preset().unwrap();
    let mut rng = SmallRng::seed_from_u64(99);
    let expected_secret = GameEngine::new(cfg, &mut SmallRng::seed_from_u64(99)).secret();
    let mut c = console("0\n  alice  \n");

    let result = play_session(&cfg, &mut rng, &mut CliPlayer::new(), &mut c, &board).unwrap();
    assert_eq!(result.player_name, "alice");
    assert_eq!(result.difficulty, "Medium (1-100)");
    assert_eq!(result.attempts, 0);
    assert_eq!(result.secret_number, expected_secret);
    assert!(result.score > 0.0);
    assert_eq!(result.timestamp.len(), "2026-10-15 09:30:00".len());

    let stored = board.read_recent(10);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].player_name, "alice");
    assert_eq!(stored[0].difficulty, result.difficulty);
    assert_eq!(stored[0].secret_number, result.secret_number);
    assert_eq!(stored[0].timestamp, result.timestamp);
}

#[test]
fn write_failure_does_not_stop_session() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::new(dir.path().join("missing").join("leaderboard.csv"));
    let cfg = Difficulty::Easy.preset().unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut c = console("0\nbob\n");

    let result = play_session(&cfg, &mut rng, &mut CliPlayer::new(), &mut c, &board).unwrap();
    assert_eq!(result.player_name, "bob");
    assert!(board.read_recent(10).is_empty());
}

#[test]
fn end_of_input_at_name_prompt() {
    let dir = tempdir().unwrap();
    let board = Leaderboard::new(dir.path().join("leaderboard.csv"));
    let cfg = Difficulty::Easy.preset().unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let mut c = console("0\n");

    let err = play_session(&cfg, &mut rng, &mut CliPlayer::new(), &mut c, &board).unwrap_err();
    assert!(matches!(err, InputError::EndOfInput));
}
