use std::io;
use std::time::Duration;

use numguess::{
    play_round, session::build_result, AiPlayer, Console, Difficulty, GameEngine, GameResult,
    GameStatus, RoundOutcome,
};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn parse_difficulty(name: &str) -> Option<Difficulty> {
    match name.to_ascii_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <games> <seed> [easy|medium|hard]", args[0]);
        std::process::exit(1);
    }
    let games: u32 = args[1].parse()?;
    let seed: u64 = args[2].parse()?;
    let difficulty = match args.get(3) {
        Some(name) => parse_difficulty(name)
            .ok_or_else(|| anyhow::anyhow!("unknown difficulty '{}'", name))?,
        None => Difficulty::Medium,
    };
    let config = difficulty
        .preset()
        .ok_or_else(|| anyhow::anyhow!("no preset for {}", difficulty.label()))?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut console = Console::new(io::empty(), io::sink());
    let mut player = AiPlayer::new();

    let mut wins = 0u32;
    let mut total_attempts = 0u64;
    let mut total_score = 0.0f64;
    let mut best: Option<GameResult> = None;
    for _ in 0..games {
        let mut engine = GameEngine::new(config, &mut rng);
        let outcome = play_round(&mut engine, &mut player, &mut console)
            .map_err(|e| anyhow::anyhow!(e))?;
        if outcome.status == GameStatus::Correct {
            wins += 1;
        }
        total_attempts += outcome.attempts as u64;
        // score without the clock so runs are reproducible
        let outcome = RoundOutcome {
            elapsed: Duration::ZERO,
            ..outcome
        };
        let result = build_result(&config, &outcome, "AI".to_string());
        total_score += result.score;
        if best.as_ref().map_or(true, |b| result.score > b.score) {
            best = Some(result);
        }
    }

    let mean = |total: f64| if games == 0 { 0.0 } else { total / games as f64 };
    let result = json!({
        "difficulty": difficulty.label(),
        "games": games,
        "wins": wins,
        "losses": games - wins,
        "mean_attempts": mean(total_attempts as f64),
        "mean_score": mean(total_score),
        "best": serde_json::to_value(&best)?,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
