#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::console::{InputError, Prompt};
use crate::core::{
    Difficulty, GameConfig, CUSTOM_MAX, CUSTOM_MAX_ATTEMPTS, CUSTOM_MIN,
};
use crate::leaderboard::{Leaderboard, RecordFormat};
use crate::player::Player;
use crate::record::GameResult;
use crate::session::play_session;

/// Show the difficulty menu and build the chosen configuration.
pub fn choose_difficulty(console: &mut dyn Prompt) -> Result<GameConfig, InputError> {
    writeln!(console, "Choose difficulty:")?;
    writeln!(console, "  1) Easy   (1 - 20, unlimited attempts)")?;
    writeln!(console, "  2) Medium (1 - 100, 10 attempts)")?;
    writeln!(console, "  3) Hard   (1 - 1000, 12 attempts)")?;
    writeln!(console, "  4) Custom")?;
    let choice = console.read_int("Enter choice [1-4]: ", 1, 4)?;

    let difficulty = Difficulty::from_menu_index(choice as u8).unwrap_or(Difficulty::Custom);
    let config = match difficulty.preset() {
        Some(config) => config,
        None => custom_config(console)?,
    };

    write!(
        console,
        "You selected: {} ({} - {})",
        config.difficulty().label(),
        config.min_value(),
        config.max_value()
    )?;
    if config.has_attempt_limit() {
        write!(console, ", max attempts = {}", config.max_attempts())?;
    }
    writeln!(console)?;
    Ok(config)
}

fn custom_config(console: &mut dyn Prompt) -> Result<GameConfig, InputError> {
    // leave room for at least one value above the minimum
    let min = console.read_int("Enter minimum value: ", CUSTOM_MIN, CUSTOM_MAX - 1)?;
    let max = console.read_int("Enter maximum value: ", min + 1, CUSTOM_MAX)?;
    let max_attempts = if console.read_yes_no("Would you like to set a maximum attempts limit?")? {
        console.read_int(
            "Enter maximum attempts (>=1): ",
            1,
            CUSTOM_MAX_ATTEMPTS as i64,
        )? as u32
    } else {
        0
    };
    Ok(GameConfig::new(Difficulty::Custom, min, max, max_attempts)?)
}

/// Print the end-of-round summary block.
pub fn print_summary(console: &mut dyn Prompt, result: &GameResult) -> Result<(), InputError> {
    writeln!(console, "\nGame summary:")?;
    writeln!(console, " Player: {}", result.player_name)?;
    writeln!(console, " Difficulty: {}", result.difficulty)?;
    writeln!(console, " Attempts: {}", result.attempts)?;
    writeln!(console, " Time: {:.1} seconds", result.elapsed_seconds)?;
    writeln!(console, " Score: {:.2}", result.score)?;
    Ok(())
}

/// Play sessions until the player declines another one.
///
/// End of input on any prompt stops the loop with
/// [`InputError::EndOfInput`].
pub fn run<F: RecordFormat>(
    console: &mut dyn Prompt,
    player: &mut dyn Player,
    leaderboard: &Leaderboard<F>,
    rng: &mut SmallRng,
    display_limit: usize,
) -> Result<(), InputError> {
    loop {
        let config = choose_difficulty(console)?;
        let result = play_session(&config, rng, player, console, leaderboard)?;
        print_summary(console, &result)?;

        if console.read_yes_no("Would you like to view the recent leaderboard?")? {
            leaderboard.display(display_limit, console)?;
        }

        if !console.read_yes_no("Play again?")? {
            break;
        }
        writeln!(console)?;
    }
    writeln!(console, "Thanks for playing! Goodbye.")?;
    Ok(())
}
