#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use numguess::{
    app, init_logging, CliPlayer, Console, InputError, Leaderboard, DEFAULT_DISPLAY_LIMIT,
    LEADERBOARD_FILE,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Number guessing game with a CSV leaderboard", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, default_value = LEADERBOARD_FILE, help = "Leaderboard file to append results to")]
    leaderboard: PathBuf,
    #[arg(long, help = "Fix RNG seed for reproducible secrets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = DEFAULT_DISPLAY_LIMIT, help = "Rows shown in the leaderboard table")]
    top: usize,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Print the leaderboard table and exit.
    Leaderboard,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let leaderboard = Leaderboard::new(cli.leaderboard.clone());

    if let Some(Commands::Leaderboard) = cli.command {
        leaderboard.display(cli.top, &mut std::io::stdout())?;
        return Ok(());
    }

    let mut rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut console = Console::stdio();
    println!("=== Advanced Number Guessing Game ===");
    println!("(Type CTRL+D or CTRL+Z to exit any time)\n");

    let mut player = CliPlayer::new();
    match app::run(&mut console, &mut player, &leaderboard, &mut rng, cli.top) {
        Ok(()) => Ok(()),
        Err(InputError::EndOfInput) => {
            println!("\nInput error. Exiting.");
            Ok(())
        }
        Err(InputError::Io(e)) => Err(anyhow::anyhow!(e)),
        Err(InputError::Game(e)) => Err(anyhow::anyhow!(e)),
    }
}
