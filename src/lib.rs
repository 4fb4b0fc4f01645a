#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;
pub mod core;
#[cfg(feature = "std")]
pub mod app;
#[cfg(feature = "std")]
pub mod console;
#[cfg(feature = "std")]
pub mod leaderboard;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
pub mod prelude;
#[cfg(feature = "std")]
pub mod record;
#[cfg(feature = "std")]
pub mod session;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use console::{Console, InputError, Prompt};
#[cfg(feature = "std")]
pub use leaderboard::{Leaderboard, QuotedCsv, RecordFormat, DEFAULT_DISPLAY_LIMIT, LEADERBOARD_FILE};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player::{AiPlayer, CliPlayer, Player};
#[cfg(feature = "std")]
pub use record::{GameResult, ANONYMOUS};
#[cfg(feature = "std")]
pub use session::{play_round, play_session, RoundOutcome};
