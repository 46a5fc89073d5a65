//! Console tic-tac-toe for two players with persistent win tallies.
//!
//! The game rules live in [`tictactoe_core`]; this crate supplies the
//! terminal console, command-line and file configuration, and the session
//! flow that ties them together.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod session;
mod setup;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};
pub use console::StdConsole;
pub use session::{render_leaderboard, run_match};
pub use setup::{SetupError, prompt_name, prompt_stats_file, resolve_name};
