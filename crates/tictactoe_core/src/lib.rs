//! Tic-tac-toe core: the 3x3 grid, players, the match controller and the
//! persistent win tallies.
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_core::{Game, ScriptedConsole, StatsFile};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new("Alice", "Bob", StatsFile::default())?;
//! let mut console = ScriptedConsole::new(["1", "4", "2", "5", "3"]);
//! let termination = game.play(&mut console)?;
//! println!("{}", termination.message());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod console;
mod game;
mod grid;
mod marker;
mod player;
mod position;
mod stats;

pub use console::{Console, ScriptedConsole};
pub use game::{Game, GameError, GameStatus, MoveOutcome, MoveRejection, Termination};
pub use grid::{Grid, GridError, Square};
pub use marker::Marker;
pub use player::{Player, PlayerError};
pub use position::{Position, position_to_coordinates};
pub use stats::{DEFAULT_STATS_FILE, StatsError, StatsFile, Tallies, record_win};
