//! Match controller: turn order, move handling and termination.

use crate::console::Console;
use crate::grid::{Grid, GridError};
use crate::player::{Player, PlayerError};
use crate::stats::{StatsError, StatsFile};
use crate::Marker;
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, info, instrument, warn};

/// Where a match stands.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// Waiting for the current player.
    #[display("Waiting for a move")]
    AwaitingMove,
    /// The named player completed a line.
    #[display("Player {} wins!", winner)]
    Won {
        /// Name of the winning player.
        winner: String,
    },
    /// The grid filled up without a line.
    #[display("The game is a draw!")]
    Drawn,
    /// A player left the match.
    #[display("The game has ended. Player quit.")]
    Quit,
}

impl GameStatus {
    /// Returns `true` for every state but [`GameStatus::AwaitingMove`].
    #[instrument(skip(self))]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::AwaitingMove)
    }
}

/// How a match ended, with the message to show the players.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Termination {
    /// Terminal status of the match.
    status: GameStatus,
    /// Text announcing the result.
    message: String,
}

/// Input the current player has to retry.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Neither a number nor the quit command.
    #[display("Invalid input {:?}. Please enter an integer between 1 and 9 or 'Q' to quit.", _0)]
    NotANumber(String),
    /// A number the grid refused.
    #[display("{}", _0)]
    Grid(GridError),
}

/// Result of one move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Same player must try again; nothing changed.
    Rejected(MoveRejection),
    /// Marker placed, turn passed to the other player.
    Advanced,
    /// The match is over.
    Terminated(Termination),
}

/// Failures that abort a match.
#[derive(Debug, derive_more::Display)]
pub enum GameError {
    /// Recording the winner failed.
    #[display("{}", _0)]
    Stats(StatsError),
    /// The console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(std::io::Error),
    /// A move was attempted after the match ended.
    #[display("Game is already over")]
    Finished,
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Stats(e) => Some(e),
            GameError::Io(e) => Some(e),
            GameError::Finished => None,
        }
    }
}

impl From<StatsError> for GameError {
    fn from(err: StatsError) -> Self {
        GameError::Stats(err)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

/// A single two-player match. X always moves first.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    player_x: Player,
    player_o: Player,
    current: Marker,
    stats: StatsFile,
    status: GameStatus,
}

impl Game {
    /// Creates a match between `name_x` (plays X) and `name_o` (plays O).
    ///
    /// # Errors
    ///
    /// [`PlayerError::EmptyName`] if either name is empty.
    #[instrument(skip_all, fields(player_x = %name_x.as_ref(), player_o = %name_o.as_ref()))]
    pub fn new(
        name_x: impl AsRef<str>,
        name_o: impl AsRef<str>,
        stats: StatsFile,
    ) -> Result<Self, PlayerError> {
        let player_x = Player::with_marker(name_x, Marker::X)?;
        let player_o = Player::with_marker(name_o, Marker::O)?;
        info!(stats = %stats.path().display(), "New game");
        Ok(Self {
            grid: Grid::new(),
            player_x,
            player_o,
            current: Marker::X,
            stats,
            status: GameStatus::AwaitingMove,
        })
    }

    /// Returns the grid.
    #[instrument(skip(self))]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player with marker X.
    #[instrument(skip(self))]
    pub fn player_x(&self) -> &Player {
        &self.player_x
    }

    /// Returns the player with marker O.
    #[instrument(skip(self))]
    pub fn player_o(&self) -> &Player {
        &self.player_o
    }

    /// Returns the player whose turn it is.
    #[instrument(skip(self))]
    pub fn current_player(&self) -> &Player {
        match self.current {
            Marker::X => &self.player_x,
            Marker::O => &self.player_o,
        }
    }

    /// Returns the match status.
    #[instrument(skip(self))]
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the score store this match reports wins to.
    #[instrument(skip(self))]
    pub fn stats(&self) -> &StatsFile {
        &self.stats
    }

    /// Interprets one line of input from the current player.
    ///
    /// "q"/"Q" quits, a number is placed for the current player, anything else
    /// is rejected. A winning move is recorded in the score store before the
    /// termination is returned.
    ///
    /// # Errors
    ///
    /// [`GameError::Finished`] after termination, [`GameError::Stats`] if the
    /// win cannot be recorded.
    #[instrument(skip(self), fields(player = %self.current_player().name()))]
    pub fn attempt_move(&mut self, raw: &str) -> Result<MoveOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::Finished);
        }

        let input = raw.trim();
        if input.eq_ignore_ascii_case("q") {
            return Ok(MoveOutcome::Terminated(self.finish(GameStatus::Quit)));
        }

        let position: i64 = match input.parse() {
            Ok(position) => position,
            Err(_) => {
                debug!(input = %raw, "Not a number");
                return Ok(MoveOutcome::Rejected(MoveRejection::NotANumber(
                    raw.to_string(),
                )));
            }
        };

        if let Err(e) = self.grid.place(position, self.current) {
            debug!(error = %e, "Placement refused");
            return Ok(MoveOutcome::Rejected(MoveRejection::Grid(e)));
        }

        if self.grid.check_win() {
            let winner = self.current_player().name().to_string();
            // The line is on the grid either way, so the match must not resume.
            self.status = GameStatus::Won {
                winner: winner.clone(),
            };
            if let Err(e) = self.stats.record_win(&winner) {
                warn!(error = %e, %winner, "Win could not be recorded");
                return Err(e.into());
            }
            return Ok(MoveOutcome::Terminated(
                self.finish(GameStatus::Won { winner }),
            ));
        }

        if self.grid.check_full() {
            return Ok(MoveOutcome::Terminated(self.finish(GameStatus::Drawn)));
        }

        self.current = self.current.opponent();
        debug!(next = %self.current_player().name(), "Turn passed");
        Ok(MoveOutcome::Advanced)
    }

    /// Plays one turn: shows the grid and prompts the current player until a
    /// move is accepted or the match ends.
    ///
    /// Returns `Some` when the match terminated during this turn. End of input
    /// counts as quitting.
    #[instrument(skip_all, fields(player = %self.current_player().name()))]
    pub fn make_move<C>(&mut self, console: &mut C) -> Result<Option<Termination>, GameError>
    where
        C: Console + ?Sized,
    {
        if self.status.is_terminal() {
            return Err(GameError::Finished);
        }

        loop {
            console.show(&self.grid.to_string())?;
            let prompt = format!(
                "Player {}, enter a spot to place your marker (1-9 or 'Q' to quit): ",
                self.current_player().name()
            );

            let outcome = match console.read_line(&prompt)? {
                Some(line) => self.attempt_move(&line)?,
                None => {
                    warn!("Input closed mid-game");
                    MoveOutcome::Terminated(self.finish(GameStatus::Quit))
                }
            };

            match outcome {
                MoveOutcome::Rejected(reason) => console.show(&reason.to_string())?,
                MoveOutcome::Advanced => return Ok(None),
                MoveOutcome::Terminated(termination) => return Ok(Some(termination)),
            }
        }
    }

    /// Runs turns until the match terminates.
    #[instrument(skip_all)]
    pub fn play<C>(&mut self, console: &mut C) -> Result<Termination, GameError>
    where
        C: Console + ?Sized,
    {
        loop {
            if let Some(termination) = self.make_move(console)? {
                return Ok(termination);
            }
        }
    }

    #[instrument(skip(self))]
    fn finish(&mut self, status: GameStatus) -> Termination {
        info!(%status, "Game over");
        self.status = status.clone();
        let message = status.to_string();
        Termination::new(status, message)
    }
}
