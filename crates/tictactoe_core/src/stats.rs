//! Persistent win tallies.
//!
//! The store is a flat JSON object mapping player names to win counts, e.g.
//! `{"Alice": 3, "Bob": 1}`. Each update reads the whole mapping, changes one
//! entry and rewrites the whole mapping.
//!
//! Concurrent writers are not coordinated: two processes updating the same
//! store at once can lose one of the increments (last writer wins).

use derive_more::{Display, Error};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

/// Default score store location.
pub const DEFAULT_STATS_FILE: &str = "stats.json";

/// Player name to total wins.
pub type Tallies = BTreeMap<String, u64>;

/// Score store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats error: {} at {}:{}", message, file, line)]
pub struct StatsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StatsError {
    /// Creates a new stats error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Handle to a score store on disk.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct StatsFile {
    /// Location of the JSON store.
    path: PathBuf,
}

impl StatsFile {
    /// Creates a handle for the store at `path`. Nothing is touched on disk.
    #[instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads every tally. A missing store reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError`] if the store exists but cannot be read or parsed.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Tallies, StatsError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stats file yet");
                return Ok(Tallies::new());
            }
            Err(e) => {
                return Err(StatsError::new(format!(
                    "Failed to open '{}': {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let tallies: Tallies = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            let action = if e.is_io() { "read" } else { "parse" };
            StatsError::new(format!(
                "Failed to {} '{}': {}",
                action,
                self.path.display(),
                e
            ))
        })?;
        debug!(players = tallies.len(), "Stats loaded");
        Ok(tallies)
    }

    /// Adds one win for `player_name` and returns the new total.
    ///
    /// Creates the store as `{player_name: 1}` if it does not exist yet.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn record_win(&self, player_name: &str) -> Result<u64, StatsError> {
        let mut tallies = self.load()?;
        let wins = tallies.entry(player_name.to_string()).or_insert(0);
        *wins += 1;
        let wins = *wins;

        self.write(&tallies)?;
        info!(player = %player_name, wins, "Win recorded");
        Ok(wins)
    }

    /// Returns tallies ordered by most wins, ties broken by name.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn leaderboard(&self) -> Result<Vec<(String, u64)>, StatsError> {
        let mut rows: Vec<(String, u64)> = self.load()?.into_iter().collect();
        rows.sort_by(|(a_name, a_wins), (b_name, b_wins)| {
            b_wins.cmp(a_wins).then_with(|| a_name.cmp(b_name))
        });
        Ok(rows)
    }

    /// Rewrites the whole mapping through a temporary file in the same
    /// directory, renamed over the store once complete. The temporary file is
    /// removed if anything fails.
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn write(&self, tallies: &Tallies) -> Result<(), StatsError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let io_err = |e: std::io::Error| {
            StatsError::new(format!(
                "Failed to write stats for '{}': {}",
                self.path.display(),
                e
            ))
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer(&mut writer, tallies)
                .map_err(|e| StatsError::new(format!("Failed to serialize stats: {}", e)))?;
            writer.flush().map_err(io_err)?;
        }

        temp.persist(&self.path).map_err(|e| {
            StatsError::new(format!(
                "Failed to replace '{}': {}",
                self.path.display(),
                e.error
            ))
        })?;
        debug!(players = tallies.len(), "Stats written");
        Ok(())
    }
}

impl Default for StatsFile {
    fn default() -> Self {
        Self::new(DEFAULT_STATS_FILE)
    }
}

/// Adds one win for `player_name` to the store at `path`.
///
/// Shorthand for [`StatsFile::record_win`].
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn record_win(path: impl AsRef<Path>, player_name: &str) -> Result<u64, StatsError> {
    StatsFile::new(path.as_ref()).record_win(player_name)
}
