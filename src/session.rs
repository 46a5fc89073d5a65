//! One complete session: setup, the match, and the final report.

use crate::config::GameConfig;
use crate::setup::{prompt_stats_file, resolve_name};
use tictactoe_core::{Console, Game, StatsError, StatsFile, Termination};
use tracing::{info, instrument};

/// Resolves names and the score store, plays a match to termination and shows
/// the final grid and result.
///
/// Win, draw and quit all return `Ok`; only setup, console or store failures
/// are errors.
#[instrument(skip_all)]
pub fn run_match<C>(console: &mut C, config: &GameConfig) -> anyhow::Result<Termination>
where
    C: Console + ?Sized,
{
    let name_x = resolve_name(console, "Player 1", config.player_x().as_deref())?;
    let name_o = resolve_name(console, "Player 2", config.player_o().as_deref())?;
    let stats_path = match config.stats_file() {
        Some(path) => path.clone(),
        None => prompt_stats_file(console, &config.stats_file_or_default())?,
    };

    let mut game = Game::new(&name_x, &name_o, StatsFile::new(stats_path))?;
    info!(player_x = %name_x, player_o = %name_o, "Match starting");

    let termination = game.play(console)?;
    console.show(&game.grid().to_string())?;
    console.show(termination.message())?;
    Ok(termination)
}

/// Renders the win tallies, one `name: wins` line per player.
#[instrument(skip_all)]
pub fn render_leaderboard(stats: &StatsFile) -> Result<String, StatsError> {
    let rows = stats.leaderboard()?;
    if rows.is_empty() {
        return Ok("No wins recorded yet.".to_string());
    }
    Ok(rows
        .iter()
        .map(|(name, wins)| format!("{}: {}", name, wins))
        .collect::<Vec<_>>()
        .join("\n"))
}
