//! tictactoe - two players, one terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, Command, GameConfig, StdConsole, render_leaderboard, run_match};
use tictactoe_core::StatsFile;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            stats_file,
            player_x,
            player_o,
        } => run_play(config.with_overrides(stats_file, player_x, player_o)),
        Command::Stats { stats_file } => run_stats(config.with_overrides(stats_file, None, None)),
    }
}

/// Play one match on stdin/stdout. Every way a match ends exits 0.
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    let mut console = StdConsole::stdio();
    let termination = run_match(&mut console, &config)?;
    info!(status = %termination.status(), "Session finished");
    Ok(())
}

/// Print the leaderboard.
#[instrument(skip(config))]
fn run_stats(config: GameConfig) -> Result<()> {
    let stats = StatsFile::new(config.stats_file_or_default());
    println!("{}", render_leaderboard(&stats)?);
    Ok(())
}

fn initialize_tracing() {
    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
