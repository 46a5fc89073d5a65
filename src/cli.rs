//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with persistent win tallies", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one match on this terminal
    Play {
        /// Score store to update (prompted for when not configured)
        #[arg(short, long)]
        stats_file: Option<PathBuf>,

        /// Name of the player with marker X (prompted for when absent)
        #[arg(long)]
        player_x: Option<String>,

        /// Name of the player with marker O (prompted for when absent)
        #[arg(long)]
        player_o: Option<String>,
    },

    /// Print the win tallies, most wins first
    Stats {
        /// Score store to read
        #[arg(short, long)]
        stats_file: Option<PathBuf>,
    },
}
