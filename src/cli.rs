//! Command-line interface for strictly_tictac.

use clap::{Parser, Subcommand};

/// Strictly Tictac - play tic-tac-toe against a random computer
#[derive(Parser, Debug)]
#[command(name = "strictly_tictac")]
#[command(about = "Tic-tac-toe against a random computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game, reading "row col" moves from stdin
    Play {
        /// Path to game config (TOML). Defaults are used when absent.
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the computer's moves (overrides the config file)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Replay a JSON move history and print the resulting board
    Replay {
        /// Path to a JSON array of moves
        history: std::path::PathBuf,
    },
}
