//! Strictly Tictac - command-line driver
//!
//! Plays the engine from stdin and reports boards and history as JSON.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use std::path::PathBuf;
use strictly_tictac::{FixedRandom, Game, GameConfig, Move, MoveError, RandomSource};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed } => run_play(config, seed),
        Command::Replay { history } => run_replay(history),
    }
}

/// Play one game: each stdin line is a user move, answered by the computer.
#[instrument]
fn run_play(config: Option<PathBuf>, seed: Option<u64>) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)?,
        None => GameConfig::default(),
    };
    let config = match seed {
        Some(seed) => config.with_seed(Some(seed)),
        None => config,
    };

    let mut game = config.build_game();
    info!(seed = ?config.seed(), "Game started");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read move from stdin")?;
        let Some((x, y)) = parse_coordinates(&line) else {
            warn!(input = %line, "Expected \"row col\"");
            eprintln!("expected \"row col\", got {:?}", line);
            continue;
        };

        match play_round(&mut game, x, y) {
            Ok(()) => {}
            Err(e @ (MoveError::CellTaken(_) | MoveError::CoordinateOutOfRange { .. })) => {
                eprintln!("{}", e);
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        println!("{}", serde_json::to_string(&game.state())?);
        if game.is_full() {
            break;
        }
    }

    println!("{}", serde_json::to_string(game.move_history())?);
    Ok(())
}

/// User move followed by a computer reply, if a cell is left.
fn play_round<R: RandomSource>(game: &mut Game<R>, x: usize, y: usize) -> Result<(), MoveError> {
    game.accept_user_move(x, y)?;
    if !game.is_full() {
        game.create_computer_move()?;
    }
    Ok(())
}

/// Parses two whitespace-separated coordinates.
fn parse_coordinates(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Rebuild a game from a recorded history and print its board.
#[instrument]
fn run_replay(history: PathBuf) -> Result<()> {
    let content = std::fs::read_to_string(&history)
        .with_context(|| format!("Failed to read {}", history.display()))?;
    let moves: Vec<Move> = serde_json::from_str(&content).context("Invalid move history")?;

    let game = Game::replay(&moves, FixedRandom(0.0))?;
    info!(moves = moves.len(), "History replayed");
    println!("{}", serde_json::to_string(&game.state())?);
    Ok(())
}
