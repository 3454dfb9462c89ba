//! Strictly Tictac - tic-tac-toe engine against a random computer
//!
//! A 3x3 board, user moves by coordinate, computer moves drawn uniformly
//! from the empty cells, and an ordered move history.
//!
//! # Example
//!
//! ```
//! use strictly_tictac::{FixedRandom, Game, Turn};
//!
//! let mut game = Game::with_random(FixedRandom(0.5));
//! game.accept_user_move(0, 0)?;
//! game.create_computer_move()?;
//!
//! let history = game.move_history();
//! assert_eq!(history[0].turn(), Turn::User);
//! assert_eq!(history[1].turn(), Turn::Computer);
//! # Ok::<(), strictly_tictac::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AnyRandom, Board, FixedRandom, Game, GameInvariants, Grid, HistoryConsistentInvariant,
    Invariant, InvariantSet, InvariantViolation, MonotonicBoardInvariant, Move, MoveError,
    Position, RandomSource, SeededRandom, SequenceRandom, Square, Symbols, ThreadRandom, Turn,
};
