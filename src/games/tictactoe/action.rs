//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events recorded in the game history. They carry
//! who moved and where, and serialize as `{"turn":"user","x":1,"y":1}`.

use super::{Position, Turn};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single accepted placement of a mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The side that made the move.
    turn: Turn,
    /// Where the mark was placed.
    #[serde(flatten)]
    position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(turn: Turn, position: Position) -> Self {
        Self { turn, position }
    }

    /// Returns the side that made this move.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Row of this move.
    pub fn x(&self) -> usize {
        self.position.x()
    }

    /// Column of this move.
    pub fn y(&self) -> usize {
        self.position.y()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.turn, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("cell is already taken")]
    CellTaken(Position),

    /// A coordinate lies outside the 3x3 board.
    #[display("coordinate ({}, {}) is out of range", x, y)]
    CoordinateOutOfRange {
        /// Requested row.
        x: usize,
        /// Requested column.
        y: usize,
    },

    /// No empty cell is left for the computer.
    #[display("board is full")]
    BoardFull,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
