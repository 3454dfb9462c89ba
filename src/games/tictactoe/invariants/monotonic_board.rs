//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Game};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Once a cell transitions from empty to occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicBoardInvariant;

impl<R> Invariant<Game<R>> for MonotonicBoardInvariant {
    fn holds(game: &Game<R>) -> bool {
        let mut reconstructed = Board::new();

        for mov in &game.history {
            // Cell must be empty before placing
            if !reconstructed.mark(mov.position(), mov.turn()) {
                return false;
            }
        }

        reconstructed == game.board
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
