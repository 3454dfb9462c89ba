//! History consistency invariant: history length matches occupied cells.

use super::super::Game;
use super::Invariant;

/// Invariant: History length equals number of occupied cells.
///
/// Every move in history corresponds to exactly one occupied cell.
/// No moves are missing, no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl<R> Invariant<Game<R>> for HistoryConsistentInvariant {
    fn holds(game: &Game<R>) -> bool {
        game.history.len() == game.board.occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
