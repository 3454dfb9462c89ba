//! Game engine for user-versus-computer tic-tac-toe.
//!
//! The engine does not enforce turn order. Callers decide when the user
//! moves and when the computer answers; the engine only guarantees that
//! cells go from empty to occupied once and that every accepted move is
//! recorded in order.

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{GameInvariants, InvariantSet};
use super::random::{RandomSource, ThreadRandom};
use super::types::{Board, Grid, Symbols, Turn};
use super::Position;
use tracing::{debug, instrument, warn};

/// A single game: board, move history, symbols and a random source.
#[derive(Debug, Clone)]
pub struct Game<R = ThreadRandom> {
    pub(super) board: Board,
    pub(super) history: Vec<Move>,
    symbols: Symbols,
    random: R,
}

impl Game<ThreadRandom> {
    /// Creates a new game with default symbols and the thread-local generator.
    #[instrument]
    pub fn new() -> Self {
        Self::with_random(ThreadRandom::new())
    }
}

impl Default for Game<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Game<R> {
    /// Creates a new game drawing computer moves from `random`.
    pub fn with_random(random: R) -> Self {
        Self::with_symbols(Symbols::default(), random)
    }

    /// Creates a new game with custom symbols.
    #[instrument(skip(random))]
    pub fn with_symbols(symbols: Symbols, random: R) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            symbols,
            random,
        }
    }

    /// Rebuilds a game by applying recorded moves in order.
    ///
    /// # Errors
    ///
    /// Fails on the first move whose cell is already taken.
    #[instrument(skip(random), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move], random: R) -> Result<Self, MoveError> {
        let mut game = Self::with_random(random);
        for mov in moves {
            game.place(mov.turn(), mov.position())?;
        }
        Ok(game)
    }

    /// Returns the board as an owned grid of symbols, indexed `[row][column]`.
    pub fn state(&self) -> Grid {
        self.board.render(&self.symbols)
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the symbols used to render the board.
    pub fn symbols(&self) -> &Symbols {
        &self.symbols
    }

    /// Returns accepted moves in the order they were made.
    pub fn move_history(&self) -> &[Move] {
        &self.history
    }

    /// Checks if no empty cell is left.
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Marks the cell at row `x`, column `y` for the user.
    ///
    /// # Errors
    ///
    /// - `MoveError::CoordinateOutOfRange` if either coordinate is off the board.
    /// - `MoveError::CellTaken` if the cell is occupied. Board and history are
    ///   left untouched.
    #[instrument(skip(self))]
    pub fn accept_user_move(&mut self, x: usize, y: usize) -> Result<Move, MoveError> {
        let pos = Position::new(x, y)?;
        self.place(Turn::User, pos)
    }

    /// Marks a uniformly random empty cell for the computer.
    ///
    /// Empty cells are listed in row-major order and one is picked at index
    /// `floor(r * count)` with `r` drawn from the game's random source.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::BoardFull` if no empty cell is left.
    #[instrument(skip(self))]
    pub fn create_computer_move(&mut self) -> Result<Move, MoveError> {
        let candidates = self.board.empty_positions();
        let index = self
            .random
            .pick_index(candidates.len())
            .ok_or(MoveError::BoardFull)?;
        debug!(candidates = candidates.len(), index, "Computer picked cell");
        self.place(Turn::Computer, candidates[index])
    }

    /// Applies a move after checking the cell is empty.
    fn place(&mut self, turn: Turn, pos: Position) -> Result<Move, MoveError> {
        if !self.board.mark(pos, turn) {
            warn!(%turn, position = %pos, "Rejected move into taken cell");
            return Err(MoveError::CellTaken(pos));
        }
        let mov = Move::new(turn, pos);
        self.history.push(mov);
        debug!(%mov, history = self.history.len(), "Move accepted");

        #[cfg(debug_assertions)]
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        Ok(mov)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{FixedRandom, SequenceRandom, Square};

    #[test]
    fn test_rejected_move_leaves_state_unchanged() {
        let mut game = Game::with_random(FixedRandom(0.0));
        game.accept_user_move(0, 0).unwrap();
        let before = game.clone();

        assert!(matches!(
            game.accept_user_move(0, 0),
            Err(MoveError::CellTaken(_))
        ));
        assert_eq!(game.board(), before.board());
        assert_eq!(game.move_history(), before.move_history());
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::with_random(FixedRandom(0.0));
        assert_eq!(
            game.accept_user_move(3, 1),
            Err(MoveError::CoordinateOutOfRange { x: 3, y: 1 })
        );
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn test_computer_skips_taken_cells() {
        let mut game = Game::with_random(FixedRandom(0.0));
        game.accept_user_move(0, 0).unwrap();
        let mov = game.create_computer_move().unwrap();
        assert_eq!(mov.position(), Position::new(0, 1).unwrap());
        assert_eq!(
            game.board().get(mov.position()),
            Square::Occupied(Turn::Computer)
        );
    }

    #[test]
    fn test_full_board_rejects_computer_move() {
        let mut game = Game::with_random(SequenceRandom::new(vec![0.2, 0.7, 0.4]));
        for _ in 0..9 {
            game.create_computer_move().unwrap();
        }
        assert!(game.is_full());
        assert_eq!(game.create_computer_move(), Err(MoveError::BoardFull));
        assert_eq!(game.move_history().len(), 9);
    }

    #[test]
    fn test_replay_rebuilds_board() {
        let mut game = Game::with_random(FixedRandom(0.5));
        game.accept_user_move(0, 2).unwrap();
        game.create_computer_move().unwrap();
        game.accept_user_move(2, 0).unwrap();

        let replayed = Game::replay(game.move_history(), FixedRandom(0.5)).unwrap();
        assert_eq!(replayed.state(), game.state());
        assert_eq!(replayed.move_history(), game.move_history());
    }

    #[test]
    fn test_replay_rejects_duplicate_cell() {
        let pos = Position::new(1, 0).unwrap();
        let moves = [Move::new(Turn::User, pos), Move::new(Turn::Computer, pos)];
        assert_eq!(
            Game::replay(&moves, FixedRandom(0.0)).err(),
            Some(MoveError::CellTaken(pos))
        );
    }

    #[test]
    fn test_custom_symbols_in_state() {
        let symbols = Symbols {
            user: "X".to_string(),
            computer: "O".to_string(),
        };
        let mut game = Game::with_symbols(symbols, FixedRandom(0.5));
        game.accept_user_move(0, 0).unwrap();
        game.create_computer_move().unwrap();
        let state = game.state();
        assert_eq!(state[0][0], "X");
        // 8 candidates remain, floor(0.5 * 8) = 4 -> (1, 2)
        assert_eq!(state[1][2], "O");
    }
}
