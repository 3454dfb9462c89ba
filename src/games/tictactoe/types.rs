//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Side that owns a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Turn {
    /// The human player, placing marks by coordinate.
    User,
    /// The computer, placing marks in random empty cells.
    Computer,
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by one side.
    Occupied(Turn),
}

/// Strings used to render marks on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Mark written for user moves.
    pub user: String,
    /// Mark written for computer moves.
    pub computer: String,
}

impl Symbols {
    /// Rendering of an empty cell.
    pub const EMPTY: &'static str = "";

    /// Returns the symbol for a single square.
    pub fn render(&self, square: Square) -> &str {
        match square {
            Square::Empty => Self::EMPTY,
            Square::Occupied(Turn::User) => &self.user,
            Square::Occupied(Turn::Computer) => &self.computer,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            user: "x".to_string(),
            computer: "o".to_string(),
        }
    }
}

/// Board grid as rendered strings, indexed `[row][column]`.
pub type Grid = [[String; 3]; 3];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.cells[pos.x()][pos.y()]
    }

    /// Marks an empty square. Occupied squares are left untouched.
    pub(super) fn mark(&mut self, pos: Position, turn: Turn) -> bool {
        let cell = &mut self.cells[pos.x()][pos.y()];
        if *cell != Square::Empty {
            return false;
        }
        *cell = Square::Occupied(turn);
        true
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Number of squares marked by `turn`.
    pub fn count(&self, turn: Turn) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|s| **s == Square::Occupied(turn))
            .count()
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.cells
    }

    /// Renders the board as an owned grid of symbols.
    pub fn render(&self, symbols: &Symbols) -> Grid {
        self.cells
            .map(|row| row.map(|square| symbols.render(square).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_board_renders_empty_strings() {
        let grid = Board::new().render(&Symbols::default());
        for row in &grid {
            for cell in row {
                assert_eq!(cell, "");
            }
        }
    }

    #[test]
    fn test_mark_does_not_overwrite() {
        let mut board = Board::new();
        let pos = Position::new(0, 2).unwrap();
        assert!(board.mark(pos, Turn::User));
        assert!(!board.mark(pos, Turn::Computer));
        assert_eq!(board.get(pos), Square::Occupied(Turn::User));
    }

    #[test]
    fn test_empty_positions_row_major() {
        let mut board = Board::new();
        board.mark(Position::new(0, 0).unwrap(), Turn::User);
        let empty = board.empty_positions();
        assert_eq!(empty.len(), 8);
        assert_eq!(empty[0], Position::new(0, 1).unwrap());
        assert_eq!(empty[3], Position::new(1, 1).unwrap());
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new();
        board.mark(Position::new(1, 1).unwrap(), Turn::User);
        board.mark(Position::new(2, 0).unwrap(), Turn::Computer);
        assert_eq!(board.count(Turn::User), 1);
        assert_eq!(board.count(Turn::Computer), 1);
        assert_eq!(board.occupied(), 2);
        assert!(!board.is_full());
    }

    #[test]
    fn test_turn_strings() {
        assert_eq!(Turn::User.to_string(), "user");
        assert_eq!(Turn::from_str("computer").unwrap(), Turn::Computer);
        assert_eq!(serde_json::to_string(&Turn::User).unwrap(), "\"user\"");
    }

    #[test]
    fn test_custom_symbols() {
        let symbols = Symbols {
            user: "X".to_string(),
            computer: "O".to_string(),
        };
        let mut board = Board::new();
        board.mark(Position::new(2, 1).unwrap(), Turn::Computer);
        assert_eq!(board.render(&symbols)[2][1], "O");
    }
}
