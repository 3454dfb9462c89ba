//! Board coordinates for tic-tac-toe moves.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell address on the board: `x` is the row, `y` the column.
///
/// Both coordinates are always in `0..3`; the only way to build a
/// position from raw numbers is [`Position::new`], which checks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    x: usize,
    y: usize,
}

/// Unchecked wire form of [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    x: usize,
    y: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = MoveError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.x, raw.y)
    }
}

impl Position {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position { x: 0, y: 0 },
        Position { x: 0, y: 1 },
        Position { x: 0, y: 2 },
        Position { x: 1, y: 0 },
        Position { x: 1, y: 1 },
        Position { x: 1, y: 2 },
        Position { x: 2, y: 0 },
        Position { x: 2, y: 1 },
        Position { x: 2, y: 2 },
    ];

    /// Creates a position, rejecting coordinates off the board.
    #[instrument]
    pub fn new(x: usize, y: usize) -> Result<Self, MoveError> {
        if x >= Self::SIZE || y >= Self::SIZE {
            return Err(MoveError::CoordinateOutOfRange { x, y });
        }
        Ok(Self { x, y })
    }

    /// Row index.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Column index.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Converts position to row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.x * Self::SIZE + self.y
    }

    /// Creates position from row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
