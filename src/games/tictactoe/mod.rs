mod action;
mod game;
mod invariants;
mod position;
mod random;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{
    GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant,
};
pub use position::Position;
pub use random::{AnyRandom, FixedRandom, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use types::{Board, Grid, Square, Symbols, Turn};
