//! Moves and the errors that reject them.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A mark placed at a board index. Entries of the current game's move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Board index (0-8).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, index: usize) -> Self {
        Self { mark, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Reason a move was rejected. A rejected move changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The cell at the index is already marked.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] usize),

    /// The index is outside 0-8.
    #[display("Index {_0} is out of range (must be 0-8)")]
    IndexOutOfRange(#[error(not(source))] usize),
}
