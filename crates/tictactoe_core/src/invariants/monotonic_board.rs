//! Monotonic board invariant: cells never change once marked.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: the board is exactly the current game's move log, replayed.
///
/// Every move landed on an empty cell, and no cell was marked without a
/// move log entry.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.moves() {
            if !reconstructed.is_empty(mov.index) {
                return false;
            }
            reconstructed.place(mov.index, mov.mark);
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (replaying the move log reproduces the board)"
    }
}
