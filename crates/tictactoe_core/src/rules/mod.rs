//! Board evaluation rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The session calls [`evaluate`] after
//! every move; nothing here holds state.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, detect_winner, line_owners, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Derives the outcome of a board: winner first, then full board.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = detect_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
