//! Read-only view of a session for front-ends.

use super::rules;
use super::stats::Statistics;
use super::types::{CELL_COUNT, Cell, Mark};
use super::{GameSession, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to draw a session.
///
/// Detached from the session: later moves do not change it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    board: [Cell; CELL_COUNT],
    /// Mark that moves next.
    turn: Mark,
    /// Outcome of the current game.
    outcome: Outcome,
    /// Session statistics.
    stats: Statistics,
    /// Status line derived from `outcome` and `turn`.
    status: String,
    /// Completed line, if the game was won.
    winning_line: Option<[usize; 3]>,
    /// Whether a restart would change anything.
    can_restart: bool,
}

impl Snapshot {
    pub(crate) fn of(session: &GameSession) -> Self {
        Self {
            board: *session.board().cells(),
            turn: session.turn(),
            outcome: session.outcome(),
            stats: session.stats().clone(),
            status: session.status_text(),
            winning_line: rules::winning_line(session.board()),
            can_restart: session.can_restart(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_detached() {
        let mut session = GameSession::new();
        session.apply_move(0).expect("legal move");
        let snapshot = session.snapshot();
        session.apply_move(1).expect("legal move");

        assert_eq!(snapshot.board()[0], Cell::Occupied(Mark::X));
        assert_eq!(snapshot.board()[1], Cell::Empty);
        assert_eq!(*snapshot.turn(), Mark::O);
        assert_eq!(snapshot.status(), "O's turn");
    }

    #[test]
    fn test_snapshot_winning_line() {
        let mut session = GameSession::new();
        for index in [2, 0, 4, 1, 6] {
            session.apply_move(index).expect("legal move");
        }
        let snapshot = session.snapshot();
        assert_eq!(*snapshot.outcome(), Outcome::Won(Mark::X));
        assert_eq!(*snapshot.winning_line(), Some([2, 4, 6]));
        assert!(*snapshot.can_restart());
    }
}
