//! Contract-based validation for moves.
//!
//! Preconditions decide whether a move may be applied at all; the
//! postcondition checks that an applied move changed exactly what it should.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::outcome::MatchResult;
use super::types::{CELL_COUNT, Cell};
use super::GameSession;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`MoveError::GameAlreadyOver`] once the outcome is terminal.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.outcome().is_terminal() {
            Err(MoveError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is not already marked.
///
/// Indices off the board are left to [`IndexInRange`].
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`MoveError::CellOccupied`] when the cell holds a mark.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<(), MoveError> {
        match session.board().get(index) {
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            _ => Ok(()),
        }
    }
}

/// Precondition: the index addresses a board cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Rejects with [`MoveError::IndexOutOfRange`] outside 0-8.
    #[instrument]
    pub fn check(index: usize) -> Result<(), MoveError> {
        if index < CELL_COUNT {
            Ok(())
        } else {
            Err(MoveError::IndexOutOfRange(index))
        }
    }
}

/// Composite precondition, checked in order: game not over, cell empty,
/// index in range.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        CellIsEmpty::check(index, session)?;
        IndexInRange::check(index)?;
        Ok(())
    }
}

/// Contract for placing the current turn's mark at a board index.
///
/// Postconditions:
/// - exactly one empty cell now holds the mover's mark, logged as the last move
/// - the turn passed to the opponent
/// - one result was recorded iff the game just ended, and it matches the outcome
/// - every session invariant holds
pub struct MoveContract;

impl Contract<GameSession, usize> for MoveContract {
    fn pre(session: &GameSession, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        let mover = before.turn();

        let changed: Vec<usize> = (0..CELL_COUNT)
            .filter(|&i| before.board().get(i) != after.board().get(i))
            .collect();
        let placed_once = match changed.as_slice() {
            [index] => {
                before.board().is_empty(*index)
                    && after.board().get(*index) == Some(Cell::Occupied(mover))
                    && after.moves().last().map(|m| (m.mark, m.index)) == Some((mover, *index))
            }
            _ => false,
        };
        if !placed_once {
            violations.push(InvariantViolation::new(
                "Exactly one empty cell receives the mover's mark",
            ));
        }

        if after.turn() != mover.opponent() {
            violations.push(InvariantViolation::new("Turn passes to the opponent"));
        }

        let recorded = after
            .stats()
            .total_games()
            .checked_sub(before.stats().total_games());
        let ledger_ok = match (recorded, MatchResult::from_outcome(after.outcome())) {
            (Some(1), Some(result)) => after.stats().last() == Some(result),
            (Some(0), None) => true,
            _ => false,
        };
        if !ledger_ok {
            violations.push(InvariantViolation::new(
                "One result is recorded exactly when the game ends",
            ));
        }

        if let Err(mut failed) = SessionInvariants::check_all(after) {
            violations.append(&mut failed);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition failed");
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_precondition_empty_cell() {
        let session = GameSession::new();
        assert!(MoveContract::pre(&session, &4).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut session = GameSession::new();
        session.apply_move(4).expect("legal move");
        assert_eq!(
            MoveContract::pre(&session, &4),
            Err(MoveError::CellOccupied(4))
        );
    }

    #[test]
    fn test_precondition_out_of_range() {
        let session = GameSession::new();
        assert_eq!(
            MoveContract::pre(&session, &9),
            Err(MoveError::IndexOutOfRange(9))
        );
    }

    #[test]
    fn test_game_over_checked_first() {
        let mut session = GameSession::new();
        for index in [0, 4, 1, 5, 2] {
            session.apply_move(index).expect("legal move");
        }
        assert_eq!(MoveContract::pre(&session, &0), Err(MoveError::GameAlreadyOver));
        assert_eq!(MoveContract::pre(&session, &42), Err(MoveError::GameAlreadyOver));
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_winning_move() {
        let mut before = GameSession::new();
        for index in [0, 4, 1, 5] {
            before.apply_move(index).expect("legal move");
        }
        let mut after = before.clone();
        after.apply_move(2).expect("legal move");
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.apply_move(4).expect("legal move");
        after.board.place(0, Mark::O);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
