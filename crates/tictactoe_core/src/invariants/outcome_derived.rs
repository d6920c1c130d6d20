//! Outcome invariant: the stored outcome is what the board says.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: the outcome equals [`rules::evaluate`] of the board, and at
/// most one mark owns a completed line.
pub struct OutcomeDerivedInvariant;

impl Invariant<GameSession> for OutcomeDerivedInvariant {
    fn holds(session: &GameSession) -> bool {
        rules::line_owners(session.board()).len() <= 1
            && session.outcome() == rules::evaluate(session.board())
    }

    fn description() -> &'static str {
        "Outcome is derived from the board and names at most one winner"
    }
}
