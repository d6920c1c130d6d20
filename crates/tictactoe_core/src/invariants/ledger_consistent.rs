//! Ledger invariant: counters agree with the match history.

use super::super::{GameSession, MatchResult};
use super::Invariant;

/// Invariant: `history.len() == x_wins + o_wins + draws`, and each counter
/// equals the number of matching history entries.
pub struct LedgerConsistentInvariant;

impl Invariant<GameSession> for LedgerConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let stats = session.stats();
        let tally = |wanted: MatchResult| {
            stats
                .history()
                .iter()
                .filter(|result| **result == wanted)
                .count()
        };

        let x_wins = stats.x_wins() as usize;
        let o_wins = stats.o_wins() as usize;
        let draws = stats.draws() as usize;

        stats.history().len() == x_wins + o_wins + draws
            && tally(MatchResult::XWin) == x_wins
            && tally(MatchResult::OWin) == o_wins
            && tally(MatchResult::Draw) == draws
    }

    fn description() -> &'static str {
        "Statistics counters match the match history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_across_games() {
        let mut session = GameSession::new();
        for index in [0, 4, 1, 5, 2] {
            session.apply_move(index).expect("legal move");
        }
        session.restart();
        for index in [0, 1, 2, 3, 5, 4, 6, 8, 7] {
            session.apply_move(index).expect("legal move");
        }
        assert_eq!(session.stats().total_games(), 2);
        assert!(LedgerConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_reset_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 1, 5, 2] {
            session.apply_move(index).expect("legal move");
        }
        session.reset();
        assert!(LedgerConsistentInvariant::holds(&session));
    }
}
