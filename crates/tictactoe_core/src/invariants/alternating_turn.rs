//! Alternating turn invariant: marks alternate from the game's starter.

use super::super::GameSession;
use super::Invariant;

/// Invariant: marks alternate within a game.
///
/// The move log opens with the game's starter, no mark moves twice in a
/// row, and the turn belongs to the opponent of the last mover (the starter
/// before the first move).
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let moves = session.moves();

        if let Some(first) = moves.first()
            && first.mark != session.starter()
        {
            return false;
        }

        if moves.windows(2).any(|pair| pair[0].mark == pair[1].mark) {
            return false;
        }

        let expected_turn = match moves.last() {
            Some(last) => last.mark.opponent(),
            None => session.starter(),
        };

        session.turn() == expected_turn
    }

    fn description() -> &'static str {
        "Marks alternate turns starting with the game's starter"
    }
}
