//! Game outcome and per-game match results.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// State of the current game, derived from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// Board filled with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Status line for this outcome, given whose turn it is.
    ///
    /// `turn` is only consulted while the game is in progress.
    pub fn status_text(&self, turn: Mark) -> String {
        match self {
            Outcome::InProgress => format!("{turn}'s turn"),
            Outcome::Won(mark) => format!("{mark} wins!"),
            Outcome::Draw => "Draw!".to_string(),
        }
    }
}

/// Result of one completed game, as kept in the statistics history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// X completed a line.
    XWin,
    /// O completed a line.
    OWin,
    /// The game was drawn.
    Draw,
}

impl MatchResult {
    /// Maps a terminal outcome to its result. `InProgress` has none.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won(mark) => Some(Self::win_for(mark)),
            Outcome::Draw => Some(MatchResult::Draw),
        }
    }

    /// The win result for `mark`.
    pub fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => MatchResult::XWin,
            Mark::O => MatchResult::OWin,
        }
    }

    /// Short label: `"X"`, `"O"` or `"Draw"`.
    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::XWin => "X",
            MatchResult::OWin => "O",
            MatchResult::Draw => "Draw",
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(Outcome::InProgress.status_text(Mark::O), "O's turn");
        assert_eq!(Outcome::Won(Mark::X).status_text(Mark::O), "X wins!");
        assert_eq!(Outcome::Draw.status_text(Mark::X), "Draw!");
    }

    #[test]
    fn test_match_result_from_outcome() {
        assert_eq!(MatchResult::from_outcome(Outcome::InProgress), None);
        assert_eq!(
            MatchResult::from_outcome(Outcome::Won(Mark::O)),
            Some(MatchResult::OWin)
        );
        assert_eq!(
            MatchResult::from_outcome(Outcome::Draw),
            Some(MatchResult::Draw)
        );
    }

    #[test]
    fn test_terminal() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::Won(Mark::X).is_terminal());
        assert!(Outcome::Draw.is_terminal());
    }
}
