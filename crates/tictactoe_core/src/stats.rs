//! Cumulative match statistics for a session.

use super::outcome::MatchResult;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win/draw counters plus the chronological list of completed games.
///
/// The counters always agree with `history`: recording is the only way in,
/// and [`Statistics::clear`] the only way out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Statistics {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
    history: Vec<MatchResult>,
}

impl Statistics {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn games.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games won by `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Completed games, oldest first.
    pub fn history(&self) -> &[MatchResult] {
        &self.history
    }

    /// Most recent result.
    pub fn last(&self) -> Option<MatchResult> {
        self.history.last().copied()
    }

    /// Number of completed games.
    pub fn total_games(&self) -> usize {
        self.history.len()
    }

    /// Mark that opens the next game after a restart.
    ///
    /// X after an even number of completed games, O after an odd number.
    pub fn next_starter(&self) -> Mark {
        if self.total_games() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Appends a completed game.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::XWin => self.x_wins += 1,
            MatchResult::OWin => self.o_wins += 1,
            MatchResult::Draw => self.draws += 1,
        }
        self.history.push(result);
        debug!(
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Recorded match result"
        );
    }

    /// Forgets every recorded game.
    #[instrument(skip(self))]
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
