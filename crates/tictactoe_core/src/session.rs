//! The game session: one board, one turn, one outcome, and the statistics
//! ledger that outlives individual games.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::outcome::{MatchResult, Outcome};
use super::position::Position;
use super::rules;
use super::snapshot::Snapshot;
use super::stats::Statistics;
use super::types::{Board, Mark};
use tracing::{info, instrument, warn};

/// A single tic-tac-toe session.
///
/// Moves, restarts and resets each update board, turn, outcome and
/// statistics together. A rejected move changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) outcome: Outcome,
    pub(crate) starter: Mark,
    pub(crate) moves: Vec<Move>,
    pub(crate) stats: Statistics,
}

impl GameSession {
    /// Creates a session with an empty board, X to move and no statistics.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            board: Board::new(),
            turn: Mark::X,
            outcome: Outcome::InProgress,
            starter: Mark::X,
            moves: Vec::new(),
            stats: Statistics::new(),
        }
    }

    /// Places the current turn's mark at `index` (0-8).
    ///
    /// On success the turn passes to the opponent and the outcome is
    /// re-derived from the board. The move that ends a game records its
    /// result in the statistics.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`MoveError::GameAlreadyOver`] once the game is won or drawn
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    /// - [`MoveError::IndexOutOfRange`] if `index` is not 0-8
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if let Err(e) = MoveContract::pre(self, &index) {
            warn!(index, error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mark = self.turn;
        self.board.place(index, mark);
        self.moves.push(Move::new(mark, index));
        self.turn = mark.opponent();
        self.outcome = rules::evaluate(&self.board);

        if let Some(result) = MatchResult::from_outcome(self.outcome) {
            self.stats.record(result);
            info!(
                outcome = ?self.outcome,
                games = self.stats.total_games(),
                "Game finished"
            );
        }

        #[cfg(debug_assertions)]
        {
            let verdict = MoveContract::post(&before, self);
            debug_assert!(verdict.is_ok(), "Move postcondition violated: {verdict:?}");
        }

        Ok(())
    }

    /// Applies a move at a named position.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::apply_move`].
    pub fn apply_position(&mut self, position: Position) -> Result<(), MoveError> {
        self.apply_move(position.to_index())
    }

    /// Starts a new game and keeps the statistics.
    ///
    /// X opens when the number of completed games is even, O when it is odd.
    /// An unfinished game is discarded without recording a result.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let starter = self.stats.next_starter();
        if !self.outcome.is_terminal() && !self.moves.is_empty() {
            info!(moves = self.moves.len(), "Discarding unfinished game");
        }
        self.begin(starter);
        info!(%starter, games = self.stats.total_games(), "Game restarted");
    }

    /// Starts a new game and clears the statistics. X opens.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.stats.clear();
        self.begin(Mark::X);
        info!("Session reset");
    }

    fn begin(&mut self, starter: Mark) {
        self.board = Board::new();
        self.turn = starter;
        self.starter = starter;
        self.outcome = Outcome::InProgress;
        self.moves.clear();
    }

    /// `"X's turn"`, `"O wins!"` or `"Draw!"`.
    pub fn status_text(&self) -> String {
        self.outcome.status_text(self.turn)
    }

    /// Copies the observable state for a front-end.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::of(self)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the outcome of the current game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Mark that opened the current game.
    pub fn starter(&self) -> Mark {
        self.starter
    }

    /// Moves of the current game, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the statistics ledger.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Positions still open. Empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Whether a restart would change anything visible.
    ///
    /// False only for a fresh game with no marks yet.
    pub fn can_restart(&self) -> bool {
        self.outcome.is_terminal() || self.board.occupied_count() > 0
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn play(session: &mut GameSession, indices: &[usize]) {
        for &index in indices {
            session.apply_move(index).expect("legal move");
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.outcome(), Outcome::InProgress);
        assert_eq!(session.stats(), &Statistics::new());
        assert_eq!(session.status_text(), "X's turn");
        assert!(!session.can_restart());
    }

    #[test]
    fn test_move_places_mark_and_flips_turn() {
        let mut session = GameSession::new();
        session.apply_move(4).expect("legal move");
        assert_eq!(session.board().get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(session.turn(), Mark::O);
        assert_eq!(session.moves(), &[Move::new(Mark::X, 4)]);
        assert!(session.can_restart());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut session = GameSession::new();
        session.apply_move(4).expect("legal move");
        let before = session.clone();
        assert_eq!(session.apply_move(4), Err(MoveError::CellOccupied(4)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_out_of_range_rejected_without_change() {
        let mut session = GameSession::new();
        let before = session.clone();
        assert_eq!(session.apply_move(9), Err(MoveError::IndexOutOfRange(9)));
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_records_once() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1, 5, 2]);
        assert_eq!(session.outcome(), Outcome::Won(Mark::X));
        assert_eq!(session.status_text(), "X wins!");
        assert_eq!(session.stats().history(), &[MatchResult::XWin]);

        let before = session.clone();
        assert_eq!(session.apply_move(8), Err(MoveError::GameAlreadyOver));
        assert_eq!(session, before);
        assert!(session.valid_moves().is_empty());
    }

    #[test]
    fn test_turn_flips_on_winning_move() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4, 1, 5, 2]);
        assert_eq!(session.turn(), Mark::O);
    }

    #[test]
    fn test_restart_mid_game_discards_without_recording() {
        let mut session = GameSession::new();
        play(&mut session, &[0, 4]);
        session.restart();
        assert_eq!(session.board(), &Board::new());
        assert_eq!(session.turn(), Mark::X);
        assert_eq!(session.stats().total_games(), 0);
        assert!(session.moves().is_empty());
    }

    #[test]
    fn test_apply_position() {
        let mut session = GameSession::new();
        session
            .apply_position(Position::BottomRight)
            .expect("legal move");
        assert_eq!(session.board().get(8), Some(Cell::Occupied(Mark::X)));
        assert_eq!(session.valid_moves().len(), 8);
    }
}
