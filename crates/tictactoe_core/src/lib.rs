//! Tic-tac-toe session core.
//!
//! A two-player game state machine with cumulative match statistics.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation ([`detect_winner`], [`is_full`])
//! - **Session**: [`GameSession`] owns board, turn, outcome and [`Statistics`]
//! - **Snapshot**: detached, serializable view for front-ends
//! - **Contracts / invariants**: move preconditions and session properties,
//!   asserted after every move in debug builds
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, MatchResult, MoveError, Outcome, Mark};
//!
//! let mut session = GameSession::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.apply_move(index)?;
//! }
//! assert_eq!(session.outcome(), Outcome::Won(Mark::X));
//! assert_eq!(session.stats().history(), &[MatchResult::XWin]);
//! assert_eq!(session.apply_move(8), Err(MoveError::GameAlreadyOver));
//!
//! session.restart();
//! assert_eq!(session.turn(), Mark::O);
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod outcome;
mod position;
mod session;
mod shared;
mod snapshot;
mod stats;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use outcome::{MatchResult, Outcome};
pub use position::Position;
pub use rules::{WINNING_LINES, detect_winner, is_full};
pub use session::GameSession;
pub use shared::SharedSession;
pub use snapshot::Snapshot;
pub use stats::Statistics;
pub use types::{Board, CELL_COUNT, Cell, Mark};
