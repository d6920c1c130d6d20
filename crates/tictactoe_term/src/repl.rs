//! Interactive and scripted play over a session.

use crate::command::{Command, HELP};
use crate::settings::Settings;
use crate::view;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tictactoe_core::{GameSession, MoveError};
use tracing::{debug, info, instrument, warn};

/// Reads commands line by line until `quit` or end of input.
///
/// The screen is redrawn after every command. Bad input and rejected moves
/// are reported and the loop continues.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    settings: &Settings,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!("Starting interactive session");
    writeln!(output, "{}", view::screen(&session.snapshot(), settings))?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush().context("Failed to flush output")?;

        let Some(line) = lines.next() else {
            debug!("End of input");
            writeln!(output)?;
            break;
        };
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Place(position)) => {
                if let Err(e) = session.apply_position(position) {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            }
            Ok(Command::Restart) => {
                if !session.can_restart() {
                    writeln!(output, "Nothing to restart yet.")?;
                    continue;
                }
                session.restart();
            }
            Ok(Command::Reset) => session.reset(),
            Ok(Command::Help) => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            Ok(Command::Quit) => break,
            Err(e) => {
                warn!(error = %e, "Unparsed input");
                writeln!(output, "{}", e)?;
                continue;
            }
        }

        writeln!(output, "{}", view::screen(&session.snapshot(), settings))?;
    }

    info!(games = session.stats().total_games(), "Interactive session ended");
    Ok(())
}

/// A move from a replay script that the session refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Move {} (index {}) rejected: {}", ordinal, index, source)]
pub struct ReplayError {
    /// 1-based position of the move in the script.
    pub ordinal: usize,
    /// Board index that was played.
    pub index: usize,
    /// Why the session refused it.
    pub source: MoveError,
}

/// Applies `moves` in order, stopping at the first rejected one.
///
/// # Errors
///
/// Returns [`ReplayError`] for the first move the session refuses; moves
/// before it stay applied.
#[instrument(skip(session))]
pub fn replay(session: &mut GameSession, moves: &[usize]) -> Result<(), ReplayError> {
    for (i, &index) in moves.iter().enumerate() {
        session.apply_move(index).map_err(|source| ReplayError {
            ordinal: i + 1,
            index,
            source,
        })?;
    }
    Ok(())
}

/// Replays `moves` on a fresh session and writes the final state.
///
/// The state is written even when a move is refused, so the error can be
/// read against the board it left behind.
///
/// # Errors
///
/// Returns the [`ReplayError`] for a refused move, after the output is
/// written, or any failure to write the output.
#[instrument(skip(settings, output))]
pub fn replay_to<W: Write>(
    moves: &[usize],
    settings: &Settings,
    json: bool,
    output: &mut W,
) -> Result<()> {
    let mut session = GameSession::new();
    let verdict = replay(&mut session, moves);

    let snapshot = session.snapshot();
    if json {
        let text =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        writeln!(output, "{text}")?;
    } else {
        writeln!(output, "{}", view::screen(&snapshot, settings))?;
    }

    verdict?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Outcome};

    #[test]
    fn test_replay_stops_at_first_rejection() {
        let mut session = GameSession::new();
        let err = replay(&mut session, &[4, 4, 0]).unwrap_err();
        assert_eq!(
            err,
            ReplayError {
                ordinal: 2,
                index: 4,
                source: MoveError::CellOccupied(4),
            }
        );
        assert_eq!(session.moves().len(), 1);
        assert_eq!(err.to_string(), "Move 2 (index 4) rejected: Cell 4 is already occupied");
    }

    #[test]
    fn test_replay_to_writes_state_then_fails() {
        let mut output = Vec::new();
        let err = replay_to(&[4, 4], &Settings::default(), false, &mut output).unwrap_err();

        let rejected = err.downcast_ref::<ReplayError>().expect("replay error");
        assert_eq!(rejected.source, MoveError::CellOccupied(4));
        let text = String::from_utf8(output).expect("utf-8 output");
        assert!(text.contains("O's turn"));
    }

    #[test]
    fn test_replay_to_json() {
        let mut output = Vec::new();
        replay_to(&[0, 4, 1, 5, 2], &Settings::default(), true, &mut output)
            .expect("legal moves");

        let value: serde_json::Value = serde_json::from_slice(&output).expect("json output");
        assert_eq!(value["status"], "X wins!");
        assert_eq!(value["winning_line"], serde_json::json!([0, 1, 2]));
    }

    #[test]
    fn test_replay_full_game() {
        let mut session = GameSession::new();
        replay(&mut session, &[0, 4, 1, 5, 2]).expect("legal moves");
        assert_eq!(session.outcome(), Outcome::Won(Mark::X));
    }
}
