//! Stateless text rendering of a session snapshot.
//!
//! Everything here is a pure function of a [`Snapshot`] and [`Settings`].

use crate::settings::Settings;
use tictactoe_core::{Cell, Snapshot, Statistics};

/// Renders the scoreboard line: `X: 2   Draws: 1   O: 0`.
pub fn scoreboard(stats: &Statistics) -> String {
    format!(
        "X: {}   Draws: {}   O: {}",
        stats.x_wins(),
        stats.draws(),
        stats.o_wins()
    )
}

/// Renders the history line, newest last, keeping at most `limit` entries.
///
/// `None` when there is no history or `limit` is zero.
pub fn history(stats: &Statistics, limit: usize) -> Option<String> {
    let results = stats.history();
    if results.is_empty() || limit == 0 {
        return None;
    }

    let skipped = results.len().saturating_sub(limit);
    let shown = results[skipped..]
        .iter()
        .map(|r| r.label())
        .collect::<Vec<_>>()
        .join(" • ");

    if skipped > 0 {
        Some(format!("History: … {shown}"))
    } else {
        Some(format!("History: {shown}"))
    }
}

/// Renders the 3x3 grid. Cells of a completed line are bracketed.
pub fn board(snapshot: &Snapshot, show_hints: bool) -> String {
    let winning = *snapshot.winning_line();

    let cell = |index: usize| -> String {
        let symbol = match snapshot.board()[index] {
            Cell::Occupied(mark) => mark.to_string(),
            Cell::Empty if show_hints => (index + 1).to_string(),
            Cell::Empty => " ".to_string(),
        };
        if winning.is_some_and(|line| line.contains(&index)) {
            format!("[{symbol}]")
        } else {
            format!(" {symbol} ")
        }
    };

    (0..3)
        .map(|row| {
            (0..3)
                .map(|col| cell(row * 3 + col))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// Renders the whole screen: scoreboard, history, status and board.
pub fn screen(snapshot: &Snapshot, settings: &Settings) -> String {
    let mut lines = vec![scoreboard(snapshot.stats())];
    if let Some(history) = history(snapshot.stats(), *settings.history_limit()) {
        lines.push(history);
    }
    lines.push(String::new());
    lines.push(snapshot.status().clone());
    lines.push(board(snapshot, *settings.show_hints()));
    if snapshot.outcome().is_terminal() {
        lines.push(String::new());
        lines.push("Type 'restart' for a new game or 'reset' to clear the scoreboard.".to_string());
    }
    lines.join("\n")
}
