//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::{instrument, trace};

/// Every winning line, in evaluation order: rows, columns, diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first completed line, if any.
///
/// A line is complete when its three cells hold the same mark.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    let cells = board.cells();
    WINNING_LINES.into_iter().find(|&[a, b, c]| {
        cells[a] != Cell::Empty && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first completed line in
/// [`WINNING_LINES`] order, `None` otherwise.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<Mark> {
    let line = winning_line(board)?;
    trace!(?line, "Completed line");
    board.cells()[line[0]].mark()
}

/// Marks that own at least one completed line.
///
/// Legal play never yields two; used to check that.
pub fn line_owners(board: &Board) -> Vec<Mark> {
    let cells = board.cells();
    let mut owners = Vec::new();
    for [a, b, c] in WINNING_LINES {
        if let Cell::Occupied(mark) = cells[a]
            && cells[b] == cells[a]
            && cells[c] == cells[a]
            && !owners.contains(&mark)
        {
            owners.push(mark);
        }
    }
    owners
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board.place(index, mark);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(detect_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::X)]);
        assert_eq!(detect_winner(&board), Some(Mark::X));
        assert_eq!(winning_line(&board), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_every_line() {
        for line in WINNING_LINES {
            let board = board_with(&line.map(|i| (i, Mark::O)));
            assert_eq!(detect_winner(&board), Some(Mark::O), "line {line:?}");
            assert_eq!(winning_line(&board), Some(line));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Mark::O), (4, Mark::O), (6, Mark::O), (0, Mark::X)]);
        assert_eq!(detect_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X), (2, Mark::O)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable by legal play, but evaluation order must be fixed.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (6, Mark::O),
            (7, Mark::O),
            (8, Mark::O),
        ]);
        assert_eq!(detect_winner(&board), Some(Mark::X));
        assert_eq!(line_owners(&board), vec![Mark::X, Mark::O]);
    }
}
