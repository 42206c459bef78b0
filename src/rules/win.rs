//! Win detection logic.

use crate::types::{Board, Cell, Line, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Returns the winning mark and the line it completes, or `None` if no
/// line holds three identical marks. Lines are scanned in declaration
/// order (rows, columns, diagonals), so when several lines are complete
/// at once the earliest one is reported.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line in Line::iter() {
        let [a, b, c] = line.cells();
        if let Some(Cell::Marked(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Marked(mark))
            && board.get(c) == Some(Cell::Marked(mark))
        {
            return Some((mark, line));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        for idx in [0, 1, 2] {
            board = board.place(idx, Mark::X).unwrap();
        }
        assert_eq!(winning_line(&board), Some((Mark::X, Line::TopRow)));
    }

    #[test]
    fn test_winner_middle_column() {
        let mut board = Board::new();
        for idx in [1, 4, 7] {
            board = board.place(idx, Mark::O).unwrap();
        }
        assert_eq!(winning_line(&board), Some((Mark::O, Line::MiddleColumn)));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new();
        for idx in [0, 4, 8] {
            board = board.place(idx, Mark::O).unwrap();
        }
        assert_eq!(winning_line(&board), Some((Mark::O, Line::Diagonal)));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for idx in [2, 4, 6] {
            board = board.place(idx, Mark::X).unwrap();
        }
        assert_eq!(winning_line(&board), Some((Mark::X, Line::AntiDiagonal)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        for idx in [0, 1] {
            board = board.place(idx, Mark::X).unwrap();
        }
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .place(0, Mark::X)
            .unwrap()
            .place(1, Mark::O)
            .unwrap()
            .place(2, Mark::X)
            .unwrap();
        assert_eq!(winning_line(&board), None);
    }
}
