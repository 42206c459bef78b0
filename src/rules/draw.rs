//! Draw detection logic.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells marked).
///
/// A full board with no winning line is a draw.
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::winning_line;
    use super::*;
    use crate::types::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && winning_line(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::new().place(4, Mark::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X|O|X / O|X|X / O|X|O - full, no line
        let mut board = Board::new();
        for (idx, mark) in [
            (0, Mark::X),
            (1, Mark::O),
            (2, Mark::X),
            (3, Mark::O),
            (4, Mark::X),
            (5, Mark::X),
            (6, Mark::O),
            (7, Mark::X),
            (8, Mark::O),
        ] {
            board = board.place(idx, mark).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        for idx in [0, 1, 2] {
            board = board.place(idx, Mark::X).unwrap();
        }
        for idx in [3, 4] {
            board = board.place(idx, Mark::O).unwrap();
        }
        assert!(!is_draw(&board));
    }
}
