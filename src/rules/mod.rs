//! Game rules: terminal-state evaluation.
//!
//! Pure functions over a board snapshot. Rules are separated from board
//! storage so the move engine and the opponent selector can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winning_line;

use crate::types::{Board, Line, Mark};

/// A terminal outcome detected on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A line of three identical marks.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line.
        line: Line,
    },
    /// Full board with no completed line.
    Draw,
}

/// Evaluates a board snapshot for a terminal outcome.
///
/// Returns `None` while the game can continue. Depends only on the board
/// passed in; lines are scanned in fixed order (rows, columns, diagonals)
/// and the first complete one wins.
pub fn evaluate(board: &Board) -> Option<Verdict> {
    if let Some((winner, line)) = winning_line(board) {
        return Some(Verdict::Won { winner, line });
    }
    if is_full(board) {
        return Some(Verdict::Draw);
    }
    None
}
