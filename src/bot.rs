//! Heuristic opponent: win if possible, block if necessary, else random.
//!
//! This is a deliberately shallow 2-ply selector, not a game-tree search.
//! An optimal human can beat it in specific lines; that is accepted
//! behavior.

use crate::game::MoveError;
use crate::types::{Board, Cell, Line, Mark};
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Chooses a move for `self_mark` on the given board.
///
/// Priority, first match wins:
/// 1. complete one of our own lines;
/// 2. block a line the opponent is about to complete;
/// 3. pick uniformly among the empty cells.
///
/// Both scans walk the 8 lines in fixed order (rows, columns, diagonals),
/// and the win scan runs to completion before the block scan starts.
///
/// # Errors
///
/// Returns `MoveError::NoLegalMove` if the board is full.
#[instrument(skip(rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    self_mark: Mark,
    rng: &mut R,
) -> Result<usize, MoveError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    if let Some(index) = completing_cell(board, self_mark) {
        debug!(index, mark = %self_mark, "Taking winning cell");
        return Ok(index);
    }

    if let Some(index) = completing_cell(board, self_mark.opponent()) {
        debug!(index, mark = %self_mark, "Blocking opponent");
        return Ok(index);
    }

    let index = empty[rng.random_range(0..empty.len())];
    debug!(index, mark = %self_mark, "Falling back to random cell");
    Ok(index)
}

/// Finds the empty cell that would complete a line for `mark`.
///
/// A line qualifies when exactly two of its cells hold `mark` and the
/// third is empty. Returns the first match in line order.
fn completing_cell(board: &Board, mark: Mark) -> Option<usize> {
    for line in Line::iter() {
        let mut own = 0;
        let mut empty = None;
        for index in line.cells() {
            match board.get(index) {
                Some(Cell::Marked(m)) if m == mark => own += 1,
                Some(Cell::Empty) => empty = Some(index),
                _ => {}
            }
        }
        if own == 2 && let Some(index) = empty {
            return Some(index);
        }
    }
    None
}
