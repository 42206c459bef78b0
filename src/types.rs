//! Core domain types: marks, cells, the board, and game status.

use crate::game::MoveError;
use serde::{Deserialize, Serialize};

/// A player's mark. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The first player's mark.
    X,
    /// The second player's mark.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    Empty,
    /// Cell holding a player's mark.
    Marked(Mark),
}

/// One of the 8 winning triples, declared in scan order:
/// rows, then columns, then diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Returns the three board indices this line covers.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::MiddleColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::Diagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The receiver is untouched; cells are never overwritten once set.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::IndexOutOfRange` if `index` is not 0-8, or
    /// `MoveError::OccupiedCell` if the target cell already holds a mark.
    pub fn place(&self, index: usize, mark: Mark) -> Result<Board, MoveError> {
        match self.get(index) {
            None => Err(MoveError::IndexOutOfRange(index)),
            Some(Cell::Marked(_)) => Err(MoveError::OccupiedCell(index)),
            Some(Cell::Empty) => {
                let mut next = *self;
                next.cells[index] = Cell::Marked(mark);
                Ok(next)
            }
        }
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns the indices of all empty cells, in board order.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => ".".to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                f.write_str(&symbol)?;
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameStatus {
    /// Game is ongoing; `turn` is the player to move.
    InProgress {
        /// The mark that moves next.
        turn: Mark,
    },
    /// Game ended with a winner.
    Won {
        /// The winning mark.
        winner: Mark,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Checks whether the game still accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameStatus::InProgress { .. })
    }
}
