//! The move engine: the single authoritative mutation path for a game.

use crate::rules::{self, Verdict};
use crate::types::{Board, GameStatus, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error rejecting a requested operation.
///
/// All variants are recoverable: a failed call leaves the game untouched
/// and the caller may simply try a different move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not a board position (must be 0-8).
    #[display("index {_0} is out of range (must be 0-8)")]
    IndexOutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    OccupiedCell(usize),

    /// The game has ended; reset before playing again.
    #[display("game is already over")]
    GameOver,

    /// Every cell is occupied, so no move can be chosen.
    #[display("no empty cell remains")]
    NoLegalMove,
}

impl std::error::Error for MoveError {}

/// A single game: board plus status, advanced one move at a time.
///
/// All state changes flow through [`Game::apply`]; the board is replaced
/// wholesale on each accepted move and never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    status: GameStatus,
}

impl Game {
    /// Creates a new game with an empty board, `X` to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress { turn: Mark::X },
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the mark to move, or `None` once the game is over.
    pub fn turn(&self) -> Option<Mark> {
        match self.status {
            GameStatus::InProgress { turn } => Some(turn),
            _ => None,
        }
    }

    /// Applies a move at `index` for the player whose turn it is.
    ///
    /// On success the status is re-evaluated: a completed line or a full
    /// board makes the game terminal, otherwise the turn flips. Failed
    /// calls are no-ops.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the game has already ended.
    /// - `MoveError::IndexOutOfRange` if `index` is not 0-8.
    /// - `MoveError::OccupiedCell` if the cell is already marked.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply(&mut self, index: usize) -> Result<(), MoveError> {
        let GameStatus::InProgress { turn } = self.status else {
            return Err(MoveError::GameOver);
        };

        let board = self.board.place(index, turn)?;

        let status = match rules::evaluate(&board) {
            Some(Verdict::Won { winner, line }) => GameStatus::Won { winner, line },
            Some(Verdict::Draw) => GameStatus::Draw,
            None => GameStatus::InProgress {
                turn: turn.opponent(),
            },
        };

        debug!(index, mark = %turn, next_status = ?status, "Move applied");

        self.board = board;
        self.status = status;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
