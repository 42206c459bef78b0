//! Tests for the board and move engine.

use noughts::{Board, Cell, Game, GameStatus, Line, Mark, MoveError, rules};

#[test]
fn test_turn_alternation_parity() {
    // After N legal non-terminal moves, X moves next iff N is even.
    let mut game = Game::new();
    let sequence = [0, 1, 3, 2, 7, 5];
    for (n, &idx) in sequence.iter().enumerate() {
        let expected = if n % 2 == 0 { Mark::X } else { Mark::O };
        assert_eq!(game.turn(), Some(expected), "before move {n}");
        game.apply(idx).unwrap();
    }
}

#[test]
fn test_end_to_end_top_row_win() {
    let mut game = Game::new();
    for idx in [0, 4, 1, 3, 2] {
        game.apply(idx).unwrap();
    }
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Mark::X,
            line: Line::TopRow
        }
    );
}

#[test]
fn test_repeated_index_rejected_idempotently() {
    let mut game = Game::new();
    game.apply(4).unwrap();
    let snapshot = *game.board();

    assert_eq!(game.apply(4), Err(MoveError::OccupiedCell(4)));
    assert_eq!(*game.board(), snapshot);
    // Still O's turn; the rejection consumed nothing.
    assert_eq!(game.turn(), Some(Mark::O));
}

#[test]
fn test_won_cell_keeps_original_mark() {
    let mut game = Game::new();
    for idx in [0, 4, 1, 3, 2] {
        game.apply(idx).unwrap();
    }
    assert_eq!(game.board().get(4), Some(Cell::Marked(Mark::O)));
    assert_eq!(game.board().get(0), Some(Cell::Marked(Mark::X)));
}

#[test]
fn test_evaluate_is_pure_over_snapshots() {
    let mut game = Game::new();
    for idx in [0, 4, 1, 3] {
        game.apply(idx).unwrap();
    }
    let board = *game.board();
    // Evaluating the same snapshot twice gives identical results and
    // matches the engine's own status.
    assert_eq!(rules::evaluate(&board), rules::evaluate(&board));
    assert_eq!(rules::evaluate(&board), None);
    assert!(game.status().is_in_progress());
}

#[test]
fn test_o_can_win() {
    let mut game = Game::new();
    // X: 0, 1, 5; O completes the anti-diagonal 2, 4, 6.
    for idx in [0, 2, 1, 4, 5, 6] {
        game.apply(idx).unwrap();
    }
    assert_eq!(
        game.status(),
        GameStatus::Won {
            winner: Mark::O,
            line: Line::AntiDiagonal
        }
    );
}

#[test]
fn test_draw_rejects_everything() {
    let mut game = Game::new();
    // X|O|X / X|O|O / O|X|X - full board, no line.
    for idx in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.apply(idx).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Draw);
    for idx in 0..9 {
        assert_eq!(game.apply(idx), Err(MoveError::GameOver));
    }
}

#[test]
fn test_board_display_grid() {
    let board = Board::new().place(4, Mark::X).unwrap();
    let rendered = board.to_string();
    assert_eq!(rendered, ".|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.");
}
