//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board) && check_win(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board: Board = "XOX OX. ...".parse().unwrap();
        assert!(!is_full(&board));
        assert!(!check_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX OXX OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(check_draw(&board));
    }

    #[test]
    fn test_not_draw_if_full_board_has_winner() {
        // X wins the main diagonal on the last square.
        let board: Board = "XOX OXO OXX".parse().unwrap();
        assert!(is_full(&board));
        assert!(!check_draw(&board));
    }
}
