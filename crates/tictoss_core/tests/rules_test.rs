//! Tests for win, draw and computer move selection.

use tictoss_core::rules::{PREFERENCE_ORDER, WINNING_LINES, is_full};
use tictoss_core::{
    Board, Mark, Position, Square, check_draw, check_win, select_computer_move,
};

fn board_with(marks: &[(Position, Mark)]) -> Board {
    let mut board = Board::new();
    for (pos, mark) in marks {
        board.set(*pos, Square::Occupied(*mark));
    }
    board
}

#[test]
fn test_each_line_is_reported_with_its_mark() {
    for (i, line) in WINNING_LINES.iter().enumerate() {
        let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
        let board = board_with(&line.map(|pos| (pos, mark)));
        let win = check_win(&board).expect("line should win");
        assert_eq!(win.mark, mark, "line {i}");
        assert_eq!(win.line, *line, "line {i}");
    }
}

#[test]
fn test_two_completed_lines_report_first_in_scan_order() {
    // Bottom row (index 2) and right column (index 5) both complete.
    let board: Board = "..O ..O OOO".parse().unwrap();
    let win = check_win(&board).unwrap();
    assert_eq!(win.line, WINNING_LINES[2]);

    // Left column (3) and main diagonal (6): column comes first.
    let board: Board = "X.. XX. X.X".parse().unwrap();
    assert_eq!(check_win(&board).unwrap().line, WINNING_LINES[3]);

    // Two different marks: the earlier line decides the winner.
    let board: Board = "OOO ... XXX".parse().unwrap();
    assert_eq!(check_win(&board).unwrap().mark, Mark::O);
}

#[test]
fn test_mixed_line_is_not_a_win() {
    let board: Board = "XXO ... ...".parse().unwrap();
    assert_eq!(check_win(&board), None);
}

#[test]
fn test_draw_requires_full_board_without_winner() {
    assert!(!check_draw(&Board::new()));
    assert!(!check_draw(&"XOX OX. ...".parse().unwrap()));
    assert!(check_draw(&"XOX XOO OXX".parse().unwrap()));

    let won_full: Board = "XXX OOX OXO".parse().unwrap();
    assert!(is_full(&won_full));
    assert!(!check_draw(&won_full));
}

#[test]
fn test_computer_completes_own_line() {
    let board: Board = "XX. ... ...".parse().unwrap();
    assert_eq!(
        select_computer_move(&board, Mark::X, Mark::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_computer_blocks_opponent_line() {
    let board: Board = "OO. ... ...".parse().unwrap();
    assert_eq!(
        select_computer_move(&board, Mark::X, Mark::O),
        Some(Position::TopRight)
    );
}

#[test]
fn test_computer_opens_in_center() {
    assert_eq!(
        select_computer_move(&Board::new(), Mark::O, Mark::X),
        Some(Position::Center)
    );
}

#[test]
fn test_computer_follows_preference_order_on_quiet_boards() {
    // Neither side ever has two in a line, so only tier 3 applies.
    let mut board = Board::new();
    let quiet = [
        (Position::Center, Mark::X),
        (Position::TopLeft, Mark::O),
    ];
    for (step, (pos, mark)) in quiet.iter().enumerate() {
        assert_eq!(
            select_computer_move(&board, Mark::O, Mark::X),
            Some(PREFERENCE_ORDER[step])
        );
        board.set(*pos, Square::Occupied(*mark));
    }
    assert_eq!(
        select_computer_move(&board, Mark::O, Mark::X),
        Some(Position::TopRight)
    );
}

#[test]
fn test_computer_does_not_mutate_board() {
    let board: Board = "XX. OO. ...".parse().unwrap();
    let before = board.clone();
    select_computer_move(&board, Mark::O, Mark::X);
    assert_eq!(board, before);
}

#[test]
fn test_computer_has_no_move_on_full_board() {
    let board: Board = "XOX XOO OXX".parse().unwrap();
    assert_eq!(select_computer_move(&board, Mark::O, Mark::X), None);
}
