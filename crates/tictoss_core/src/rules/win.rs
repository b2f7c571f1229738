//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines in scan order: rows, then columns, then diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// The mark holding all three squares.
    pub mark: Mark,
    /// The squares of the line, for highlighting.
    pub line: [Position; 3],
}

impl Win {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed line in [`WINNING_LINES`] order, so a
/// contrived board with two completed lines reports the earlier one.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<Win> {
    WINNING_LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let sq = board.get(a);
        match sq {
            Square::Occupied(mark) if sq == board.get(b) && sq == board.get(c) => {
                Some(Win::new(mark, line))
            }
            _ => None,
        }
    })
}

/// Returns true if placing `mark` at the empty `pos` would complete a line.
pub(crate) fn completes_line(board: &Board, pos: Position, mark: Mark) -> bool {
    WINNING_LINES
        .iter()
        .filter(|line| line.contains(&pos))
        .any(|line| {
            line.iter()
                .filter(|p| **p != pos)
                .all(|p| board.get(*p) == Square::Occupied(mark))
        })
}
