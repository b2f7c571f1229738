//! Move selection for the computer opponent.
//!
//! A greedy one-ply heuristic rather than a full search:
//!
//! 1. complete a line of our own if any empty square does it;
//! 2. otherwise occupy any square that would complete an opponent line;
//! 3. otherwise take the first free square in [`PREFERENCE_ORDER`].
//!
//! Tiers 1 and 2 scan squares in index order 0→8. That order is the
//! tie-break when several squares qualify, so the choice is fully
//! determined by the board.
//!
//! A square "completes a line" only if one of the lines through that
//! square becomes full of one mark. On a board that already holds a
//! finished line elsewhere, that existing line does not make every empty
//! square look like a win or a block. Such boards never arise in play and
//! only reach here through `suggest`.

use super::win::completes_line;
use crate::{Board, Mark, Position};
use tracing::{debug, instrument};

/// Center, then corners, then edges.
pub const PREFERENCE_ORDER: [Position; 9] = [
    Position::Center,
    Position::TopLeft,
    Position::TopRight,
    Position::BottomLeft,
    Position::BottomRight,
    Position::TopCenter,
    Position::MiddleLeft,
    Position::MiddleRight,
    Position::BottomCenter,
];

/// Picks the computer's square, or `None` when the board is full.
#[instrument(skip(board))]
pub fn select_computer_move(board: &Board, own: Mark, opponent: Mark) -> Option<Position> {
    if let Some(pos) = first_completing_square(board, own) {
        debug!(position = %pos, "Taking winning square");
        return Some(pos);
    }

    if let Some(pos) = first_completing_square(board, opponent) {
        debug!(position = %pos, "Blocking opponent line");
        return Some(pos);
    }

    let choice = PREFERENCE_ORDER
        .iter()
        .copied()
        .find(|pos| board.is_empty(*pos));
    debug!(position = ?choice, "Falling back to preference order");
    choice
}

fn first_completing_square(board: &Board, mark: Mark) -> Option<Position> {
    Position::valid_moves(board)
        .into_iter()
        .find(|pos| completes_line(board, *pos, mark))
}
