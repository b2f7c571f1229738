//! Moves and the reasons a requested move is refused.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// A mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where the mark goes.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Why a move request was refused.
///
/// Refusals are expected (a click landing after the round ended, a double
/// click on a filled square) and are never surfaced to players.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    SquareOccupied(Position),

    /// No round is in progress.
    #[display("No round is in progress")]
    RoundInactive,

    /// The mark is not the one due to move.
    #[display("It's not {}'s turn", _0)]
    WrongMark(Mark),

    /// The computer is due to move, so human input is ignored.
    #[display("Waiting for the computer to move")]
    ComputerToMove,
}

impl std::error::Error for MoveError {}
