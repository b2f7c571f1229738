//! Board and turn state for a single round.

use crate::action::{Move, MoveError};
use crate::rules::{self, Win};
use crate::{Board, Mark, Position, Square};
use tracing::{debug, instrument};

/// Result of a move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The request broke a precondition; nothing changed.
    Ignored(MoveError),
    /// The mark was placed and the turn passed to `next`.
    Continue {
        /// Mark due to move next.
        next: Mark,
    },
    /// The mark was placed and completed a line.
    Won(Win),
    /// The mark was placed and filled the board without a line.
    Draw,
}

/// One round: the board, whose turn it is, and whether moves are accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    board: Board,
    current: Mark,
    active: bool,
    history: Vec<Move>,
}

impl Round {
    /// Creates an inactive round with an empty board.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            active: false,
            history: Vec::new(),
        }
    }

    /// Clears the board and opens the round with `first` to move.
    #[instrument(skip(self))]
    pub fn start(&mut self, first: Mark) {
        self.board = Board::new();
        self.current = first;
        self.active = true;
        self.history.clear();
    }

    /// Stops accepting moves. The board is left as it is.
    pub fn close(&mut self) {
        self.active = false;
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks the preconditions for placing `mark` at `index`.
    pub fn validate(&self, index: usize, mark: Mark) -> Result<Move, MoveError> {
        if !self.active {
            return Err(MoveError::RoundInactive);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }
        if mark != self.current {
            return Err(MoveError::WrongMark(mark));
        }
        Ok(Move::new(mark, position))
    }

    /// Places `mark` at `index` if the request is legal, then evaluates
    /// win, then draw, then passes the turn.
    ///
    /// Illegal requests leave the round untouched.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> MoveOutcome {
        let action = match self.validate(index, mark) {
            Ok(action) => action,
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                return MoveOutcome::Ignored(e);
            }
        };

        self.board.set(action.position, Square::Occupied(action.mark));
        self.history.push(action);
        debug_assert!(
            self.board.count(Mark::X).abs_diff(self.board.count(Mark::O)) <= 1,
            "Marks must alternate"
        );

        if let Some(win) = rules::check_win(&self.board) {
            self.active = false;
            return MoveOutcome::Won(win);
        }

        if rules::is_full(&self.board) {
            self.active = false;
            return MoveOutcome::Draw;
        }

        self.current = self.current.opponent();
        MoveOutcome::Continue { next: self.current }
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started(first: Mark) -> Round {
        let mut round = Round::new();
        round.start(first);
        round
    }

    #[test]
    fn test_new_round_is_inactive() {
        let mut round = Round::new();
        assert!(!round.is_active());
        assert_eq!(
            round.apply_move(4, Mark::X),
            MoveOutcome::Ignored(MoveError::RoundInactive)
        );
        assert!(round.board().is_empty(Position::Center));
    }

    #[test]
    fn test_move_switches_turn() {
        let mut round = started(Mark::O);
        assert_eq!(
            round.apply_move(4, Mark::O),
            MoveOutcome::Continue { next: Mark::X }
        );
        assert_eq!(round.current(), Mark::X);
        assert_eq!(round.history(), &[Move::new(Mark::O, Position::Center)]);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut round = started(Mark::X);
        round.apply_move(4, Mark::X);
        let outcome = round.apply_move(4, Mark::O);
        assert_eq!(
            outcome,
            MoveOutcome::Ignored(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(round.board().get(Position::Center), Square::Occupied(Mark::X));
        assert_eq!(round.current(), Mark::O);
    }

    #[test]
    fn test_wrong_mark_and_out_of_range_ignored() {
        let mut round = started(Mark::X);
        assert_eq!(
            round.apply_move(0, Mark::O),
            MoveOutcome::Ignored(MoveError::WrongMark(Mark::O))
        );
        assert_eq!(
            round.apply_move(9, Mark::X),
            MoveOutcome::Ignored(MoveError::OutOfRange(9))
        );
        assert!(round.history().is_empty());
        assert_eq!(round.current(), Mark::X);
    }

    #[test]
    fn test_win_closes_round() {
        let mut round = started(Mark::X);
        for (index, mark) in [(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O)] {
            round.apply_move(index, mark);
        }
        match round.apply_move(2, Mark::X) {
            MoveOutcome::Won(win) => {
                assert_eq!(win.mark, Mark::X);
                assert_eq!(
                    win.line,
                    [Position::TopLeft, Position::TopCenter, Position::TopRight]
                );
            }
            other => panic!("Expected a win, got {other:?}"),
        }
        assert!(!round.is_active());
        assert_eq!(
            round.apply_move(5, Mark::O),
            MoveOutcome::Ignored(MoveError::RoundInactive)
        );
    }

    #[test]
    fn test_start_resets_board() {
        let mut round = started(Mark::X);
        round.apply_move(4, Mark::X);
        round.start(Mark::O);
        assert_eq!(round.board(), &Board::new());
        assert!(round.history().is_empty());
        assert_eq!(round.current(), Mark::O);
    }
}
