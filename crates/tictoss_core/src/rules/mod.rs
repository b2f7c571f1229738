//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here mutates the board
//! it is given, so the same functions serve the round state machine, the
//! computer opponent and the `suggest` command.

pub mod computer;
pub mod draw;
pub mod win;

pub use computer::{PREFERENCE_ORDER, select_computer_move};
pub use draw::{check_draw, is_full};
pub use win::{WINNING_LINES, Win, check_win};
