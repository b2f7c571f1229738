//! Tic-tac-toe rounds with a coin toss, a scoreboard and a computer opponent.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw detection and computer move selection
//! - **Round**: board and turn state for one round
//! - **Session**: the lifecycle state machine (setup, countdown, toss,
//!   play, result) behind a single event entry point
//! - **Clock / Toss**: injectable time and randomness so tests can drive
//!   every phase deterministically
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tictoss_core::{
//!     FixedToss, GameEvent, GameSession, ManualClock, MatchSetup, Phase, Seat, TimingConfig,
//! };
//!
//! let mut session = GameSession::new(
//!     MatchSetup::new(),
//!     TimingConfig::default(),
//!     ManualClock::new(),
//!     FixedToss(Seat::PlayerOne),
//! );
//! session.handle_event(GameEvent::RoundRequested);
//! session.clock_mut().advance(Duration::from_secs(10));
//! session.handle_event(GameEvent::Tick);
//! assert_eq!(session.phase(), Phase::InProgress);
//!
//! session.handle_event(GameEvent::CellSelected(4));
//! assert_eq!(session.snapshot().turn_message.as_deref(), Some("It's Player 2's (O) turn."));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod config;
mod phases;
mod position;
mod round;
mod score;
mod session;
mod setup;
mod toss;
mod types;

pub mod rules;

pub use action::{Move, MoveError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, PlayersConfig, TictossConfig, TimingConfig};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use round::{MoveOutcome, Round};
pub use rules::{Win, check_draw, check_win, select_computer_move};
pub use score::Score;
pub use session::{Cue, GameEvent, GameSession, ScoreLine, Scoreboard, Snapshot};
pub use setup::{
    COMPUTER_NAME, Controller, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, MatchSetup, Mode, Seat,
};
pub use toss::{FixedToss, RandomToss, Toss};
pub use types::{Board, BoardParseError, Mark, Square};
