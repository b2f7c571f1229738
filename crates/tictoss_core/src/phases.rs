//! Round lifecycle phases and round outcomes.

use crate::rules::Win;
use crate::Mark;
use serde::{Deserialize, Serialize};

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark completed a line.
    Won(Win),
    /// The board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(win) => Some(win.mark),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the round was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won(win) => write!(f, "{} wins", win.mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the session is in the round lifecycle.
///
/// `Setup → CountdownPending → Tossing → InProgress → RoundOver`, then back
/// to `CountdownPending` for the next round or to `Setup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Names, mode and symbols are editable.
    Setup,
    /// Counting down before the toss.
    CountdownPending {
        /// The number currently shown.
        remaining: u8,
    },
    /// The coin is in the air (`winner` is `None`) or the result is being
    /// announced.
    Tossing {
        /// Mark that won the toss, once decided.
        winner: Option<Mark>,
    },
    /// Players are taking turns.
    InProgress,
    /// The round ended; the board is frozen until acknowledged.
    RoundOver(Outcome),
}

impl Phase {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::CountdownPending { .. } => "countdown",
            Phase::Tossing { .. } => "tossing",
            Phase::InProgress => "in-progress",
            Phase::RoundOver(_) => "round-over",
        }
    }

    /// True while the countdown or toss is running.
    pub fn is_starting(&self) -> bool {
        matches!(self, Phase::CountdownPending { .. } | Phase::Tossing { .. })
    }
}
