//! Running tallies for a session.

use crate::setup::Seat;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Wins per player and draws. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    player_one_wins: u32,
    player_two_wins: u32,
    draws: u32,
}

impl Score {
    /// Creates an all-zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `seat`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, seat: Seat) {
        match seat {
            Seat::PlayerOne => self.player_one_wins += 1,
            Seat::PlayerTwo => self.player_two_wins += 1,
        }
        info!(score = ?self, "Win recorded");
    }

    /// Counts a draw.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        info!(score = ?self, "Draw recorded");
    }

    /// Wins for `seat`.
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::PlayerOne => self.player_one_wins,
            Seat::PlayerTwo => self.player_two_wins,
        }
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds that reached a result.
    pub fn rounds(&self) -> u32 {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_independent() {
        let mut score = Score::new();
        score.record_win(Seat::PlayerTwo);
        score.record_win(Seat::PlayerTwo);
        score.record_draw();
        assert_eq!(score.wins(Seat::PlayerOne), 0);
        assert_eq!(score.wins(Seat::PlayerTwo), 2);
        assert_eq!(score.draws(), 1);
        assert_eq!(score.rounds(), 3);
    }
}
