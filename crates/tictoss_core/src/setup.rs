//! Match setup: names, opponent mode and symbol choice.

use crate::config::PlayersConfig;
use crate::Mark;
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Fallback name for the first player.
pub const DEFAULT_PLAYER_ONE: &str = "Player 1";
/// Fallback name for the second player.
pub const DEFAULT_PLAYER_TWO: &str = "Player 2";
/// Name shown for the computer opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Who controls the second player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two people share the board.
    #[default]
    PlayerVsPlayer,
    /// The second player is the computer.
    PlayerVsComputer,
}

impl Mode {
    /// Returns the display label for this option.
    pub fn label(self) -> &'static str {
        match self {
            Self::PlayerVsPlayer => "Player vs Player",
            Self::PlayerVsComputer => "Player vs Computer",
        }
    }

    /// Toggles between the two modes.
    pub fn toggle(self) -> Self {
        match self {
            Self::PlayerVsPlayer => Self::PlayerVsComputer,
            Self::PlayerVsComputer => Self::PlayerVsPlayer,
        }
    }
}

/// One of the two players, independent of which mark they hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The player who picks the symbol.
    PlayerOne,
    /// The other player, or the computer.
    PlayerTwo,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::PlayerOne => Seat::PlayerTwo,
            Seat::PlayerTwo => Seat::PlayerOne,
        }
    }
}

/// Whether a seat is played by a person or by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Moves come from `CellSelected` events.
    Human,
    /// Moves come from the computer-move timer.
    Computer,
}

/// Settings fixed when a round is requested.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct MatchSetup {
    /// First player's name.
    #[setters(into)]
    player_one: String,
    /// Second player's name; ignored against the computer.
    #[setters(into)]
    player_two: String,
    /// Opponent mode.
    mode: Mode,
    /// Mark chosen by the first player. The second player gets the other.
    player_one_mark: Mark,
}

impl MatchSetup {
    /// Creates a two-player setup with default names and player one on X.
    pub fn new() -> Self {
        Self {
            player_one: DEFAULT_PLAYER_ONE.to_string(),
            player_two: DEFAULT_PLAYER_TWO.to_string(),
            mode: Mode::default(),
            player_one_mark: Mark::X,
        }
    }

    /// Creates a setup using the configured default names.
    pub fn from_config(players: &PlayersConfig) -> Self {
        Self::new()
            .with_player_one(players.player_one().clone())
            .with_player_two(players.player_two().clone())
            .normalized()
    }

    /// Trims names and replaces blank ones with the defaults.
    #[instrument]
    pub fn normalized(self) -> Self {
        fn or_default(name: String, default: &str) -> String {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                default.to_string()
            } else {
                trimmed.to_string()
            }
        }

        Self {
            player_one: or_default(self.player_one, DEFAULT_PLAYER_ONE),
            player_two: or_default(self.player_two, DEFAULT_PLAYER_TWO),
            ..self
        }
    }

    /// Returns the mark held by `seat`.
    pub fn mark_of(&self, seat: Seat) -> Mark {
        match seat {
            Seat::PlayerOne => self.player_one_mark,
            Seat::PlayerTwo => self.player_one_mark.opponent(),
        }
    }

    /// Returns the seat holding `mark`.
    pub fn seat_of(&self, mark: Mark) -> Seat {
        if mark == self.player_one_mark {
            Seat::PlayerOne
        } else {
            Seat::PlayerTwo
        }
    }

    /// Returns the display name for `seat`.
    pub fn name_of(&self, seat: Seat) -> &str {
        match (seat, self.mode) {
            (Seat::PlayerOne, _) => &self.player_one,
            (Seat::PlayerTwo, Mode::PlayerVsComputer) => COMPUTER_NAME,
            (Seat::PlayerTwo, Mode::PlayerVsPlayer) => &self.player_two,
        }
    }

    /// Returns the display name of whoever holds `mark`.
    pub fn name_for(&self, mark: Mark) -> &str {
        self.name_of(self.seat_of(mark))
    }

    /// Returns who controls `seat`.
    pub fn controller_of(&self, seat: Seat) -> Controller {
        match (seat, self.mode) {
            (Seat::PlayerTwo, Mode::PlayerVsComputer) => Controller::Computer,
            _ => Controller::Human,
        }
    }
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_are_complementary() {
        let setup = MatchSetup::new().with_player_one_mark(Mark::O);
        assert_eq!(setup.mark_of(Seat::PlayerOne), Mark::O);
        assert_eq!(setup.mark_of(Seat::PlayerTwo), Mark::X);
        assert_eq!(setup.seat_of(Mark::X), Seat::PlayerTwo);
    }

    #[test]
    fn test_blank_names_fall_back() {
        let setup = MatchSetup::new()
            .with_player_one("   ")
            .with_player_two(" Bea ")
            .normalized();
        assert_eq!(setup.name_of(Seat::PlayerOne), DEFAULT_PLAYER_ONE);
        assert_eq!(setup.name_of(Seat::PlayerTwo), "Bea");
    }

    #[test]
    fn test_computer_mode_overrides_second_name() {
        let setup = MatchSetup::new()
            .with_player_two("Bea")
            .with_mode(Mode::PlayerVsComputer);
        assert_eq!(setup.name_of(Seat::PlayerTwo), COMPUTER_NAME);
        assert_eq!(setup.controller_of(Seat::PlayerTwo), Controller::Computer);
        assert_eq!(setup.controller_of(Seat::PlayerOne), Controller::Human);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::PlayerVsPlayer.toggle(), Mode::PlayerVsComputer);
        assert_eq!(Mode::PlayerVsComputer.toggle().label(), "Player vs Player");
    }
}
