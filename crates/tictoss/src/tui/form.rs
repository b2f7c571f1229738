//! Setup form for names, mode and symbol before a match.

use crossterm::event::{KeyCode, KeyEvent};
use tictoss_core::{COMPUTER_NAME, Mark, MatchSetup, Mode};
use tracing::{debug, instrument};

const MAX_NAME_LEN: usize = 16;

/// Which form row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// First player's name.
    #[default]
    PlayerOne,
    /// Second player's name.
    PlayerTwo,
    /// Opponent mode.
    Mode,
    /// First player's mark.
    Symbol,
}

impl Field {
    /// All rows, top to bottom.
    pub const ALL: [Field; 4] = [Field::PlayerOne, Field::PlayerTwo, Field::Mode, Field::Symbol];

    /// Row label.
    pub fn label(self) -> &'static str {
        match self {
            Field::PlayerOne => "Player 1 name",
            Field::PlayerTwo => "Player 2 name",
            Field::Mode => "Mode",
            Field::Symbol => "Player 1 plays",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::PlayerOne => Field::PlayerTwo,
            Field::PlayerTwo => Field::Mode,
            Field::Mode => Field::Symbol,
            Field::Symbol => Field::PlayerOne,
        }
    }

    fn previous(self) -> Self {
        match self {
            Field::PlayerOne => Field::Symbol,
            Field::PlayerTwo => Field::PlayerOne,
            Field::Mode => Field::PlayerTwo,
            Field::Symbol => Field::Mode,
        }
    }
}

/// What the form wants the app to do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Keep editing.
    None,
    /// Lock the setup and start the first round.
    Start,
    /// Leave the program.
    Quit,
}

/// Editable copy of the match setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    player_one: String,
    player_two: String,
    mode: Mode,
    mark: Mark,
    focus: Field,
}

impl SetupForm {
    /// Starts editing from an existing setup.
    pub fn from_setup(setup: &MatchSetup) -> Self {
        Self {
            player_one: setup.player_one().clone(),
            player_two: setup.player_two().clone(),
            mode: *setup.mode(),
            mark: *setup.player_one_mark(),
            focus: Field::default(),
        }
    }

    /// Builds the setup to hand to the session.
    pub fn to_setup(&self) -> MatchSetup {
        MatchSetup::new()
            .with_player_one(self.player_one.clone())
            .with_player_two(self.player_two.clone())
            .with_mode(self.mode)
            .with_player_one_mark(self.mark)
    }

    /// Focused row.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Text shown for a row.
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::PlayerOne => self.player_one.clone(),
            Field::PlayerTwo if self.mode == Mode::PlayerVsComputer => COMPUTER_NAME.to_string(),
            Field::PlayerTwo => self.player_two.clone(),
            Field::Mode => self.mode.label().to_string(),
            Field::Symbol => format!("{} (Player 2 plays {})", self.mark, self.mark.opponent()),
        }
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Enter => return FormAction::Start,
            KeyCode::Esc => return FormAction::Quit,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.previous(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if self.is_toggle() => {
                self.toggle()
            }
            KeyCode::Char(c) => {
                if let Some(name) = self.name_mut() {
                    if name.chars().count() < MAX_NAME_LEN {
                        name.push(c);
                    }
                }
            }
            KeyCode::Backspace => {
                if let Some(name) = self.name_mut() {
                    name.pop();
                }
            }
            _ => {}
        }
        debug!(focus = ?self.focus, "Form updated");
        FormAction::None
    }

    fn is_toggle(&self) -> bool {
        matches!(self.focus, Field::Mode | Field::Symbol)
    }

    fn toggle(&mut self) {
        match self.focus {
            Field::Mode => self.mode = self.mode.toggle(),
            Field::Symbol => self.mark = self.mark.opponent(),
            Field::PlayerOne | Field::PlayerTwo => {}
        }
    }

    fn name_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::PlayerOne => Some(&mut self.player_one),
            Field::PlayerTwo if self.mode == Mode::PlayerVsPlayer => Some(&mut self.player_two),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictoss_core::Seat;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(form: &mut SetupForm, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_edit_names_and_toggles() {
        let mut form = SetupForm::from_setup(&MatchSetup::new());
        for _ in 0.."Player 1".len() {
            form.handle_key(key(KeyCode::Backspace));
        }
        type_text(&mut form, "Ada");
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Tab));
        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Down));
        form.handle_key(key(KeyCode::Char(' ')));

        let setup = form.to_setup();
        assert_eq!(setup.player_one(), "Ada");
        assert_eq!(*setup.mode(), Mode::PlayerVsComputer);
        assert_eq!(setup.mark_of(Seat::PlayerOne), Mark::O);
        assert_eq!(form.value(Field::PlayerTwo), COMPUTER_NAME);
    }

    #[test]
    fn test_second_name_locked_against_computer() {
        let setup = MatchSetup::new().with_mode(Mode::PlayerVsComputer);
        let mut form = SetupForm::from_setup(&setup);
        form.handle_key(key(KeyCode::Tab));
        assert_eq!(form.focus(), Field::PlayerTwo);
        type_text(&mut form, "zz");
        assert_eq!(form.to_setup().player_two(), "Player 2");
    }

    #[test]
    fn test_names_are_capped() {
        let mut form = SetupForm::from_setup(&MatchSetup::new().with_player_one(""));
        type_text(&mut form, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(form.value(Field::PlayerOne).len(), MAX_NAME_LEN);
    }

    #[test]
    fn test_enter_starts_and_escape_quits() {
        let mut form = SetupForm::from_setup(&MatchSetup::new());
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormAction::Start);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormAction::Quit);
        assert_eq!(form.handle_key(key(KeyCode::BackTab)), FormAction::None);
        assert_eq!(form.focus(), Field::Symbol);
    }
}
