//! Application state and key handling.

use super::form::{FormAction, SetupForm};
use super::input::{digit_position, move_cursor};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tictoss_core::{Clock, GameEvent, GameSession, Phase, Position, Snapshot, Toss};
use tracing::{debug, info};

/// Main application state.
pub struct App<C: Clock, T: Toss> {
    session: GameSession<C, T>,
    form: SetupForm,
    cursor: Position,
    should_quit: bool,
}

impl<C: Clock, T: Toss> App<C, T> {
    /// Creates the app around a session in setup.
    pub fn new(session: GameSession<C, T>) -> Self {
        let form = SetupForm::from_setup(session.setup());
        Self {
            session,
            form,
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession<C, T> {
        &self.session
    }

    /// Gets the setup form.
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Render snapshot of the session.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Lets timers fire. Does nothing while no timer is pending.
    pub fn tick(&mut self) {
        if self.session.has_pending_timer() {
            self.dispatch(GameEvent::Tick);
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.session.phase() == Phase::Setup {
            match self.form.handle_key(key) {
                FormAction::Start => {
                    self.dispatch(GameEvent::UpdateSetup(self.form.to_setup()));
                    self.dispatch(GameEvent::RoundRequested);
                }
                FormAction::Quit => self.should_quit = true,
                FormAction::None => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.dispatch(GameEvent::RoundRequested),
            KeyCode::Char('b') => {
                self.dispatch(GameEvent::ReturnToSetup);
                if self.session.phase() == Phase::Setup {
                    self.form = SetupForm::from_setup(self.session.setup());
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if matches!(self.session.phase(), Phase::RoundOver(_)) {
                    self.dispatch(GameEvent::AcknowledgeResult);
                } else {
                    self.dispatch(GameEvent::CellSelected(self.cursor.to_index()));
                }
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.cursor = pos;
                    self.dispatch(GameEvent::CellSelected(pos.to_index()));
                } else {
                    self.cursor = move_cursor(self.cursor, code);
                }
            }
        }
    }

    fn dispatch(&mut self, event: GameEvent) {
        for cue in self.session.handle_event(event) {
            debug!(?cue, "Session cue");
            if let tictoss_core::Cue::RoundOver(outcome) = cue {
                info!(%outcome, "Round finished");
            }
        }
    }
}
