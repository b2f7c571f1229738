//! The game session: one owner for settings, round, score and timers.
//!
//! Front ends talk to the session in two ways. They push [`GameEvent`]s
//! into [`GameSession::handle_event`], which runs each event to completion
//! and returns the [`Cue`]s it produced. They read a [`Snapshot`] to
//! render.
//!
//! Timed phases (countdown, toss, the computer's pause) are held as a
//! single pending timer measured on the session's [`Clock`]. A `Tick`
//! fires whatever is due. Each fired timer schedules its successor from
//! its own due time, not from "now", so one large clock jump walks
//! through every phase it covers.

use crate::action::{Move, MoveError};
use crate::clock::Clock;
use crate::config::TimingConfig;
use crate::phases::{Outcome, Phase};
use crate::round::{MoveOutcome, Round};
use crate::rules;
use crate::score::Score;
use crate::setup::{Controller, MatchSetup, Seat};
use crate::toss::Toss;
use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Input from the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Replace names, mode and symbol. Only honoured during setup.
    UpdateSetup(MatchSetup),
    /// Start the countdown for a new round.
    RoundRequested,
    /// A human picked a square (0-8).
    CellSelected(usize),
    /// The player dismissed the round result; the next round starts.
    AcknowledgeResult,
    /// Leave the board and go back to the setup screen.
    ReturnToSetup,
    /// Time may have passed; fire any due timer.
    Tick,
}

/// Something the front end may want to react to (sound, animation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    /// The start sequence began.
    CountdownStarted,
    /// A countdown number is showing.
    CountdownTick(u8),
    /// The coin was thrown.
    TossStarted,
    /// The toss was decided.
    TossWon(Mark),
    /// A round opened.
    RoundStarted {
        /// Mark moving first.
        first: Mark,
    },
    /// A mark was placed.
    MovePlayed(Move),
    /// The round finished.
    RoundOver(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerAction {
    CountdownStep,
    Toss,
    BeginRound,
    ComputerMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
struct Timer {
    due: Duration,
    action: TimerAction,
}

/// One scoreboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    /// Player name.
    pub name: String,
    /// Mark the player holds.
    pub mark: Mark,
    /// Rounds won.
    pub wins: u32,
}

impl std::fmt::Display for ScoreLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Wins: {}", self.name, self.wins)
    }
}

/// Running tallies with names attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// First player's row.
    pub player_one: ScoreLine,
    /// Second player's row.
    pub player_two: ScoreLine,
    /// Drawn rounds.
    pub draws: u32,
}

/// Everything a front end needs to render the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Current board (empty outside a round).
    pub board: Board,
    /// Mark due to move while a round is in progress.
    pub current: Option<Mark>,
    /// "It's {name}'s ({mark}) turn." while a round is in progress.
    pub turn_message: Option<String>,
    /// Status line for the current phase.
    pub status: String,
    /// Result text ("{name} wins!" or "It's a Draw!") once a round ends.
    pub result_message: Option<String>,
    /// Tallies.
    pub scoreboard: Scoreboard,
    /// True when a human may place a mark right now.
    pub accepts_input: bool,
    /// Current settings.
    pub setup: MatchSetup,
}

impl Snapshot {
    /// The winning line of the finished round, if it was won.
    pub fn winning(&self) -> Option<rules::Win> {
        match self.phase {
            Phase::RoundOver(Outcome::Won(win)) => Some(win),
            _ => None,
        }
    }
}

/// A whole play session, from setup through any number of rounds.
#[derive(Debug)]
pub struct GameSession<C: Clock, T: Toss> {
    setup: MatchSetup,
    timing: TimingConfig,
    round: Round,
    score: Score,
    phase: Phase,
    timer: Option<Timer>,
    status: String,
    clock: C,
    toss: T,
}

impl<C: Clock, T: Toss> GameSession<C, T> {
    /// Creates a session in the setup phase.
    #[instrument(skip(clock, toss))]
    pub fn new(setup: MatchSetup, timing: TimingConfig, clock: C, toss: T) -> Self {
        info!("Creating game session");
        Self {
            setup: setup.normalized(),
            timing,
            round: Round::new(),
            score: Score::new(),
            phase: Phase::Setup,
            timer: None,
            status: setup_status(),
            clock,
            toss,
        }
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the current settings.
    pub fn setup(&self) -> &MatchSetup {
        &self.setup
    }

    /// Returns the current round.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Returns the running score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Returns the session clock for adjustment.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Returns true if a timer is waiting to fire.
    pub fn has_pending_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Returns true when a human may place a mark right now.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::InProgress
            && self.round.is_active()
            && self.controller_of(self.round.current()) == Controller::Human
    }

    /// Single entry point for front-end input.
    #[instrument(skip(self), fields(phase = self.phase.label()))]
    pub fn handle_event(&mut self, event: GameEvent) -> Vec<Cue> {
        let now = self.clock.now();
        let mut cues = Vec::new();

        match event {
            GameEvent::UpdateSetup(setup) => self.update_setup(setup),
            GameEvent::RoundRequested if self.phase.is_starting() => {
                debug!("Start sequence already running, ignoring round request")
            }
            GameEvent::RoundRequested => self.begin_countdown(now, &mut cues),
            GameEvent::CellSelected(index) => self.select_cell(index, now, &mut cues),
            GameEvent::AcknowledgeResult => match self.phase {
                Phase::RoundOver(_) => self.begin_countdown(now, &mut cues),
                _ => debug!("No result to acknowledge"),
            },
            GameEvent::ReturnToSetup if self.phase.is_starting() => {
                debug!("Cannot leave during the start sequence")
            }
            GameEvent::ReturnToSetup => {
                if self.phase != Phase::Setup {
                    self.return_to_setup()
                }
            }
            GameEvent::Tick => self.fire_due_timers(now, &mut cues),
        }

        cues
    }

    /// Builds a render snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let in_round = self.phase == Phase::InProgress;
        let current = in_round.then(|| self.round.current());
        let result_message = match self.phase {
            Phase::RoundOver(outcome) => Some(self.result_message(outcome)),
            _ => None,
        };

        Snapshot {
            phase: self.phase,
            board: self.round.board().clone(),
            current,
            turn_message: current.map(|mark| self.turn_message(mark)),
            status: self.status.clone(),
            result_message,
            scoreboard: self.scoreboard(),
            accepts_input: self.accepts_input(),
            setup: self.setup.clone(),
        }
    }

    /// Tallies with the current names and marks.
    pub fn scoreboard(&self) -> Scoreboard {
        let line = |seat: Seat| ScoreLine {
            name: self.setup.name_of(seat).to_string(),
            mark: self.setup.mark_of(seat),
            wins: self.score.wins(seat),
        };
        Scoreboard {
            player_one: line(Seat::PlayerOne),
            player_two: line(Seat::PlayerTwo),
            draws: self.score.draws(),
        }
    }

    fn controller_of(&self, mark: Mark) -> Controller {
        self.setup.controller_of(self.setup.seat_of(mark))
    }

    fn turn_message(&self, mark: Mark) -> String {
        format!("It's {}'s ({}) turn.", self.setup.name_for(mark), mark)
    }

    fn result_message(&self, outcome: Outcome) -> String {
        match outcome {
            Outcome::Won(win) => format!("{} wins!", self.setup.name_for(win.mark)),
            Outcome::Draw => "It's a Draw!".to_string(),
        }
    }

    fn schedule(&mut self, from: Duration, after: Duration, action: TimerAction) {
        let timer = Timer::new(from + after, action);
        if let Some(old) = self.timer.replace(timer) {
            debug!(?old, "Replacing pending timer");
        }
        debug!(?timer, "Timer scheduled");
    }

    fn cancel_timer(&mut self) {
        if let Some(old) = self.timer.take() {
            debug!(?old, "Timer cancelled");
        }
    }

    #[instrument(skip(self, setup))]
    fn update_setup(&mut self, setup: MatchSetup) {
        if self.phase != Phase::Setup {
            debug!("Setup is locked outside the setup phase");
            return;
        }
        self.setup = setup.normalized();
        info!(setup = ?self.setup, "Setup updated");
    }

    #[instrument(skip(self, cues))]
    fn begin_countdown(&mut self, now: Duration, cues: &mut Vec<Cue>) {
        // Abandoned rounds are not scored.
        self.round = Round::new();
        self.cancel_timer();
        cues.push(Cue::CountdownStarted);

        let from = *self.timing.countdown_from();
        if from == 0 {
            self.start_toss(now, cues);
            return;
        }

        info!(from, "Countdown started");
        self.phase = Phase::CountdownPending { remaining: from };
        self.status = from.to_string();
        cues.push(Cue::CountdownTick(from));
        self.schedule(now, self.timing.countdown_step(), TimerAction::CountdownStep);
    }

    fn start_toss(&mut self, now: Duration, cues: &mut Vec<Cue>) {
        self.phase = Phase::Tossing { winner: None };
        self.status = "TOSSING...".to_string();
        cues.push(Cue::TossStarted);
        self.schedule(now, self.timing.toss_delay(), TimerAction::Toss);
    }

    fn return_to_setup(&mut self) {
        info!("Returning to setup");
        self.round.close();
        self.round = Round::new();
        self.cancel_timer();
        self.phase = Phase::Setup;
        self.status = setup_status();
    }

    #[instrument(skip(self, cues))]
    fn select_cell(&mut self, index: usize, now: Duration, cues: &mut Vec<Cue>) {
        if self.phase != Phase::InProgress {
            debug!(error = %MoveError::RoundInactive, "Ignoring cell selection");
            return;
        }
        let mark = self.round.current();
        if self.controller_of(mark) == Controller::Computer {
            debug!(error = %MoveError::ComputerToMove, "Ignoring cell selection");
            return;
        }
        let outcome = self.round.apply_move(index, mark);
        self.after_move(outcome, now, cues);
    }

    fn fire_due_timers(&mut self, now: Duration, cues: &mut Vec<Cue>) {
        while let Some(timer) = self.timer.filter(|t| t.due <= now) {
            self.timer = None;
            self.fire(timer, cues);
        }
    }

    #[instrument(skip(self, cues))]
    fn fire(&mut self, timer: Timer, cues: &mut Vec<Cue>) {
        let at = timer.due;
        match (timer.action, self.phase) {
            (TimerAction::CountdownStep, Phase::CountdownPending { remaining }) => {
                let remaining = remaining.saturating_sub(1);
                if remaining > 0 {
                    self.phase = Phase::CountdownPending { remaining };
                    self.status = remaining.to_string();
                    cues.push(Cue::CountdownTick(remaining));
                    self.schedule(at, self.timing.countdown_step(), TimerAction::CountdownStep);
                } else {
                    self.start_toss(at, cues);
                }
            }
            (TimerAction::Toss, Phase::Tossing { winner: None }) => {
                let seat = self.toss.flip();
                let mark = self.setup.mark_of(seat);
                let name = self.setup.name_of(seat);
                info!(name, %mark, "Toss decided");
                self.status = format!("{name} won the toss! {name} plays first.");
                self.phase = Phase::Tossing { winner: Some(mark) };
                cues.push(Cue::TossWon(mark));
                self.schedule(at, self.timing.toss_announce(), TimerAction::BeginRound);
            }
            (TimerAction::BeginRound, Phase::Tossing { winner: Some(first) }) => {
                self.round.start(first);
                self.phase = Phase::InProgress;
                self.status = self.turn_message(first);
                info!(%first, "Round started");
                cues.push(Cue::RoundStarted { first });
                self.schedule_computer_if_due(at);
            }
            (TimerAction::ComputerMove, Phase::InProgress) => self.computer_move(at, cues),
            (action, phase) => {
                debug!(?action, phase = phase.label(), "Dropping stale timer");
            }
        }
    }

    fn schedule_computer_if_due(&mut self, from: Duration) {
        if self.round.is_active() && self.controller_of(self.round.current()) == Controller::Computer {
            self.schedule(from, self.timing.computer_delay(), TimerAction::ComputerMove);
        }
    }

    #[instrument(skip(self, cues))]
    fn computer_move(&mut self, at: Duration, cues: &mut Vec<Cue>) {
        let own = self.round.current();
        if !self.round.is_active() || self.controller_of(own) != Controller::Computer {
            debug!("Computer timer fired out of turn, ignoring");
            return;
        }

        match rules::select_computer_move(self.round.board(), own, own.opponent()) {
            Some(pos) => {
                let outcome = self.round.apply_move(pos.to_index(), own);
                self.after_move(outcome, at, cues);
            }
            None => warn!("Computer found no free square"),
        }
    }

    fn after_move(&mut self, outcome: MoveOutcome, at: Duration, cues: &mut Vec<Cue>) {
        match outcome {
            MoveOutcome::Ignored(_) => {}
            MoveOutcome::Continue { next } => {
                self.push_last_move(cues);
                self.status = self.turn_message(next);
                self.schedule_computer_if_due(at);
            }
            MoveOutcome::Won(win) => {
                self.push_last_move(cues);
                self.end_round(Outcome::Won(win), cues);
            }
            MoveOutcome::Draw => {
                self.push_last_move(cues);
                self.end_round(Outcome::Draw, cues);
            }
        }
    }

    fn push_last_move(&self, cues: &mut Vec<Cue>) {
        if let Some(action) = self.round.history().last() {
            cues.push(Cue::MovePlayed(*action));
        }
    }

    /// Closes the round and scores it exactly once.
    #[instrument(skip(self, cues))]
    fn end_round(&mut self, outcome: Outcome, cues: &mut Vec<Cue>) {
        self.round.close();
        self.cancel_timer();
        match outcome.winner() {
            Some(mark) => self.score.record_win(self.setup.seat_of(mark)),
            None => self.score.record_draw(),
        }
        self.phase = Phase::RoundOver(outcome);
        self.status = self.result_message(outcome);
        info!(%outcome, "Round over");
        cues.push(Cue::RoundOver(outcome));
    }
}

fn setup_status() -> String {
    "Choose names, mode and symbol, then start the game.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::setup::Mode;
    use crate::toss::FixedToss;

    fn session(first: Seat) -> GameSession<ManualClock, FixedToss> {
        GameSession::new(
            MatchSetup::new(),
            TimingConfig::default(),
            ManualClock::new(),
            FixedToss(first),
        )
    }

    fn advance(session: &mut GameSession<ManualClock, FixedToss>, ms: u64) -> Vec<Cue> {
        session.clock_mut().advance(Duration::from_millis(ms));
        session.handle_event(GameEvent::Tick)
    }

    #[test]
    fn test_countdown_walks_one_step_per_second() {
        let mut session = session(Seat::PlayerOne);
        let cues = session.handle_event(GameEvent::RoundRequested);
        assert_eq!(cues, vec![Cue::CountdownStarted, Cue::CountdownTick(3)]);
        assert_eq!(session.phase(), Phase::CountdownPending { remaining: 3 });

        assert!(advance(&mut session, 999).is_empty());
        assert_eq!(advance(&mut session, 1), vec![Cue::CountdownTick(2)]);
        assert_eq!(advance(&mut session, 1000), vec![Cue::CountdownTick(1)]);
        assert_eq!(advance(&mut session, 1000), vec![Cue::TossStarted]);
        assert_eq!(session.phase(), Phase::Tossing { winner: None });
        assert_eq!(session.snapshot().status, "TOSSING...");
    }

    #[test]
    fn test_toss_announces_then_opens_round() {
        let mut session = session(Seat::PlayerTwo);
        session.handle_event(GameEvent::RoundRequested);
        advance(&mut session, 3000);

        assert_eq!(advance(&mut session, 2000), vec![Cue::TossWon(Mark::O)]);
        assert_eq!(
            session.snapshot().status,
            "Player 2 won the toss! Player 2 plays first."
        );
        assert_eq!(
            advance(&mut session, 1500),
            vec![Cue::RoundStarted { first: Mark::O }]
        );
        let snapshot = session.snapshot();
        assert_eq!(snapshot.phase, Phase::InProgress);
        assert_eq!(snapshot.current, Some(Mark::O));
        assert_eq!(
            snapshot.turn_message.as_deref(),
            Some("It's Player 2's (O) turn.")
        );
        assert!(snapshot.accepts_input);
    }

    #[test]
    fn test_input_ignored_before_round_opens() {
        let mut session = session(Seat::PlayerOne);
        session.handle_event(GameEvent::RoundRequested);
        assert!(session.handle_event(GameEvent::CellSelected(4)).is_empty());
        assert_eq!(session.round().board(), &Board::new());
    }

    #[test]
    fn test_setup_locked_after_start() {
        let mut session = session(Seat::PlayerOne);
        session.handle_event(GameEvent::RoundRequested);
        session.handle_event(GameEvent::UpdateSetup(
            MatchSetup::new().with_mode(Mode::PlayerVsComputer),
        ));
        assert_eq!(*session.setup().mode(), Mode::PlayerVsPlayer);
    }

    #[test]
    fn test_return_to_setup_ignored_during_start_sequence() {
        let mut session = session(Seat::PlayerOne);
        session.handle_event(GameEvent::RoundRequested);
        session.handle_event(GameEvent::ReturnToSetup);
        assert!(session.phase().is_starting());
    }
}
