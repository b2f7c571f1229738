//! Terminal front end: raw-mode setup, the event loop and teardown.

mod app;
mod form;
mod input;
mod ui;

use anyhow::Result;
use app::App;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, time::Duration};
use tictoss_core::{Clock, GameSession, Toss};
use tracing::{error, info, instrument, warn};

const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the session in the terminal until the user quits.
pub async fn run<C: Clock, T: Toss>(session: GameSession<C, T>) -> Result<()> {
    info!("Starting tictoss TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app).await;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = ?app.session().score(), "TUI closed");
    res
}

/// Runs `restore` when dropped, so every exit path after raw mode is
/// enabled puts the terminal back.
struct TerminalGuard<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut() -> io::Result<()>> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

#[instrument(skip_all)]
async fn run_app<C: Clock, T: Toss>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<C, T>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);

    loop {
        let snapshot = app.snapshot();
        terminal.draw(|frame| ui::draw(frame, &snapshot, app.cursor(), app.form()))?;

        tokio::select! {
            _ = ticker.tick() => app.tick(),
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Some(Ok(_)) => {}
                Some(Err(e)) => warn!(error = %e, "Terminal event error"),
                None => {
                    info!("Terminal event stream closed");
                    return Ok(());
                }
            },
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
