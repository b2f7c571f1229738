//! Tictoss - terminal tic-tac-toe with a coin toss.
//!
//! `play` opens the board in the terminal, `suggest` prints the computer's
//! choice for a board given on the command line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod suggest;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, MarkArg, ModeArg};
use std::path::{Path, PathBuf};
use tictoss_core::{GameSession, MatchSetup, RandomToss, SystemClock, TictossConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Player overrides given on the command line.
struct PlayArgs {
    config: PathBuf,
    player_one: Option<String>,
    player_two: Option<String>,
    mode: Option<ModeArg>,
    symbol: Option<MarkArg>,
    seed: Option<u64>,
    log_file: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            player_one,
            player_two,
            mode,
            symbol,
            seed,
            log_file,
        } => {
            run_play(PlayArgs {
                config,
                player_one,
                player_two,
                mode,
                symbol,
                seed,
                log_file,
            })
            .await
        }
        Command::Suggest { board, mark, json } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();
            suggest::run(&board, mark.into(), json)
        }
    }
}

/// Runs the interactive game.
async fn run_play(args: PlayArgs) -> Result<()> {
    init_file_logging(&args.log_file)?;

    let config = TictossConfig::load_or_default(&args.config)?;
    let setup = build_setup(&config, &args);
    info!(?setup, timing = ?config.timing(), "Starting session");

    let toss = match args.seed {
        Some(seed) => RandomToss::seeded(seed),
        None => RandomToss::new(),
    };
    let session = GameSession::new(setup, config.timing().clone(), SystemClock::new(), toss);
    tui::run(session).await
}

/// Config values first, command-line flags on top.
#[instrument(skip_all)]
fn build_setup(config: &TictossConfig, args: &PlayArgs) -> MatchSetup {
    let mut setup = MatchSetup::from_config(config.players());
    if let Some(name) = &args.player_one {
        setup = setup.with_player_one(name.as_str());
    }
    if let Some(name) = &args.player_two {
        setup = setup.with_player_two(name.as_str());
    }
    if let Some(mode) = args.mode {
        setup = setup.with_mode(mode.into());
    }
    if let Some(symbol) = args.symbol {
        setup = setup.with_player_one_mark(symbol.into());
    }
    setup.normalized()
}

/// Logs go to a file while the terminal shows the board.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictoss=debug,tictoss_core=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
