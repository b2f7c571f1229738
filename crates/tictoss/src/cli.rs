//! Command-line interface for tictoss.

use clap::{Parser, Subcommand, ValueEnum};
use tictoss_core::{Mark, Mode};

/// Tictoss - tic-tac-toe with a coin toss, a scoreboard and a computer opponent
#[derive(Parser, Debug)]
#[command(name = "tictoss")]
#[command(about = "Terminal tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to the TOML config file (missing file means defaults)
        #[arg(short, long, env = "TICTOSS_CONFIG", default_value = "tictoss.toml")]
        config: std::path::PathBuf,

        /// First player's name
        #[arg(long)]
        player_one: Option<String>,

        /// Second player's name (ignored against the computer)
        #[arg(long)]
        player_two: Option<String>,

        /// Opponent mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Mark for the first player
        #[arg(long, value_enum)]
        symbol: Option<MarkArg>,

        /// Seed for the coin toss (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Log file (the terminal is busy with the board)
        #[arg(long, default_value = "tictoss.log")]
        log_file: std::path::PathBuf,
    },

    /// Print the square the computer would pick on a board
    Suggest {
        /// Nine cells in row-major order, e.g. "XX.O.....". Use X, O and
        /// '.', '_' or '-' for empty. Spaces and '|' are ignored.
        board: String,

        /// Mark the computer plays
        #[arg(short, long, value_enum)]
        mark: MarkArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Opponent mode flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Player vs player
    Pvp,
    /// Player vs computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::PlayerVsPlayer,
            ModeArg::Pvc => Mode::PlayerVsComputer,
        }
    }
}

/// Mark flag.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// X
    X,
    /// O
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::X,
            MarkArg::O => Mark::O,
        }
    }
}
