//! One-shot computer move lookup.

use anyhow::{Context, Result};
use serde::Serialize;
use tictoss_core::{Board, Mark, Position, check_draw, check_win, select_computer_move};
use tracing::{info, instrument};

/// What the computer would do on a given board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Mark the computer plays.
    pub mark: Mark,
    /// Chosen square, if any.
    pub position: Option<Position>,
    /// Chosen square as an index (0-8).
    pub index: Option<usize>,
    /// Mark that has already won this board, if any.
    pub already_won_by: Option<Mark>,
    /// True if the board is a finished draw.
    pub drawn: bool,
}

/// Computes the computer's choice for `mark` on `board`.
#[instrument(skip(board))]
pub fn suggest(board: &Board, mark: Mark) -> Suggestion {
    let position = select_computer_move(board, mark, mark.opponent());
    Suggestion {
        mark,
        position,
        index: position.map(Position::to_index),
        already_won_by: check_win(board).map(|win| win.mark),
        drawn: check_draw(board),
    }
}

/// Parses the board text, prints the suggestion.
#[instrument]
pub fn run(board: &str, mark: Mark, json: bool) -> Result<()> {
    let parsed: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let suggestion = suggest(&parsed, mark);
    info!(?suggestion, "Suggestion computed");

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
        return Ok(());
    }

    println!("{}\n", parsed.display());
    if let Some(winner) = suggestion.already_won_by {
        println!("{winner} has already won this board.");
    }
    match suggestion.position {
        Some(pos) => println!("{mark} plays {} (index {})", pos.label(), pos.to_index()),
        None => println!("No move: the board is full."),
    }
    Ok(())
}
