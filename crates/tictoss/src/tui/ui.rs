//! Stateless rendering of the setup screen, the board and the result popup.

use super::form::{Field, SetupForm};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictoss_core::{Mark, Outcome, Phase, Position, ScoreLine, Scoreboard, Snapshot, Square};

const TITLE: &str = "Tictoss - Tic Tac Toe";
const SETUP_HELP: &str = "Tab/Up/Down: field  Left/Right/Space: toggle  Enter: start  Esc: quit";
const GAME_HELP: &str = "Arrows/1-9: square  Enter/Space: place  n: new round  b: setup  q: quit";

/// Draws whichever screen the snapshot's phase calls for.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Position, form: &SetupForm) {
    match snapshot.phase {
        Phase::Setup => draw_setup(frame, snapshot, form),
        _ => draw_game(frame, snapshot, cursor),
    }
    if let (Phase::RoundOver(outcome), Some(message)) = (snapshot.phase, &snapshot.result_message) {
        draw_result_popup(frame, outcome, message);
    }
}

fn draw_setup(frame: &mut Frame, snapshot: &Snapshot, form: &SetupForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Form
            Constraint::Length(4), // Scores
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    frame.render_widget(title(), chunks[0]);

    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let focused = field == form.focus();
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(format!("{marker}{:<16}", field.label()), style),
                Span::raw(form.value(field)),
            ])
        })
        .collect();
    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .title(" Match setup ")
            .borders(Borders::ALL),
    );
    frame.render_widget(form_widget, chunks[1]);

    frame.render_widget(scores(&snapshot.scoreboard), chunks[2]);
    frame.render_widget(help(SETUP_HELP), chunks[3]);
}

fn draw_game(frame: &mut Frame, snapshot: &Snapshot, cursor: Position) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(7),    // Board
            Constraint::Length(4), // Scores
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    frame.render_widget(title(), chunks[0]);

    let status = Paragraph::new(snapshot.status.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[1]);

    let show_cursor = snapshot.accepts_input.then_some(cursor);
    let board = Paragraph::new(board_lines(snapshot, show_cursor))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(board, chunks[2]);

    frame.render_widget(scores(&snapshot.scoreboard), chunks[3]);
    frame.render_widget(help(GAME_HELP), chunks[4]);
}

fn board_lines(snapshot: &Snapshot, cursor: Option<Position>) -> Vec<Line<'static>> {
    let winning = snapshot.winning();
    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled(
                "───┼───┼───",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                let in_line = winning.is_some_and(|win| win.contains(pos));
                spans.push(cell(snapshot.board.get(pos), pos, cursor == Some(pos), in_line));
            }
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn cell(square: Square, pos: Position, under_cursor: bool, in_winning_line: bool) -> Span<'static> {
    let (text, style) = match square {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (
            format!(" {mark} "),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };
    let style = if under_cursor {
        style.bg(Color::White).fg(Color::Black)
    } else if in_winning_line {
        style.bg(Color::Green).fg(Color::Black)
    } else {
        style
    };
    Span::styled(text, style)
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn scores(board: &Scoreboard) -> Paragraph<'static> {
    let mut spans = score_spans(&board.player_one);
    spans.push(Span::raw("    "));
    spans.extend(score_spans(&board.player_two));
    let text = vec![
        Line::from(spans),
        Line::from(format!("Draws: {}", board.draws)),
    ];
    Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Score ").borders(Borders::ALL))
}

fn score_spans(score: &ScoreLine) -> Vec<Span<'static>> {
    vec![
        Span::styled(
            format!("[{}] ", score.mark),
            Style::default().fg(mark_color(score.mark)),
        ),
        Span::raw(score.to_string()),
    ]
}

fn title() -> Paragraph<'static> {
    Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM))
}

fn help(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn draw_result_popup(frame: &mut Frame, outcome: Outcome, message: &str) {
    let area = center_rect(frame.area(), 44, 6);
    let color = if outcome.is_draw() {
        Color::Yellow
    } else {
        Color::Green
    };
    let text = vec![
        Line::styled(
            message.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from("Enter: next round  b: setup  q: quit"),
    ];
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Round over ").borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
