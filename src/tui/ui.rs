//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_engine::{Board, GameMode, Player, Position, Square};

/// Cell width in columns, mark included.
const CELL_WIDTH: usize = 7;

const HELP: &str = "arrows/enter or 1-9: play   m: mode   d: difficulty   r: restart   q: quit";

/// Renders the whole screen from app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let [title_area, board_area, status_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(3),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let session = app.session();
    draw_board(frame, board_area, session.board(), app.cursor());

    let status = match app.last_event() {
        "" => app.status_message(),
        last => format!("{}  ({last})", app.status_message()),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    let settings = match session.mode() {
        GameMode::HumanVsHuman => session.mode().label().to_string(),
        GameMode::HumanVsComputer => format!(
            "{} ({}, computer plays {})",
            session.mode().label(),
            session.difficulty(),
            session.computer()
        ),
    };
    let footer = vec![
        Line::from(settings),
        Line::styled(HELP, Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        footer_area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let grid = Style::default().fg(Color::DarkGray);
    let divider = vec!["\u{2500}".repeat(CELL_WIDTH); 3].join("\u{253c}");

    let mut lines = Vec::with_capacity(5);
    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        if row > 0 {
            lines.push(Line::styled(divider.clone(), grid));
        }
        let mut spans = Vec::with_capacity(5);
        for (col, &pos) in cells.iter().enumerate() {
            if col > 0 {
                spans.push(Span::styled("\u{2502}", grid));
            }
            spans.push(cell_span(board, cursor, pos));
        }
        lines.push(Line::from(spans));
    }

    let width = (CELL_WIDTH * 3 + 2) as u16;
    let board_area = center_rect(area, width, lines.len() as u16);
    frame.render_widget(Paragraph::new(lines), board_area);
}

/// A mark, or the cell's key number while it is empty.
fn cell_span(board: &Board, cursor: Position, pos: Position) -> Span<'static> {
    let index = pos.to_index();
    let (text, style) = match board.get(index).and_then(Square::player) {
        Some(Player::X) => ("X".to_string(), Style::default().fg(Color::Blue)),
        Some(Player::O) => ("O".to_string(), Style::default().fg(Color::Red)),
        None => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };
    let style = match (pos == cursor, board.is_empty(index)) {
        (true, _) => style.bg(Color::White).fg(Color::Black),
        (false, false) => style.add_modifier(Modifier::BOLD),
        (false, true) => style,
    };
    Span::styled(format!("{text:^CELL_WIDTH$}"), style)
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
