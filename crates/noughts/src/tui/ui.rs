//! Stateless UI rendering for tic-tac-toe.

use noughts_core::{Player, Position, Theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::view::{BoardView, CellView};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Color,
    /// Default text.
    pub foreground: Color,
    /// Grid lines and cell hints.
    pub grid: Color,
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Background of winning cells.
    pub highlight: Color,
    /// Background of the cursor cell.
    pub cursor: Color,
    /// Status line text.
    pub status: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                foreground: Color::Black,
                grid: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                highlight: Color::LightGreen,
                cursor: Color::Gray,
                status: Color::Black,
            },
            Theme::Dark => Self {
                background: Color::Black,
                foreground: Color::White,
                grid: Color::DarkGray,
                x: Color::LightCyan,
                o: Color::LightRed,
                highlight: Color::Green,
                cursor: Color::DarkGray,
                status: Color::Yellow,
            },
        }
    }
}

/// Splits the full frame into title, board, status and help areas.
fn screen_chunks(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(3),            // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Returns the on-screen rectangle of every cell, in index order.
///
/// Rendering and mouse hit-testing share this geometry.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(screen_chunks(area)[1], BOARD_WIDTH, BOARD_HEIGHT);
    let rows = grid_split(board_area, Direction::Vertical, CELL_HEIGHT);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = grid_split(row_area, Direction::Horizontal, CELL_WIDTH);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

/// Renders the whole screen from the view model.
pub fn draw(frame: &mut Frame, view: &BoardView, cursor: Position) {
    let area = frame.area();
    let palette = Palette::for_theme(*view.theme());
    let base = Style::default().bg(palette.background).fg(palette.foreground);
    let chunks = screen_chunks(area);

    frame.render_widget(Block::default().style(base), area);

    let title = Paragraph::new(format!("Tic-Tac-Toe [{}]", view.theme()))
        .style(base.add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(base.fg(palette.grid)));
    frame.render_widget(title, chunks[0]);

    draw_grid(frame, chunks[1], palette);
    for (cell, cell_area) in view.cells().iter().zip(cell_areas(area)) {
        draw_cell(frame, cell_area, cell, cell.position() == &cursor && !view.game_over(), palette);
    }

    let status = Paragraph::new(view.status().as_str())
        .style(base.fg(palette.status).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(base.fg(palette.grid)));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("1-9 or click: move | r: reset | t: theme | q: quit")
        .style(base.fg(palette.grid))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(base.fg(palette.grid)));
    frame.render_widget(help, chunks[3]);
}

fn draw_grid(frame: &mut Frame, area: Rect, palette: Palette) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let style = Style::default().fg(palette.grid).bg(palette.background);
    let rows = grid_split(board_area, Direction::Vertical, CELL_HEIGHT);

    for sep in [rows[1], rows[3]] {
        let line = Paragraph::new("─".repeat(sep.width as usize)).style(style);
        frame.render_widget(line, sep);
    }

    for row_area in [rows[0], rows[2], rows[4]] {
        let cols = grid_split(row_area, Direction::Horizontal, CELL_WIDTH);
        for sep in [cols[1], cols[3]] {
            let bar = vec![Line::from("│"); sep.height as usize];
            frame.render_widget(Paragraph::new(bar).style(style), sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, is_cursor: bool, palette: Palette) {
    let (fg, modifier) = match cell.mark() {
        Some(Player::X) => (palette.x, Modifier::BOLD),
        Some(Player::O) => (palette.o, Modifier::BOLD),
        None => (palette.grid, Modifier::empty()),
    };

    let bg = if *cell.highlighted() {
        palette.highlight
    } else if is_cursor {
        palette.cursor
    } else {
        palette.background
    };

    let cell_style = Style::default().bg(bg);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            cell.text().as_str(),
            cell_style.fg(fg).add_modifier(modifier),
        )),
        Line::from(""),
    ];

    frame.render_widget(
        Paragraph::new(text).style(cell_style).alignment(Alignment::Center),
        area,
    );
}

/// Splits `area` into cell, separator, cell, separator, cell.
fn grid_split(area: Rect, direction: Direction, cell: u16) -> [Rect; 5] {
    let parts = Layout::default()
        .direction(direction)
        .constraints([
            Constraint::Length(cell),
            Constraint::Length(1),
            Constraint::Length(cell),
            Constraint::Length(1),
            Constraint::Length(cell),
        ])
        .split(area);
    [parts[0], parts[1], parts[2], parts[3], parts[4]]
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
