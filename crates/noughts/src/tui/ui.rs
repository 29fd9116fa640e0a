//! Stateless UI rendering for the board.

use noughts_rules::{Mark, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::config::Palette;
use crate::view::{Background, Cell, Foreground};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders title, board and status; returns where each cell landed.
pub fn draw(frame: &mut Frame, app: &App, palette: &Palette) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Noughts & Crosses")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = cell_areas(chunks[1]);
    let view = app.game().presenter();
    for position in Position::ALL {
        let area = areas[position.to_index()];
        draw_cell(frame, area, view.cell(position), position == app.cursor(), palette);
    }

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    areas
}

/// Splits the centred board into nine cells, one column of gap between them.
pub fn cell_areas(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for row in 0..3 {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);
        for column in 0..3 {
            areas[column + row * 3] = cols[column * 2];
        }
    }
    areas
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &Cell, selected: bool, palette: &Palette) {
    let fg = match (cell.mark(), cell.foreground()) {
        (Mark::Free, _) => Color::DarkGray,
        (_, Foreground::Nought) => palette.nought,
        (_, Foreground::Normal) => palette.cross,
    };
    let bg = match cell.background() {
        Background::Normal => palette.background,
        Background::Win => palette.win,
        Background::Draw => palette.draw,
    };

    let mut style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(format!("\n{}", cell.label()))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_cell_areas_form_grid() {
        let areas = cell_areas(Rect::new(0, 0, 43, 21));
        // Board is 23x11, centred.
        assert_eq!(areas[0], Rect::new(10, 5, CELL_WIDTH, CELL_HEIGHT));
        assert_eq!(areas[1].x, areas[0].x + CELL_WIDTH + 1);
        assert_eq!(areas[3].y, areas[0].y + CELL_HEIGHT + 1);
        assert_eq!(areas[8], Rect::new(26, 13, CELL_WIDTH, CELL_HEIGHT));
    }

    #[test]
    fn test_draw_shows_marks() {
        let mut app = App::new();
        app.handle_key(crossterm::event::KeyEvent::new(
            crossterm::event::KeyCode::Char('5'),
            crossterm::event::KeyModifiers::NONE,
        ));

        let mut terminal = Terminal::new(TestBackend::new(43, 21)).unwrap();
        let mut areas = [Rect::default(); 9];
        terminal
            .draw(|frame| areas = draw(frame, &app, &Palette::default()))
            .unwrap();

        let center = areas[Position::Center.to_index()];
        let buffer = terminal.backend().buffer();
        let label_cell = &buffer[(center.x + CELL_WIDTH / 2, center.y + 1)];
        assert_eq!(label_cell.symbol(), "X");
    }
}
