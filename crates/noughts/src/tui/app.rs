//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_rules::{Activation, GameController, Position};
use ratatui::layout::Rect;
use tracing::{debug, instrument};

use super::input::{digit_position, hit_test, move_cursor};
use crate::view::{status_text, CellView};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController<CellView>,
    cursor: Position,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: GameController::new(CellView::new()),
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController<CellView> {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Remembers where each cell was drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Status bar text with the controls that apply right now.
    pub fn status_message(&self) -> String {
        let state = self.game.state();
        if state.is_ended() {
            format!(
                "{} Click any cell or press 'r' to play again, 'q' to quit.",
                status_text(state)
            )
        } else {
            format!(
                "{}. Arrows + Enter, 1-9 or mouse to play; 'r' restart, 'q' quit.",
                status_text(state)
            )
        }
    }

    /// Handles a key press.
    #[instrument(skip(self, key), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.game.start_new_game(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.activate(self.cursor);
            }
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.activate(position);
                }
            }
            code => self.cursor = move_cursor(self.cursor, code),
        }
    }

    /// Handles a mouse event; left clicks on a cell activate it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(position) = hit_test(&self.cell_areas, mouse.column, mouse.row) {
            self.activate(position);
        }
    }

    fn activate(&mut self, position: Position) -> Activation {
        self.cursor = position;
        let activation = self.game.handle_cell_activated(position);
        debug!(%position, ?activation, "Cell activated");
        activation
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use noughts_rules::Mark;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let mut app = App::new();
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        let board = app.game().state().board();
        assert_eq!(board.get(Position::TopCenter), Mark::Cross);
    }

    #[test]
    fn test_digit_plays_and_moves_cursor() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.game().state().board().get(Position::BottomLeft), Mark::Cross);
        assert_eq!(app.cursor(), Position::BottomLeft);
    }

    #[test]
    fn test_restart_key() {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.game().state().history().is_empty());
        assert!(app.game().presenter().cell(Position::Center).mark().is_free());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new();
        assert!(!app.should_quit());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_left_click_activates_cell() {
        let mut app = App::new();
        let mut areas = [Rect::default(); 9];
        areas[8] = Rect::new(20, 10, 7, 3);
        app.set_cell_areas(areas);

        click(&mut app, 22, 11);
        assert_eq!(app.game().state().board().get(Position::BottomRight), Mark::Cross);

        click(&mut app, 0, 0);
        assert_eq!(app.game().state().history().len(), 1);
    }

    #[test]
    fn test_status_message_after_win() {
        let mut app = App::new();
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert!(app.status_message().starts_with("X wins!"));
    }
}
