//! In-memory presenter holding what each cell should look like.

use noughts_rules::{CellColor, GameState, GameStatus, Mark, Position, Presenter};
use tracing::trace;

/// Label colour treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Foreground {
    /// Regular label colour for the mark.
    #[default]
    Normal,
    /// Nought highlight.
    Nought,
}

/// Cell background treatment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Background {
    /// Regular background.
    #[default]
    Normal,
    /// Part of a winning line.
    Win,
    /// The game was drawn.
    Draw,
}

/// Visual state of one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    mark: Mark,
    foreground: Foreground,
    background: Background,
}

impl Cell {
    /// Mark on the cell.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Label colour treatment.
    pub fn foreground(&self) -> Foreground {
        self.foreground
    }

    /// Background treatment.
    pub fn background(&self) -> Background {
        self.background
    }

    /// Text shown on the cell.
    pub fn label(&self) -> &'static str {
        self.mark.label()
    }
}

/// Nine cells as last instructed by the controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellView {
    cells: [Cell; 9],
}

impl CellView {
    /// Creates a view with every cell blank.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at a position.
    pub fn cell(&self, position: Position) -> &Cell {
        &self.cells[position.to_index()]
    }

    /// Plain-text rendering: winning cells in `[ ]`, drawn cells in `( )`.
    pub fn render_text(&self) -> String {
        let rows: Vec<String> = (0..3)
            .map(|row| {
                self.cells[row * 3..row * 3 + 3]
                    .iter()
                    .map(|cell| {
                        let label = if cell.mark.is_free() { "." } else { cell.label() };
                        match cell.background {
                            Background::Normal => format!(" {label} "),
                            Background::Win => format!("[{label}]"),
                            Background::Draw => format!("({label})"),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();
        rows.join("\n---+---+---\n")
    }
}

impl Presenter for CellView {
    fn set_label(&mut self, position: Position, mark: Mark) {
        trace!(%position, ?mark, "set_label");
        self.cells[position.to_index()].mark = mark;
    }

    fn set_color(&mut self, position: Position, color: CellColor) {
        trace!(%position, ?color, "set_color");
        let cell = &mut self.cells[position.to_index()];
        match color {
            CellColor::Default => {
                cell.foreground = Foreground::Normal;
                cell.background = Background::Normal;
            }
            CellColor::HighlightNought => cell.foreground = Foreground::Nought,
            CellColor::HighlightWin => cell.background = Background::Win,
            CellColor::HighlightDraw => cell.background = Background::Draw,
        }
    }
}

/// One-line summary of the game for a status bar.
pub fn status_text(state: &GameState) -> String {
    match state.status() {
        GameStatus::InProgress => format!("{} to move", state.to_move()),
        GameStatus::Won { mark, .. } => format!("{} wins!", mark),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_rules::GameController;

    #[test]
    fn test_nought_keeps_foreground_under_win() {
        let mut view = CellView::new();
        view.set_label(Position::Center, Mark::Nought);
        view.set_color(Position::Center, CellColor::HighlightNought);
        view.set_color(Position::Center, CellColor::HighlightWin);

        let cell = view.cell(Position::Center);
        assert_eq!(cell.foreground(), Foreground::Nought);
        assert_eq!(cell.background(), Background::Win);
        assert_eq!(cell.label(), "O");
    }

    #[test]
    fn test_default_resets_both_tones() {
        let mut view = CellView::new();
        view.set_color(Position::TopLeft, CellColor::HighlightNought);
        view.set_color(Position::TopLeft, CellColor::HighlightDraw);
        view.set_color(Position::TopLeft, CellColor::Default);
        assert_eq!(view.cell(Position::TopLeft), &Cell::default());
    }

    #[test]
    fn test_render_text_marks_winning_line() {
        let mut game = GameController::new(CellView::new());
        for index in [0, 3, 1, 4, 2] {
            game.handle_cell_activated(Position::from_index(index).unwrap());
        }
        assert_eq!(
            game.presenter().render_text(),
            "[X]|[X]|[X]\n---+---+---\n O | O | . \n---+---+---\n . | . | . "
        );
        assert_eq!(status_text(game.state()), "X wins!");
    }

    #[test]
    fn test_status_text_in_progress() {
        let mut game = GameController::new(CellView::new());
        assert_eq!(status_text(game.state()), "X to move");
        game.handle_cell_activated(Position::Center);
        assert_eq!(status_text(game.state()), "O to move");
    }
}
