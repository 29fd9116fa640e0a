//! Line detection for tic-tac-toe.

use crate::{Board, Mark, Position};
use tracing::instrument;

/// Three positions forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The eight lines, rows first, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark holding all three cells of `line`, if one does.
pub fn line_owner(board: &Board, line: Line) -> Option<Mark> {
    let [a, b, c] = line.map(|position| board.get(position));
    (a != Mark::Free && a == b && b == c).then_some(a)
}

/// Returns every completed line on the board.
///
/// All eight lines are checked, so a move finishing two lines at once
/// reports both.
#[instrument]
pub fn winning_lines(board: &Board) -> Vec<Line> {
    LINES
        .into_iter()
        .filter(|line| line_owner(board, *line).is_some())
        .collect()
}
