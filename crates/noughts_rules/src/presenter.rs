//! The presentation seam between the controller and a front end.

use crate::{Mark, Position};
use serde::{Deserialize, Serialize};

/// Visual treatment the controller asks a cell to take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellColor {
    /// Restore both foreground and background.
    #[default]
    Default,
    /// Foreground for a cell holding a nought.
    HighlightNought,
    /// Background for a cell on a winning line.
    HighlightWin,
    /// Background for every cell once the game is drawn.
    HighlightDraw,
}

/// Anything able to show nine labelled, coloured cells.
///
/// The controller calls these while handling an activation; by the time
/// [`GameController::handle_cell_activated`](crate::GameController::handle_cell_activated)
/// returns, the presenter has seen every change that activation caused.
pub trait Presenter {
    /// Shows `mark`'s label on the cell (empty for [`Mark::Free`]).
    fn set_label(&mut self, position: Position, mark: Mark);

    /// Applies a colour treatment to the cell.
    fn set_color(&mut self, position: Position, color: CellColor);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn set_label(&mut self, position: Position, mark: Mark) {
        (**self).set_label(position, mark);
    }

    fn set_color(&mut self, position: Position, color: CellColor) {
        (**self).set_color(position, color);
    }
}
