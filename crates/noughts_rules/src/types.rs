//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::Line;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The value held by a single cell.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Nobody has played here yet.
    #[default]
    #[display("")]
    Free,
    /// Cross (X), always moves first.
    #[display("X")]
    Cross,
    /// Nought (O).
    #[display("O")]
    Nought,
}

impl Mark {
    /// Returns the label shown on a cell holding this mark.
    pub fn label(self) -> &'static str {
        match self {
            Mark::Free => "",
            Mark::Cross => "X",
            Mark::Nought => "O",
        }
    }

    /// Returns true for [`Mark::Free`].
    pub fn is_free(self) -> bool {
        self == Mark::Free
    }
}

/// 3x3 board of marks in row-major order.
///
/// Cells only ever move from [`Mark::Free`] to a player mark. The only way
/// back is replacing the whole board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Mark; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at a position.
    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.to_index()]
    }

    /// Places a player mark on a free cell.
    ///
    /// Returns `false` and leaves the board untouched when the cell is taken
    /// or `mark` is [`Mark::Free`].
    pub fn place(&mut self, position: Position, mark: Mark) -> bool {
        let cell = &mut self.cells[position.to_index()];
        if mark.is_free() || !cell.is_free() {
            return false;
        }
        *cell = mark;
        true
    }

    /// Checks if the cell at a position is free.
    pub fn is_free(&self, position: Position) -> bool {
        self.get(position).is_free()
    }

    /// Checks if every cell holds a player mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|mark| !mark.is_free())
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; 9] {
        &self.cells
    }

    /// Positions still open for play.
    pub fn free_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|position| self.is_free(*position))
            .collect()
    }

    /// Formats the board as plain text, free cells shown as `.`.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for column in 0..3 {
                let mark = self.cells[column + row * 3];
                result.push_str(if mark.is_free() { "." } else { mark.label() });
                if column < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Where the game stands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    #[default]
    InProgress,
    /// A player completed at least one line.
    Won {
        /// The winning mark.
        mark: Mark,
        /// Every line that matched, in evaluation order.
        lines: Vec<Line>,
    },
    /// The board filled up without a line.
    Draw,
}

impl GameStatus {
    /// Returns true once a win or draw was detected.
    pub fn is_ended(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) cross_to_move: bool,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Position>,
}

impl GameState {
    /// Creates the state of a fresh game: empty board, Cross to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            cross_to_move: true,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true when Cross moves next.
    pub fn cross_to_move(&self) -> bool {
        self.cross_to_move
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        if self.cross_to_move {
            Mark::Cross
        } else {
            Mark::Nought
        }
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns true once the game reached a win or a draw.
    pub fn is_ended(&self) -> bool {
        self.status.is_ended()
    }

    /// Positions of accepted moves, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the mover's mark and hands the turn over.
    ///
    /// Callers check that the cell is free first.
    pub(crate) fn apply_move(&mut self, position: Position) -> Mark {
        let mark = self.to_move();
        let placed = self.board.place(position, mark);
        debug_assert!(placed, "apply_move on occupied cell {position}");
        self.history.push(position);
        self.cross_to_move = !self.cross_to_move;
        mark
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
