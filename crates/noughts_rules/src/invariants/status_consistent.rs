//! Status invariant: the recorded status matches the board.

use super::Invariant;
use crate::rules::{is_draw, is_full, line_owner, winning_lines};
use crate::{GameState, GameStatus};

/// Invariant: the game status agrees with what the board shows.
///
/// An in-progress game has no completed line and a free cell. A won game
/// records exactly the completed lines, all owned by the winner. A drawn
/// game has a full board without lines.
pub struct StatusConsistentInvariant;

impl Invariant<GameState> for StatusConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match state.status() {
            GameStatus::InProgress => winning_lines(board).is_empty() && !is_full(board),
            GameStatus::Won { mark, lines } => {
                !lines.is_empty()
                    && *lines == winning_lines(board)
                    && lines
                        .iter()
                        .all(|line| line_owner(board, *line) == Some(*mark))
            }
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game status matches the lines and free cells on the board"
    }
}
