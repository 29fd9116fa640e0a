//! Monotonic board invariant: marks only come from accepted moves.

use super::Invariant;
use crate::GameState;

/// Invariant: every mark on the board was placed by exactly one move.
///
/// Each history entry points at a taken cell, no cell appears twice in the
/// history, and the number of taken cells equals the history length.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let history = state.history();

        let taken = board.cells().iter().filter(|mark| !mark.is_free()).count();
        if taken != history.len() {
            return false;
        }

        history.iter().enumerate().all(|(i, position)| {
            !board.is_free(*position) && !history[..i].contains(position)
        })
    }

    fn description() -> &'static str {
        "Every mark on the board comes from exactly one accepted move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_played_moves_hold() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.apply_move(Position::BottomLeft);
        assert!(MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut state = GameState::new();
        state.board.place(Position::Center, Mark::Cross);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }

    #[test]
    fn test_duplicate_history_violates() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        state.board.place(Position::TopLeft, Mark::Nought);
        state.history.push(Position::Center);
        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
