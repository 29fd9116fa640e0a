//! Alternating turn invariant: Cross, Nought, Cross, Nought, ...

use super::Invariant;
use crate::{GameState, Mark};

/// Invariant: players alternate turns, Cross first.
///
/// The mark on each history entry alternates starting with Cross, and the
/// turn flag agrees with the number of moves played.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let alternates = state.history().iter().enumerate().all(|(i, position)| {
            let expected = if i % 2 == 0 { Mark::Cross } else { Mark::Nought };
            state.board().get(*position) == expected
        });

        alternates && state.cross_to_move() == (state.history().len() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
