//! Headless replay of a move list.

use crate::view::{status_text, CellView};
use noughts_rules::{Activation, GameController, GameState, Position};
use tracing::{debug, info, instrument};

/// Result of feeding a move list through a fresh game.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Final cell view.
    pub view: CellView,
    /// Final game state.
    pub state: GameState,
    /// What each activation did, in input order.
    pub activations: Vec<Activation>,
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.view.render_text())?;
        write!(f, "{}", status_text(&self.state))
    }
}

/// Activates `moves` in order on a new game.
///
/// Moves behave exactly as clicks do: taken cells are ignored and a move
/// after the end starts a new game.
#[instrument(skip(moves), fields(moves = moves.len()))]
pub fn replay(moves: &[Position]) -> ReplayReport {
    let mut game = GameController::new(CellView::new());
    let activations = moves
        .iter()
        .map(|position| {
            let activation = game.handle_cell_activated(*position);
            debug!(%position, ?activation, "Replayed move");
            activation
        })
        .collect();

    let state = game.state().clone();
    info!(status = ?state.status(), "Replay finished");
    ReplayReport {
        view: game.into_presenter(),
        state,
        activations,
    }
}
