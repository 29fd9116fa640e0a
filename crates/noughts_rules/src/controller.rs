//! The game controller: turns cell activations into moves.

use crate::invariants::assert_invariants;
use crate::rules::{is_full, line_owner, winning_lines};
use crate::{CellColor, GameState, GameStatus, Mark, Position, Presenter};
use tracing::{debug, info, instrument};

/// What a single activation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// A mark was placed on the activated cell.
    Placed(Mark),
    /// The cell was already taken; nothing changed.
    Ignored,
    /// The game had ended, so a new one was started instead.
    Restarted,
}

/// Owns one game and keeps a presenter in step with it.
#[derive(Debug)]
pub struct GameController<P> {
    state: GameState,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Creates a controller and starts the first game on `presenter`.
    #[instrument(skip(presenter))]
    pub fn new(presenter: P) -> Self {
        let mut controller = Self {
            state: GameState::new(),
            presenter,
        };
        controller.start_new_game();
        controller
    }

    /// Resets the board, gives Cross the move and clears every cell.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        self.state = GameState::new();
        for position in Position::ALL {
            self.presenter.set_label(position, Mark::Free);
            self.presenter.set_color(position, CellColor::Default);
        }
        info!("New game started");
    }

    /// Handles a click (or key press) on a cell.
    ///
    /// After the game has ended any activation starts a new game. Taken
    /// cells are ignored.
    #[instrument(skip(self), fields(index = position.to_index()))]
    pub fn handle_cell_activated(&mut self, position: Position) -> Activation {
        if self.state.is_ended() {
            debug!("Activation after game end, restarting");
            self.start_new_game();
            return Activation::Restarted;
        }

        if !self.state.board().is_free(position) {
            debug!(mark = ?self.state.board().get(position), "Cell already taken");
            return Activation::Ignored;
        }

        let mark = self.state.apply_move(position);
        self.presenter.set_label(position, mark);
        if mark == Mark::Nought {
            self.presenter.set_color(position, CellColor::HighlightNought);
        }
        debug!(?mark, %position, "Mark placed");

        self.check_for_winner();
        assert_invariants(&self.state);

        Activation::Placed(mark)
    }

    /// Evaluates all eight lines and ends the game on a win or a full board.
    ///
    /// Every completed line is highlighted. A full board with no line is
    /// highlighted as a draw. Otherwise nothing is shown.
    #[instrument(skip(self))]
    pub fn check_for_winner(&mut self) -> &GameStatus {
        let board = self.state.board();
        let lines = winning_lines(board);

        for line in &lines {
            for position in line {
                self.presenter.set_color(*position, CellColor::HighlightWin);
            }
        }

        if let Some(mark) = lines.first().and_then(|line| line_owner(board, *line)) {
            info!(?mark, lines = lines.len(), "Game won");
            self.state.set_status(GameStatus::Won { mark, lines });
        } else if is_full(board) {
            for position in Position::ALL {
                self.presenter.set_color(position, CellColor::HighlightDraw);
            }
            info!("Game drawn");
            self.state.set_status(GameStatus::Draw);
        }

        self.state.status()
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the presenter mutably, for front-end-only state.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the controller, returning the presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
