//! Noughts rules - tic-tac-toe game logic behind a presentation seam
//!
//! The crate owns the whole game: board state, turn order, line detection,
//! and the [`GameController`] that turns cell activations into board updates
//! and presentation requests. It knows nothing about terminals or windows;
//! any front end that can label and colour nine cells implements
//! [`Presenter`].
//!
//! # Example
//!
//! ```
//! use noughts_rules::{CellColor, GameController, Mark, Position, Presenter};
//!
//! #[derive(Default)]
//! struct Silent;
//!
//! impl Presenter for Silent {
//!     fn set_label(&mut self, _position: Position, _mark: Mark) {}
//!     fn set_color(&mut self, _position: Position, _color: CellColor) {}
//! }
//!
//! let mut game = GameController::new(Silent);
//! for index in [0, 3, 1, 4, 2] {
//!     game.handle_cell_activated(Position::from_index(index).unwrap());
//! }
//! assert!(game.state().is_ended());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod invariants;
mod position;
mod presenter;
pub mod rules;
mod types;

pub use controller::{Activation, GameController};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoardInvariant, StatusConsistentInvariant,
};
pub use position::Position;
pub use presenter::{CellColor, Presenter};
pub use rules::{Line, LINES};
pub use types::{Board, GameState, GameStatus, Mark};
