//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The controller composes
//! them; nothing here touches the presentation layer.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{line_owner, winning_lines, Line, LINES};
