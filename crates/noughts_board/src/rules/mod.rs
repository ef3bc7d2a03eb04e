//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`crate::Board`]. Rules are kept apart from board
//! storage so the session layer and tests can evaluate any position.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, lines, winning_cells};
