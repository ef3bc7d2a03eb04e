//! Board engine for N×N tic-tac-toe.
//!
//! Pure and synchronous: a [`GameState`] owns one [`Board`] for a single
//! session, applies moves under the no-op-on-invalid policy, and derives
//! win and draw status from the board on demand.
//!
//! # Example
//!
//! ```
//! use noughts_board::{check_winner, Coord, GameState, Mark};
//!
//! # fn main() -> Result<(), noughts_board::BoardError> {
//! let mut game = GameState::new(3)?;
//! for (row, col, mark) in [(0, 0, Mark::X), (1, 1, Mark::O), (0, 1, Mark::X), (2, 2, Mark::O), (0, 2, Mark::X)] {
//!     game.apply_move(row, col, mark)?;
//! }
//! assert_eq!(check_winner(game.board()), Some(Mark::X));
//! assert_eq!(game.winning_cells(), vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod rules;
mod types;

pub use error::BoardError;
pub use game::{GameState, Placement};
pub use rules::{check_winner, is_draw, is_full, lines, winning_cells};
pub use types::{Board, Cell, Coord, GameStatus, Mark};
