//! Noughts library - tic-tac-toe sessions with persisted records
//!
//! # Architecture
//!
//! - **Board engine** ([`noughts_board`]): N×N board state, win and draw detection
//! - **Records** ([`noughts_records`]): JSON statistics and history files
//! - **Session**: turn order plus recording of finished games
//! - **Config**: TOML configuration for file locations and board size
//!
//! # Example
//!
//! ```no_run
//! use noughts::{AppConfig, GameSession, Mark};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("noughts.toml")?;
//! let mut session = GameSession::new(*config.board_size(), Mark::X, config.record_store())?;
//! session.play(1, 1)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, TurnReport, pick_first};

// Crate-level exports - Terminal front-end
pub use terminal::{GameEnd, parse_move, run_game, write_stats};

// Crate-level exports - Board engine and records
pub use noughts_board::{
    Board, BoardError, Cell, Coord, GameState, GameStatus, Mark, Placement, check_winner,
    is_draw, winning_cells,
};
pub use noughts_records::{HistoryRecord, Outcome, RecordError, RecordStore, StatsRecord};
