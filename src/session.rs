//! A single play session: board state, turn order, and record keeping.

use derive_more::{Display, Error, From};
use noughts_board::{BoardError, Coord, GameState, GameStatus, Mark, Placement};
use noughts_records::{HistoryRecord, Outcome, RecordError, RecordStore, StatsRecord};
use tracing::{debug, info, instrument, warn};

/// Error raised while playing a session.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// Invalid board size or coordinate.
    #[display("{_0}")]
    Board(BoardError),
    /// Finished game could not be recorded.
    #[display("{_0}")]
    Record(RecordError),
}

/// Result of one [`GameSession::play`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// What happened to the move.
    pub placement: Placement,
    /// Game status after the move.
    pub status: GameStatus,
    /// Winning line, empty unless the game was won.
    pub winning_cells: Vec<Coord>,
    /// Updated totals when this move ended the game.
    pub stats: Option<StatsRecord>,
}

/// Drives one game at a time and records finished games.
///
/// Turn order alternates starting from the session's first mark. When a
/// move ends the game, the session latches game-over, appends a history
/// record and then bumps the statistics.
///
/// Both writes stay pending until they succeed. If either fails, the game
/// is still over and [`GameSession::retry_recording`] finishes whatever was
/// not written, without writing anything twice.
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    current: Mark,
    first: Mark,
    store: RecordStore,
    pending: PendingRecord,
}

/// Writes still owed for the last finished game.
#[derive(Debug, Clone, Default)]
struct PendingRecord {
    history: Option<HistoryRecord>,
    outcome: Option<Outcome>,
}

impl PendingRecord {
    fn is_empty(&self) -> bool {
        self.history.is_none() && self.outcome.is_none()
    }
}

impl GameSession {
    /// Starts a session on an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] when `size` is zero.
    #[instrument(skip(store))]
    pub fn new(size: usize, first: Mark, store: RecordStore) -> Result<Self, SessionError> {
        info!(size, %first, "Starting session");
        Ok(Self {
            state: GameState::new(size)?,
            current: first,
            first,
            store,
            pending: PendingRecord::default(),
        })
    }

    /// Discards the current game and starts a fresh one.
    ///
    /// Any unrecorded result of the previous game is dropped.
    #[instrument(skip(self))]
    pub fn restart(&mut self, first: Mark) -> Result<(), SessionError> {
        info!(%first, "Restarting session");
        if !self.pending.is_empty() {
            warn!("Dropping unrecorded result of the previous game");
            self.pending = PendingRecord::default();
        }
        self.state = GameState::new(self.state.size())?;
        self.current = first;
        self.first = first;
        Ok(())
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mark whose turn it is.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Mark that moved first this game.
    pub fn first(&self) -> Mark {
        self.first
    }

    /// Store receiving finished games.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Whether the last finished game still has writes outstanding.
    pub fn has_unrecorded_result(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Writes whatever the last finished game still owes the store.
    ///
    /// Returns the updated statistics once they are written, or `None` when
    /// nothing was outstanding.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Record`] if a write fails again. The failed
    /// write stays pending.
    #[instrument(skip(self))]
    pub fn retry_recording(&mut self) -> Result<Option<StatsRecord>, SessionError> {
        if let Some(record) = self.pending.history.clone() {
            self.store.append_history(record)?;
            self.pending.history = None;
        }
        let Some(outcome) = self.pending.outcome else {
            return Ok(None);
        };
        let stats = self.store.update_stats(outcome)?;
        self.pending.outcome = None;
        Ok(Some(stats))
    }

    /// Places the current mark at (`row`, `col`).
    ///
    /// Moves on occupied cells or after the game has ended change nothing.
    /// A move that wins or fills the board ends the game and records it.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Board`] for a coordinate off the board and
    /// [`SessionError::Record`] if the finished game cannot be saved. The
    /// game stays over in that case and its unsaved part can be written
    /// with [`GameSession::retry_recording`].
    #[instrument(skip(self), fields(mark = %self.current))]
    pub fn play(&mut self, row: usize, col: usize) -> Result<TurnReport, SessionError> {
        if self.state.is_game_over() {
            debug!("Session already finished");
            return Ok(self.report(Placement::GameOver, None));
        }

        let placement = self.state.apply_move(row, col, self.current)?;
        if !placement.is_placed() {
            return Ok(self.report(placement, None));
        }

        let Some(outcome) = Outcome::from_status(self.state.status()) else {
            self.current = self.current.opponent();
            return Ok(self.report(placement, None));
        };

        self.state.set_game_over();
        let moves = u32::try_from(self.state.move_count()).unwrap_or(u32::MAX);
        info!(%outcome, moves, "Game finished");
        self.pending = PendingRecord {
            history: Some(HistoryRecord::new(outcome, self.first, moves)),
            outcome: Some(outcome),
        };
        let stats = self.retry_recording()?;
        Ok(self.report(placement, stats))
    }

    fn report(&self, placement: Placement, stats: Option<StatsRecord>) -> TurnReport {
        TurnReport {
            placement,
            status: self.state.status(),
            winning_cells: self.state.winning_cells(),
            stats,
        }
    }
}

/// Returns `choice`, or a random mark when none is given.
#[instrument]
pub fn pick_first(choice: Option<Mark>) -> Mark {
    choice.unwrap_or_else(|| if rand::random::<bool>() { Mark::X } else { Mark::O })
}
