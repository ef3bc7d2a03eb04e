//! Per-session game state.

use crate::rules::{check_winner, is_draw, winning_cells};
use crate::{Board, BoardError, Coord, GameStatus, Mark};
use tracing::{debug, instrument};

/// What happened to a move handed to [`GameState::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The mark was written.
    Placed,
    /// The cell already held a mark; nothing changed.
    Occupied,
    /// The game is over; nothing changed.
    GameOver,
}

impl Placement {
    /// Returns true if the board changed.
    pub fn is_placed(self) -> bool {
        self == Placement::Placed
    }
}

/// State of one game session: the board plus a one-way game-over latch.
///
/// Restarting a game means constructing a new `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    game_over: bool,
}

impl GameState {
    /// Creates a game with an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        debug!(size, "Creating game state");
        Ok(Self {
            board: Board::new(size)?,
            game_over: false,
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true if (`row`, `col`) holds no mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board.
    #[instrument(skip(self))]
    pub fn is_cell_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.board.is_empty(row, col)
    }

    /// Writes `mark` at (`row`, `col`) if the cell is empty and the game is
    /// not over.
    ///
    /// Occupied cells and finished games are silent no-ops reported as
    /// [`Placement::Occupied`] and [`Placement::GameOver`]. This method never
    /// latches game-over by itself; callers check the status after a move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board,
    /// whether or not the game is over.
    #[instrument(skip(self), fields(game_over = self.game_over))]
    pub fn apply_move(&mut self, row: usize, col: usize, mark: Mark) -> Result<Placement, BoardError> {
        // Bounds are validated before the latch so bad input is always reported.
        let empty = self.board.is_empty(row, col)?;
        if self.game_over {
            debug!("Ignoring move, game is over");
            return Ok(Placement::GameOver);
        }
        if !empty {
            debug!("Ignoring move, cell is occupied");
            return Ok(Placement::Occupied);
        }
        self.board.place(row, col, mark)?;
        debug!(%mark, "Mark placed");
        Ok(Placement::Placed)
    }

    /// Latches the game as over. Further moves are ignored.
    #[instrument(skip(self))]
    pub fn set_game_over(&mut self) {
        debug!("Game over latched");
        self.game_over = true;
    }

    /// Returns true once [`GameState::set_game_over`] has been called.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Derives the status from the board. A win dominates a full board.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(mark) = check_winner(&self.board) {
            GameStatus::Won(mark)
        } else if is_draw(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Winner of the current board, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }

    /// Coordinates of the winning line, empty if there is none.
    pub fn winning_cells(&self) -> Vec<Coord> {
        winning_cells(&self.board)
    }

    /// Returns true if the board is full with no winner.
    pub fn is_draw(&self) -> bool {
        is_draw(&self.board)
    }

    /// Number of marks placed so far.
    pub fn move_count(&self) -> usize {
        self.board.occupied()
    }
}
