//! Core domain types for the board engine.

use crate::BoardError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// A (row, col) coordinate, both zero-based.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coord {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// N×N board stored in row-major order.
///
/// Cells only ever go from empty to occupied. The one way to clear a board
/// is to build a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] when `size` is zero.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::InvalidSize);
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Builds a board from text rows.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_`, `-` and space are empty.
    /// The number of rows sets the size and every row must be that long.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for zero rows and
    /// [`BoardError::MalformedRow`] for a row of the wrong length or with an
    /// unknown symbol.
    #[instrument]
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let mut board = Self::new(rows.len())?;
        for (row, text) in rows.iter().enumerate() {
            let symbols: Vec<char> = text.chars().collect();
            if symbols.len() != board.size {
                return Err(BoardError::MalformedRow { row });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                let cell = match symbol {
                    'X' | 'x' => Cell::Occupied(Mark::X),
                    'O' | 'o' => Cell::Occupied(Mark::O),
                    '.' | '_' | '-' | ' ' => Cell::Empty,
                    _ => return Err(BoardError::MalformedRow { row }),
                };
                board.cells[row * board.size + col] = cell;
            }
        }
        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row * self.size + col)
    }

    /// Returns the cell at (`row`, `col`).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Cell lookup for coordinates produced by the engine itself.
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        self.cells[coord.row * self.size + coord.col]
    }

    /// Returns true if (`row`, `col`) holds no mark.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] for a coordinate off the board.
    pub fn is_empty(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        self.get(row, col).map(Cell::is_empty)
    }

    /// Writes `mark` into an empty cell. Returns false and leaves the board
    /// untouched when the cell is already occupied.
    pub(crate) fn place(&mut self, row: usize, col: usize, mark: Mark) -> Result<bool, BoardError> {
        let i = self.index(row, col)?;
        if !self.cells[i].is_empty() {
            return Ok(false);
        }
        self.cells[i] = Cell::Occupied(mark);
        Ok(true)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of marks on the board.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Formats the board as a plain-text grid.
    pub fn render(&self) -> String {
        let separator = vec!["-"; self.size].join("+");
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => " ".to_string(),
                        Cell::Occupied(mark) => mark.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join(&format!("\n{separator}\n"))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Status of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Board is full with no complete line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
