//! Board engine error types.

/// Error returned when a board operation receives input it cannot honor.
///
/// Occupied cells and finished games are *not* errors: those moves are
/// ignored and reported through [`crate::Placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A board needs at least one row and one column.
    #[display("Board size must be at least 1")]
    InvalidSize,

    /// The coordinate lies outside the board.
    #[display("Cell ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Board side length.
        size: usize,
    },

    /// A text row passed to [`crate::Board::from_rows`] has the wrong length
    /// or an unknown symbol.
    #[display("Row {row} is malformed")]
    MalformedRow {
        /// Zero-based index of the offending row.
        row: usize,
    },
}

impl std::error::Error for BoardError {}
