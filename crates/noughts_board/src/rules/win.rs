//! Win detection and winning-line extraction.

use crate::{Board, Coord, Mark};
use tracing::instrument;

/// Every line of an N×N board in scan priority order: all rows top to
/// bottom, all columns left to right, the main diagonal, then the
/// anti-diagonal.
pub fn lines(size: usize) -> impl Iterator<Item = Vec<Coord>> {
    let rows = (0..size).map(move |row| (0..size).map(|col| Coord::new(row, col)).collect::<Vec<_>>());
    let cols = (0..size).map(move |col| (0..size).map(|row| Coord::new(row, col)).collect::<Vec<_>>());
    let main = std::iter::once((0..size).map(|i| Coord::new(i, i)).collect::<Vec<_>>());
    let anti = std::iter::once(
        (0..size)
            .map(|i| Coord::new(i, size - 1 - i))
            .collect::<Vec<_>>(),
    );
    rows.chain(cols).chain(main).chain(anti)
}

/// Returns the coordinates of the first complete line, or an empty vector.
///
/// A line is complete when every cell holds the same mark. Lines are tried
/// in [`lines`] order, so a row beats a column, a column beats the main
/// diagonal, and the main diagonal beats the anti-diagonal.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winning_cells(board: &Board) -> Vec<Coord> {
    lines(board.size())
        .find(|line| {
            let first = board.at(line[0]);
            !first.is_empty() && line.iter().all(|&coord| board.at(coord) == first)
        })
        .unwrap_or_default()
}

/// Returns the mark that completed a line, if any.
///
/// This is the mark in the first cell of [`winning_cells`].
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_cells(board)
        .first()
        .and_then(|&coord| board.at(coord).mark())
}
