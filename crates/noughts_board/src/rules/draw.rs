//! Draw detection.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// Checks for a draw: no complete line and no empty cell.
///
/// A full board with a complete line is a win, never a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board) -> bool {
    check_winner(board).is_none() && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new(3).unwrap();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_rows(&["XOX", "OXO", "OXO"]).unwrap();
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_with_empty_cell() {
        let board = Board::from_rows(&["XOX", "OXO", "OX."]).unwrap();
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner_on_full_board() {
        let board = Board::from_rows(&["XXX", "OOX", "XOO"]).unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
