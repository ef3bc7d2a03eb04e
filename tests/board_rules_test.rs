//! Win, draw and move-policy properties of the board engine.

use noughts::{
    Board, Cell, Coord, GameState, Mark, Placement, check_winner, is_draw, winning_cells,
};

/// Every 3×3 position, including unreachable ones.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3u32.pow(9)).map(|mut code| {
        let mut text = String::new();
        for _ in 0..9 {
            text.push(match code % 3 {
                0 => '.',
                1 => 'X',
                _ => 'O',
            });
            code /= 3;
        }
        let rows = [&text[0..3], &text[3..6], &text[6..9]];
        Board::from_rows(&rows).expect("valid rows")
    })
}

/// Straightforward reference scan: rows, columns, diagonal, anti-diagonal.
fn first_uniform_line(board: &Board) -> Option<Vec<Coord>> {
    let n = board.size();
    let mut candidates: Vec<Vec<Coord>> = Vec::new();
    for r in 0..n {
        candidates.push((0..n).map(|c| Coord::new(r, c)).collect());
    }
    for c in 0..n {
        candidates.push((0..n).map(|r| Coord::new(r, c)).collect());
    }
    candidates.push((0..n).map(|i| Coord::new(i, i)).collect());
    candidates.push((0..n).map(|i| Coord::new(i, n - 1 - i)).collect());

    candidates.into_iter().find(|line| {
        let first = board.get(line[0].row, line[0].col).unwrap();
        first != Cell::Empty
            && line
                .iter()
                .all(|c| board.get(c.row, c.col).unwrap() == first)
    })
}

#[test]
fn test_winning_cells_match_reference_scan() {
    for board in all_boards() {
        let expected = first_uniform_line(&board).unwrap_or_default();
        assert_eq!(winning_cells(&board), expected, "board:\n{}", board);
    }
}

#[test]
fn test_check_winner_derives_from_winning_cells() {
    for board in all_boards() {
        let cells = winning_cells(&board);
        assert_eq!(cells.is_empty(), check_winner(&board).is_none());
        let derived = cells
            .first()
            .and_then(|c| board.get(c.row, c.col).unwrap().mark());
        assert_eq!(check_winner(&board), derived);
    }
}

#[test]
fn test_draw_iff_no_winner_and_full() {
    for board in all_boards() {
        let full = board.cells().iter().all(|c| !c.is_empty());
        assert_eq!(is_draw(&board), check_winner(&board).is_none() && full);
    }
}

#[test]
fn test_scenario_top_row_win() {
    let mut game = GameState::new(3).unwrap();
    for (row, col, mark) in [
        (0, 0, Mark::X),
        (1, 1, Mark::O),
        (0, 1, Mark::X),
        (2, 2, Mark::O),
        (0, 2, Mark::X),
    ] {
        assert_eq!(game.apply_move(row, col, mark), Ok(Placement::Placed));
    }
    assert_eq!(check_winner(game.board()), Some(Mark::X));
    assert_eq!(
        winning_cells(game.board()),
        vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(0, 2)]
    );
    assert!(!is_draw(game.board()));
}

#[test]
fn test_scenario_full_board_draw() {
    let mut game = GameState::new(3).unwrap();
    let layout = [
        [Mark::X, Mark::O, Mark::X],
        [Mark::O, Mark::X, Mark::O],
        [Mark::O, Mark::X, Mark::O],
    ];
    for (row, marks) in layout.iter().enumerate() {
        for (col, &mark) in marks.iter().enumerate() {
            game.apply_move(row, col, mark).unwrap();
        }
    }
    assert_eq!(check_winner(game.board()), None);
    assert!(is_draw(game.board()));
}

#[test]
fn test_scenario_occupied_cell_unchanged() {
    let mut game = GameState::new(3).unwrap();
    game.apply_move(0, 0, Mark::X).unwrap();
    game.apply_move(0, 0, Mark::O).unwrap();
    assert_eq!(game.board().get(0, 0), Ok(Cell::Occupied(Mark::X)));
}

#[test]
fn test_no_move_changes_board_after_game_over() {
    let mut game = GameState::new(3).unwrap();
    game.apply_move(1, 1, Mark::X).unwrap();
    game.set_game_over();
    let before = game.board().clone();
    for row in 0..3 {
        for col in 0..3 {
            for mark in [Mark::X, Mark::O] {
                assert_eq!(game.apply_move(row, col, mark), Ok(Placement::GameOver));
            }
        }
    }
    assert_eq!(game.board(), &before);
}

#[test]
fn test_five_by_five_column_win() {
    let mut game = GameState::new(5).unwrap();
    for row in 0..5 {
        game.apply_move(row, 3, Mark::O).unwrap();
    }
    assert_eq!(game.winner(), Some(Mark::O));
    assert_eq!(
        game.winning_cells(),
        (0..5).map(|row| Coord::new(row, 3)).collect::<Vec<_>>()
    );
}
