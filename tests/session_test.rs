//! End-to-end sessions through the terminal front-end.

use noughts::{
    GameEnd, GameSession, GameStatus, Mark, Outcome, RecordStore, StatsRecord, run_game,
};
use std::io::Cursor;
use tempfile::TempDir;

fn play(first: Mark, script: &str) -> (TempDir, GameSession, GameEnd, String) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut session =
        GameSession::new(3, first, RecordStore::in_dir(dir.path())).expect("session");
    let mut output = Vec::new();
    let end = run_game(&mut session, Cursor::new(script.to_string()), &mut output).expect("game");
    (dir, session, end, String::from_utf8(output).expect("utf8"))
}

#[test]
fn test_win_through_terminal() {
    let (_dir, session, end, output) = play(Mark::X, "0 0\n1 1\n0 1\n2 2\n0 2\n");
    assert_eq!(end, GameEnd::Finished(GameStatus::Won(Mark::X)));
    assert!(output.contains("X wins! Line: (0, 0) (0, 1) (0, 2)"));
    assert!(output.contains("X wins: 1  O wins: 0  draws: 0  total: 1"));
    assert_eq!(session.store().load_stats(), StatsRecord::new(1, 0, 0));
}

#[test]
fn test_draw_through_terminal_records_first_player() {
    // O opens; O X O / O X X / X O O is a draw.
    let script = "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 2\n2 0\n2 1\n";
    let (_dir, session, end, output) = play(Mark::O, script);
    assert_eq!(end, GameEnd::Finished(GameStatus::Draw));
    assert!(output.contains("Draw!"));

    let history = session.store().load_history(0);
    assert_eq!(history.len(), 1);
    assert_eq!(*history[0].winner(), Outcome::Draw);
    assert_eq!(*history[0].first_player(), Mark::O);
    assert_eq!(*history[0].moves(), 9);
}

#[test]
fn test_bad_input_is_reported_and_skipped() {
    let (_dir, session, end, output) = play(Mark::X, "hello\n5 5\n1 1\n1 1\nq\n");
    assert_eq!(end, GameEnd::Abandoned);
    assert!(output.contains("Enter a move as: row col"));
    assert!(output.contains("outside the 3x3 board"));
    assert!(output.contains("That cell is taken."));
    assert_eq!(session.state().move_count(), 1);
    assert!(session.store().load_history(0).is_empty());
}

#[test]
fn test_input_running_out_abandons_game() {
    let (_dir, session, end, _output) = play(Mark::X, "0 0\n");
    assert_eq!(end, GameEnd::Abandoned);
    assert_eq!(session.store().load_stats(), StatsRecord::default());
}

#[test]
fn test_consecutive_games_accumulate() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::new(3, Mark::X, RecordStore::in_dir(dir.path())).unwrap();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(row, col).unwrap();
    }
    session.restart(Mark::O).unwrap();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        session.play(row, col).unwrap();
    }
    assert_eq!(session.store().load_stats(), StatsRecord::new(1, 1, 0));
    let history = session.store().load_history(0);
    assert_eq!(history.len(), 2);
    assert_eq!(*history[0].winner(), Outcome::X);
    assert_eq!(*history[1].winner(), Outcome::O);
    assert_eq!(*history[1].first_player(), Mark::O);
}
