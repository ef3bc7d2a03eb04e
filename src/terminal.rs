//! Line-based terminal front-end for a [`GameSession`].

use crate::session::{GameSession, SessionError};
use noughts_board::{GameStatus, Placement};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// How a terminal game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    /// The game reached a win or draw.
    Finished(GameStatus),
    /// The player quit or input ran out first.
    Abandoned,
}

/// Parses a move entered as `row col` (comma or whitespace separated).
pub fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

/// Plays one game, reading moves from `input` and writing the board to
/// `output`. Entering `q` quits.
///
/// # Errors
///
/// Returns an error on I/O failure or if the finished game cannot be
/// recorded.
#[instrument(skip_all)]
pub fn run_game<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> anyhow::Result<GameEnd> {
    writeln!(output, "{}\n", session.state().board())?;
    writeln!(output, "{} to move (row col, q to quit):", session.current())?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            debug!("Player quit");
            return Ok(GameEnd::Abandoned);
        }
        let Some((row, col)) = parse_move(trimmed) else {
            writeln!(output, "Enter a move as: row col")?;
            continue;
        };

        let report = match session.play(row, col) {
            Ok(report) => report,
            Err(SessionError::Board(e)) => {
                writeln!(output, "{}", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if report.placement == Placement::Occupied {
            writeln!(output, "That cell is taken.")?;
            continue;
        }

        writeln!(output, "{}\n", session.state().board())?;
        match report.status {
            GameStatus::InProgress => {
                writeln!(output, "{} to move:", session.current())?;
            }
            GameStatus::Won(mark) => {
                let line = report
                    .winning_cells
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                writeln!(output, "{} wins! Line: {}", mark, line)?;
                if let Some(stats) = report.stats {
                    write_stats(&mut output, &stats)?;
                }
                return Ok(GameEnd::Finished(report.status));
            }
            GameStatus::Draw => {
                writeln!(output, "Draw!")?;
                if let Some(stats) = report.stats {
                    write_stats(&mut output, &stats)?;
                }
                return Ok(GameEnd::Finished(report.status));
            }
        }
    }

    Ok(GameEnd::Abandoned)
}

/// Writes aggregate statistics in one line.
pub fn write_stats<W: Write>(output: &mut W, stats: &noughts_records::StatsRecord) -> std::io::Result<()> {
    writeln!(
        output,
        "X wins: {}  O wins: {}  draws: {}  total: {}",
        stats.wins_x(),
        stats.wins_o(),
        stats.draws(),
        stats.total()
    )
}
