//! One entry of the game history log.

use crate::Outcome;
use chrono::{Local, NaiveDateTime, SubsecRound};
use derive_getters::Getters;
use noughts_board::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A finished game as written to the history file.
///
/// Stored as `{"time": "2024-05-01T20:15:03", "winner": "X", "first_player": "O", "moves": 7}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryRecord {
    /// Local wall-clock time the game ended, to the second.
    #[serde(with = "iso_seconds")]
    time: NaiveDateTime,
    /// Who won, or a draw.
    winner: Outcome,
    /// Mark that moved first in the session.
    first_player: Mark,
    /// Marks placed during the game.
    moves: u32,
}

impl HistoryRecord {
    /// Creates a record stamped with the current local time.
    ///
    /// `outcome` accepts a [`Mark`] for a win, `None::<Mark>` for a draw, or
    /// an [`Outcome`] directly.
    #[instrument(skip(outcome))]
    pub fn new(outcome: impl Into<Outcome>, first_player: Mark, moves: u32) -> Self {
        Self::at(Local::now().naive_local(), outcome, first_player, moves)
    }

    /// Creates a record with an explicit timestamp, truncated to seconds.
    pub fn at(time: NaiveDateTime, outcome: impl Into<Outcome>, first_player: Mark, moves: u32) -> Self {
        Self {
            time: time.trunc_subsecs(0),
            winner: outcome.into(),
            first_player,
            moves,
        }
    }
}

impl std::fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let result = match self.winner.winner() {
            Some(mark) => format!("{} wins", mark),
            None => "draw".to_string(),
        };
        write!(
            f,
            "{}  {:<7}  first: {}  moves: {}",
            self.time.format(iso_seconds::FORMAT),
            result,
            self.first_player,
            self.moves
        )
    }
}

/// ISO-8601 local timestamps at second precision.
mod iso_seconds {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub(super) fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(FORMAT))
    }

    // Also accepts fractional seconds and a `Z` or `+hh:mm` suffix. An
    // offset is dropped and the wall-clock time is kept as written.
    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        if let Ok(time) = DateTime::parse_from_rfc3339(&text) {
            return Ok(time.naive_local());
        }
        text.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
    }
}
