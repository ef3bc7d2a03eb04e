//! Game outcome as stored in statistics and history.

use noughts_board::{GameStatus, Mark};
use serde::{Deserialize, Serialize};

/// How a finished game ended. Serialized as `"X"`, `"O"` or `"draw"`.
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
pub enum Outcome {
    /// X completed a line.
    X,
    /// O completed a line.
    O,
    /// Board filled with no complete line.
    #[serde(rename = "draw")]
    #[strum(serialize = "draw")]
    Draw,
}

impl Outcome {
    /// Returns the winning mark, or `None` for a draw.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::X => Some(Mark::X),
            Outcome::O => Some(Mark::O),
            Outcome::Draw => None,
        }
    }

    /// Converts a terminal game status. `InProgress` has no outcome.
    pub fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(mark) => Some(mark.into()),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

impl From<Mark> for Outcome {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Outcome::X,
            Mark::O => Outcome::O,
        }
    }
}

/// `None` means the game was drawn.
impl From<Option<Mark>> for Outcome {
    fn from(winner: Option<Mark>) -> Self {
        winner.map_or(Outcome::Draw, Outcome::from)
    }
}
