//! Aggregate win/draw statistics.

use crate::Outcome;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{instrument, warn};

/// Aggregate counts across every recorded game.
///
/// Stored as `{"X": .., "O": .., "draw": .., "total": ..}`. `total` always
/// equals the sum of the other three counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StatsRecord {
    /// Games won by X.
    #[serde(rename = "X")]
    wins_x: u64,
    /// Games won by O.
    #[serde(rename = "O")]
    wins_o: u64,
    /// Drawn games.
    #[serde(rename = "draw")]
    draws: u64,
    /// All recorded games.
    total: u64,
}

impl StatsRecord {
    /// Builds a record from counters, deriving `total`.
    ///
    /// Counters whose sum does not fit in a `u64` give the all-zero record.
    /// Use [`StatsRecord::try_new`] to tell that case apart.
    pub fn new(wins_x: u64, wins_o: u64, draws: u64) -> Self {
        Self::try_new(wins_x, wins_o, draws).unwrap_or_default()
    }

    /// Builds a record from counters, or `None` if `total` would overflow.
    pub fn try_new(wins_x: u64, wins_o: u64, draws: u64) -> Option<Self> {
        let total = wins_x.checked_add(wins_o)?.checked_add(draws)?;
        Some(Self {
            wins_x,
            wins_o,
            draws,
            total,
        })
    }

    /// Counts one more game with the given outcome.
    ///
    /// A record whose `total` is already `u64::MAX` is left unchanged.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        // Every counter is at most `total`, so it cannot overflow either.
        let Some(total) = self.total.checked_add(1) else {
            warn!(total = self.total, "Stats counters saturated, game not counted");
            return;
        };
        match outcome {
            Outcome::X => self.wins_x += 1,
            Outcome::O => self.wins_o += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.total = total;
    }

    /// Rebuilds a record from loosely structured JSON.
    ///
    /// Anything but an object yields all zeros. Each counter that is missing
    /// or not a non-negative integer becomes zero on its own. Counters that
    /// sum past `u64::MAX` are treated as corrupt and also yield all zeros.
    /// A `total` that disagrees with the repaired counters is recomputed.
    #[instrument(skip(value))]
    pub fn from_json(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            warn!("Stats are not a JSON object, using defaults");
            return Self::default();
        };

        let field = |key: &str| match object.get(key).and_then(Value::as_u64) {
            Some(n) => n,
            None => {
                warn!(key, "Stats field missing or invalid, using 0");
                0
            }
        };

        let (wins_x, wins_o, draws) = (field("X"), field("O"), field("draw"));
        let Some(record) = Self::try_new(wins_x, wins_o, draws) else {
            warn!(wins_x, wins_o, draws, "Stats counters overflow, using defaults");
            return Self::default();
        };

        let stored_total = object.get("total").and_then(Value::as_u64);
        if stored_total != Some(record.total) {
            warn!(
                stored = ?stored_total,
                repaired = record.total,
                "Stats total disagrees with counters, recomputing"
            );
        }
        record
    }
}
