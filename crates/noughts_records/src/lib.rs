//! Persisted statistics and game history for noughts.
//!
//! Two JSON files back the records: an aggregate statistics object and an
//! append-only history array. Reads never fail; missing or corrupt data
//! falls back to defaults. Writes replace the target file atomically.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod history;
mod outcome;
mod stats;
mod store;

pub use error::RecordError;
pub use history::HistoryRecord;
pub use outcome::Outcome;
pub use stats::StatsRecord;
pub use store::{DEFAULT_HISTORY_FILE, DEFAULT_STATS_FILE, RecordStore};
