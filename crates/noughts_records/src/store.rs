//! File-backed record store.

use crate::{HistoryRecord, Outcome, RecordError, StatsRecord};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

/// Default statistics file name.
pub const DEFAULT_STATS_FILE: &str = "ttt_stats.json";

/// Default history file name.
pub const DEFAULT_HISTORY_FILE: &str = "ttt_history.json";

/// Reads and writes the statistics and history files.
///
/// Each operation is a full read-modify-write. The store holds no cached
/// state, so it assumes a single writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    stats_path: PathBuf,
    history_path: PathBuf,
}

impl RecordStore {
    /// Creates a store over explicit file paths.
    #[instrument(skip(stats_path, history_path))]
    pub fn new(stats_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        let store = Self {
            stats_path: stats_path.into(),
            history_path: history_path.into(),
        };
        debug!(
            stats = %store.stats_path.display(),
            history = %store.history_path.display(),
            "Creating RecordStore"
        );
        store
    }

    /// Creates a store using the default file names inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(DEFAULT_STATS_FILE), dir.join(DEFAULT_HISTORY_FILE))
    }

    /// Path of the statistics file.
    pub fn stats_path(&self) -> &Path {
        &self.stats_path
    }

    /// Path of the history file.
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Loads statistics, repairing missing or invalid fields to zero.
    #[instrument(skip(self), fields(path = %self.stats_path.display()))]
    pub fn load_stats(&self) -> StatsRecord {
        match read_json(&self.stats_path) {
            Some(value) => StatsRecord::from_json(&value),
            None => StatsRecord::default(),
        }
    }

    /// Counts one game with `outcome`, persists, and returns the new totals.
    ///
    /// `outcome` accepts a winning [`noughts_board::Mark`], `None` for a
    /// draw, or an [`Outcome`].
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the statistics file cannot be written.
    #[instrument(skip(self, outcome), fields(path = %self.stats_path.display()))]
    pub fn update_stats(&self, outcome: impl Into<Outcome>) -> Result<StatsRecord, RecordError> {
        let outcome = outcome.into();
        let mut stats = self.load_stats();
        stats.record(outcome);
        write_json_atomic(&self.stats_path, &stats)?;
        info!(%outcome, total = stats.total(), "Stats updated");
        Ok(stats)
    }

    /// Appends `record` to the end of the history file.
    ///
    /// The whole file is rewritten. Existing elements are carried over as
    /// raw JSON, including ones that do not parse as records, so an append
    /// never drops data. A file that is not a JSON array is replaced. No
    /// size cap is applied here; trimming happens on read.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if the history file cannot be written.
    #[instrument(skip(self, record), fields(path = %self.history_path.display()))]
    pub fn append_history(&self, record: HistoryRecord) -> Result<(), RecordError> {
        let mut items = self.load_raw_history();
        items.push(serde_json::to_value(&record)?);
        write_json_atomic(&self.history_path, &items)?;
        info!(len = items.len(), "History appended");
        Ok(())
    }

    /// Returns the last `limit` records in chronological order, or all of
    /// them when `limit <= 0`.
    #[instrument(skip(self), fields(path = %self.history_path.display()))]
    pub fn load_history(&self, limit: i64) -> Vec<HistoryRecord> {
        let mut history = self.load_all_history();
        if let Ok(limit) = usize::try_from(limit)
            && limit > 0
            && history.len() > limit
        {
            history = history.split_off(history.len() - limit);
        }
        debug!(returned = history.len(), "History loaded");
        history
    }

    /// Deletes both files. Missing files are fine.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if an existing file cannot be removed.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), RecordError> {
        for path in [&self.stats_path, &self.history_path] {
            match std::fs::remove_file(path) {
                Ok(()) => info!(path = %path.display(), "Removed record file"),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(RecordError::new(format!(
                        "Failed to remove {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
        Ok(())
    }

    fn load_raw_history(&self) -> Vec<Value> {
        let Some(value) = read_json(&self.history_path) else {
            return Vec::new();
        };
        match value {
            Value::Array(items) => items,
            _ => {
                warn!(path = %self.history_path.display(), "History is not a JSON array, ignoring it");
                Vec::new()
            }
        }
    }

    fn load_all_history(&self) -> Vec<HistoryRecord> {
        self.load_raw_history()
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(index, error = %e, "Skipping malformed history entry");
                    None
                }
            })
            .collect()
    }
}

/// Reads and parses a JSON file. Missing, unreadable and unparseable files
/// all come back as `None`.
#[instrument(skip(path), fields(path = %path.display()))]
fn read_json(path: &Path) -> Option<Value> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Record file not found");
            return None;
        }
        Err(e) => {
            warn!(error = %e, "Record file unreadable");
            return None;
        }
    };
    match serde_json::from_str(&text) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(error = %e, "Record file is not valid JSON");
            None
        }
    }
}

/// Writes `value` as indented JSON to a temporary file next to `path`, then
/// renames it over `path`.
#[instrument(skip(path, value), fields(path = %path.display()))]
fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), RecordError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut tmp, value)?;
    tmp.write_all(b"\n")?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    debug!("Record file written");
    Ok(())
}
