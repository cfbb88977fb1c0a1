//! The recurring purge unit of work.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::{AccessLogConfig, PurgeConfig, TimeUnit};
use crate::error::PurgeError;
use crate::pattern::LogFilePattern;

/// Deletes rotated access log files that are past their retention age.
///
/// A task is built once per access log and holds no mutable state; a
/// cycle's outcome depends only on the directory contents and the current
/// time, so invoking it repeatedly is safe.
pub struct PurgeTask {
    directory: PathBuf,
    pattern: LogFilePattern,
    max_history: u64,
    max_history_unit: TimeUnit,
}

impl PurgeTask {
    pub fn new(config: &PurgeConfig, access_log: &AccessLogConfig) -> Result<Self, PurgeError> {
        Ok(Self {
            directory: access_log.directory.clone(),
            pattern: LogFilePattern::new(&access_log.prefix, &access_log.suffix)?,
            max_history: config.max_history,
            max_history_unit: config.max_history_unit,
        })
    }

    /// Run one purge cycle.
    ///
    /// Never panics and never propagates an error: a listing failure ends
    /// the cycle, a per-file failure is logged and the remaining files are
    /// still processed. The schedule's recurrence is the retry mechanism.
    pub fn run(&self) {
        tracing::debug!(
            directory = %self.directory.display(),
            "purging rotated access log files"
        );

        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(
                    directory = %self.directory.display(),
                    error = %e,
                    "failed to list access log directory, skipping purge cycle"
                );
                return;
            }
        };

        let now_ms = epoch_millis(SystemTime::now());
        let mut deleted = 0usize;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to read directory entry");
                    continue;
                }
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => {
                    tracing::warn!(
                        path = %entry.path().display(),
                        "skipping non-UTF-8 file name"
                    );
                    continue;
                }
            };

            let modified_ms = match entry.metadata().and_then(|m| m.modified()) {
                Ok(modified) => epoch_millis(modified),
                Err(e) => {
                    tracing::warn!(
                        file = %name,
                        error = %e,
                        "failed to read modification time"
                    );
                    continue;
                }
            };

            if self.is_purgeable(&name, modified_ms, now_ms) && self.delete(&entry.path(), &name) {
                deleted += 1;
            }
        }

        tracing::debug!(deleted, "purge cycle finished");
    }

    /// Purge eligibility for a single directory entry.
    ///
    /// The active file is never eligible, even when it satisfies the
    /// pattern and age tests. The age is computed by truncating both
    /// timestamps into `max_history_unit` independently before
    /// subtracting, so a boundary result can shift by up to one unit
    /// depending on how the sub-unit remainders align. A file exactly at
    /// the threshold is retained.
    fn is_purgeable(&self, file_name: &str, modified_ms: i64, now_ms: i64) -> bool {
        if !self.pattern.is_rotated(file_name) {
            return false;
        }
        let unit = self.max_history_unit;
        let age = unit.convert_from_millis(now_ms) - unit.convert_from_millis(modified_ms);
        age > self.max_history as i64
    }

    /// Delete one rotated file. A file that vanished since listing counts
    /// as deleted; any other failure is logged and the cycle moves on.
    fn delete(&self, path: &Path, name: &str) -> bool {
        match fs::remove_file(path) {
            Ok(()) => {
                tracing::info!(file = %name, "deleted rotated access log file");
                true
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file = %name, "rotated file already removed");
                true
            }
            Err(e) => {
                tracing::error!(
                    file = %name,
                    error = %e,
                    "failed to delete rotated access log file"
                );
                false
            }
        }
    }
}

fn epoch_millis(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as i64,
        Err(_) => 0,
    }
}
