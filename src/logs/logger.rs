//! Append-only action log writer.

use anyhow::Context;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// File stamp suffix: `YYYYMMDD_HH_MM_SS`.
pub const FILE_STAMP_FORMAT: &str = "%Y%m%d_%H_%M_%S";

/// Entry header stamp: `YYYY-MM-DD HH:MM:SS`.
pub const ENTRY_STAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes one log file per action invocation.
///
/// Files are named `{action}_{YYYYMMDD}_{HH}_{MM}_{SS}.log` and opened in
/// append mode, so two records for the same action within one second share
/// a file and both entries are kept.
#[derive(Debug, Clone)]
pub struct ActionLogger {
    dir: PathBuf,
}

impl ActionLogger {
    /// Create a logger writing under `dir`. The directory is created lazily.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory log files are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name for `action` at `at`.
    pub fn file_name(action: &str, at: NaiveDateTime) -> String {
        format!("{}_{}.log", action, at.format(FILE_STAMP_FORMAT))
    }

    /// Record an entry stamped with the current local time.
    pub fn record(&self, action: &str, message: &str, output: Option<&str>) -> Result<PathBuf> {
        self.record_at(action, message, output, Local::now().naive_local())
    }

    /// Record an entry stamped with `at`.
    pub fn record_at(
        &self,
        action: &str,
        message: &str,
        output: Option<&str>,
        at: NaiveDateTime,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating log directory {}", self.dir.display()))?;

        let path = self.dir.join(Self::file_name(action, at));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("opening log file {}", path.display()))?;

        writeln!(file, "[{}] {}", at.format(ENTRY_STAMP_FORMAT), message)?;
        if let Some(output) = output.filter(|o| !o.is_empty()) {
            write!(file, "{}\n\n", output)?;
        }

        tracing::debug!("Recorded '{}' to {}", action, path.display());
        Ok(path)
    }

    /// Record, logging a warning instead of failing.
    ///
    /// Used by console actions: a log that cannot be written must not keep
    /// the action's own result from the operator.
    pub fn record_best_effort(&self, action: &str, message: &str, output: Option<&str>) -> Option<PathBuf> {
        match self.record(action, message, output) {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Could not write action log for '{}': {}", action, e);
                None
            }
        }
    }
}
