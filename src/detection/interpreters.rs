//! Installed interpreter discovery.
//!
//! Scans the executable search path for `python3` / `python3.N` binaries and
//! asks each one for its version. The scan is read-only, never cached, and
//! never fails as a whole: a candidate that cannot report a version is
//! simply left out.
//!
//! # Example
//!
//! ```no_run
//! use pyconsole::detection::InterpreterDiscovery;
//! use pyconsole::shell::SystemRunner;
//!
//! let runner = SystemRunner::new();
//! let discovery = InterpreterDiscovery::new(&runner, "python3");
//! for record in discovery.discover() {
//!     println!("{} -> {}", record.reported_version, record.executable_path.display());
//! }
//! ```

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use regex::Regex;

use crate::shell::{CommandRunner, CommandSpec};

/// One discovered interpreter binary.
///
/// Ordering is lexicographic by reported version string, then by the path's
/// raw text (so `bin-local/` sorts before `bin/`).
#[derive(Debug, Clone)]
pub struct InterpreterRecord {
    /// Text the binary printed for `--version`, e.g. `Python 3.11.4`.
    pub reported_version: String,
    /// Absolute path of the binary.
    pub executable_path: PathBuf,
}

impl InterpreterRecord {
    fn sort_key(&self) -> (&str, &OsStr) {
        (&self.reported_version, self.executable_path.as_os_str())
    }
}

impl PartialEq for InterpreterRecord {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for InterpreterRecord {}

impl PartialOrd for InterpreterRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InterpreterRecord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On non-Unix hosts, any regular file counts.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    path_entries
        .iter()
        .map(|dir| dir.join(tool))
        .find(|candidate| is_executable(candidate))
}

/// File-name pattern `^{base}(\.\d+)?$`, with `base` matched literally.
pub fn interpreter_name_pattern(base: &str) -> Option<Regex> {
    Regex::new(&format!(r"^{}(\.\d+)?$", regex::escape(base))).ok()
}

/// First record whose reported version names `Python {version}`.
pub fn find_by_version<'r>(
    records: &'r [InterpreterRecord],
    version: &str,
) -> Option<&'r InterpreterRecord> {
    let needle = format!("Python {}", version);
    records.iter().find(|r| r.reported_version.contains(&needle))
}

/// Scans search-path directories for interpreter binaries.
pub struct InterpreterDiscovery<'a> {
    runner: &'a dyn CommandRunner,
    base_name: String,
    name_pattern: Option<Regex>,
    search_path: Vec<PathBuf>,
    timeout: Option<Duration>,
}

impl<'a> InterpreterDiscovery<'a> {
    /// Discover binaries named `base_name[.N]` on the current PATH.
    pub fn new(runner: &'a dyn CommandRunner, base_name: &str) -> Self {
        Self {
            runner,
            base_name: base_name.to_string(),
            name_pattern: interpreter_name_pattern(base_name),
            search_path: parse_system_path(),
            timeout: None,
        }
    }

    /// Scan `dirs` instead of PATH.
    pub fn with_search_path(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_path = dirs;
        self
    }

    /// Give up on a candidate that takes longer than `timeout` to answer.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Directories this discovery scans.
    pub fn search_path(&self) -> &[PathBuf] {
        &self.search_path
    }

    /// Run a full scan.
    ///
    /// The result is sorted by (reported version, path) and free of
    /// duplicate pairs.
    pub fn discover(&self) -> Vec<InterpreterRecord> {
        let records: BTreeSet<InterpreterRecord> = self
            .candidates()
            .into_iter()
            .filter_map(|path| self.inspect(&path))
            .collect();

        tracing::debug!("Discovered {} interpreter(s)", records.len());
        records.into_iter().collect()
    }

    /// Executable files on the search path whose names match the base name.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let Some(pattern) = &self.name_pattern else {
            tracing::warn!("Cannot match interpreter names for '{}'", self.base_name);
            return Vec::new();
        };
        let mut found = Vec::new();

        for dir in &self.search_path {
            let entries = match fs::read_dir(dir) {
                Ok(entries) => entries,
                Err(_) => continue,
            };

            for entry in entries.flatten() {
                let name = entry.file_name();
                let Some(name) = name.to_str() else {
                    continue;
                };
                if !pattern.is_match(name) {
                    continue;
                }
                let path = entry.path();
                if is_executable(&path) {
                    found.push(std::path::absolute(&path).unwrap_or(path));
                }
            }
        }

        found
    }

    /// Ask one binary for its version. `None` if it cannot answer.
    pub fn inspect(&self, path: &Path) -> Option<InterpreterRecord> {
        let mut spec = CommandSpec::new(path.to_string_lossy()).arg("--version");
        if let Some(timeout) = self.timeout {
            spec = spec.with_timeout(timeout);
        }

        let result = match self.runner.run(&spec) {
            Ok(result) => result,
            Err(e) => {
                tracing::debug!("Skipping {}: {}", path.display(), e);
                return None;
            }
        };
        if !result.success {
            tracing::debug!(
                "Skipping {}: exit {:?}, timed out: {}",
                path.display(),
                result.exit_code,
                result.timed_out
            );
            return None;
        }

        let reported = result.combined_output().trim().to_string();
        if reported.is_empty() {
            return None;
        }

        Some(InterpreterRecord {
            reported_version: reported,
            executable_path: path.to_path_buf(),
        })
    }

    /// Locate the executable named `executable_name` (e.g. `python3.11`).
    pub fn resolve_executable(&self, executable_name: &str) -> Option<PathBuf> {
        resolve_tool_path(executable_name, &self.search_path)
    }
}
