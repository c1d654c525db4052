//! Browsing and searching recorded action logs.

use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{PyConsoleError, Result};

/// Action name for a log file stem.
///
/// Strips a trailing `YYYYMMDD_HH_MM_SS` stamp. Stems without one are
/// returned whole.
pub fn action_name(stem: &str) -> &str {
    let parts: Vec<&str> = stem.rsplitn(5, '_').collect();
    // rsplitn yields [SS, MM, HH, YYYYMMDD, action]
    if parts.len() == 5 && is_stamp(&parts[..4]) && !parts[4].is_empty() {
        parts[4]
    } else {
        stem
    }
}

fn is_stamp(reversed: &[&str]) -> bool {
    let widths = [2, 2, 2, 8];
    reversed
        .iter()
        .zip(widths)
        .all(|(part, width)| part.len() == width && part.chars().all(|c| c.is_ascii_digit()))
}

/// Read-only view over the log directory.
#[derive(Debug, Clone)]
pub struct LogCatalog {
    dir: PathBuf,
}

impl LogCatalog {
    /// Create a catalog over `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `*.log` files grouped by action name, each group sorted by file name.
    ///
    /// A missing directory is an empty catalog.
    pub fn grouped(&self) -> Result<BTreeMap<String, Vec<PathBuf>>> {
        let mut groups: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(groups),
            Err(e) => return Err(e.into()),
        };

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("log") || !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            groups
                .entry(action_name(stem).to_string())
                .or_default()
                .push(path.clone());
        }

        for files in groups.values_mut() {
            files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        }
        Ok(groups)
    }

    /// Full path of a log file given its bare file name.
    ///
    /// # Errors
    ///
    /// `InvalidLogName` for anything other than a single plain file name;
    /// `LogNotFound` when no such file exists.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        let valid = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !valid {
            return Err(PyConsoleError::InvalidLogName {
                name: name.to_string(),
            });
        }

        let path = self.dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(PyConsoleError::LogNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Contents of a log file.
    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        Ok(fs::read_to_string(path)?)
    }

    /// Lines of a log file matching `pattern`, trailing whitespace trimmed.
    pub fn search(&self, name: &str, pattern: &str) -> Result<Vec<String>> {
        let path = self.resolve(name)?;
        let re = Regex::new(pattern).map_err(|e| PyConsoleError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .filter(|line| re.is_match(line))
            .map(|line| line.trim_end().to_string())
            .collect())
    }
}

/// Plain-text rendering of grouped logs: `[action]` then `- path` lines.
pub fn render_groups(groups: &BTreeMap<String, Vec<PathBuf>>) -> String {
    let mut out = String::new();
    for (action, files) in groups {
        out.push_str(&format!("[{}]\n", action));
        for file in files {
            out.push_str(&format!("- {}\n", file.display()));
        }
    }
    out.trim_end().to_string()
}
