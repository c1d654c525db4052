//! Text heuristics over package-tool output.
//!
//! pip, apt and yum report most outcomes as free-form text. Every rule that
//! infers meaning from that text lives here, so the rules can be audited in
//! one place and replaced if the tools ever expose structured signals.
//!
//! The rules are deliberately conservative: anything ambiguous reads as
//! "not found" / "failed" rather than a guess.

use regex::Regex;
use std::sync::LazyLock;

/// Marker line printed by `pip index versions`.
pub const AVAILABLE_VERSIONS_MARKER: &str = "Available versions:";

/// Field printed by `pip show` for an installed distribution.
pub const PIP_SHOW_NAME_MARKER: &str = "Name:";

static AVAILABLE_VERSIONS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Available versions:(.*)").unwrap());

/// A comma-separated entry that starts with a digit.
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|,)\s*(\d[^,\s]*)").unwrap());

/// Markers pip prints when an index lookup did not resolve cleanly.
const PIP_FAILURE_MARKERS: &[&str] = &["ERROR", "WARNING"];

/// Phrases apt/yum print when the named package does not exist or the
/// transaction did nothing.
const SYSTEM_PACKAGE_FAILURE_MARKERS: &[&str] = &[
    "E: Unable to locate package",
    "E: Couldn't find any package",
    "is not installed, so not removed",
    "No match for argument",
    "No package",
    "Error:",
];

/// Whether `pip show` output describes an installed distribution.
pub fn pip_show_reports_installed(output: &str) -> bool {
    output
        .lines()
        .any(|line| line.trim_start().starts_with(PIP_SHOW_NAME_MARKER))
}

/// Whether `pip index versions` output signals the library was not found.
pub fn pip_index_reports_failure(output: &str) -> bool {
    PIP_FAILURE_MARKERS.iter().any(|m| output.contains(m))
}

/// Extract the version list from `pip index versions` output.
///
/// Returns `None` when no marker line is present. Tokens are the
/// comma-separated entries after the marker that start with a digit, in
/// index order, without duplicates.
pub fn parse_available_versions(output: &str) -> Option<Vec<String>> {
    let tail = AVAILABLE_VERSIONS_LINE.captures(output)?.get(1)?.as_str();

    let mut versions: Vec<String> = Vec::new();
    for token in VERSION_TOKEN.captures_iter(tail).filter_map(|c| c.get(1)) {
        let token = token.as_str();
        if !versions.iter().any(|v| v == token) {
            versions.push(token.to_string());
        }
    }
    Some(versions)
}

/// Whether `pip freeze` output pins `library` at exactly `version`.
///
/// Full-line equality only: `requests==2.3` does not match `requests==2.31.0`.
pub fn freeze_pins_exact(freeze_output: &str, library: &str, version: &str) -> bool {
    let wanted = format!("{}=={}", library, version);
    freeze_output.lines().any(|line| line.trim() == wanted)
}

/// Whether apt/yum output signals a failed or empty transaction.
pub fn system_package_reports_failure(output: &str) -> bool {
    SYSTEM_PACKAGE_FAILURE_MARKERS
        .iter()
        .any(|m| output.contains(m))
}
