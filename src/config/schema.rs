//! Configuration schema definitions for pyconsole.
//!
//! Maps to the optional `pyconsole.yml` file. Every field has a default, so
//! an empty or missing file yields a working configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Directory holding per-action log files
    pub log_dir: PathBuf,

    /// OS identification file inspected to pick a package manager
    pub os_release_path: PathBuf,

    /// Interpreter binary base name scanned on PATH (`python3`, `python3.11`, ...)
    pub interpreter_base: String,

    /// Prefix joined with a version to name packages and binaries (`python` + `3.11`)
    pub package_prefix: String,

    /// Directory where the package manager installs interpreter binaries
    pub binary_dir: PathBuf,

    /// Run package-manager commands through `sudo`
    pub use_sudo: bool,

    /// Directory where generated requirements files are written
    pub requirements_dir: PathBuf,

    /// Seconds to wait for an interpreter to report its version during discovery
    pub discovery_timeout_secs: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("python_linux_versions"),
            os_release_path: PathBuf::from("/etc/os-release"),
            interpreter_base: "python3".to_string(),
            package_prefix: "python".to_string(),
            binary_dir: PathBuf::from("/usr/bin"),
            use_sudo: true,
            requirements_dir: PathBuf::from("."),
            discovery_timeout_secs: 10,
        }
    }
}

impl ConsoleConfig {
    /// Discovery timeout as a [`Duration`].
    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_secs(self.discovery_timeout_secs)
    }

    /// Executable name for an interpreter version, e.g. `python3.11`.
    pub fn executable_name(&self, version: &str) -> String {
        format!("{}{}", self.package_prefix, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_conventional_layout() {
        let config = ConsoleConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("python_linux_versions"));
        assert_eq!(config.os_release_path, PathBuf::from("/etc/os-release"));
        assert_eq!(config.interpreter_base, "python3");
        assert!(config.use_sudo);
    }

    #[test]
    fn executable_name_joins_prefix_and_version() {
        let config = ConsoleConfig::default();
        assert_eq!(config.executable_name("3.11"), "python3.11");
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config: ConsoleConfig =
            serde_yaml::from_str("log_dir: /var/log/pyconsole\nuse_sudo: false").unwrap();
        assert_eq!(config.log_dir, PathBuf::from("/var/log/pyconsole"));
        assert!(!config.use_sudo);
        assert_eq!(config.package_prefix, "python");
        assert_eq!(config.discovery_timeout(), Duration::from_secs(10));
    }
}
