//! Configuration file discovery and loading.

use crate::config::schema::ConsoleConfig;
use crate::error::{PyConsoleError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "pyconsole.yml";

/// Find `pyconsole.yml` in `dir`.
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConsoleConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PyConsoleError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            PyConsoleError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ConsoleConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConsoleConfig> {
    if content.trim().is_empty() {
        return Ok(ConsoleConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| PyConsoleError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// An explicit path must exist. Otherwise `pyconsole.yml` in `working_dir`
/// is used when present, and the defaults when it is not.
pub fn load_config(working_dir: &Path, config_override: Option<&Path>) -> Result<ConsoleConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }
    match find_config(working_dir) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => Ok(ConsoleConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_project_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn project_config_is_discovered() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "binary_dir: /opt/bin\n").unwrap();

        let config = load_config(temp.path(), None).unwrap();
        assert_eq!(config.binary_dir, PathBuf::from("/opt/bin"));
    }

    #[test]
    fn explicit_missing_path_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.yml");
        let err = load_config(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, PyConsoleError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "use_sudo: [not, a, bool]").unwrap();

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, PyConsoleError::ConfigParseError { .. }));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("   \n", Path::new("empty.yml")).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }
}
