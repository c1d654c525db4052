//! Error types for pyconsole operations.
//!
//! This module defines [`PyConsoleError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Environment errors (unsupported distribution, missing interpreter) abort
//!   the action that hit them
//! - Subprocess failures are usually *not* errors: package tools report
//!   through captured text, see [`crate::parsing`]
//! - Use `anyhow::Error` (via `PyConsoleError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyconsole operations.
#[derive(Debug, Error)]
pub enum PyConsoleError {
    /// OS release metadata did not name a supported distribution family.
    #[error("Unsupported Linux distribution (expected a Debian or RHEL family system)")]
    UnsupportedDistribution,

    /// No interpreter executable for the requested version.
    #[error("Python {version} not found. Please install it or choose a valid version.")]
    InterpreterNotFound { version: String },

    /// A version string that cannot name a package or binary.
    #[error("Invalid Python version '{version}'")]
    InvalidVersion { version: String },

    /// A library name pip could misread, e.g. one starting with `-`.
    #[error("Invalid library name '{name}'")]
    InvalidLibraryName { name: String },

    /// A program could not be started at all.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The package index could not answer a query.
    #[error("Package index query for '{library}' failed: {message}")]
    RegistryQueryFailed { library: String, message: String },

    /// Log file requested by name does not exist.
    #[error("Log file not found: {name}")]
    LogNotFound { name: String },

    /// Log file name that would escape the log directory.
    #[error("Invalid log file name: {name}")]
    InvalidLogName { name: String },

    /// Search pattern did not compile.
    #[error("Invalid search pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The operator's input stream ended.
    #[error("Input closed")]
    InputClosed,

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pyconsole operations.
pub type Result<T> = std::result::Result<T, PyConsoleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_distribution_mentions_families() {
        let msg = PyConsoleError::UnsupportedDistribution.to_string();
        assert!(msg.contains("Unsupported Linux distribution"));
        assert!(msg.contains("Debian"));
    }

    #[test]
    fn interpreter_not_found_displays_version() {
        let err = PyConsoleError::InterpreterNotFound {
            version: "3.12".into(),
        };
        assert!(err.to_string().contains("Python 3.12 not found"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = PyConsoleError::CommandFailed {
            command: "apt remove -y python3.9".into(),
            code: Some(100),
        };
        let msg = err.to_string();
        assert!(msg.contains("apt remove -y python3.9"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn registry_query_failed_displays_library_and_message() {
        let err = PyConsoleError::RegistryQueryFailed {
            library: "requests".into(),
            message: "exit status 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("requests"));
        assert!(msg.contains("exit status 1"));
    }

    #[test]
    fn invalid_pattern_displays_pattern() {
        let err = PyConsoleError::InvalidPattern {
            pattern: "([".into(),
            message: "unclosed group".into(),
        };
        assert!(err.to_string().contains("(["));
    }

    #[test]
    fn config_not_found_displays_path() {
        let err = PyConsoleError::ConfigNotFound {
            path: PathBuf::from("/foo/pyconsole.yml"),
        };
        assert!(err.to_string().contains("/foo/pyconsole.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PyConsoleError::ConfigParseError {
            path: PathBuf::from("/etc/pyconsole.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/pyconsole.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PyConsoleError = io_err.into();
        assert!(matches!(err, PyConsoleError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: PyConsoleError = anyhow::anyhow!("boom").into();
        assert_eq!(err.to_string(), "boom");
    }
}
