//! pyconsole - Python interpreter and package management console for Linux.
//!
//! Discovers installed interpreters, installs and removes interpreter
//! versions through the system package manager, manages each
//! interpreter's libraries through its own pip, and records every action
//! to a per-action log file.
//!
//! # Modules
//!
//! - [`backend`] - apt/yum install and removal of interpreter versions
//! - [`cli`] - Argument parsing, menus and the console session
//! - [`config`] - Configuration loading
//! - [`detection`] - Distribution family and interpreter discovery
//! - [`error`] - Error types and result aliases
//! - [`logs`] - Action log writing, listing and search
//! - [`parsing`] - Text heuristics over package-tool output
//! - [`registry`] - Per-interpreter library queries
//! - [`shell`] - Subprocess execution
//! - [`ui`] - Prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pyconsole::detection::{DistroDetector, PackageManagerKind};
//!
//! let kind = DistroDetector::classify("ID=ubuntu\nID_LIKE=debian\n");
//! assert_eq!(kind, PackageManagerKind::AptBased);
//! ```

pub mod backend;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod logs;
pub mod parsing;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{PyConsoleError, Result};
