//! Per-action log files: writing, listing, reading, searching.
//!
//! # Example
//!
//! ```
//! use pyconsole::logs::{ActionLogger, LogCatalog};
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let logger = ActionLogger::new(temp.path());
//! logger.record("list_python_versions", "Listed all installed Python versions.", None).unwrap();
//!
//! let groups = LogCatalog::new(temp.path()).grouped().unwrap();
//! assert!(groups.contains_key("list_python_versions"));
//! ```

pub mod catalog;
pub mod logger;

pub use catalog::{action_name, render_groups, LogCatalog};
pub use logger::ActionLogger;
