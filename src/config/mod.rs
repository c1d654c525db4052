//! Configuration loading for pyconsole.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use pyconsole::config::{load_config, ConsoleConfig};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("pyconsole.yml"), "use_sudo: false").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert!(!config.use_sudo);
//! assert_eq!(config.log_dir, ConsoleConfig::default().log_dir);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::ConsoleConfig;
