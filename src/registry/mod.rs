//! Library registry access for a single interpreter.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use pyconsole::registry::LibraryRegistryClient;
//! use pyconsole::shell::{CommandResult, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new().on(
//!     "/usr/bin/python3 -m pip freeze",
//!     CommandResult::from_stdout("requests==2.28.0\n"),
//! );
//! let client = LibraryRegistryClient::new(&runner);
//! let python = Path::new("/usr/bin/python3");
//!
//! assert!(client.is_exact_version_installed(python, "requests", "2.28.0"));
//! assert!(!client.is_exact_version_installed(python, "requests", "2.31.0"));
//! ```

pub mod client;

pub use client::{
    check_library_name, is_valid_library_name, IndexLookup, LibraryRegistryClient,
    LibraryVersionQueryResult,
};
