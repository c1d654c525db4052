//! System package-manager backend for interpreter versions.
//!
//! # Example
//!
//! ```
//! use pyconsole::backend::PackageManagerBackend;
//! use pyconsole::detection::PackageManagerKind;
//! use pyconsole::shell::{CommandResult, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new()
//!     .on("yum install -y python3.11", CommandResult::from_stdout("Complete!"));
//! let backend = PackageManagerBackend::new(PackageManagerKind::YumBased, &runner)
//!     .unwrap()
//!     .with_sudo(false);
//!
//! let outcome = backend.install_interpreter("3.11");
//! assert!(outcome.success);
//! ```

pub mod outcome;
pub mod package_manager;

pub use outcome::{BackendOutcome, BinaryRemoval, Operation};
pub use package_manager::{is_valid_version, PackageManagerBackend};
