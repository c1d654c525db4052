//! Command-line interface for pyconsole.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`menu`] - Closed menu enumerations
//! - [`console`] - Session state and menu dispatch
//! - [`commands`] - Menu action implementations

pub mod args;
pub mod commands;
pub mod console;
pub mod menu;

pub use args::Cli;
pub use console::{Console, Flow, PackageTarget};
pub use menu::{MainCommand, PackageCommand};
