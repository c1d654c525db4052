//! Process execution behind a mockable runner.

pub mod command;
pub mod scripted;

pub use command::{CommandResult, CommandRunner, CommandSpec, SystemRunner};
pub use scripted::ScriptedRunner;
