//! Scripted command runner for testing.
//!
//! `ScriptedRunner` implements [`CommandRunner`] by looking up the command
//! line in a table of canned results, and records every invocation for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use pyconsole::shell::{CommandResult, CommandRunner, CommandSpec, ScriptedRunner};
//!
//! let runner = ScriptedRunner::new()
//!     .on("python3.11 --version", CommandResult::from_stdout("Python 3.11.4\n"));
//!
//! let result = runner.run(&CommandSpec::new("python3.11").arg("--version")).unwrap();
//! assert_eq!(result.combined_output(), "Python 3.11.4");
//! assert_eq!(runner.calls(), vec!["python3.11 --version".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use crate::error::{PyConsoleError, Result};

use super::{CommandResult, CommandRunner, CommandSpec};

/// Command runner that replays canned results.
///
/// Commands with no scripted result behave like a program that does not
/// exist: `run` returns [`PyConsoleError::CommandFailed`].
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: HashMap<String, CommandResult>,
    queues: RefCell<HashMap<String, VecDeque<CommandResult>>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `result` every time `command_line` runs.
    pub fn on(mut self, command_line: &str, result: CommandResult) -> Self {
        self.responses.insert(command_line.to_string(), result);
        self
    }

    /// Return `results` in order for successive runs of `command_line`.
    ///
    /// Once the queue is exhausted, falls back to [`ScriptedRunner::on`].
    pub fn queue(self, command_line: &str, results: Vec<CommandResult>) -> Self {
        self.queues
            .borrow_mut()
            .insert(command_line.to_string(), results.into_iter().collect());
        self
    }

    /// Every command line run so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Whether `command_line` was run at least once.
    pub fn was_called(&self, command_line: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == command_line)
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        let line = spec.display();
        self.calls.borrow_mut().push(line.clone());

        if let Some(queue) = self.queues.borrow_mut().get_mut(&line) {
            if let Some(result) = queue.pop_front() {
                return Ok(result);
            }
        }

        self.responses
            .get(&line)
            .cloned()
            .ok_or(PyConsoleError::CommandFailed {
                command: line,
                code: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_command_fails_to_spawn() {
        let runner = ScriptedRunner::new();
        let err = runner.run(&CommandSpec::new("apt").arg("update")).unwrap_err();
        assert!(matches!(err, PyConsoleError::CommandFailed { .. }));
        assert!(runner.was_called("apt update"));
    }

    #[test]
    fn queue_takes_precedence_then_falls_back() {
        let runner = ScriptedRunner::new()
            .on("pip freeze", CommandResult::from_stdout("b==2\n"))
            .queue("pip freeze", vec![CommandResult::from_stdout("a==1\n")]);
        let spec = CommandSpec::new("pip").arg("freeze");

        assert_eq!(runner.run(&spec).unwrap().stdout, "a==1\n");
        assert_eq!(runner.run(&spec).unwrap().stdout, "b==2\n");
        assert_eq!(runner.calls().len(), 2);
    }
}
