//! Process execution.
//!
//! Every external program the console talks to (package managers, pip,
//! interpreters) goes through a [`CommandRunner`]. Programs are invoked
//! directly with an argument vector, never through a shell, and the result
//! comes back as structured data rather than a merged text blob.

use crate::error::{PyConsoleError, Result};
use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// A program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name or path.
    pub program: String,

    /// Arguments passed verbatim.
    pub args: Vec<String>,

    /// Kill the process if it runs longer than this.
    pub timeout: Option<Duration>,
}

impl CommandSpec {
    /// Create a spec for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            timeout: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set a timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Prefix the invocation with `sudo` when `elevate` is set.
    pub fn privileged(self, elevate: bool) -> Self {
        if !elevate {
            return self;
        }
        let mut args = Vec::with_capacity(self.args.len() + 1);
        args.push(self.program);
        args.extend(self.args);
        Self {
            program: "sudo".to_string(),
            args,
            timeout: self.timeout,
        }
    }

    /// Human-readable command line, used for logs and scripted lookups.
    pub fn display(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal or timed out).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,

    /// Whether the command was killed for exceeding its timeout.
    pub timed_out: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            stdout,
            stderr,
            duration,
            success: true,
            timed_out: false,
        }
    }

    /// Create a failure result.
    pub fn failure(
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
        duration: Duration,
    ) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
            duration,
            success: false,
            timed_out: false,
        }
    }

    /// Successful result carrying only stdout.
    pub fn from_stdout(stdout: &str) -> Self {
        Self::success(stdout.to_string(), String::new(), Duration::ZERO)
    }

    /// Result with an explicit exit code.
    pub fn exited(code: i32, stdout: &str, stderr: &str) -> Self {
        if code == 0 {
            Self::success(stdout.to_string(), stderr.to_string(), Duration::ZERO)
        } else {
            Self::failure(
                Some(code),
                stdout.to_string(),
                stderr.to_string(),
                Duration::ZERO,
            )
        }
    }

    /// Stdout followed by stderr, trailing whitespace trimmed.
    pub fn combined_output(&self) -> String {
        let out = self.stdout.trim_end();
        let err = self.stderr.trim_end();
        match (out.is_empty(), err.is_empty()) {
            (true, _) => err.to_string(),
            (false, true) => out.to_string(),
            (false, false) => format!("{}\n{}", out, err),
        }
    }
}

/// Runs commands. Implemented by [`SystemRunner`] and, for tests,
/// [`super::ScriptedRunner`].
pub trait CommandRunner {
    /// Run a command to completion.
    ///
    /// Returns `Err` only when the program could not be started; a non-zero
    /// exit is reported through [`CommandResult::success`].
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult> {
        let start = Instant::now();
        tracing::debug!(command = %spec.display(), "Running command");

        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                tracing::debug!(command = %spec.display(), error = %e, "Failed to spawn");
                PyConsoleError::CommandFailed {
                    command: spec.display(),
                    code: None,
                }
            })?;

        // Drain both pipes on their own threads so a chatty child cannot
        // block on a full pipe while we wait on it.
        let stdout_handle = spawn_reader(child.stdout.take());
        let stderr_handle = spawn_reader(child.stderr.take());

        let (status, timed_out) = wait_with_timeout(&mut child, spec.timeout).map_err(|_| {
            PyConsoleError::CommandFailed {
                command: spec.display(),
                code: None,
            }
        })?;

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();
        let duration = start.elapsed();

        if timed_out {
            tracing::warn!(command = %spec.display(), "Command timed out");
            let mut result = CommandResult::failure(None, stdout, stderr, duration);
            result.timed_out = true;
            return Ok(result);
        }

        match status {
            Some(status) if status.success() => {
                Ok(CommandResult::success(stdout, stderr, duration))
            }
            Some(status) => Ok(CommandResult::failure(
                status.code(),
                stdout,
                stderr,
                duration,
            )),
            None => Ok(CommandResult::failure(None, stdout, stderr, duration)),
        }
    }
}

fn spawn_reader<R>(pipe: Option<R>) -> thread::JoinHandle<String>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut buf);
        }
        String::from_utf8_lossy(&buf).to_string()
    })
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Option<Duration>,
) -> std::io::Result<(Option<std::process::ExitStatus>, bool)> {
    let Some(timeout) = timeout else {
        return child.wait().map(|s| (Some(s), false));
    };

    let deadline = Instant::now() + timeout;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((Some(status), false));
        }
        if Instant::now() >= deadline {
            let _ = child.kill();
            let _ = child.wait();
            return Ok((None, true));
        }
        thread::sleep(Duration::from_millis(20));
    }
}
