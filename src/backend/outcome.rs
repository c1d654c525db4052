//! Results of package-manager operations.

use std::fmt;
use std::path::PathBuf;

/// Which backend operation produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InstallInterpreter,
    RemoveInterpreter,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallInterpreter => write!(f, "install"),
            Self::RemoveInterpreter => write!(f, "remove"),
        }
    }
}

/// Secondary step of a removal: deleting a leftover interpreter binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRemoval {
    /// Binary that was still present after the package removal.
    pub path: PathBuf,
    /// Whether `rm` succeeded.
    pub success: bool,
    /// Captured output of `rm`.
    pub output: String,
}

impl BinaryRemoval {
    /// One-paragraph description for display and logs.
    pub fn summary(&self) -> String {
        let head = if self.success {
            format!("Removed binary at {}", self.path.display())
        } else {
            format!("Failed to remove binary at {}", self.path.display())
        };
        if self.output.is_empty() {
            head
        } else {
            format!("{}\n{}", head, self.output)
        }
    }
}

/// Outcome of installing or removing an interpreter package.
///
/// Operations never fail with an error; everything the package manager said
/// is carried here for the caller to show and log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendOutcome {
    pub operation: Operation,
    /// Package name passed to the package manager.
    pub package: String,
    /// Exit statuses were zero and the output carried no failure phrase.
    pub success: bool,
    /// Combined output of every command that ran.
    pub output: String,
    /// Leftover binary cleanup, reported alongside the primary result.
    pub binary_removal: Option<BinaryRemoval>,
}

impl BackendOutcome {
    /// Full text for the action log: primary output, then the cleanup step.
    pub fn report(&self) -> String {
        match &self.binary_removal {
            Some(removal) if self.output.is_empty() => removal.summary(),
            Some(removal) => format!("{}\n{}", self.output, removal.summary()),
            None => self.output.clone(),
        }
    }

    /// Short status line for the operator.
    pub fn headline(&self) -> String {
        let verb = match self.operation {
            Operation::InstallInterpreter => "install",
            Operation::RemoveInterpreter => "uninstall",
        };
        if self.success {
            format!("Finished: {} {}", verb, self.package)
        } else {
            format!("Failed to {} {}", verb, self.package)
        }
    }
}
