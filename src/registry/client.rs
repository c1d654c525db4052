//! Per-interpreter library queries through pip.
//!
//! Every query runs the interpreter's own pip (`<interpreter> -m pip ...`),
//! so results always describe that interpreter's site-packages. Text output
//! is interpreted by [`crate::parsing`] only.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PyConsoleError, Result};
use crate::parsing;
use crate::shell::{CommandResult, CommandRunner, CommandSpec};

static LIBRARY_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9._-]*[A-Za-z0-9])?$").unwrap());

/// Whether `name` is a plain distribution name (letters, digits, `.`, `_`,
/// `-`, starting and ending alphanumeric).
pub fn is_valid_library_name(name: &str) -> bool {
    LIBRARY_NAME.is_match(name)
}

/// Reject names pip could read as an option or that are not a single name.
pub fn check_library_name(name: &str) -> Result<()> {
    if is_valid_library_name(name) {
        Ok(())
    } else {
        Err(PyConsoleError::InvalidLibraryName {
            name: name.to_string(),
        })
    }
}

/// Existence and install state of one `library==version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryVersionQueryResult {
    pub library_name: String,
    pub requested_version: String,
    /// The index lists this exact version.
    pub exists_on_index: bool,
    /// `pip freeze` pins exactly this version.
    pub is_installed: bool,
}

/// Raw `pip index versions` answer used by the plain install flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLookup {
    /// Combined output, shown to the operator.
    pub output: String,
    /// The lookup failed or carried an error/warning marker.
    pub not_found: bool,
}

/// Queries and mutates an interpreter's installed libraries.
pub struct LibraryRegistryClient<'a> {
    runner: &'a dyn CommandRunner,
}

impl<'a> LibraryRegistryClient<'a> {
    /// Create a client that runs pip through `runner`.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self { runner }
    }

    fn pip<I, S>(interpreter: &Path, args: I) -> CommandSpec
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec::new(interpreter.to_string_lossy())
            .args(["-m", "pip"])
            .args(args)
    }

    /// Whether `library` is installed at any version.
    pub fn is_installed(&self, interpreter: &Path, library: &str) -> bool {
        self.show(interpreter, library).is_some()
    }

    /// `pip show` metadata for `library`, if installed.
    pub fn show(&self, interpreter: &Path, library: &str) -> Option<String> {
        if !is_valid_library_name(library) {
            tracing::debug!("Not querying invalid library name {:?}", library);
            return None;
        }
        let spec = Self::pip(interpreter, ["show", library]);
        match self.runner.run(&spec) {
            Ok(result) if result.success && parsing::pip_show_reports_installed(&result.stdout) => {
                Some(result.stdout.trim().to_string())
            }
            Ok(_) => None,
            Err(e) => {
                tracing::debug!("pip show {} failed: {}", library, e);
                None
            }
        }
    }

    /// Versions of `library` the index offers, newest first as pip lists them.
    ///
    /// # Errors
    ///
    /// Returns `RegistryQueryFailed` when pip exits non-zero or prints no
    /// `Available versions:` line. An empty list is a valid success.
    pub fn available_versions(&self, interpreter: &Path, library: &str) -> Result<Vec<String>> {
        check_library_name(library)?;
        let spec = Self::pip(interpreter, ["index", "versions", library]);
        let result = self.runner.run(&spec)?;

        if !result.success {
            return Err(PyConsoleError::RegistryQueryFailed {
                library: library.to_string(),
                message: failure_message(&result),
            });
        }

        parsing::parse_available_versions(&result.stdout).ok_or_else(|| {
            PyConsoleError::RegistryQueryFailed {
                library: library.to_string(),
                message: format!("no '{}' line in pip output", parsing::AVAILABLE_VERSIONS_MARKER),
            }
        })
    }

    /// Whether the index offers exactly `version` of `library`.
    pub fn version_exists(&self, interpreter: &Path, library: &str, version: &str) -> Result<bool> {
        Ok(self
            .available_versions(interpreter, library)?
            .iter()
            .any(|v| v == version))
    }

    /// Whether `pip freeze` pins `library==version` exactly.
    ///
    /// A failed freeze reads as "not installed".
    pub fn is_exact_version_installed(&self, interpreter: &Path, library: &str, version: &str) -> bool {
        match self.freeze(interpreter) {
            Ok(result) if result.success => {
                parsing::freeze_pins_exact(&result.stdout, library, version)
            }
            _ => false,
        }
    }

    /// Index existence and install state of `library==version` together.
    ///
    /// An index query failure reads as "does not exist".
    pub fn query(&self, interpreter: &Path, library: &str, version: &str) -> LibraryVersionQueryResult {
        LibraryVersionQueryResult {
            library_name: library.to_string(),
            requested_version: version.to_string(),
            exists_on_index: self
                .version_exists(interpreter, library, version)
                .unwrap_or(false),
            is_installed: self.is_exact_version_installed(interpreter, library, version),
        }
    }

    /// Raw index lookup with the error/warning heuristic applied.
    pub fn index_lookup(&self, interpreter: &Path, library: &str) -> IndexLookup {
        if let Err(e) = check_library_name(library) {
            return IndexLookup {
                output: e.to_string(),
                not_found: true,
            };
        }
        let spec = Self::pip(interpreter, ["index", "versions", library]);
        match self.runner.run(&spec) {
            Ok(result) => {
                let output = result.combined_output();
                IndexLookup {
                    not_found: !result.success || parsing::pip_index_reports_failure(&output),
                    output,
                }
            }
            Err(e) => IndexLookup {
                output: e.to_string(),
                not_found: true,
            },
        }
    }

    /// `pip list`.
    pub fn list_packages(&self, interpreter: &Path) -> Result<CommandResult> {
        self.runner.run(&Self::pip(interpreter, ["list"]))
    }

    /// `help('modules')` output.
    pub fn list_modules(&self, interpreter: &Path) -> Result<CommandResult> {
        let spec = CommandSpec::new(interpreter.to_string_lossy()).args(["-c", "help('modules')"]);
        self.runner.run(&spec)
    }

    /// `pip freeze`.
    pub fn freeze(&self, interpreter: &Path) -> Result<CommandResult> {
        self.runner.run(&Self::pip(interpreter, ["freeze"]))
    }

    /// Write `pip freeze` output to `destination` and return it.
    ///
    /// # Errors
    ///
    /// Returns `CommandFailed` if freeze exits non-zero; nothing is written.
    pub fn write_requirements(&self, interpreter: &Path, destination: &Path) -> Result<String> {
        let spec = Self::pip(interpreter, ["freeze"]);
        let result = self.runner.run(&spec)?;
        if !result.success {
            return Err(PyConsoleError::CommandFailed {
                command: spec.display(),
                code: result.exit_code,
            });
        }
        fs::write(destination, &result.stdout)?;
        Ok(result.stdout)
    }

    /// `pip install <requirement>`; `requirement` may pin (`name==1.2`).
    pub fn install(&self, interpreter: &Path, requirement: &str) -> Result<CommandResult> {
        let name = requirement.split_once("==").map_or(requirement, |(name, _)| name);
        check_library_name(name)?;
        tracing::info!("pip install {} for {}", requirement, interpreter.display());
        self.runner
            .run(&Self::pip(interpreter, ["install", requirement]))
    }

    /// `pip uninstall -y <library>`.
    pub fn uninstall(&self, interpreter: &Path, library: &str) -> Result<CommandResult> {
        check_library_name(library)?;
        tracing::info!("pip uninstall {} for {}", library, interpreter.display());
        self.runner
            .run(&Self::pip(interpreter, ["uninstall", "-y", library]))
    }
}

fn failure_message(result: &CommandResult) -> String {
    let output = result.combined_output();
    match (result.exit_code, output.is_empty()) {
        (Some(code), true) => format!("pip exited with status {}", code),
        (Some(code), false) => format!("pip exited with status {}: {}", code, output),
        (None, _) => "pip was terminated".to_string(),
    }
}
