//! Interpreter install/remove through apt or yum.

use std::path::PathBuf;

use crate::detection::PackageManagerKind;
use crate::error::{PyConsoleError, Result};
use crate::parsing;
use crate::shell::{CommandRunner, CommandSpec};

use super::outcome::{BackendOutcome, BinaryRemoval, Operation};

/// Whether `version` can safely name a package (`3`, `3.11`, `3.11.4`).
pub fn is_valid_version(version: &str) -> bool {
    !version.is_empty()
        && version.split('.').all(|part| {
            !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
        })
}

/// Installs and removes interpreter packages with the host package manager.
pub struct PackageManagerBackend<'a> {
    kind: PackageManagerKind,
    runner: &'a dyn CommandRunner,
    use_sudo: bool,
    package_prefix: String,
    binary_dir: PathBuf,
}

impl<'a> PackageManagerBackend<'a> {
    /// Create a backend for a detected package manager.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDistribution` for [`PackageManagerKind::Unsupported`].
    pub fn new(kind: PackageManagerKind, runner: &'a dyn CommandRunner) -> Result<Self> {
        if !kind.is_supported() {
            return Err(PyConsoleError::UnsupportedDistribution);
        }
        Ok(Self {
            kind,
            runner,
            use_sudo: true,
            package_prefix: "python".to_string(),
            binary_dir: PathBuf::from("/usr/bin"),
        })
    }

    /// Run package commands through `sudo` (default) or directly.
    pub fn with_sudo(mut self, use_sudo: bool) -> Self {
        self.use_sudo = use_sudo;
        self
    }

    /// Prefix joined with versions to name packages.
    pub fn with_package_prefix(mut self, prefix: &str) -> Self {
        self.package_prefix = prefix.to_string();
        self
    }

    /// Directory checked for a leftover binary after removal.
    pub fn with_binary_dir(mut self, dir: PathBuf) -> Self {
        self.binary_dir = dir;
        self
    }

    /// Package manager this backend drives.
    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    /// Package name for a version, e.g. `python3.11`.
    pub fn package_name(&self, version: &str) -> String {
        format!("{}{}", self.package_prefix, version)
    }

    /// Conventional installed-binary path for a version.
    pub fn binary_path(&self, version: &str) -> PathBuf {
        self.binary_dir.join(self.package_name(version))
    }

    /// Commands run, in order, to install a version.
    pub fn install_commands(&self, version: &str) -> Vec<CommandSpec> {
        let package = self.package_name(version);
        let steps = match self.kind {
            PackageManagerKind::AptBased => vec![
                CommandSpec::new("apt").arg("update"),
                CommandSpec::new("apt").args(["install", "-y", package.as_str()]),
            ],
            PackageManagerKind::YumBased => {
                vec![CommandSpec::new("yum").args(["install", "-y", package.as_str()])]
            }
            PackageManagerKind::Unsupported => Vec::new(),
        };
        self.elevate(steps)
    }

    /// Commands run, in order, to remove a version.
    pub fn remove_commands(&self, version: &str) -> Vec<CommandSpec> {
        let package = self.package_name(version);
        let steps = match self.kind {
            PackageManagerKind::AptBased => {
                vec![CommandSpec::new("apt").args(["remove", "-y", package.as_str()])]
            }
            PackageManagerKind::YumBased => {
                vec![CommandSpec::new("yum").args(["remove", "-y", package.as_str()])]
            }
            PackageManagerKind::Unsupported => Vec::new(),
        };
        self.elevate(steps)
    }

    /// Install an interpreter version.
    pub fn install_interpreter(&self, version: &str) -> BackendOutcome {
        let package = self.package_name(version);
        if !is_valid_version(version) {
            return invalid_version(Operation::InstallInterpreter, package, version);
        }

        tracing::info!("Installing {} with {}", package, self.kind);
        let (success, output) = self.run_sequence(&self.install_commands(version));

        BackendOutcome {
            operation: Operation::InstallInterpreter,
            package,
            success,
            output,
            binary_removal: None,
        }
    }

    /// Remove an interpreter version, then delete its binary if it survived.
    pub fn remove_interpreter(&self, version: &str) -> BackendOutcome {
        let package = self.package_name(version);
        if !is_valid_version(version) {
            return invalid_version(Operation::RemoveInterpreter, package, version);
        }

        tracing::info!("Removing {} with {}", package, self.kind);
        let (success, output) = self.run_sequence(&self.remove_commands(version));
        let binary_removal = self.remove_leftover_binary(version);

        BackendOutcome {
            operation: Operation::RemoveInterpreter,
            package,
            success,
            output,
            binary_removal,
        }
    }

    fn remove_leftover_binary(&self, version: &str) -> Option<BinaryRemoval> {
        let path = self.binary_path(version);
        if !path.exists() {
            return None;
        }

        tracing::info!("Binary {} still present, removing", path.display());
        let spec = CommandSpec::new("rm")
            .args(["-f".to_string(), path.to_string_lossy().to_string()])
            .privileged(self.use_sudo);

        let (success, output) = match self.runner.run(&spec) {
            Ok(result) => (result.success, result.combined_output()),
            Err(e) => (false, e.to_string()),
        };
        Some(BinaryRemoval {
            path,
            success,
            output,
        })
    }

    /// Run steps in order, stopping at the first failure.
    fn run_sequence(&self, steps: &[CommandSpec]) -> (bool, String) {
        let mut outputs = Vec::new();
        let mut success = true;

        for step in steps {
            match self.runner.run(step) {
                Ok(result) => {
                    let text = result.combined_output();
                    if !text.is_empty() {
                        outputs.push(text);
                    }
                    if !result.success {
                        tracing::warn!(
                            "{} exited with {:?}",
                            step.display(),
                            result.exit_code
                        );
                        success = false;
                        break;
                    }
                }
                Err(e) => {
                    outputs.push(e.to_string());
                    success = false;
                    break;
                }
            }
        }

        let output = outputs.join("\n");
        let success = success && !parsing::system_package_reports_failure(&output);
        (success, output)
    }

    fn elevate(&self, steps: Vec<CommandSpec>) -> Vec<CommandSpec> {
        steps
            .into_iter()
            .map(|s| s.privileged(self.use_sudo))
            .collect()
    }
}

fn invalid_version(operation: Operation, package: String, version: &str) -> BackendOutcome {
    BackendOutcome {
        operation,
        package,
        success: false,
        output: PyConsoleError::InvalidVersion {
            version: version.to_string(),
        }
        .to_string(),
        binary_removal: None,
    }
}
