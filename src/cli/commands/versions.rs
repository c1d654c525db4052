//! Interpreter version actions: listing, paths, install and removal.

use crate::backend::BackendOutcome;
use crate::detection::find_by_version;
use crate::error::Result;
use crate::ui::UserInterface;

use super::super::console::{ask, Console};

impl Console<'_> {
    /// List every discovered interpreter as `{version} -> {path}`.
    pub fn list_versions(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Installed Python Versions:");
        let records = self.discovery().discover();
        if records.is_empty() {
            ui.warning("No Python versions found.");
        }

        let lines: Vec<String> = records
            .iter()
            .map(|r| format!("{} -> {}", r.reported_version, r.executable_path.display()))
            .collect();
        for line in &lines {
            ui.success(line);
        }

        self.record(
            "list_python_versions",
            "Listed all installed Python versions.",
            &lines.join("\n"),
        );
        Ok(())
    }

    /// Install an interpreter version through the system package manager.
    pub fn install_version(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let backend = self.backend()?;
        self.list_versions(ui)?;
        let version = ask(ui, "install_version", "Enter Python version to install (e.g., 3.9)")?;

        let mut spinner = ui.start_spinner(&format!("Installing Python {}...", version));
        let outcome = backend.install_interpreter(&version);
        finish(spinner.as_mut(), &outcome);
        ui.show_output(&outcome.report());

        let message = if outcome.success {
            format!("Installed Python {}", version)
        } else {
            format!("Failed to install Python {}", version)
        };
        self.record("install_python_version", &message, &outcome.report());
        Ok(())
    }

    /// Remove an interpreter version and any leftover binary.
    pub fn uninstall_version(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let backend = self.backend()?;
        self.list_versions(ui)?;
        let version = ask(
            ui,
            "uninstall_version",
            "Enter Python version to uninstall (e.g., 3.9)",
        )?;

        let mut spinner = ui.start_spinner(&format!("Uninstalling Python {}...", version));
        let outcome = backend.remove_interpreter(&version);
        finish(spinner.as_mut(), &outcome);
        ui.show_output(&outcome.output);

        if let Some(removal) = &outcome.binary_removal {
            if removal.success {
                ui.success(&removal.summary());
            } else {
                ui.error(&removal.summary());
            }
        }

        let message = if outcome.success {
            format!("Uninstalled Python {}", version)
        } else {
            format!("Failed to uninstall Python {}", version)
        };
        self.record("uninstall_python_version", &message, &outcome.report());
        Ok(())
    }

    /// Show every discovered (version, path) pair.
    pub fn show_all_paths(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("All Installed Python Binaries and Paths:");
        let records = self.discovery().discover();
        if records.is_empty() {
            ui.warning("No Python versions found.");
        }

        let lines: Vec<String> = records
            .iter()
            .map(|r| format!("{}: {}", r.reported_version, r.executable_path.display()))
            .collect();
        for line in &lines {
            ui.success(line);
        }

        self.record("show_all_paths", "Displayed all Python binary paths.", &lines.join("\n"));
        Ok(())
    }

    /// Show the first interpreter reporting the typed version.
    pub fn show_path_for_version(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let version = ask(
            ui,
            "lookup_version",
            "Enter Python version to lookup path (e.g., 3.9)",
        )?;
        let records = self.discovery().discover();

        let output = match find_by_version(&records, &version) {
            Some(record) => {
                let line = format!(
                    "Path for Python {}: {}",
                    version,
                    record.executable_path.display()
                );
                ui.success(&line);
                line
            }
            None => {
                let line = format!("No path found for Python {}", version);
                ui.error(&line);
                line
            }
        };

        self.record(
            "show_path_for_version",
            &format!("Checked path for version {}", version),
            &output,
        );
        Ok(())
    }
}

fn finish(spinner: &mut dyn crate::ui::SpinnerHandle, outcome: &BackendOutcome) {
    if outcome.success {
        spinner.finish_success(&outcome.headline());
    } else {
        spinner.finish_error(&outcome.headline());
    }
}
