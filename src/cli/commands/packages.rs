//! Per-interpreter library actions.

use crate::error::{PyConsoleError, Result};
use crate::shell::CommandResult;
use crate::ui::UserInterface;

use super::super::console::{ask_library, ask_required, confirm, Console, PackageTarget};

impl Console<'_> {
    /// `pip list` for the target interpreter.
    pub fn list_packages(&self, target: &PackageTarget, ui: &mut dyn UserInterface) -> Result<()> {
        let result = self.registry().list_packages(&target.interpreter)?;
        show_result(ui, &result, "pip list");
        self.record(
            "list_installed_packages",
            &format!("Listed pip packages for Python {}", target.version),
            &result.combined_output(),
        );
        Ok(())
    }

    /// Importable modules of the target interpreter.
    pub fn list_modules(&self, target: &PackageTarget, ui: &mut dyn UserInterface) -> Result<()> {
        let registry = self.registry();
        let result = self.with_spinner(ui, "Collecting installed modules...", || {
            registry.list_modules(&target.interpreter)
        })?;
        show_result(ui, &result, "help('modules')");
        self.record(
            "list_installed_modules",
            &format!("Listed modules for Python {}", target.version),
            &result.combined_output(),
        );
        Ok(())
    }

    /// Look for an installed module in every discovered interpreter.
    pub fn search_installed_module(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(module) = ask_library(ui, "module", "Enter module name to search (installed only)")?
        else {
            return Ok(());
        };

        let mut interpreters: Vec<_> = self
            .discovery()
            .discover()
            .into_iter()
            .map(|r| r.executable_path)
            .collect();
        interpreters.dedup();

        if interpreters.is_empty() {
            ui.error("No Python 3.x versions found.");
            self.record(
                "search_installed_module",
                &format!("Module '{}' not searched: no interpreters found.", module),
                "",
            );
            return Ok(());
        }

        ui.warning(&format!(
            "Checking if module '{}' is installed in the following Python versions:",
            module
        ));
        let registry = self.registry();
        let mut found = Vec::new();
        for interpreter in &interpreters {
            let label = interpreter
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| interpreter.display().to_string());
            match registry.show(interpreter, &module) {
                Some(info) => {
                    ui.success(&format!("Module '{}' is INSTALLED for {}:", module, label));
                    ui.show_output(&info);
                    found.push(label);
                }
                None => ui.error(&format!("Module '{}' is NOT installed for {}.", module, label)),
            }
        }

        let message = if found.is_empty() {
            format!("Module '{}' not installed in any Python version.", module)
        } else {
            format!("Module '{}' installed in: {}", module, found.join(", "))
        };
        self.record("search_installed_module", &message, "");
        Ok(())
    }

    /// Write `requirements_python{version}.txt` from `pip freeze`.
    pub fn generate_requirements(
        &self,
        target: &PackageTarget,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let destination = self
            .config
            .requirements_dir
            .join(format!("requirements_python{}.txt", target.version));
        let content = self
            .registry()
            .write_requirements(&target.interpreter, &destination)?;

        ui.success(&format!(
            "requirements.txt generated at: {}",
            destination.display()
        ));
        ui.show_output(content.trim_end());
        self.record(
            "generate_requirements",
            &format!("Generated requirements.txt for Python {}", target.version),
            &content,
        );
        Ok(())
    }

    /// Report whether a library is installed, or else whether the index has it.
    pub fn search_library(&self, target: &PackageTarget, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(module) = ask_library(ui, "module", "Enter module name to search")? else {
            return Ok(());
        };
        let registry = self.registry();
        let version = &target.version;

        if registry.is_installed(&target.interpreter, &module) {
            ui.success(&format!(
                "Module '{}' is already installed for Python {}.",
                module, version
            ));
            self.record(
                "search_module",
                &format!("Module '{}' FOUND (installed) for Python {}", module, version),
                "",
            );
            return Ok(());
        }

        ui.warning(&format!(
            "Module '{}' is not installed. Checking availability on PyPI...",
            module
        ));
        let message = match registry.available_versions(&target.interpreter, &module) {
            Ok(versions) => {
                ui.success(&format!("Module '{}' is available on PyPI.", module));
                ui.show_output(&format!("Available versions: {}", versions.join(", ")));
                format!("Module '{}' AVAILABLE (not installed) for Python {}", module, version)
            }
            Err(PyConsoleError::RegistryQueryFailed { message, .. }) => {
                tracing::debug!("Index lookup for {} failed: {}", module, message);
                ui.error(&format!(
                    "Module '{}' not found on PyPI for Python {}.",
                    module, version
                ));
                format!("Module '{}' NOT found (PyPI) for Python {}", module, version)
            }
            Err(e) => {
                ui.error(&format!("Error checking module availability: {}", e));
                format!("Error checking module '{}' for Python {}", module, version)
            }
        };
        self.record("search_module", &message, "");
        Ok(())
    }

    /// Install the latest release of a library after an index check.
    pub fn install_library(&self, target: &PackageTarget, ui: &mut dyn UserInterface) -> Result<()> {
        let Some(module) = ask_library(ui, "module", "Enter module name to install")? else {
            return Ok(());
        };
        let version = &target.version;
        let registry = self.registry();

        ui.message(&format!(
            "Checking availability of module '{}' for Python {}...",
            module, version
        ));
        let lookup = registry.index_lookup(&target.interpreter, &module);
        if lookup.not_found {
            ui.error(&format!(
                "Module '{}' not found in pip index or not available.",
                module
            ));
            self.record(
                "install_module",
                &format!("Failed to locate module {} for Python {}", module, version),
                &lookup.output,
            );
            return Ok(());
        }
        ui.show_output(&lookup.output);

        if !confirm(
            ui,
            "confirm_install",
            &format!("Install '{}' for Python {}?", module, version),
        )? {
            ui.message("Installation cancelled.");
            self.record(
                "install_module",
                &format!("Cancelled install of module {} in Python {}", module, version),
                "",
            );
            return Ok(());
        }

        let result = self.with_spinner(ui, &format!("Installing {}...", module), || {
            registry.install(&target.interpreter, &module)
        })?;
        ui.show_output(&result.combined_output());
        let message = if result.success {
            format!("Installed module {} in Python {}", module, version)
        } else {
            format!("Failed to install module {} in Python {}", module, version)
        };
        self.record("install_module", &message, &result.combined_output());
        Ok(())
    }

    /// Uninstall a library after confirming it is installed.
    pub fn uninstall_library(
        &self,
        target: &PackageTarget,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        let Some(module) = ask_library(ui, "module", "Enter module name to uninstall")? else {
            return Ok(());
        };
        let version = &target.version;
        let registry = self.registry();

        let Some(info) = registry.show(&target.interpreter, &module) else {
            ui.error(&format!(
                "Module '{}' is NOT installed in Python {}",
                module, version
            ));
            self.record(
                "uninstall_module",
                &format!(
                    "Attempted to uninstall non-existent module {} in Python {}",
                    module, version
                ),
                "",
            );
            return Ok(());
        };
        ui.success(&format!("Module '{}' is installed.", module));
        ui.show_output(&info);

        if !confirm(
            ui,
            "confirm_uninstall",
            &format!("Uninstall '{}' from Python {}?", module, version),
        )? {
            ui.message("Uninstallation cancelled.");
            self.record(
                "uninstall_module",
                &format!("Cancelled uninstall of module {} from Python {}", module, version),
                "",
            );
            return Ok(());
        }

        let result = self.with_spinner(ui, &format!("Uninstalling {}...", module), || {
            registry.uninstall(&target.interpreter, &module)
        })?;
        ui.show_output(&result.combined_output());
        let message = if result.success {
            format!("Uninstalled module {} from Python {}", module, version)
        } else {
            format!("Failed to uninstall module {} from Python {}", module, version)
        };
        self.record("uninstall_module", &message, &result.combined_output());
        Ok(())
    }

    /// Install `library==version` after checking the index lists that version.
    pub fn install_specific_version(
        &self,
        target: &PackageTarget,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        ui.show_header("INSTALL MODE");
        let Some(library) = ask_library(ui, "library", "Enter the name of the library to install")?
        else {
            return Ok(());
        };
        let Some(wanted) = ask_required(
            ui,
            "library_version",
            &format!("Enter the version of '{}' to install", library),
        )?
        else {
            return Ok(());
        };
        let pin = format!("{}=={}", library, wanted);
        let python = &target.version;
        let registry = self.registry();

        ui.message(&format!("Checking if {} exists on PyPI...", pin));
        match registry.version_exists(&target.interpreter, &library, &wanted) {
            Ok(true) => ui.success(&format!("{} is available on PyPI.", pin)),
            Ok(false) => {
                ui.error(&format!("{} is not available on PyPI.", pin));
                self.record(
                    "install_library",
                    &format!("{} not available on PyPI for Python {}", pin, python),
                    "",
                );
                return Ok(());
            }
            Err(e) => {
                ui.error(&format!("PyPI check failed: {}", e));
                self.record(
                    "install_library",
                    &format!("PyPI check failed for {} for Python {}", pin, python),
                    &e.to_string(),
                );
                return Ok(());
            }
        }

        if !confirm(
            ui,
            "confirm_install",
            &format!("Do you want to install {} for Python {}?", pin, python),
        )? {
            ui.message("Installation cancelled.");
            self.record(
                "install_library",
                &format!("Installation cancelled: {} for Python {}", pin, python),
                "",
            );
            return Ok(());
        }

        let result = self.with_spinner(ui, &format!("Installing {}...", pin), || {
            registry.install(&target.interpreter, &pin)
        })?;
        if result.success {
            ui.success(&format!(
                "{} successfully installed for Python {}.",
                pin, python
            ));
            self.record(
                "install_library",
                &format!("Successfully installed {} for Python {}", pin, python),
                &result.combined_output(),
            );
        } else {
            ui.error(&format!("Installation failed: {}", pin));
            ui.show_output(&result.combined_output());
            self.record(
                "install_library",
                &format!("Installation failed: {} for Python {}", pin, python),
                &result.combined_output(),
            );
        }
        Ok(())
    }

    /// Uninstall a library only if exactly `library==version` is installed.
    pub fn uninstall_specific_version(
        &self,
        target: &PackageTarget,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        ui.show_header("UNINSTALL MODE");
        let Some(library) =
            ask_library(ui, "library", "Enter the name of the library to uninstall")?
        else {
            return Ok(());
        };
        let Some(wanted) = ask_required(
            ui,
            "library_version",
            &format!("Enter the version of '{}' to uninstall", library),
        )?
        else {
            return Ok(());
        };
        let pin = format!("{}=={}", library, wanted);
        let python = &target.version;
        let registry = self.registry();

        ui.message(&format!(
            "Checking if {} is installed for Python {}...",
            pin, python
        ));
        if !registry.is_exact_version_installed(&target.interpreter, &library, &wanted) {
            ui.error(&format!("{} is not installed for Python {}.", pin, python));
            self.record(
                "uninstall_library",
                &format!("{} not installed for Python {}", pin, python),
                "",
            );
            return Ok(());
        }
        ui.success(&format!("{} is currently installed.", pin));

        if !confirm(
            ui,
            "confirm_uninstall",
            &format!("Do you want to uninstall {} for Python {}?", pin, python),
        )? {
            ui.message("Uninstallation cancelled.");
            self.record(
                "uninstall_library",
                &format!("Uninstallation cancelled: {} for Python {}", pin, python),
                "",
            );
            return Ok(());
        }

        let result = self.with_spinner(ui, &format!("Uninstalling {}...", pin), || {
            registry.uninstall(&target.interpreter, &library)
        })?;
        if result.success {
            ui.success(&format!(
                "{} successfully uninstalled from Python {}.",
                pin, python
            ));
            self.record(
                "uninstall_library",
                &format!("Successfully uninstalled {} for Python {}", pin, python),
                &result.combined_output(),
            );
        } else {
            ui.error(&format!("Uninstallation failed: {}", pin));
            ui.show_output(&result.combined_output());
            self.record(
                "uninstall_library",
                &format!("Uninstallation failed for library: {}, for Python {}", pin, python),
                &result.combined_output(),
            );
        }
        Ok(())
    }

    fn with_spinner(
        &self,
        ui: &mut dyn UserInterface,
        message: &str,
        run: impl FnOnce() -> Result<CommandResult>,
    ) -> Result<CommandResult> {
        let mut spinner = ui.start_spinner(message);
        match run() {
            Ok(result) => {
                if result.success {
                    spinner.finish_success(message.trim_end_matches("..."));
                } else {
                    spinner.finish_error(message.trim_end_matches("..."));
                }
                Ok(result)
            }
            Err(e) => {
                spinner.finish_error(&e.to_string());
                Err(e)
            }
        }
    }
}

fn show_result(ui: &mut dyn UserInterface, result: &CommandResult, what: &str) {
    if result.success {
        ui.show_output(result.stdout.trim_end());
    } else {
        ui.error(&format!("{} failed (exit code {:?})", what, result.exit_code));
        ui.show_output(&result.combined_output());
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::console::{Console, PackageTarget};
    use crate::config::ConsoleConfig;
    use crate::detection::PackageManagerKind;
    use crate::error::PyConsoleError;
    use crate::logs::LogCatalog;
    use crate::shell::{CommandResult, ScriptedRunner};
    use crate::ui::MockUI;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PY: &str = "/usr/bin/python3.11";

    fn target() -> PackageTarget {
        PackageTarget {
            version: "3.11".to_string(),
            interpreter: PathBuf::from(PY),
        }
    }

    fn console<'r>(temp: &TempDir, runner: &'r ScriptedRunner) -> Console<'r> {
        let config = ConsoleConfig {
            log_dir: temp.path().join("logs"),
            requirements_dir: temp.path().to_path_buf(),
            ..Default::default()
        };
        Console::new(config, runner, PackageManagerKind::AptBased)
    }

    fn log_text(temp: &TempDir, action: &str) -> String {
        let groups = LogCatalog::new(temp.path().join("logs")).grouped().unwrap();
        groups
            .get(action)
            .map(|files| files.iter().map(|p| fs::read_to_string(p).unwrap()).collect())
            .unwrap_or_default()
    }

    fn pip(args: &str) -> String {
        format!("{} -m pip {}", PY, args)
    }

    #[test]
    fn module_listing_finishes_spinner_when_interpreter_cannot_run() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();

        assert!(console.list_modules(&target(), &mut ui).is_err());

        assert_eq!(ui.spinners(), ["Collecting installed modules...".to_string()]);
        let finishes = ui.spinner_finishes();
        assert_eq!(finishes.len(), 1);
        assert!(!finishes[0].1);
    }

    #[test]
    fn module_listing_shows_help_output() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new().on(
            &format!("{} -c help('modules')", PY),
            CommandResult::from_stdout("Please wait a moment...\nabc  json  os\n"),
        );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();

        console.list_modules(&target(), &mut ui).unwrap();

        assert!(ui.has_output("abc  json  os"));
        assert_eq!(
            ui.spinner_finishes(),
            vec![("Collecting installed modules".to_string(), true)]
        );
        assert!(log_text(&temp, "list_installed_modules").contains("json"));
    }

    #[test]
    fn generate_requirements_writes_versioned_file() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new().on(
            &pip("freeze"),
            CommandResult::from_stdout("requests==2.31.0\nurllib3==2.0.7\n"),
        );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();

        console.generate_requirements(&target(), &mut ui).unwrap();

        let written = fs::read_to_string(temp.path().join("requirements_python3.11.txt")).unwrap();
        assert_eq!(written, "requests==2.31.0\nurllib3==2.0.7\n");
        assert!(ui.has_success("requirements_python3.11.txt"));
        assert!(log_text(&temp, "generate_requirements").contains("requests==2.31.0"));
    }

    #[test]
    fn specific_install_checks_index_then_installs_pin() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .on(
                &pip("index versions requests"),
                CommandResult::from_stdout(
                    "requests (2.31.0)\nAvailable versions: 2.31.0, 2.30.0, 2.28.0\n",
                ),
            )
            .on(
                &pip("install requests==2.28.0"),
                CommandResult::from_stdout("Successfully installed requests-2.28.0"),
            );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("library", "requests");
        ui.set_prompt_response("library_version", "2.28.0");
        ui.set_prompt_response("confirm_install", "y");

        console.install_specific_version(&target(), &mut ui).unwrap();

        assert!(runner.was_called(&pip("install requests==2.28.0")));
        assert!(ui.has_success("requests==2.28.0 successfully installed for Python 3.11."));
        let log = log_text(&temp, "install_library");
        assert!(log.contains("Successfully installed requests==2.28.0 for Python 3.11"));
    }

    #[test]
    fn specific_install_stops_when_version_unlisted() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new().on(
            &pip("index versions requests"),
            CommandResult::from_stdout("Available versions: 2.31.0\n"),
        );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("library", "requests");
        ui.set_prompt_response("library_version", "9.9.9");

        console.install_specific_version(&target(), &mut ui).unwrap();

        assert!(ui.has_error("requests==9.9.9 is not available on PyPI."));
        assert!(!ui.prompts_shown().contains(&"confirm_install".to_string()));
        assert!(log_text(&temp, "install_library").contains("not available"));
    }

    #[test]
    fn specific_uninstall_requires_exact_pin() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .on(&pip("freeze"), CommandResult::from_stdout("requests==2.28.0\n"));
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("library", "requests");
        ui.set_prompt_response("library_version", "2.31.0");

        console.uninstall_specific_version(&target(), &mut ui).unwrap();

        assert!(ui.has_error("requests==2.31.0 is not installed for Python 3.11."));
        assert!(!runner.was_called(&pip("uninstall -y requests")));
        assert!(log_text(&temp, "uninstall_library").contains("not installed"));
    }

    #[test]
    fn specific_uninstall_cancelled_runs_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .on(&pip("freeze"), CommandResult::from_stdout("requests==2.28.0\n"));
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("library", "requests");
        ui.set_prompt_response("library_version", "2.28.0");
        ui.set_prompt_response("confirm_uninstall", "n");

        console.uninstall_specific_version(&target(), &mut ui).unwrap();

        assert!(ui.has_message("Uninstallation cancelled."));
        assert!(!runner.was_called(&pip("uninstall -y requests")));
        assert!(log_text(&temp, "uninstall_library").contains("cancelled"));
    }

    #[test]
    fn install_library_rejects_index_errors() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new().on(
            &pip("index versions nosuchpkg"),
            CommandResult::exited(1, "", "ERROR: No matching distribution found for nosuchpkg"),
        );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("module", "nosuchpkg");

        console.install_library(&target(), &mut ui).unwrap();

        assert!(ui.has_error("not found in pip index"));
        assert!(log_text(&temp, "install_module").contains("Failed to locate module nosuchpkg"));
    }

    #[test]
    fn uninstall_library_confirms_then_removes() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .on(
                &pip("show requests"),
                CommandResult::from_stdout("Name: requests\nVersion: 2.28.0\n"),
            )
            .on(
                &pip("uninstall -y requests"),
                CommandResult::from_stdout("Successfully uninstalled requests-2.28.0"),
            );
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("module", "requests");
        ui.set_prompt_response("confirm_uninstall", "y");

        console.uninstall_library(&target(), &mut ui).unwrap();

        assert!(ui.has_output("Successfully uninstalled requests-2.28.0"));
        assert!(log_text(&temp, "uninstall_module")
            .contains("Uninstalled module requests from Python 3.11"));
    }

    #[test]
    fn search_library_distinguishes_installed_available_and_missing() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new()
            .on(&pip("show requests"), CommandResult::from_stdout("Name: requests\n"))
            .on(&pip("show flask"), CommandResult::exited(1, "", "WARNING: Package(s) not found: flask"))
            .on(
                &pip("index versions flask"),
                CommandResult::from_stdout("Available versions: 3.0.0, 2.3.3\n"),
            )
            .on(&pip("show nosuchpkg"), CommandResult::exited(1, "", ""))
            .on(&pip("index versions nosuchpkg"), CommandResult::exited(1, "", "ERROR: none"));
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("module", vec!["requests", "flask", "nosuchpkg"]);

        for _ in 0..3 {
            console.search_library(&target(), &mut ui).unwrap();
        }

        assert!(ui.has_success("Module 'requests' is already installed"));
        assert!(ui.has_output("Available versions: 3.0.0, 2.3.3"));
        assert!(ui.has_error("Module 'nosuchpkg' not found on PyPI"));
        let log = log_text(&temp, "search_module");
        assert!(log.contains("FOUND (installed)"));
        assert!(log.contains("AVAILABLE (not installed)"));
        assert!(log.contains("NOT found (PyPI)"));
    }

    #[cfg(unix)]
    #[test]
    fn search_installed_module_checks_every_interpreter() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let make = |name: &str| -> PathBuf {
            let path = bin.join(name);
            fs::write(&path, "#!/bin/sh\n").unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            path
        };
        let py10 = make("python3.10");
        let py11 = make("python3.11");
        let show = |p: &Path| format!("{} -m pip show requests", p.display());
        let runner = ScriptedRunner::new()
            .on(&format!("{} --version", py10.display()), CommandResult::from_stdout("Python 3.10.12"))
            .on(&format!("{} --version", py11.display()), CommandResult::from_stdout("Python 3.11.4"))
            .on(&show(&py10), CommandResult::exited(1, "", "WARNING: Package(s) not found"))
            .on(&show(&py11), CommandResult::from_stdout("Name: requests\nVersion: 2.31.0"));
        let console = console(&temp, &runner).with_search_path(vec![bin.clone()]);
        let mut ui = MockUI::new();
        ui.set_prompt_response("module", "requests");

        console.search_installed_module(&mut ui).unwrap();

        assert!(ui.has_success("Module 'requests' is INSTALLED for python3.11"));
        assert!(ui.has_error("Module 'requests' is NOT installed for python3.10."));
        assert!(log_text(&temp, "search_installed_module")
            .contains("Module 'requests' installed in: python3.11"));
    }

    #[test]
    fn empty_module_name_is_rejected_without_running_pip() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("module", "  ");

        console.install_library(&target(), &mut ui).unwrap();

        assert!(ui.has_error("No value entered."));
        assert!(runner.calls().is_empty());
    }

    #[test]
    fn option_like_library_name_is_an_error() {
        let temp = TempDir::new().unwrap();
        let runner = ScriptedRunner::new();
        let console = console(&temp, &runner);
        let mut ui = MockUI::new();
        ui.set_prompt_response("library", "--index-url");

        let err = console.install_specific_version(&target(), &mut ui).unwrap_err();

        assert!(matches!(err, PyConsoleError::InvalidLibraryName { .. }));
        assert!(!ui.prompts_shown().iter().any(|p| p == "library_version"));
        assert!(runner.calls().is_empty());
    }
}
