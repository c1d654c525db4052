//! Interactive console session.
//!
//! The session owns everything resolved once at startup (configuration,
//! package-manager family, log locations) and hands it to each menu action.
//! Actions live in [`super::commands`], one module per area.

use std::path::PathBuf;

use crate::backend::PackageManagerBackend;
use crate::config::ConsoleConfig;
use crate::detection::{InterpreterDiscovery, PackageManagerKind};
use crate::error::{PyConsoleError, Result};
use crate::logs::{ActionLogger, LogCatalog};
use crate::registry::{check_library_name, LibraryRegistryClient};
use crate::shell::CommandRunner;
use crate::ui::{Prompt, UserInterface};

use super::menu::{MainCommand, PackageCommand};

/// What the menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the current menu again.
    Continue,
    /// Leave the current menu.
    Exit,
}

/// Interpreter the package menu operates on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageTarget {
    /// Version as typed by the operator, e.g. `3.11`.
    pub version: String,
    /// Resolved executable.
    pub interpreter: PathBuf,
}

/// One operator session.
pub struct Console<'a> {
    pub(super) config: ConsoleConfig,
    pub(super) runner: &'a dyn CommandRunner,
    pub(super) package_manager: PackageManagerKind,
    pub(super) logger: ActionLogger,
    pub(super) catalog: LogCatalog,
    search_path: Option<Vec<PathBuf>>,
}

impl<'a> Console<'a> {
    /// Create a session. `package_manager` is detected once by the caller.
    pub fn new(
        config: ConsoleConfig,
        runner: &'a dyn CommandRunner,
        package_manager: PackageManagerKind,
    ) -> Self {
        let logger = ActionLogger::new(&config.log_dir);
        let catalog = LogCatalog::new(&config.log_dir);
        Self {
            config,
            runner,
            package_manager,
            logger,
            catalog,
            search_path: None,
        }
    }

    /// Scan `dirs` for interpreters instead of PATH.
    pub fn with_search_path(mut self, dirs: Vec<PathBuf>) -> Self {
        self.search_path = Some(dirs);
        self
    }

    /// Session configuration.
    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// Package-manager family detected for this session.
    pub fn package_manager(&self) -> PackageManagerKind {
        self.package_manager
    }

    /// Run the main menu until the operator exits or input ends.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<()> {
        loop {
            ui.show_menu(MainCommand::TITLE, &MainCommand::labels());
            let choice = match ask(ui, "main_choice", "Enter your choice") {
                Ok(choice) => choice,
                Err(PyConsoleError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let Some(command) = MainCommand::from_choice(&choice) else {
                ui.error("Invalid choice. Please try again.");
                continue;
            };

            tracing::debug!("Main menu: {:?}", command);
            let outcome = self.dispatch_main(command, ui);
            match settle(ui, outcome) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(PyConsoleError::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        tracing::debug!("Input closed, ending session");
        Ok(())
    }

    /// Main menu dispatch table.
    pub fn dispatch_main(&self, command: MainCommand, ui: &mut dyn UserInterface) -> Result<Flow> {
        match command {
            MainCommand::ListVersions => self.list_versions(ui)?,
            MainCommand::InstallVersion => self.install_version(ui)?,
            MainCommand::UninstallVersion => self.uninstall_version(ui)?,
            MainCommand::ShowAllPaths => self.show_all_paths(ui)?,
            MainCommand::ShowPathForVersion => self.show_path_for_version(ui)?,
            MainCommand::ManagePackages => self.package_menu(ui)?,
            MainCommand::ListLogs => self.list_logs(ui)?,
            MainCommand::ReadLog => self.read_log(ui)?,
            MainCommand::SearchLogs => self.search_logs(ui)?,
            MainCommand::Exit => {
                ui.message("Exiting. Goodbye!");
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Ask for a version, resolve its interpreter, then loop the package menu.
    ///
    /// An unresolvable version aborts back to the main menu.
    pub fn package_menu(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let version = ask(ui, "package_version", "Enter Python version (e.g., 3.9)")?;
        let target = self.resolve_target(&version)?;
        ui.success(&format!(
            "Python {} found: {}",
            target.version,
            target.interpreter.display()
        ));

        loop {
            ui.show_menu(&PackageCommand::title(&target.version), &PackageCommand::labels());
            let choice = ask(ui, "package_choice", "Enter your choice")?;

            let Some(command) = PackageCommand::from_choice(&choice) else {
                ui.error("Invalid choice. Please try again.");
                continue;
            };

            tracing::debug!("Package menu ({}): {:?}", target.version, command);
            let outcome = self.dispatch_package(command, &target, ui);
            if settle(ui, outcome)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Package menu dispatch table.
    pub fn dispatch_package(
        &self,
        command: PackageCommand,
        target: &PackageTarget,
        ui: &mut dyn UserInterface,
    ) -> Result<Flow> {
        match command {
            PackageCommand::ListPackages => self.list_packages(target, ui)?,
            PackageCommand::ListModules => self.list_modules(target, ui)?,
            PackageCommand::SearchInstalledModule => self.search_installed_module(ui)?,
            PackageCommand::GenerateRequirements => self.generate_requirements(target, ui)?,
            PackageCommand::SearchLibrary => self.search_library(target, ui)?,
            PackageCommand::InstallLibrary => self.install_library(target, ui)?,
            PackageCommand::UninstallLibrary => self.uninstall_library(target, ui)?,
            PackageCommand::InstallSpecificVersion => self.install_specific_version(target, ui)?,
            PackageCommand::UninstallSpecificVersion => {
                self.uninstall_specific_version(target, ui)?
            }
            PackageCommand::Back => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Resolve the interpreter executable for a typed version.
    pub fn resolve_target(&self, version: &str) -> Result<PackageTarget> {
        if !crate::backend::is_valid_version(version) {
            return Err(PyConsoleError::InvalidVersion {
                version: version.to_string(),
            });
        }
        let name = self.config.executable_name(version);
        let interpreter = self.discovery().resolve_executable(&name).ok_or_else(|| {
            PyConsoleError::InterpreterNotFound {
                version: version.to_string(),
            }
        })?;
        Ok(PackageTarget {
            version: version.to_string(),
            interpreter,
        })
    }

    pub(super) fn discovery(&self) -> InterpreterDiscovery<'a> {
        let discovery = InterpreterDiscovery::new(self.runner, &self.config.interpreter_base)
            .with_timeout(self.config.discovery_timeout());
        match &self.search_path {
            Some(dirs) => discovery.with_search_path(dirs.clone()),
            None => discovery,
        }
    }

    pub(super) fn backend(&self) -> Result<PackageManagerBackend<'a>> {
        Ok(PackageManagerBackend::new(self.package_manager, self.runner)?
            .with_sudo(self.config.use_sudo)
            .with_package_prefix(&self.config.package_prefix)
            .with_binary_dir(self.config.binary_dir.clone()))
    }

    pub(super) fn registry(&self) -> LibraryRegistryClient<'a> {
        LibraryRegistryClient::new(self.runner)
    }

    /// Record an action; failures only warn.
    pub(super) fn record(&self, action: &str, message: &str, output: &str) {
        self.logger.record_best_effort(action, message, Some(output));
    }
}

/// Report an action error and carry on. Only closed input propagates.
fn settle(ui: &mut dyn UserInterface, result: Result<Flow>) -> Result<Flow> {
    match result {
        Ok(flow) => Ok(flow),
        Err(PyConsoleError::InputClosed) => Err(PyConsoleError::InputClosed),
        Err(e) => {
            tracing::debug!("Action aborted: {:?}", e);
            ui.error(&e.to_string());
            Ok(Flow::Continue)
        }
    }
}

/// Ask a free-form question; the answer is trimmed.
pub(super) fn ask(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<String> {
    Ok(ui.prompt(&Prompt::input(key, question))?.as_string().trim().to_string())
}

/// Ask a free-form question whose answer must not be empty.
///
/// An empty answer is reported and yields `None`.
pub(super) fn ask_required(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
) -> Result<Option<String>> {
    let answer = ask(ui, key, question)?;
    if answer.is_empty() {
        ui.error("No value entered.");
        return Ok(None);
    }
    Ok(Some(answer))
}

/// Ask for a library name.
///
/// An empty answer is reported and yields `None`; a name pip could misread
/// is an `InvalidLibraryName` error.
pub(super) fn ask_library(
    ui: &mut dyn UserInterface,
    key: &str,
    question: &str,
) -> Result<Option<String>> {
    let Some(name) = ask_required(ui, key, question)? else {
        return Ok(None);
    };
    check_library_name(&name)?;
    Ok(Some(name))
}

/// Ask a yes/no question defaulting to no.
pub(super) fn confirm(ui: &mut dyn UserInterface, key: &str, question: &str) -> Result<bool> {
    Ok(ui
        .prompt(&Prompt::confirm(key, question))?
        .as_bool()
        .unwrap_or(false))
}
