//! Closed menu enumerations.
//!
//! Menu numbering is part of the operator contract: choices are typed as
//! numbers, so variant order must not change.

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    ListVersions,
    InstallVersion,
    UninstallVersion,
    ShowAllPaths,
    ShowPathForVersion,
    ManagePackages,
    ListLogs,
    ReadLog,
    SearchLogs,
    Exit,
}

impl MainCommand {
    /// All entries in menu order.
    pub const ALL: [MainCommand; 10] = [
        Self::ListVersions,
        Self::InstallVersion,
        Self::UninstallVersion,
        Self::ShowAllPaths,
        Self::ShowPathForVersion,
        Self::ManagePackages,
        Self::ListLogs,
        Self::ReadLog,
        Self::SearchLogs,
        Self::Exit,
    ];

    /// Menu title.
    pub const TITLE: &'static str = "Python Version and Module Tool";

    /// Parse a typed choice (`"1"`..`"10"`).
    pub fn from_choice(choice: &str) -> Option<Self> {
        from_choice(choice, &Self::ALL)
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ListVersions => "List installed Python versions",
            Self::InstallVersion => "Install a Python version",
            Self::UninstallVersion => "Uninstall a Python version",
            Self::ShowAllPaths => "Show all Python paths",
            Self::ShowPathForVersion => "Show path for specific Python version",
            Self::ManagePackages => "Manage Python packages/modules",
            Self::ListLogs => "List all log files",
            Self::ReadLog => "Read a logfile",
            Self::SearchLogs => "Search in logs",
            Self::Exit => "Exit",
        }
    }

    /// Labels in menu order.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label().to_string()).collect()
    }
}

/// Package menu entries for one interpreter version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageCommand {
    ListPackages,
    ListModules,
    SearchInstalledModule,
    GenerateRequirements,
    SearchLibrary,
    InstallLibrary,
    UninstallLibrary,
    InstallSpecificVersion,
    UninstallSpecificVersion,
    Back,
}

impl PackageCommand {
    /// All entries in menu order.
    pub const ALL: [PackageCommand; 10] = [
        Self::ListPackages,
        Self::ListModules,
        Self::SearchInstalledModule,
        Self::GenerateRequirements,
        Self::SearchLibrary,
        Self::InstallLibrary,
        Self::UninstallLibrary,
        Self::InstallSpecificVersion,
        Self::UninstallSpecificVersion,
        Self::Back,
    ];

    /// Menu title for `version`.
    pub fn title(version: &str) -> String {
        format!("Python Package Manager for Python {}", version)
    }

    /// Parse a typed choice (`"1"`..`"10"`).
    pub fn from_choice(choice: &str) -> Option<Self> {
        from_choice(choice, &Self::ALL)
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ListPackages => "List installed packages",
            Self::ListModules => "List installed modules",
            Self::SearchInstalledModule => "Search for an installed module",
            Self::GenerateRequirements => "Generate requirements.txt",
            Self::SearchLibrary => "Search for a library",
            Self::InstallLibrary => "Install a library",
            Self::UninstallLibrary => "Uninstall a library",
            Self::InstallSpecificVersion => "Install a specific version of a library",
            Self::UninstallSpecificVersion => "Uninstall a specific version of a library",
            Self::Back => "Back to main menu",
        }
    }

    /// Labels in menu order.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label().to_string()).collect()
    }
}

fn from_choice<T: Copy>(choice: &str, all: &[T]) -> Option<T> {
    let n: usize = choice.trim().parse().ok()?;
    n.checked_sub(1).and_then(|i| all.get(i)).copied()
}
