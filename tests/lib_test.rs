//! Library integration tests.

use pyconsole::cli::{Cli, Console};
use pyconsole::config::ConsoleConfig;
use pyconsole::detection::PackageManagerKind;
use pyconsole::logs::LogCatalog;
use pyconsole::shell::{CommandResult, ScriptedRunner};
use pyconsole::ui::MockUI;
use pyconsole::PyConsoleError;
use std::fs;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = PyConsoleError::InterpreterNotFound {
        version: "3.7".into(),
    };
    assert!(err.to_string().contains("Python 3.7 not found"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pyconsole::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;

    let cli = Cli::parse_from(["pyconsole", "--no-sudo", "--log-dir", "/tmp/pylogs"]);
    let mut config = ConsoleConfig::default();
    cli.apply_overrides(&mut config);

    assert!(!config.use_sudo);
    assert_eq!(config.log_dir, std::path::PathBuf::from("/tmp/pylogs"));
}

fn config(temp: &TempDir) -> ConsoleConfig {
    ConsoleConfig {
        log_dir: temp.path().join("logs"),
        binary_dir: temp.path().join("bin"),
        requirements_dir: temp.path().to_path_buf(),
        use_sudo: false,
        ..Default::default()
    }
}

fn logged_actions(temp: &TempDir) -> Vec<String> {
    LogCatalog::new(temp.path().join("logs"))
        .grouped()
        .unwrap()
        .into_keys()
        .collect()
}

#[test]
fn failed_uninstall_is_reported_and_session_continues() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new().on(
        "apt remove -y python3.9",
        CommandResult::exited(100, "", "E: Unable to locate package python3.9"),
    );
    let console = Console::new(config(&temp), &runner, PackageManagerKind::AptBased)
        .with_search_path(vec![temp.path().join("empty")]);
    let mut ui = MockUI::new();
    ui.queue_prompt_responses("main_choice", vec!["3", "10"]);
    ui.set_prompt_response("uninstall_version", "3.9");

    console.run(&mut ui).unwrap();

    assert!(ui.has_output("Unable to locate package python3.9"));
    assert!(ui.has_message("Exiting. Goodbye!"));
    assert_eq!(ui.menus().len(), 2);
    assert!(ui.has_warning("No Python versions found."));
    assert_eq!(
        logged_actions(&temp),
        vec!["list_python_versions", "uninstall_python_version"]
    );
}

#[test]
fn invalid_choice_then_end_of_input_returns_cleanly() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let console = Console::new(config(&temp), &runner, PackageManagerKind::AptBased);
    let mut ui = MockUI::new();
    ui.queue_prompt_responses("main_choice", vec!["0"]);

    console.run(&mut ui).unwrap();

    assert!(ui.has_error("Invalid choice. Please try again."));
    assert!(!ui.has_message("Exiting. Goodbye!"));
    assert!(runner.calls().is_empty());
}

#[test]
fn unsupported_distribution_reports_error_per_action() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let console = Console::new(config(&temp), &runner, PackageManagerKind::Unsupported);
    let mut ui = MockUI::new();
    ui.queue_prompt_responses("main_choice", vec!["2", "10"]);
    ui.set_prompt_response("install_version", "3.12");

    console.run(&mut ui).unwrap();

    assert!(ui.has_error("Unsupported Linux distribution"));
    assert!(ui.has_message("Exiting. Goodbye!"));
    assert!(runner.calls().is_empty());
}

#[cfg(unix)]
#[test]
fn package_menu_session_lists_packages_and_writes_requirements() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let bin = temp.path().join("path");
    fs::create_dir_all(&bin).unwrap();
    let py = bin.join("python3.11");
    fs::write(&py, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&py, fs::Permissions::from_mode(0o755)).unwrap();

    let pip = |args: &str| format!("{} -m pip {}", py.display(), args);
    let runner = ScriptedRunner::new()
        .on(
            &pip("list"),
            CommandResult::from_stdout("Package  Version\n-------- -------\nrequests 2.31.0\n"),
        )
        .on(&pip("freeze"), CommandResult::from_stdout("requests==2.31.0\n"));
    let console = Console::new(config(&temp), &runner, PackageManagerKind::AptBased)
        .with_search_path(vec![bin.clone()]);
    let mut ui = MockUI::new();
    ui.queue_prompt_responses("main_choice", vec!["6", "10"]);
    ui.set_prompt_response("package_version", "3.11");
    ui.queue_prompt_responses("package_choice", vec!["1", "4", "10"]);

    console.run(&mut ui).unwrap();

    assert!(ui.has_success(&format!("Python 3.11 found: {}", py.display())));
    assert!(ui.has_output("requests 2.31.0"));
    let requirements = fs::read_to_string(temp.path().join("requirements_python3.11.txt")).unwrap();
    assert_eq!(requirements.trim(), "requests==2.31.0");
    assert_eq!(
        logged_actions(&temp),
        vec!["generate_requirements", "list_installed_packages"]
    );
    assert!(ui.has_message("Exiting. Goodbye!"));
}

#[test]
fn unresolvable_package_version_returns_to_main_menu() {
    let temp = TempDir::new().unwrap();
    let runner = ScriptedRunner::new();
    let console = Console::new(config(&temp), &runner, PackageManagerKind::AptBased)
        .with_search_path(vec![temp.path().join("empty")]);
    let mut ui = MockUI::new();
    ui.queue_prompt_responses("main_choice", vec!["6", "6", "10"]);
    ui.queue_prompt_responses("package_version", vec!["3.99", "3.9; rm -rf /"]);

    console.run(&mut ui).unwrap();

    assert!(ui.has_error("Python 3.99 not found"));
    assert!(ui.has_error("Invalid Python version"));
    assert!(ui.prompts_shown().iter().all(|p| p != "package_choice"));
    assert!(ui.has_message("Exiting. Goodbye!"));
}
