//! pyconsole CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pyconsole::cli::{Cli, Console};
use pyconsole::config::load_config;
use pyconsole::detection::DistroDetector;
use pyconsole::shell::SystemRunner;
use pyconsole::ui::{create_ui, should_use_colors, UserInterface};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for diagnostics.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pyconsole=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pyconsole=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> pyconsole::Result<()> {
    let working_dir = std::env::current_dir()?;
    let mut config = load_config(&working_dir, cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let package_manager = DistroDetector::detect_package_manager(&config.os_release_path);
    tracing::debug!(
        "Package manager: {} (from {})",
        package_manager,
        config.os_release_path.display()
    );
    if !package_manager.is_supported() {
        ui.warning("Unsupported Linux distribution: installing and removing Python versions is unavailable.");
    }

    let runner = SystemRunner::new();
    Console::new(config, &runner, package_manager).run(ui)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pyconsole starting with args: {:?}", cli);

    let mut ui = create_ui(should_use_colors(cli.no_color));

    match run(&cli, ui.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
