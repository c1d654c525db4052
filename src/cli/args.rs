//! CLI argument definitions.
//!
//! The console itself is menu driven; these flags only shape the session.

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConsoleConfig;

/// pyconsole - Python interpreter and package management console for Linux.
#[derive(Debug, Parser)]
#[command(name = "pyconsole")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides ./pyconsole.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for action log files
    #[arg(long, env = "PYCONSOLE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Run package-manager commands without sudo
    #[arg(long)]
    pub no_sudo: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut ConsoleConfig) {
        if let Some(dir) = &self.log_dir {
            config.log_dir = dir.clone();
        }
        if self.no_sudo {
            config.use_sudo = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_without_arguments() {
        let cli = Cli::try_parse_from(["pyconsole"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.no_sudo);
        assert!(!cli.debug);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "pyconsole",
            "--config",
            "/tmp/pyconsole.yml",
            "--log-dir",
            "/tmp/logs",
            "--no-sudo",
            "--no-color",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/pyconsole.yml")));
        assert_eq!(cli.log_dir, Some(PathBuf::from("/tmp/logs")));
        assert!(cli.no_sudo && cli.no_color && cli.debug);
    }

    #[test]
    fn overrides_replace_config_values() {
        let cli = Cli::try_parse_from(["pyconsole", "--log-dir", "elsewhere", "--no-sudo"]).unwrap();
        let mut config = ConsoleConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.log_dir, PathBuf::from("elsewhere"));
        assert!(!config.use_sudo);
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let cli = Cli::try_parse_from(["pyconsole"]).unwrap();
        let mut config = ConsoleConfig {
            use_sudo: true,
            log_dir: PathBuf::from("from_file"),
            ..Default::default()
        };
        cli.apply_overrides(&mut config);
        assert_eq!(config.log_dir, PathBuf::from("from_file"));
        assert!(config.use_sudo);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["pyconsole", "--bogus"]).is_err());
    }
}
