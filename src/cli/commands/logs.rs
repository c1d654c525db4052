//! Log browsing actions.

use crate::error::Result;
use crate::logs::render_groups;
use crate::ui::UserInterface;

use super::super::console::{ask_required, Console};

impl Console<'_> {
    /// List log files grouped by action name.
    pub fn list_logs(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Available Log Files (Grouped by Function):");
        let groups = self.catalog.grouped()?;

        if groups.is_empty() {
            ui.warning(&format!("No log files in {}", self.logger.dir().display()));
        }
        for (action, files) in &groups {
            ui.message(&format!("[{}]", action));
            for file in files {
                let name = file.file_name().map(|n| n.to_string_lossy().to_string());
                ui.message(&format!("- {}", name.unwrap_or_default()));
            }
        }

        self.record(
            "view_logs",
            "Viewed log files grouped by function name.",
            &render_groups(&groups),
        );
        Ok(())
    }

    /// Print one log file's contents.
    pub fn read_log(&self, ui: &mut dyn UserInterface) -> Result<()> {
        ui.show_header("Available Log Files");
        let mut names: Vec<String> = self
            .catalog
            .grouped()?
            .into_values()
            .flatten()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .collect();
        names.sort();

        if names.is_empty() {
            ui.warning(&format!("No log files in {}", self.logger.dir().display()));
            return Ok(());
        }
        for name in &names {
            ui.message(name);
        }

        let Some(name) = ask_required(
            ui,
            "log_file",
            "Enter the exact filename of the log you want to read",
        )?
        else {
            return Ok(());
        };
        let content = self.catalog.read(&name)?;

        ui.show_header(&format!("Contents of {}", name));
        ui.show_output(content.trim_end());

        self.record("read_log", &format!("Read log file {}", name), "");
        Ok(())
    }

    /// Show the lines of one log file that match a regex.
    pub fn search_logs(&self, ui: &mut dyn UserInterface) -> Result<()> {
        self.list_logs(ui)?;
        let Some(name) = ask_required(ui, "log_file", "Enter log file name")? else {
            return Ok(());
        };
        let Some(pattern) = ask_required(ui, "pattern", "Enter regex pattern to search")? else {
            return Ok(());
        };

        let matches = self.catalog.search(&name, &pattern)?;
        if matches.is_empty() {
            ui.warning("No matches found.");
        } else {
            ui.show_header(&format!("Matches found in {}:", name));
            ui.show_output(&matches.join("\n"));
        }

        self.record(
            "search_logs",
            &format!("Searched for '{}' in {}", pattern, name),
            &matches.join("\n"),
        );
        Ok(())
    }
}
