//! Visual theme and styling.

use console::Style;

/// Console color theme.
#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for menu item numbers (bold).
    pub key: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
            key: Style::new().bold(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            key: Style::new(),
            border: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_colors(colors: bool) -> Self {
        if colors {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a numbered menu inside a box.
    pub fn format_menu(&self, title: &str, items: &[String]) -> String {
        let rows: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect();
        let width = rows
            .iter()
            .map(|r| r.chars().count())
            .chain(std::iter::once(title.chars().count()))
            .max()
            .unwrap_or(0)
            + 2;

        let b = &self.border;
        let mut out = Vec::with_capacity(rows.len() + 4);
        out.push(format!("{}", b.apply_to(format!("╔{}╗", "═".repeat(width)))));
        out.push(format!(
            "{} {} {}",
            b.apply_to("║"),
            self.header.apply_to(format!("{:<w$}", title, w = width - 2)),
            b.apply_to("║"),
        ));
        out.push(format!("{}", b.apply_to(format!("╠{}╣", "═".repeat(width)))));
        for (i, row) in rows.iter().enumerate() {
            let number = format!("{}.", i + 1);
            let label = &row[number.len()..];
            out.push(format!(
                "{} {}{}{} {}",
                b.apply_to("║"),
                self.key.apply_to(&number),
                label,
                " ".repeat(width - 2 - row.chars().count()),
                b.apply_to("║"),
            ));
        }
        out.push(format!("{}", b.apply_to(format!("╚{}╝", "═".repeat(width)))));
        out.join("\n")
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }

    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
