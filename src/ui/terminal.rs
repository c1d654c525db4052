//! Interactive terminal UI.

use console::Term;
use std::io::{IsTerminal, Write};

use crate::error::Result;

use super::{
    prompt_user, ConsoleTheme, NonInteractiveUI, ProgressSpinner, Prompt, PromptResult,
    SpinnerHandle, UserInterface,
};

/// Interactive terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: ConsoleTheme,
    colors: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(colors: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme: ConsoleTheme::for_colors(colors),
            colors,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_output(&mut self, output: &str) {
        if output.is_empty() {
            return;
        }
        for line in output.lines() {
            writeln!(self.term, "  {} {}", self.theme.border.apply_to("│"), line).ok();
        }
    }

    fn show_menu(&mut self, title: &str, items: &[String]) {
        writeln!(self.term, "\n{}\n", self.theme.format_menu(title, items)).ok();
    }

    fn show_header(&mut self, title: &str) {
        writeln!(self.term, "\n{}\n", self.theme.format_header(title)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        prompt_user(prompt, &self.term, self.colors)
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        Box::new(ProgressSpinner::new(message, self.theme.clone()))
    }
}

/// Create the appropriate UI based on context.
///
/// A terminal UI needs both ends attached to a TTY; otherwise answers are
/// read line by line from stdin.
pub fn create_ui(colors: bool) -> Box<dyn UserInterface> {
    if Term::stdout().is_term() && std::io::stdin().is_terminal() {
        Box::new(TerminalUI::new(colors))
    } else {
        Box::new(NonInteractiveUI::stdin())
    }
}
