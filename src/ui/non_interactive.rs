//! Line-oriented UI for piped input.

use std::io::{self, BufRead, BufReader, Write};

use crate::error::{PyConsoleError, Result};

use super::theme::ConsoleTheme;
use super::{parse_confirmation, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// UI implementation when stdin is not a terminal.
///
/// Each prompt consumes one line of input. Output is plain text so that a
/// scripted session produces a readable transcript.
pub struct NonInteractiveUI {
    input: Box<dyn BufRead>,
    theme: ConsoleTheme,
}

impl NonInteractiveUI {
    /// Read answers from the process's stdin.
    pub fn stdin() -> Self {
        Self::with_reader(BufReader::new(io::stdin()))
    }

    /// Read answers from `reader` (for testing).
    pub fn with_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            input: Box::new(reader),
            theme: ConsoleTheme::plain(),
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PyConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

impl UserInterface for NonInteractiveUI {
    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn warning(&mut self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn show_output(&mut self, output: &str) {
        if !output.is_empty() {
            println!("{}", output);
        }
    }

    fn show_menu(&mut self, title: &str, items: &[String]) {
        println!("\n{}\n", self.theme.format_menu(title, items));
    }

    fn show_header(&mut self, title: &str) {
        println!("\n{}\n", title);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        match prompt.prompt_type {
            PromptType::Confirm => print!("{} [y/N]: ", prompt.question),
            PromptType::Input => print!("{}: ", prompt.question),
        }
        io::stdout().flush().ok();

        let answer = self.read_line()?;
        println!();

        let answer = match (&prompt.default, answer.is_empty()) {
            (Some(default), true) => default.clone(),
            _ => answer,
        };

        Ok(match prompt.prompt_type {
            PromptType::Confirm => {
                PromptResult::Bool(answer == "true" || parse_confirmation(&answer))
            }
            PromptType::Input => PromptResult::String(answer),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(NoopSpinner {
            theme: self.theme.clone(),
        })
    }
}

/// Spinner that only prints its final line.
struct NoopSpinner {
    theme: ConsoleTheme,
}

impl SpinnerHandle for NoopSpinner {
    fn finish_success(&mut self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    fn finish_error(&mut self, msg: &str) {
        println!("{}", self.theme.format_error(msg));
    }
}
