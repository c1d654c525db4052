//! Interactive prompts.

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

use crate::error::{PyConsoleError, Result};

use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors, treating end of input as a closed session.
fn map_dialoguer_err(e: dialoguer::Error) -> PyConsoleError {
    let io: std::io::Error = e.into();
    if io.kind() == std::io::ErrorKind::UnexpectedEof {
        PyConsoleError::InputClosed
    } else {
        PyConsoleError::Io(io)
    }
}

/// Prompt the user for input.
pub fn prompt_user(prompt: &Prompt, term: &Term, colors: bool) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term, colors),
        PromptType::Input => prompt_input(prompt, term, colors),
    }
}

fn default_flag(prompt: &Prompt) -> bool {
    prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(false)
}

fn prompt_confirm(prompt: &Prompt, term: &Term, colors: bool) -> Result<PromptResult> {
    let default = default_flag(prompt);
    let result = if colors {
        Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(&prompt.question)
            .default(default)
            .interact_on(term)
    } else {
        Confirm::new()
            .with_prompt(&prompt.question)
            .default(default)
            .interact_on(term)
    }
    .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

fn prompt_input(prompt: &Prompt, term: &Term, colors: bool) -> Result<PromptResult> {
    let theme = ColorfulTheme::default();
    let mut input = if colors {
        Input::<String>::with_theme(&theme)
    } else {
        Input::<String>::new()
    }
    .with_prompt(&prompt.question)
    .allow_empty(true);

    if let Some(default) = &prompt.default {
        input = input.default(default.clone());
    }

    let result = input.interact_text_on(term).map_err(map_dialoguer_err)?;
    Ok(PromptResult::String(result.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eof_maps_to_input_closed() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "eof",
        ));
        assert!(matches!(map_dialoguer_err(err), PyConsoleError::InputClosed));
    }

    #[test]
    fn other_io_errors_stay_io() {
        let err = dialoguer::Error::IO(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe",
        ));
        assert!(matches!(map_dialoguer_err(err), PyConsoleError::Io(_)));
    }

    #[test]
    fn confirm_default_parsing() {
        assert!(!default_flag(&Prompt::confirm("k", "q")));
        let mut prompt = Prompt::confirm("k", "q");
        prompt.default = Some("yes".to_string());
        assert!(default_flag(&prompt));
    }
}
