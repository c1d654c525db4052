//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use pyconsole::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_prompt_responses("main_choice", vec!["1", "10"]);
//!
//! ui.message("Installed Python Versions:");
//! ui.success("Done!");
//!
//! assert!(ui.has_message("Installed Python"));
//! assert!(ui.has_success("Done"));
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use crate::error::{PyConsoleError, Result};

use super::{parse_confirmation, Prompt, PromptResult, PromptType, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Queued responses (via `queue_prompt_responses`) are consumed first, then
/// fixed responses (via `set_prompt_response`). A prompt with neither fails
/// with `InputClosed`, which ends a console session the same way EOF on
/// stdin does.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    outputs: Vec<String>,
    headers: Vec<String>,
    menus: Vec<String>,
    spinners: Vec<String>,
    spinner_finishes: Rc<RefCell<Vec<(String, bool)>>>,
    prompt_responses: HashMap<String, String>,
    prompt_queues: HashMap<String, VecDeque<String>>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response returned every time `key` is prompted.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Queue multiple responses for the same prompt key.
    ///
    /// Responses are returned in order. After the queue is exhausted,
    /// falls back to `set_prompt_response`.
    pub fn queue_prompt_responses(&mut self, key: &str, responses: Vec<&str>) {
        let queue = responses.into_iter().map(|s| s.to_string()).collect();
        self.prompt_queues.insert(key.to_string(), queue);
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured raw output blocks.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Titles of menus shown, in order.
    pub fn menus(&self) -> &[String] {
        &self.menus
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Finished spinners as `(final message, succeeded)`, in finish order.
    pub fn spinner_finishes(&self) -> Vec<(String, bool)> {
        self.spinner_finishes.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an output block contains `text`.
    pub fn has_output(&self, text: &str) -> bool {
        self.outputs.iter().any(|o| o.contains(text))
    }

    fn next_response(&mut self, key: &str) -> Option<String> {
        if let Some(response) = self.prompt_queues.get_mut(key).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        self.prompt_responses.get(key).cloned()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_output(&mut self, output: &str) {
        self.outputs.push(output.to_string());
    }

    fn show_menu(&mut self, title: &str, _items: &[String]) {
        self.menus.push(title.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        self.prompts_shown.push(prompt.key.clone());

        let response = self
            .next_response(&prompt.key)
            .ok_or(PyConsoleError::InputClosed)?;

        Ok(match prompt.prompt_type {
            PromptType::Confirm => {
                PromptResult::Bool(response == "true" || parse_confirmation(&response))
            }
            PromptType::Input => PromptResult::String(response),
        })
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finishes: Rc::clone(&self.spinner_finishes),
            ..MockSpinner::default()
        })
    }
}

/// Mock spinner that captures finish messages.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finishes: Rc<RefCell<Vec<(String, bool)>>>,
    finish_message: Option<String>,
    succeeded: Option<bool>,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the final finish message.
    pub fn finish_message(&self) -> Option<&str> {
        self.finish_message.as_deref()
    }

    /// `Some(true)` after `finish_success`, `Some(false)` after `finish_error`.
    pub fn succeeded(&self) -> Option<bool> {
        self.succeeded
    }

    fn finish(&mut self, msg: &str, succeeded: bool) {
        self.finish_message = Some(msg.to_string());
        self.succeeded = Some(succeeded);
        self.finishes.borrow_mut().push((msg.to_string(), succeeded));
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, true);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_by_kind() {
        let mut ui = MockUI::new();
        ui.message("plain");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_output("raw");

        assert!(ui.has_message("plain"));
        assert!(ui.has_success("ok"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("bad"));
        assert!(ui.has_output("raw"));
    }

    #[test]
    fn queued_responses_come_before_fixed_ones() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1", "2"]);
        ui.set_prompt_response("choice", "10");
        let prompt = Prompt::input("choice", "Enter your choice");

        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "1");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "2");
        assert_eq!(ui.prompt(&prompt).unwrap().as_string(), "10");
        assert_eq!(ui.prompts_shown().len(), 3);
    }

    #[test]
    fn exhausted_prompt_is_input_closed() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("choice", vec!["1"]);
        let prompt = Prompt::input("choice", "Enter your choice");

        ui.prompt(&prompt).unwrap();
        assert!(matches!(ui.prompt(&prompt), Err(PyConsoleError::InputClosed)));
    }

    #[test]
    fn confirm_responses_are_parsed() {
        let mut ui = MockUI::new();
        ui.queue_prompt_responses("proceed", vec!["y", "n", "true"]);
        let prompt = Prompt::confirm("proceed", "Install?");

        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(false));
        assert_eq!(ui.prompt(&prompt).unwrap(), PromptResult::Bool(true));
    }

    #[test]
    fn spinner_records_outcome() {
        let mut spinner = MockSpinner::new();
        assert_eq!(spinner.succeeded(), None);
        spinner.finish_error("failed");
        assert_eq!(spinner.finish_message(), Some("failed"));
        assert_eq!(spinner.succeeded(), Some(false));
    }

    #[test]
    fn spinners_and_menus_are_recorded() {
        let mut ui = MockUI::new();
        ui.show_menu("Main", &[]);
        let mut spinner = ui.start_spinner("Installing...");
        spinner.finish_success("Installed");
        assert_eq!(ui.menus(), ["Main".to_string()]);
        assert_eq!(ui.spinners(), ["Installing...".to_string()]);
        assert_eq!(ui.spinner_finishes(), vec![("Installed".to_string(), true)]);
    }
}
