use anyhow::{Context, Result};
use console::user_attended;
use dialoguer::{Confirm, Input};

use crate::errors::NonInteractiveError;

/// Everything the interactive prompt needs to collect one identifier.
pub struct PromptSpec<'a> {
    /// Prompt text shown to the user.
    pub message: &'a str,
    /// Pre-filled value the user can accept with Enter.
    pub initial: Option<String>,
    /// Live syntax check; the prompt cannot be submitted while it fails.
    pub validate: fn(&str) -> bool,
    /// Shown when the submitted text fails `validate`.
    pub invalid_message: &'a str,
    /// Canned explanation raised when no interactive terminal is attached.
    pub non_interactive_help: String,
}

pub trait Prompter {
    fn ask(&mut self, spec: PromptSpec<'_>) -> Result<String>;
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Production prompter backed by dialoguer.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, spec: PromptSpec<'_>) -> Result<String> {
        if !user_attended() {
            return Err(NonInteractiveError(spec.non_interactive_help).into());
        }
        let validate = spec.validate;
        let invalid_message = spec.invalid_message.to_owned();
        let mut input = Input::<String>::new()
            .with_prompt(spec.message)
            .validate_with(move |candidate: &String| {
                if validate(candidate) {
                    Ok(())
                } else {
                    Err(invalid_message.clone())
                }
            });
        if let Some(initial) = spec.initial {
            input = input.default(initial);
        }
        input
            .interact_text()
            .context("Failed to read input from the terminal.")
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .context("Failed to read confirmation from the terminal.")
    }
}
