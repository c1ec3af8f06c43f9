//! Confirmation prompts

use crate::error::{Result, StudyLogError};
use dialoguer::Confirm;

/// Yes/no confirmation collaborator
pub trait Confirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool>;
}

/// Asks on the terminal; defaults to "no"
#[derive(Debug, Default)]
pub struct TerminalConfirmation;

impl Confirmation for TerminalConfirmation {
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| StudyLogError::Prompt(e.to_string()))
    }
}

/// Fixed answer, for `--yes` and tests
#[derive(Debug, Clone, Copy)]
pub struct Preapproved(pub bool);

impl Confirmation for Preapproved {
    fn confirm(&mut self, _prompt: &str) -> Result<bool> {
        Ok(self.0)
    }
}
