//! Prompter Port
//!
//! Interactive questions the workflow asks the user. Implementations can
//! be a real terminal, a non-interactive fallback, or scripted answers.

use thiserror::Error;

/// The interactive surface could not produce an answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PromptError(pub String);

/// Trait for asking the user questions.
pub trait Prompter {
    /// Ask for a value, offering `default` when the user just presses enter.
    fn prompt(&self, question: &str, default: &str) -> Result<String, PromptError>;

    /// Ask a yes/no question.
    fn confirm(&self, question: &str) -> Result<bool, PromptError>;
}

/// Prompter for sessions without a terminal.
///
/// Value prompts resolve to their default; confirmations cannot be
/// answered and fail, so publishing needs `--force`.
pub struct NonInteractivePrompter;

impl Prompter for NonInteractivePrompter {
    fn prompt(&self, _question: &str, default: &str) -> Result<String, PromptError> {
        Ok(default.to_string())
    }

    fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        Err(PromptError(format!(
            "cannot ask \"{}\" without an interactive terminal (pass --force to skip confirmation)",
            question
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_prompt_returns_default() {
        let prompter = NonInteractivePrompter;
        assert_eq!(prompter.prompt("Version?", "1.0.0").unwrap(), "1.0.0");
    }

    #[test]
    fn non_interactive_confirm_fails_with_hint() {
        let prompter = NonInteractivePrompter;
        let err = prompter.confirm("Continue?").unwrap_err();
        assert!(err.to_string().contains("--force"));
    }
}
