//! Terminal prompter backed by dialoguer.

use airlift::domain::ports::{PromptError, Prompter};
use dialoguer::theme::{ColorfulTheme, SimpleTheme, Theme};
use dialoguer::{Confirm, Input};

use crate::ui::context::UiContext;

pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(ui: &UiContext) -> Self {
        let theme: Box<dyn Theme> = if ui.color {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        };
        Self { theme }
    }
}

fn prompt_error(err: dialoguer::Error) -> PromptError {
    PromptError(err.to_string())
}

impl Prompter for DialoguerPrompter {
    fn prompt(&self, question: &str, default: &str) -> Result<String, PromptError> {
        Input::<String>::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()
            .map_err(prompt_error)
    }

    fn confirm(&self, question: &str) -> Result<bool, PromptError> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(prompt_error)
    }
}
