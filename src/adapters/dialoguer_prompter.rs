use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::AppError;
use crate::ports::WizardPrompter;

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn interrupted_as_none<T>(
    result: Result<T, DialoguerError>,
    what: &str,
) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Interaction(format!("Failed to read {}: {}", what, err))),
    }
}

impl WizardPrompter for DialoguerPrompter {
    fn input(
        &mut self,
        prompt: &str,
        initial: &str,
        allow_empty: bool,
    ) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(allow_empty)
            .interact_text();
        interrupted_as_none(result, prompt)
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact_opt()
            .map_err(|err| AppError::Interaction(format!("Failed to select {}: {}", prompt, err)))
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("⚠️  {}", message);
    }

    fn show_text(&mut self, title: &str, body: &str) {
        println!();
        println!("── {} ──", title);
        println!("{}", body);
        println!();
    }
}
