use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::WizardPrompter;

/// One scripted answer to a prompter question.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Answer a text prompt.
    Text(String),
    /// Pick the first item whose label contains the given text.
    Choose(String),
    /// Cancel the prompt (Esc).
    Cancel,
}

impl Reply {
    pub fn text(value: &str) -> Self {
        Reply::Text(value.to_string())
    }

    pub fn choose(label: &str) -> Self {
        Reply::Choose(label.to_string())
    }
}

/// Prompter that plays back a script and records everything shown.
///
/// An exhausted script cancels, which ends the wizard.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    replies: VecDeque<Reply>,
    pub infos: Vec<String>,
    pub alerts: Vec<String>,
    pub shown: Vec<(String, String)>,
}

impl ScriptedPrompter {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self { replies: replies.into(), ..Self::default() }
    }
}

impl WizardPrompter for ScriptedPrompter {
    fn input(
        &mut self,
        prompt: &str,
        _initial: &str,
        _allow_empty: bool,
    ) -> Result<Option<String>, AppError> {
        match self.replies.pop_front() {
            Some(Reply::Text(value)) => Ok(Some(value)),
            Some(Reply::Cancel) | None => Ok(None),
            Some(other) => panic!("expected text reply for '{}', got {:?}", prompt, other),
        }
    }

    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        _default: usize,
    ) -> Result<Option<usize>, AppError> {
        match self.replies.pop_front() {
            Some(Reply::Choose(label)) => {
                let index = items.iter().position(|item| item.contains(&label)).unwrap_or_else(
                    || panic!("no item containing '{}' in '{}': {:?}", label, prompt, items),
                );
                Ok(Some(index))
            }
            Some(Reply::Cancel) | None => Ok(None),
            Some(other) => panic!("expected choice for '{}', got {:?}", prompt, other),
        }
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn show_text(&mut self, title: &str, body: &str) {
        self.shown.push((title.to_string(), body.to_string()));
    }
}
