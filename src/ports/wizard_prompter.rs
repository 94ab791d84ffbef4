//! Terminal interaction port used by the interactive wizard.

use crate::domain::AppError;

/// Port for the handful of interactions the wizard needs.
///
/// `Ok(None)` from a prompt means the user cancelled it (Esc / Ctrl-C).
pub trait WizardPrompter {
    /// Ask for a line of free text, pre-filled with `initial`.
    fn input(
        &mut self,
        prompt: &str,
        initial: &str,
        allow_empty: bool,
    ) -> Result<Option<String>, AppError>;

    /// Let the user pick one of `items`.
    fn select(
        &mut self,
        prompt: &str,
        items: &[String],
        default: usize,
    ) -> Result<Option<usize>, AppError>;

    /// Show an informational message.
    fn info(&mut self, message: &str);

    /// Show a blocking notification (errors the user must acknowledge).
    fn alert(&mut self, message: &str);

    /// Show a long block of text (generated prompt, execution preview).
    fn show_text(&mut self, title: &str, body: &str);
}
