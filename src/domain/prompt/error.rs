use thiserror::Error;

/// Error while compiling or rendering a meta-prompt template.
#[derive(Debug, Clone, Error)]
pub enum PromptCompositionError {
    /// Template source is not valid minijinja syntax.
    #[error("Invalid meta-prompt template {template}: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// Template compiled but could not be rendered (e.g. unknown variable).
    #[error("Failed to render meta-prompt template {template}: {reason}")]
    Render { template: String, reason: String },
}
