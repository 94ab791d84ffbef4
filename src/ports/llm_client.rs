//! LLM collaborator port definition.

use crate::domain::AppError;

/// Port for submitting a single text request to a large language model.
pub trait LlmClient {
    /// Send `request` to `model` and return the response text.
    ///
    /// An empty string means the model answered without usable text; callers
    /// decide what to substitute. Transport problems are reported as errors.
    fn submit(&self, model: &str, request: &str) -> Result<String, AppError>;
}

/// Factory for creating an LLM client on demand.
///
/// Construction happens per call so that a missing credential surfaces as the
/// failure of that call rather than at startup.
pub trait LlmClientFactory {
    fn create(&self) -> Result<Box<dyn LlmClient>, AppError>;
}
