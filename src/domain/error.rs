use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptCompositionError;

/// Library-wide error type for promptmaster operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue (missing credential, invalid config file).
    #[error("{0}")]
    Configuration(String),

    /// The LLM collaborator failed in flight (network, quota, server error).
    #[error("LLM request failed{}: {message}", status_suffix(.status))]
    Transport { message: String, status: Option<u16> },

    /// A call of the given kind is already running for this session.
    #[error("A {0} call is already running")]
    CallInFlight(&'static str),

    /// Persona identifier not present in the catalog.
    #[error("Persona '{0}' not found. Run 'promptmaster catalog' to list personas.")]
    UnknownPersona(String),

    /// Goal identifier not present in the catalog.
    #[error("Goal '{0}' not found. Run 'promptmaster catalog' to list goals.")]
    UnknownGoal(String),

    /// The wizard refused to advance past a step whose gate is not satisfied.
    #[error("{0}")]
    IncompleteInput(String),

    /// Meta-prompt template could not be rendered.
    #[error(transparent)]
    Prompt(#[from] PromptCompositionError),

    /// Interactive prompt failed (terminal unavailable, read error).
    #[error("Interaction failed: {0}")]
    Interaction(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn transport<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Transport { message: message.into(), status }
    }
}
