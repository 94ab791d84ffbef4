pub mod catalog;
pub mod configuration;
pub mod error;
pub mod generation;
pub mod input;
pub mod prompt;
pub mod step;

pub use catalog::{CatalogEntry, GOALS, GoalOption, LANGUAGES, PERSONAS, PersonaOption, TONES};
pub use configuration::{AppConfig, LlmApiConfig, WizardConfig};
pub use error::AppError;
pub use generation::{CallKind, CallStatus, GenerationSession};
pub use input::{DEFAULT_OUTPUT_LANGUAGE, InputModel};
pub use prompt::{MetaPromptComposer, PromptCompositionError, compose};
pub use step::{MIN_IDEA_CHARS, WizardStep};
