//! Meta-prompt composition.

pub mod composer;
pub mod error;

pub use composer::{EMBEDDED_TEMPLATE_NAME, MetaPromptComposer, compose};
pub use error::PromptCompositionError;
