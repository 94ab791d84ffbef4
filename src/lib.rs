//! promptmaster: turn a raw idea into an optimized LLM prompt through a step-by-step wizard.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    CatalogListing, GenerateOutcome, RequestOptions, build_session, catalog, compose_request,
    generate, load_composer, load_config, run_wizard,
};
pub use app::{AppContext, Commit, WizardSession};
pub use domain::{AppError, InputModel, MetaPromptComposer, WizardStep, compose};
