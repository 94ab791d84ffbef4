mod file_store;
mod llm_client;
mod wizard_prompter;

pub use file_store::FileStore;
pub use llm_client::{LlmClient, LlmClientFactory};
pub use wizard_prompter::WizardPrompter;
