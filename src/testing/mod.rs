mod fake_llm_client;
mod memory_file_store;
mod scripted_prompter;

pub use fake_llm_client::{FailingClientFactory, FakeLlmClient, FakeLlmClientFactory};
pub use memory_file_store::MemoryFileStore;
pub use scripted_prompter::{Reply, ScriptedPrompter};
