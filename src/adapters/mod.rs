pub mod dialoguer_prompter;
pub mod gemini_client;
pub mod local_file_store;
