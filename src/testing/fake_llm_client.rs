use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{LlmClient, LlmClientFactory};

/// LLM client answering from a script and recording `(model, request)` pairs.
///
/// Once the script runs out every call answers with empty text.
#[derive(Clone, Default)]
pub struct FakeLlmClient {
    replies: Arc<Mutex<VecDeque<Result<String, AppError>>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl FakeLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: Result<String, AppError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl LlmClient for FakeLlmClient {
    fn submit(&self, model: &str, request: &str) -> Result<String, AppError> {
        self.requests.lock().unwrap().push((model.to_string(), request.to_string()));
        self.replies.lock().unwrap().pop_front().unwrap_or_else(|| Ok(String::new()))
    }
}

pub struct FakeLlmClientFactory {
    pub client: FakeLlmClient,
}

impl FakeLlmClientFactory {
    pub fn new(client: FakeLlmClient) -> Self {
        Self { client }
    }
}

impl LlmClientFactory for FakeLlmClientFactory {
    fn create(&self) -> Result<Box<dyn LlmClient>, AppError> {
        Ok(Box::new(self.client.clone()))
    }
}

/// Factory that behaves like a missing API key.
pub struct FailingClientFactory;

impl LlmClientFactory for FailingClientFactory {
    fn create(&self) -> Result<Box<dyn LlmClient>, AppError> {
        Err(AppError::config_error("API key not found: set GEMINI_API_KEY or API_KEY"))
    }
}
