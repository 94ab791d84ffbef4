//! Application configuration loaded from `promptmaster.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;
use crate::domain::input::DEFAULT_OUTPUT_LANGUAGE;

/// Root configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// LLM endpoint configuration.
    #[serde(default)]
    pub llm: LlmApiConfig,
    /// Wizard behavior.
    #[serde(default)]
    pub wizard: WizardConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.llm.validate()?;
        self.wizard.validate()?;
        Ok(())
    }
}

/// Generative Language API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LlmApiConfig {
    /// Base URL; `models/{model}:generateContent` is resolved against it.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model name passed with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for LlmApiConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model(), timeout_secs: default_timeout() }
    }
}

impl LlmApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("model must not be empty"));
        }
        if self.api_url.cannot_be_a_base() {
            return Err(AppError::config_error(format!(
                "api_url must be a base URL: {}",
                self.api_url
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Wizard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Output language of a fresh (or reset) session.
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Optional meta-prompt template file replacing the embedded one.
    #[serde(default)]
    pub template_path: Option<String>,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { default_language: default_language(), template_path: None }
    }
}

impl WizardConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.default_language.trim().is_empty() {
            return Err(AppError::config_error("default_language must not be empty"));
        }
        if let Some(path) = &self.template_path
            && path.trim().is_empty()
        {
            return Err(AppError::config_error("template_path must not be empty when set"));
        }
        Ok(())
    }
}

fn default_language() -> String {
    DEFAULT_OUTPUT_LANGUAGE.to_string()
}
