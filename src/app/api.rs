//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together configuration
//! loading, context creation and the wizard operations.

use crate::adapters::dialoguer_prompter::DialoguerPrompter;
use crate::adapters::gemini_client::HttpGeminiClient;
use crate::adapters::local_file_store::LocalFileStore;
use crate::app::session::WizardSession;
use crate::app::{AppContext, wizard};
use crate::domain::configuration::{CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{
    AppConfig, AppError, GOALS, GoalOption, LANGUAGES, LlmApiConfig, MetaPromptComposer, PERSONAS,
    PersonaOption, TONES, WizardConfig,
};
use crate::ports::{FileStore, LlmClient, LlmClientFactory};

/// Creates the HTTP client when a call starts, reading the API key from the environment.
struct EnvGeminiClientFactory {
    config: LlmApiConfig,
}

impl LlmClientFactory for EnvGeminiClientFactory {
    fn create(&self) -> Result<Box<dyn LlmClient>, AppError> {
        Ok(Box::new(HttpGeminiClient::from_env_with_config(&self.config)?))
    }
}

/// Non-interactive request: the same choices the wizard collects.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub idea: String,
    pub persona: String,
    pub goal: String,
    pub audience: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
}

/// Result of a non-interactive generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub optimized_prompt: String,
    /// Present only when execution was requested.
    pub execution_result: Option<String>,
}

/// Static choices offered by the wizard.
#[derive(Debug, Clone, Copy)]
pub struct CatalogListing {
    pub personas: &'static [PersonaOption],
    pub goals: &'static [GoalOption],
    pub tones: &'static [&'static str],
    pub languages: &'static [&'static str],
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `promptmaster.toml` is read when
/// present and defaults apply otherwise.
pub fn load_config<S: FileStore>(store: &S, path: Option<&str>) -> Result<AppConfig, AppError> {
    let path = match path {
        Some(path) => {
            if !store.file_exists(path) {
                return Err(AppError::config_error(format!("Config file not found: {}", path)));
            }
            path
        }
        None if store.file_exists(CONFIG_FILE_NAME) => CONFIG_FILE_NAME,
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            return Ok(AppConfig::default());
        }
    };

    tracing::debug!(path, "loading configuration");
    let content = store.read_file(path)?;
    parse_config_content(&content)
}

/// Build the meta-prompt composer: the configured template file, or the embedded one.
pub fn load_composer<S: FileStore>(
    store: &S,
    config: &WizardConfig,
) -> Result<MetaPromptComposer, AppError> {
    let Some(path) = config.template_path.as_deref() else {
        return Ok(MetaPromptComposer::embedded());
    };

    let source = store.read_file(path).map_err(|err| {
        AppError::config_error(format!("Failed to read template '{}': {}", path, err))
    })?;
    Ok(MetaPromptComposer::from_source(path, source)?)
}

/// Walk a session through the wizard gates with the given choices.
///
/// Returns a session positioned on the details step, or the first gate that refused.
pub fn build_session(
    config: &AppConfig,
    options: &RequestOptions,
) -> Result<WizardSession, AppError> {
    let mut session = WizardSession::new(config.wizard.default_language.clone());

    session.input_mut().set_idea(options.idea.clone());
    session.advance()?;
    session.input_mut().select_persona_id(&options.persona)?;
    session.advance()?;
    session.input_mut().select_goal_id(&options.goal)?;
    session.advance()?;

    let input = session.input_mut();
    if let Some(audience) = &options.audience {
        input.set_audience(audience.clone());
    }
    if let Some(tone) = &options.tone {
        input.set_tone(tone.clone());
    }
    if let Some(language) = &options.language {
        input.set_output_language(language.clone());
    }

    Ok(session)
}

fn create_context<S: FileStore>(
    store: &S,
    config_path: Option<&str>,
) -> Result<AppContext<EnvGeminiClientFactory>, AppError> {
    let config = load_config(store, config_path)?;
    let composer = load_composer(store, &config.wizard)?;
    let factory = EnvGeminiClientFactory { config: config.llm.clone() };
    Ok(AppContext::new(factory, composer, config))
}

// =============================================================================
// Compose / Generate API
// =============================================================================

/// Compose the meta-prompt for `options` without calling the LLM.
pub fn compose_request(
    config_path: Option<&str>,
    options: &RequestOptions,
) -> Result<String, AppError> {
    let store = LocalFileStore::current()?;
    let ctx = create_context(&store, config_path)?;
    compose_with(&ctx, options)
}

/// Generate the optimized prompt for `options`, optionally executing it as well.
pub fn generate(
    config_path: Option<&str>,
    options: &RequestOptions,
    execute: bool,
) -> Result<GenerateOutcome, AppError> {
    let store = LocalFileStore::current()?;
    let ctx = create_context(&store, config_path)?;
    generate_with(&ctx, options, execute)
}

fn compose_with<F: LlmClientFactory>(
    ctx: &AppContext<F>,
    options: &RequestOptions,
) -> Result<String, AppError> {
    let session = build_session(ctx.config(), options)?;
    Ok(ctx.composer().render(session.input())?)
}

fn generate_with<F: LlmClientFactory>(
    ctx: &AppContext<F>,
    options: &RequestOptions,
    execute: bool,
) -> Result<GenerateOutcome, AppError> {
    let mut session = build_session(ctx.config(), options)?;
    ctx.generate(&mut session)?;

    let execution_result = if execute {
        ctx.execute(&mut session)?;
        Some(session.generation().execution_result.clone())
    } else {
        None
    };

    Ok(GenerateOutcome {
        optimized_prompt: session.generation().optimized_prompt.clone(),
        execution_result,
    })
}

// =============================================================================
// Wizard API
// =============================================================================

/// Run the interactive wizard in the terminal.
pub fn run_wizard(config_path: Option<&str>) -> Result<WizardSession, AppError> {
    let store = LocalFileStore::current()?;
    let ctx = create_context(&store, config_path)?;
    let mut prompter = DialoguerPrompter::new();
    wizard::run(&ctx, &mut prompter)
}

/// List personas, goals, suggested tones and output languages.
pub fn catalog() -> CatalogListing {
    CatalogListing { personas: PERSONAS, goals: GOALS, tones: &TONES, languages: &LANGUAGES }
}
