use crate::app::session::{Commit, PendingCall, WizardSession};
use crate::domain::{AppConfig, AppError, MetaPromptComposer};
use crate::ports::LlmClientFactory;

/// Application context holding the dependencies the wizard calls out to.
///
/// Acts as the generation orchestrator: it starts a call on the session,
/// hands the request to the LLM collaborator and commits the outcome.
pub struct AppContext<F: LlmClientFactory> {
    client_factory: F,
    composer: MetaPromptComposer,
    config: AppConfig,
}

impl<F: LlmClientFactory> AppContext<F> {
    /// Create a new application context.
    pub fn new(client_factory: F, composer: MetaPromptComposer, config: AppConfig) -> Self {
        Self { client_factory, composer, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn composer(&self) -> &MetaPromptComposer {
        &self.composer
    }

    /// Fresh session using the configured default output language.
    pub fn new_session(&self) -> WizardSession {
        WizardSession::new(self.config.wizard.default_language.clone())
    }

    /// Compose the meta-prompt for the session and ask the LLM for the optimized prompt.
    ///
    /// On success the session moves to the result step. Failures are returned
    /// after the session's generate slot has been marked failed.
    pub fn generate(&self, session: &mut WizardSession) -> Result<Commit, AppError> {
        let call = session.begin_generate(&self.composer)?;
        let outcome = self.submit(&call);
        session.complete(call, outcome)
    }

    /// Run the session's optimized prompt as a standalone request.
    ///
    /// Collaborator failures end up as the session's execution result, so the
    /// only errors returned are the ones that prevent the call from starting.
    pub fn execute(&self, session: &mut WizardSession) -> Result<Commit, AppError> {
        let call = session.begin_execute()?;
        let outcome = self.submit(&call);
        session.complete(call, outcome)
    }

    fn submit(&self, call: &PendingCall) -> Result<String, AppError> {
        let model = &self.config.llm.model;
        tracing::info!(kind = %call.kind(), %model, "calling LLM");

        let client = self.client_factory.create()?;
        client.submit(model, call.request())
    }
}
