//! Wizard session: the single owner of step, input and generation state.

use crate::domain::generation::{EXECUTION_FAILURE_MESSAGE, text_or_fallback};
use crate::domain::{
    AppError, CallKind, CallStatus, GenerationSession, InputModel, MetaPromptComposer, WizardStep,
};

/// A call that has been started and awaits the collaborator's answer.
///
/// Carries the session epoch it was started in so that an answer arriving
/// after a reset is dropped instead of being written into the new session.
#[derive(Debug)]
#[must_use = "a started call must be completed, or its slot stays running"]
pub struct PendingCall {
    kind: CallKind,
    epoch: u64,
    request: String,
}

impl PendingCall {
    pub fn kind(&self) -> CallKind {
        self.kind
    }

    /// Text to submit to the collaborator.
    pub fn request(&self) -> &str {
        &self.request
    }
}

/// What happened to a completed call's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commit {
    /// The answer was stored in the session.
    Applied,
    /// The session was reset while the call ran; the answer was dropped.
    Discarded,
}

/// One run of the wizard.
#[derive(Debug, Clone)]
pub struct WizardSession {
    step: WizardStep,
    input: InputModel,
    generation: GenerationSession,
    epoch: u64,
    default_language: String,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new(crate::domain::DEFAULT_OUTPUT_LANGUAGE)
    }
}

impl WizardSession {
    /// Fresh session whose output language (also after reset) is `default_language`.
    pub fn new(default_language: impl Into<String>) -> Self {
        let default_language = default_language.into();
        Self {
            step: WizardStep::FIRST,
            input: InputModel::with_language(default_language.clone()),
            generation: GenerationSession::default(),
            epoch: 0,
            default_language,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn input(&self) -> &InputModel {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputModel {
        &mut self.input
    }

    pub fn generation(&self) -> &GenerationSession {
        &self.generation
    }

    /// Counter bumped on every reset.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn can_advance(&self) -> bool {
        self.step.can_advance(&self.input)
    }

    /// Move forward one step if the current step's gate is satisfied.
    pub fn advance(&mut self) -> Result<WizardStep, AppError> {
        if let Some(reason) = self.step.blocked_reason(&self.input) {
            return Err(AppError::IncompleteInput(reason));
        }
        self.step = self.step.advance();
        Ok(self.step)
    }

    pub fn retreat(&mut self) -> WizardStep {
        self.step = self.step.retreat();
        self.step
    }

    /// Navigate directly to an earlier step; forward targets leave the step unchanged.
    pub fn jump_back_to(&mut self, target: WizardStep) -> WizardStep {
        self.step = self.step.jump_back_to(target);
        self.step
    }

    /// Start over: first step, empty input, no generation results.
    ///
    /// Calls still in flight will be discarded when they complete.
    pub fn reset(&mut self) {
        self.epoch += 1;
        self.step = WizardStep::FIRST;
        self.input = InputModel::with_language(self.default_language.clone());
        self.generation = GenerationSession::default();
        tracing::debug!(epoch = self.epoch, "wizard session reset");
    }

    /// Start the generate call: compose the meta-prompt and mark the slot running.
    pub fn begin_generate(
        &mut self,
        composer: &MetaPromptComposer,
    ) -> Result<PendingCall, AppError> {
        if self.step != WizardStep::Details {
            return Err(AppError::IncompleteInput(format!(
                "A geração do prompt está disponível na etapa {} (atual: {})",
                WizardStep::Details,
                self.step
            )));
        }
        self.ensure_idle(CallKind::Generate)?;

        let request = composer.render(&self.input)?;
        Ok(self.start(CallKind::Generate, request))
    }

    /// Start the execute call with the current optimized prompt as the request.
    pub fn begin_execute(&mut self) -> Result<PendingCall, AppError> {
        if !self.generation.has_optimized_prompt() {
            return Err(AppError::IncompleteInput(
                "Gere um prompt otimizado antes de executá-lo".to_string(),
            ));
        }
        self.ensure_idle(CallKind::Execute)?;

        let request = self.generation.optimized_prompt.clone();
        Ok(self.start(CallKind::Execute, request))
    }

    /// Store the collaborator's answer for `call`.
    ///
    /// Generate failures are returned to the caller after marking the slot failed;
    /// nothing is stored and the step does not change. Execute failures are turned
    /// into a displayable message and never returned.
    pub fn complete(
        &mut self,
        call: PendingCall,
        outcome: Result<String, AppError>,
    ) -> Result<Commit, AppError> {
        if call.epoch != self.epoch {
            tracing::info!(
                kind = %call.kind,
                call_epoch = call.epoch,
                session_epoch = self.epoch,
                "discarding result from a session that was reset"
            );
            return Ok(Commit::Discarded);
        }

        match (call.kind, outcome) {
            (CallKind::Generate, Ok(text)) => {
                if text.is_empty() {
                    tracing::warn!("LLM returned no text for the generate call");
                }
                self.generation.optimized_prompt = text_or_fallback(CallKind::Generate, text);
                self.generation.set_status(CallKind::Generate, CallStatus::Succeeded);
                self.step = WizardStep::Result;
            }
            (CallKind::Generate, Err(err)) => {
                tracing::error!(error = %err, "Error generating optimized prompt");
                self.generation.set_status(CallKind::Generate, CallStatus::Failed);
                return Err(err);
            }
            (CallKind::Execute, Ok(text)) => {
                if text.is_empty() {
                    tracing::warn!("LLM returned no text for the execute call");
                }
                self.generation.execution_result = text_or_fallback(CallKind::Execute, text);
                self.generation.set_status(CallKind::Execute, CallStatus::Succeeded);
            }
            (CallKind::Execute, Err(err)) => {
                tracing::error!(error = %err, "Error executing prompt");
                self.generation.execution_result = EXECUTION_FAILURE_MESSAGE.to_string();
                self.generation.set_status(CallKind::Execute, CallStatus::Failed);
            }
        }

        Ok(Commit::Applied)
    }

    fn ensure_idle(&self, kind: CallKind) -> Result<(), AppError> {
        if self.generation.status(kind).is_running() {
            return Err(AppError::CallInFlight(kind.as_str()));
        }
        Ok(())
    }

    fn start(&mut self, kind: CallKind, request: String) -> PendingCall {
        self.generation.set_status(kind, CallStatus::Running);
        tracing::debug!(%kind, epoch = self.epoch, "call started");
        PendingCall { kind, epoch: self.epoch, request }
    }
}
