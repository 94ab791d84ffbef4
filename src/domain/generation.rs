//! Status and results of the two LLM calls a wizard session can make.

use std::fmt;

/// Stored as the optimized prompt when the LLM answers a generate call with no text.
pub const EMPTY_GENERATION_FALLBACK: &str = "Não foi possível gerar o prompt. Tente novamente.";

/// Stored as the execution result when the LLM answers an execute call with no text.
pub const EMPTY_EXECUTION_FALLBACK: &str = "Sem resposta da IA.";

/// Stored as the execution result when an execute call fails.
pub const EXECUTION_FAILURE_MESSAGE: &str = "Erro ao executar o prompt gerado.";

/// Blocking notification shown when a generate call fails.
pub const GENERATION_FAILURE_NOTICE: &str = "Erro ao gerar prompt. Verifique o console.";

/// Lifecycle of a single call slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallStatus {
    #[default]
    Idle,
    Running,
    Succeeded,
    Failed,
}

impl CallStatus {
    pub fn is_running(self) -> bool {
        self == CallStatus::Running
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallStatus::Idle => "idle",
            CallStatus::Running => "running",
            CallStatus::Succeeded => "succeeded",
            CallStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two independent call slots a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallKind {
    /// Synthesize the optimized prompt from the composed meta-prompt.
    Generate,
    /// Run the optimized prompt as a standalone request.
    Execute,
}

impl CallKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CallKind::Generate => "generate",
            CallKind::Execute => "execute",
        }
    }

    /// Placeholder stored when the collaborator returns no usable text.
    pub fn empty_response_fallback(self) -> &'static str {
        match self {
            CallKind::Generate => EMPTY_GENERATION_FALLBACK,
            CallKind::Execute => EMPTY_EXECUTION_FALLBACK,
        }
    }
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Results of a wizard session's LLM calls. Recreated on every reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSession {
    pub optimized_prompt: String,
    pub execution_result: String,
    pub generation_status: CallStatus,
    pub execution_status: CallStatus,
}

impl GenerationSession {
    pub fn status(&self, kind: CallKind) -> CallStatus {
        match kind {
            CallKind::Generate => self.generation_status,
            CallKind::Execute => self.execution_status,
        }
    }

    pub(crate) fn set_status(&mut self, kind: CallKind, status: CallStatus) {
        match kind {
            CallKind::Generate => self.generation_status = status,
            CallKind::Execute => self.execution_status = status,
        }
    }

    /// Whether an optimized prompt is available to execute.
    pub fn has_optimized_prompt(&self) -> bool {
        !self.optimized_prompt.is_empty()
    }
}

/// Collapse a collaborator answer to the text that gets stored: an empty answer
/// becomes the call kind's placeholder.
pub fn text_or_fallback(kind: CallKind, text: String) -> String {
    if text.is_empty() { kind.empty_response_fallback().to_string() } else { text }
}
