use std::fmt;

use crate::domain::InputModel;

/// Minimum idea length (in characters) required to leave the IDEA step.
pub const MIN_IDEA_CHARS: usize = 5;

/// The ordered steps of the wizard.
///
/// Navigation is a pure function of the current step and the input model;
/// nothing here holds hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    /// Raw idea, free text.
    Idea,
    /// Persona the LLM should adopt.
    Persona,
    /// Output format the user wants.
    Goal,
    /// Optional refinements: audience, tone, language.
    Details,
    /// Generated prompt and execution preview.
    Result,
}

impl WizardStep {
    /// All steps in order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Idea,
        WizardStep::Persona,
        WizardStep::Goal,
        WizardStep::Details,
        WizardStep::Result,
    ];

    pub const FIRST: WizardStep = WizardStep::Idea;
    pub const LAST: WizardStep = WizardStep::Result;

    /// Zero-based position in the wizard.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<WizardStep> {
        Self::ALL.get(index).copied()
    }

    /// One-based number shown to the user.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Idea => "Ideia",
            WizardStep::Persona => "Agente",
            WizardStep::Goal => "Objetivo",
            WizardStep::Details => "Detalhes",
            WizardStep::Result => "Resultado",
        }
    }

    /// Completion ratio in `[0.0, 1.0]`.
    pub fn progress(self) -> f32 {
        self.index() as f32 / (Self::ALL.len() - 1) as f32
    }

    /// Whether the gate for leaving this step is satisfied by `model`.
    pub fn can_advance(self, model: &InputModel) -> bool {
        match self {
            WizardStep::Idea => model.idea_len() >= MIN_IDEA_CHARS,
            WizardStep::Persona => model.persona.is_some(),
            WizardStep::Goal => model.goal.is_some(),
            WizardStep::Details => true,
            WizardStep::Result => false,
        }
    }

    /// Next step, clamped at `Result`. Callers check `can_advance` first.
    pub fn advance(self) -> WizardStep {
        Self::from_index(self.index() + 1).unwrap_or(Self::LAST)
    }

    /// Previous step, clamped at `Idea`.
    pub fn retreat(self) -> WizardStep {
        self.index().checked_sub(1).and_then(Self::from_index).unwrap_or(Self::FIRST)
    }

    /// Direct navigation to an earlier (or the same) step; forward targets are ignored.
    pub fn jump_back_to(self, target: WizardStep) -> WizardStep {
        if target <= self { target } else { self }
    }

    /// Human-readable reason the gate is closed, if it is.
    pub fn blocked_reason(self, model: &InputModel) -> Option<String> {
        if self.can_advance(model) {
            return None;
        }
        let reason = match self {
            WizardStep::Idea => format!(
                "Descreva a ideia com pelo menos {} caracteres (atualmente {})",
                MIN_IDEA_CHARS,
                model.idea_len()
            ),
            WizardStep::Persona => "Selecione um agente antes de continuar".to_string(),
            WizardStep::Goal => "Selecione um objetivo antes de continuar".to_string(),
            WizardStep::Details => unreachable!("details gate is always open"),
            WizardStep::Result => "Resultado é a etapa final".to_string(),
        };
        Some(reason)
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Render a one-line progress indicator, e.g. `[✓ Ideia] >2 Agente< ... (25%)`.
///
/// Completed steps carry a check mark and the current step is wrapped in `>` `<`.
pub fn progress_line(current: WizardStep) -> String {
    let steps = WizardStep::ALL
        .iter()
        .map(|step| {
            if *step < current {
                format!("[✓ {}]", step.label())
            } else if *step == current {
                format!(">{} {}<", step.number(), step.label())
            } else {
                format!("[{} {}]", step.number(), step.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("{} ({:.0}%)", steps, current.progress() * 100.0)
}
