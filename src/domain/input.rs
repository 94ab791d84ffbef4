//! The record of everything the user has specified in a wizard session.

use crate::domain::AppError;
use crate::domain::catalog::{self, GoalOption, PersonaOption};

/// Output language a fresh input model starts with.
pub const DEFAULT_OUTPUT_LANGUAGE: &str = "Português (Brasil)";

/// User input collected across the wizard steps.
///
/// Every field is independently settable; selecting a persona or goal never
/// clears other fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputModel {
    pub idea: String,
    pub persona: Option<&'static PersonaOption>,
    pub goal: Option<&'static GoalOption>,
    pub audience: String,
    /// Suggested or custom tone; last write wins.
    pub tone: String,
    pub output_language: String,
}

impl Default for InputModel {
    fn default() -> Self {
        Self::with_language(DEFAULT_OUTPUT_LANGUAGE)
    }
}

impl InputModel {
    /// Empty model whose output language starts at `language`.
    pub fn with_language(language: impl Into<String>) -> Self {
        Self {
            idea: String::new(),
            persona: None,
            goal: None,
            audience: String::new(),
            tone: String::new(),
            output_language: language.into(),
        }
    }

    pub fn set_idea(&mut self, idea: impl Into<String>) {
        self.idea = idea.into();
    }

    pub fn select_persona(&mut self, persona: &'static PersonaOption) {
        self.persona = Some(persona);
    }

    /// Select a persona by catalog id.
    pub fn select_persona_id(&mut self, id: &str) -> Result<(), AppError> {
        let persona =
            catalog::find_persona(id).ok_or_else(|| AppError::UnknownPersona(id.to_string()))?;
        self.select_persona(persona);
        Ok(())
    }

    pub fn select_goal(&mut self, goal: &'static GoalOption) {
        self.goal = Some(goal);
    }

    /// Select a goal by catalog id.
    pub fn select_goal_id(&mut self, id: &str) -> Result<(), AppError> {
        let goal = catalog::find_goal(id).ok_or_else(|| AppError::UnknownGoal(id.to_string()))?;
        self.select_goal(goal);
        Ok(())
    }

    pub fn set_audience(&mut self, audience: impl Into<String>) {
        self.audience = audience.into();
    }

    pub fn set_tone(&mut self, tone: impl Into<String>) {
        self.tone = tone.into();
    }

    pub fn set_output_language(&mut self, language: impl Into<String>) {
        self.output_language = language.into();
    }

    /// Number of characters in the idea, as counted by the IDEA gate.
    pub fn idea_len(&self) -> usize {
        self.idea.chars().count()
    }

    /// Short labels describing the choices made so far (persona, goal, audience).
    pub fn summary(&self) -> Vec<String> {
        let mut items = Vec::new();
        if let Some(persona) = self.persona {
            items.push(format!("Agente: {}", persona.label));
        }
        if let Some(goal) = self.goal {
            items.push(format!("Objetivo: {}", goal.label));
        }
        if !self.audience.is_empty() {
            items.push(format!("Para: {}", self.audience));
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_empty_with_default_language() {
        let model = InputModel::default();
        assert!(model.idea.is_empty());
        assert!(model.persona.is_none());
        assert!(model.goal.is_none());
        assert!(model.audience.is_empty());
        assert!(model.tone.is_empty());
        assert_eq!(model.output_language, DEFAULT_OUTPUT_LANGUAGE);
    }

    #[test]
    fn selecting_persona_or_goal_keeps_other_fields() {
        let mut model = InputModel::default();
        model.set_idea("Uma ideia qualquer");
        model.set_audience("Estudantes");
        model.set_tone("Didático e Claro");

        model.select_persona_id("educator").unwrap();
        model.select_goal_id("presentation").unwrap();

        assert_eq!(model.idea, "Uma ideia qualquer");
        assert_eq!(model.audience, "Estudantes");
        assert_eq!(model.tone, "Didático e Claro");
        assert_eq!(model.persona.map(|p| p.id), Some("educator"));
        assert_eq!(model.goal.map(|g| g.id), Some("presentation"));
    }

    #[test]
    fn tone_last_write_wins() {
        let mut model = InputModel::default();
        model.set_tone("Amigável e Casual");
        model.set_tone("sarcástico, mas gentil");
        assert_eq!(model.tone, "sarcástico, mas gentil");
    }

    #[test]
    fn unknown_ids_are_rejected_without_touching_the_model() {
        let mut model = InputModel::default();
        model.select_persona_id("chef").unwrap();

        let err = model.select_persona_id("astronaut").unwrap_err();
        assert!(matches!(err, AppError::UnknownPersona(id) if id == "astronaut"));
        assert_eq!(model.persona.map(|p| p.id), Some("chef"));

        assert!(matches!(model.select_goal_id("poem"), Err(AppError::UnknownGoal(_))));
        assert!(model.goal.is_none());
    }

    #[test]
    fn idea_len_counts_characters_not_bytes() {
        let mut model = InputModel::default();
        model.set_idea("ação!");
        assert_eq!(model.idea_len(), 5);
        assert!(model.idea.len() > 5);
    }

    #[test]
    fn summary_lists_only_present_fields() {
        let mut model = InputModel::default();
        assert!(model.summary().is_empty());

        model.select_goal_id("email").unwrap();
        model.set_audience("C-Level");
        assert_eq!(model.summary(), vec!["Objetivo: E-mail Marketing", "Para: C-Level"]);
    }
}
