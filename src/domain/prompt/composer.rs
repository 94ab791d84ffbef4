use std::borrow::Cow;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::InputModel;
use crate::domain::catalog::CatalogEntry;

use super::error::PromptCompositionError;

/// Name reported for the built-in template.
pub const EMBEDDED_TEMPLATE_NAME: &str = "meta_prompt.j2";

static EMBEDDED_TEMPLATE: &str = include_str!("../../assets/prompts/meta_prompt.j2");

/// Renders an [`InputModel`] into the meta-prompt sent to the LLM.
///
/// The template is plain text with minijinja placeholders. Available variables:
/// `idea`, `persona.label`, `persona.description`, `goal.label`,
/// `goal.description`, `audience`, `tone`, `output_language`. Missing
/// persona/goal selections render as empty strings.
#[derive(Debug, Clone)]
pub struct MetaPromptComposer {
    name: String,
    source: Cow<'static, str>,
}

impl Default for MetaPromptComposer {
    fn default() -> Self {
        Self::embedded()
    }
}

impl MetaPromptComposer {
    /// Composer backed by the template compiled into the binary.
    pub fn embedded() -> Self {
        Self { name: EMBEDDED_TEMPLATE_NAME.to_string(), source: Cow::Borrowed(EMBEDDED_TEMPLATE) }
    }

    /// Composer backed by a caller-supplied template.
    ///
    /// The template is compiled and test-rendered against an empty model so that
    /// syntax errors and unknown variables surface here rather than mid-wizard.
    pub fn from_source(
        name: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self, PromptCompositionError> {
        let composer = Self { name: name.into(), source: Cow::Owned(source.into()) };

        let env = template_environment();
        env.template_from_str(&composer.source).map_err(|err| {
            PromptCompositionError::InvalidTemplate {
                template: composer.name.clone(),
                reason: err.to_string(),
            }
        })?;
        composer.render(&InputModel::default())?;

        Ok(composer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the meta-prompt for `model`. Pure: no I/O, no clock, no randomness.
    pub fn render(&self, model: &InputModel) -> Result<String, PromptCompositionError> {
        template_environment().render_str(&self.source, MetaPromptContext::from(model)).map_err(
            |err| PromptCompositionError::Render {
                template: self.name.clone(),
                reason: err.to_string(),
            },
        )
    }
}

/// Compose the meta-prompt with the embedded template.
///
/// Total over every `InputModel`, including ones without persona or goal.
pub fn compose(model: &InputModel) -> String {
    MetaPromptComposer::embedded()
        .render(model)
        .expect("embedded meta-prompt template must render for every input model")
}

fn template_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env
}

#[derive(Debug, Serialize)]
struct MetaPromptContext<'a> {
    idea: &'a str,
    persona: Facet,
    goal: Facet,
    audience: &'a str,
    tone: &'a str,
    output_language: &'a str,
}

#[derive(Debug, Default, Serialize)]
struct Facet {
    label: &'static str,
    description: &'static str,
}

impl Facet {
    fn of<T: CatalogEntry>(entry: Option<&T>) -> Self {
        entry
            .map(|entry| Facet { label: entry.label(), description: entry.description() })
            .unwrap_or_default()
    }
}

impl<'a> From<&'a InputModel> for MetaPromptContext<'a> {
    fn from(model: &'a InputModel) -> Self {
        Self {
            idea: &model.idea,
            persona: Facet::of(model.persona),
            goal: Facet::of(model.goal),
            audience: &model.audience,
            tone: &model.tone,
            output_language: &model.output_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_model() -> InputModel {
        let mut model = InputModel::default();
        model.set_idea("Quero criar um curso sobre finanças pessoais para jovens...");
        model.select_persona_id("copywriter").unwrap();
        model.select_goal_id("article").unwrap();
        model
    }

    #[test]
    fn composed_request_names_persona_and_goal() {
        let prompt = compose(&scenario_model());

        assert!(prompt.contains("\"Copywriter Senior\""));
        assert!(prompt.contains("\"Artigo / Blog Post\""));
        assert!(prompt.contains("Especialista em textos persuasivos e conversão."));
        assert!(prompt.contains("Quero criar um curso sobre finanças pessoais para jovens..."));
        assert!(prompt.contains("\"Português (Brasil)\""));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let prompt = compose(&scenario_model());
        let markers = [
            "Especialista Mundial em Engenharia de Prompts",
            "1. Ideia Central:",
            "2. Persona/Agente:",
            "3. Objetivo Final:",
            "4. Público Alvo:",
            "5. Tom de Voz:",
            "6. Idioma de Saída:",
            "INSTRUÇÕES:",
            "primeira pessoa",
            "passo a passo",
            "formato de saída",
            "Tom e Público",
            "APENAS o texto do prompt",
        ];

        let positions: Vec<usize> =
            markers.iter().map(|marker| prompt.find(marker).expect(marker)).collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn absent_persona_and_goal_render_empty_references() {
        let prompt = compose(&InputModel::default());
        assert!(prompt.contains("2. Persona/Agente: \"\" ()"));
        assert!(prompt.contains("3. Objetivo Final: \"\" ()"));
    }

    #[test]
    fn compose_is_deterministic() {
        let model = scenario_model();
        assert_eq!(compose(&model), compose(&model.clone()));
    }

    #[test]
    fn tone_change_only_touches_tone_line() {
        let mut model = scenario_model();
        model.set_tone("Profissional e Formal");
        let before = compose(&model);
        model.set_tone("Humorístico e Divertido");
        let after = compose(&model);

        let differing: Vec<(&str, &str)> =
            before.lines().zip(after.lines()).filter(|(a, b)| a != b).collect();
        assert_eq!(before.lines().count(), after.lines().count());
        assert_eq!(
            differing,
            vec![(
                "5. Tom de Voz: \"Profissional e Formal\"",
                "5. Tom de Voz: \"Humorístico e Divertido\""
            )]
        );
    }

    #[test]
    fn user_text_is_not_interpreted_as_template() {
        let mut model = scenario_model();
        model.set_idea("{{ tone }} <b>&</b>");
        let prompt = compose(&model);
        assert!(prompt.contains("\"{{ tone }} <b>&</b>\""));
    }

    #[test]
    fn custom_template_renders_model() {
        let composer =
            MetaPromptComposer::from_source("short.j2", "{{ persona.label }} -> {{ goal.label }}")
                .unwrap();
        assert_eq!(composer.name(), "short.j2");
        assert_eq!(
            composer.render(&scenario_model()).unwrap(),
            "Copywriter Senior -> Artigo / Blog Post"
        );
    }

    #[test]
    fn custom_template_with_syntax_error_is_rejected() {
        let err = MetaPromptComposer::from_source("broken.j2", "{{ idea ").unwrap_err();
        assert!(matches!(
            err,
            PromptCompositionError::InvalidTemplate { template, .. } if template == "broken.j2"
        ));
    }

    #[test]
    fn custom_template_with_unknown_variable_is_rejected() {
        let err = MetaPromptComposer::from_source("typo.j2", "{{ ideia }}").unwrap_err();
        assert!(matches!(err, PromptCompositionError::Render { .. }));
    }
}
