//! Interactive wizard loop.
//!
//! Renders the active step through a [`WizardPrompter`], mutates the session's
//! input and drives navigation and the two LLM calls.

use crate::app::AppContext;
use crate::app::session::WizardSession;
use crate::domain::generation::GENERATION_FAILURE_NOTICE;
use crate::domain::step::progress_line;
use crate::domain::{AppError, CatalogEntry, GOALS, LANGUAGES, PERSONAS, TONES, WizardStep};
use crate::ports::{LlmClientFactory, WizardPrompter};

const BACK_LABEL: &str = "← Voltar";
const CUSTOM_TONE_LABEL: &str = "Outro (digitar)";
const UNSET: &str = "(não definido)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy)]
enum DetailsAction {
    Audience,
    Tone,
    Language,
    Generate,
    Back,
    JumpBack,
    Quit,
}

#[derive(Debug, Clone, Copy)]
enum ResultAction {
    Execute,
    Back,
    JumpBack,
    Restart,
    Quit,
}

/// Run the wizard until the user quits or cancels. Returns the final session.
pub fn run<F, P>(ctx: &AppContext<F>, prompter: &mut P) -> Result<WizardSession, AppError>
where
    F: LlmClientFactory,
    P: WizardPrompter,
{
    let mut session = ctx.new_session();

    loop {
        prompter.info(&progress_line(session.step()));

        let flow = match session.step() {
            WizardStep::Idea => idea_step(&mut session, prompter)?,
            WizardStep::Persona => persona_step(&mut session, prompter)?,
            WizardStep::Goal => goal_step(&mut session, prompter)?,
            WizardStep::Details => details_step(ctx, &mut session, prompter)?,
            WizardStep::Result => result_step(ctx, &mut session, prompter)?,
        };

        if flow == Flow::Quit {
            tracing::debug!(step = %session.step(), "wizard finished");
            return Ok(session);
        }
    }
}

fn idea_step<P: WizardPrompter>(
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<Flow, AppError> {
    let current = session.input().idea.clone();
    let Some(idea) = prompter.input("O que você quer criar hoje?", &current, true)? else {
        return Ok(Flow::Quit);
    };

    session.input_mut().set_idea(idea);
    try_advance(session, prompter);
    Ok(Flow::Continue)
}

fn persona_step<P: WizardPrompter>(
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<Flow, AppError> {
    let current = session.input().persona.map(|p| p.id);
    let Some(choice) = pick_entry(prompter, "Quem é o especialista?", PERSONAS, current)? else {
        return Ok(Flow::Quit);
    };

    match choice {
        Some(index) => {
            session.input_mut().select_persona(&PERSONAS[index]);
            try_advance(session, prompter);
        }
        None => {
            session.retreat();
        }
    }
    Ok(Flow::Continue)
}

fn goal_step<P: WizardPrompter>(
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<Flow, AppError> {
    let current = session.input().goal.map(|g| g.id);
    let Some(choice) = pick_entry(prompter, "Qual é o objetivo final?", GOALS, current)? else {
        return Ok(Flow::Quit);
    };

    match choice {
        Some(index) => {
            session.input_mut().select_goal(&GOALS[index]);
            try_advance(session, prompter);
        }
        None => {
            session.retreat();
        }
    }
    Ok(Flow::Continue)
}

fn details_step<F, P>(
    ctx: &AppContext<F>,
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<Flow, AppError>
where
    F: LlmClientFactory,
    P: WizardPrompter,
{
    let summary = session.input().summary();
    if !summary.is_empty() {
        prompter.info(&format!("Resumo do Pedido: {}", summary.join(" | ")));
    }

    let input = session.input();
    let menu = [
        (DetailsAction::Audience, format!("Público Alvo: {}", or_unset(&input.audience))),
        (DetailsAction::Tone, format!("Tom de Voz: {}", or_unset(&input.tone))),
        (DetailsAction::Language, format!("Idioma da Resposta: {}", input.output_language)),
        (DetailsAction::Generate, "✨ Criar Prompt Perfeito".to_string()),
        (DetailsAction::Back, BACK_LABEL.to_string()),
        (DetailsAction::JumpBack, "Ir para etapa...".to_string()),
        (DetailsAction::Quit, "Sair".to_string()),
    ];
    let default = menu.iter().position(|(action, _)| matches!(action, DetailsAction::Generate));

    let Some(action) = pick_action(prompter, "Refinamento Final", &menu, default.unwrap_or(0))?
    else {
        return Ok(Flow::Quit);
    };

    match action {
        DetailsAction::Audience => {
            let current = session.input().audience.clone();
            if let Some(audience) = prompter.input(
                "Público Alvo (Ex: C-Level, Estudantes, Desenvolvedores Senior...)",
                &current,
                true,
            )? {
                session.input_mut().set_audience(audience);
            }
        }
        DetailsAction::Tone => choose_tone(session, prompter)?,
        DetailsAction::Language => {
            let items: Vec<String> = LANGUAGES.iter().map(|l| l.to_string()).collect();
            let default = LANGUAGES
                .iter()
                .position(|l| *l == session.input().output_language)
                .unwrap_or(0);
            if let Some(index) = prompter.select("Idioma da Resposta", &items, default)? {
                session.input_mut().set_output_language(LANGUAGES[index]);
            }
        }
        DetailsAction::Generate => {
            prompter.info("A IA está processando seu super prompt...");
            if ctx.generate(session).is_err() {
                prompter.alert(GENERATION_FAILURE_NOTICE);
            }
        }
        DetailsAction::Back => {
            session.retreat();
        }
        DetailsAction::JumpBack => jump_back(session, prompter)?,
        DetailsAction::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn result_step<F, P>(
    ctx: &AppContext<F>,
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<Flow, AppError>
where
    F: LlmClientFactory,
    P: WizardPrompter,
{
    let generation = session.generation();
    prompter.show_text("Prompt Otimizado", &generation.optimized_prompt);
    if !generation.execution_result.is_empty() {
        prompter.show_text("Resultado da IA", &generation.execution_result);
    }

    let mut menu = Vec::with_capacity(5);
    if generation.has_optimized_prompt() {
        menu.push((ResultAction::Execute, "🚀 Executar na IA Agora".to_string()));
    }
    menu.push((ResultAction::Back, BACK_LABEL.to_string()));
    menu.push((ResultAction::JumpBack, "Ir para etapa...".to_string()));
    menu.push((ResultAction::Restart, "Criar Novo Prompt".to_string()));
    menu.push((ResultAction::Quit, "Sair".to_string()));

    let Some(action) = pick_action(prompter, "Resultado", &menu, 0)? else {
        return Ok(Flow::Quit);
    };

    match action {
        ResultAction::Execute => {
            prompter.info("Executando o prompt gerado...");
            ctx.execute(session)?;
        }
        ResultAction::Back => {
            session.retreat();
        }
        ResultAction::JumpBack => jump_back(session, prompter)?,
        ResultAction::Restart => session.reset(),
        ResultAction::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

fn choose_tone<P: WizardPrompter>(
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<(), AppError> {
    let mut items: Vec<String> = TONES.iter().map(|t| t.to_string()).collect();
    items.push(CUSTOM_TONE_LABEL.to_string());
    let default = TONES.iter().position(|t| *t == session.input().tone).unwrap_or(0);

    let Some(index) = prompter.select("Tom de Voz", &items, default)? else {
        return Ok(());
    };

    if let Some(tone) = TONES.get(index) {
        session.input_mut().set_tone(*tone);
        return Ok(());
    }

    let current = session.input().tone.clone();
    if let Some(tone) = prompter.input("Ou digite um tom personalizado...", &current, true)? {
        session.input_mut().set_tone(tone);
    }
    Ok(())
}

fn jump_back<P: WizardPrompter>(
    session: &mut WizardSession,
    prompter: &mut P,
) -> Result<(), AppError> {
    let earlier: Vec<WizardStep> =
        WizardStep::ALL.iter().copied().filter(|step| *step < session.step()).collect();
    if earlier.is_empty() {
        return Ok(());
    }

    let items: Vec<String> =
        earlier.iter().map(|step| format!("{}. {}", step.number(), step.label())).collect();
    if let Some(index) = prompter.select("Ir para etapa", &items, 0)? {
        session.jump_back_to(earlier[index]);
    }
    Ok(())
}

fn try_advance<P: WizardPrompter>(session: &mut WizardSession, prompter: &mut P) {
    if let Err(err) = session.advance() {
        prompter.alert(&err.to_string());
    }
}

/// Select from a catalog list with a trailing back entry.
///
/// `Ok(None)` is a cancel, `Ok(Some(None))` is "back".
fn pick_entry<T: CatalogEntry, P: WizardPrompter>(
    prompter: &mut P,
    prompt: &str,
    entries: &[T],
    current: Option<&str>,
) -> Result<Option<Option<usize>>, AppError> {
    let mut items: Vec<String> = entries
        .iter()
        .map(|entry| format!("{}: {}", entry.label(), entry.description()))
        .collect();
    items.push(BACK_LABEL.to_string());

    let default =
        current.and_then(|id| entries.iter().position(|entry| entry.id() == id)).unwrap_or(0);

    Ok(prompter
        .select(prompt, &items, default)?
        .map(|index| if index < entries.len() { Some(index) } else { None }))
}

fn pick_action<A: Copy, P: WizardPrompter>(
    prompter: &mut P,
    prompt: &str,
    menu: &[(A, String)],
    default: usize,
) -> Result<Option<A>, AppError> {
    let items: Vec<String> = menu.iter().map(|(_, label)| label.clone()).collect();
    Ok(prompter.select(prompt, &items, default)?.and_then(|index| menu.get(index)).map(|(a, _)| *a))
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() { UNSET } else { value }
}
