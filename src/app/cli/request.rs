//! Compose and generate command implementations.

use clap::Args;

use crate::app::api::{self, RequestOptions};
use crate::domain::AppError;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Raw idea, at least 5 characters
    #[arg(short, long)]
    idea: String,
    /// Persona id (see `promptmaster catalog`)
    #[arg(short, long)]
    persona: String,
    /// Goal id (see `promptmaster catalog`)
    #[arg(short, long)]
    goal: String,
    /// Target audience
    #[arg(short, long)]
    audience: Option<String>,
    /// Tone of voice, suggested or free text
    #[arg(short, long)]
    tone: Option<String>,
    /// Output language
    #[arg(short, long)]
    language: Option<String>,
}

impl From<RequestArgs> for RequestOptions {
    fn from(args: RequestArgs) -> Self {
        Self {
            idea: args.idea,
            persona: args.persona,
            goal: args.goal,
            audience: args.audience,
            tone: args.tone,
            language: args.language,
        }
    }
}

pub fn run_compose(config: Option<&str>, args: RequestArgs) -> Result<(), AppError> {
    let prompt = api::compose_request(config, &args.into())?;
    print!("{}", prompt);
    if !prompt.ends_with('\n') {
        println!();
    }
    Ok(())
}

pub fn run_generate(
    config: Option<&str>,
    args: RequestArgs,
    execute: bool,
) -> Result<(), AppError> {
    let outcome = api::generate(config, &args.into(), execute)?;

    println!("{}", outcome.optimized_prompt);
    if let Some(result) = outcome.execution_result {
        println!();
        println!("── Resultado da IA ──");
        println!("{}", result);
    }
    Ok(())
}
