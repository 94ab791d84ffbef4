//! CLI Adapter.

mod catalog;
mod request;
mod wizard;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

use self::request::RequestArgs;

#[derive(Parser)]
#[command(name = "promptmaster")]
#[command(version)]
#[command(
    about = "Turn a raw idea into an optimized LLM prompt through a step-by-step wizard",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./promptmaster.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive wizard (default)
    #[clap(visible_alias = "w")]
    Wizard,
    /// Print the meta-prompt for the given choices without calling the LLM
    #[clap(visible_alias = "c")]
    Compose {
        #[command(flatten)]
        args: RequestArgs,
    },
    /// Ask the LLM for the optimized prompt
    #[clap(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: RequestArgs,
        /// Also run the optimized prompt and print the answer
        #[arg(short = 'x', long)]
        execute: bool,
    },
    /// List personas, goals, tones and output languages
    #[clap(visible_alias = "ls")]
    Catalog,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => wizard::run_wizard(config),
        Commands::Compose { args } => request::run_compose(config, args),
        Commands::Generate { args, execute } => request::run_generate(config, args, execute),
        Commands::Catalog => {
            catalog::run_catalog();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
