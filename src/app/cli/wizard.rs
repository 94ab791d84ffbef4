//! Wizard command implementation.

use crate::domain::AppError;

pub fn run_wizard(config: Option<&str>) -> Result<(), AppError> {
    let session = crate::app::api::run_wizard(config)?;

    if session.generation().has_optimized_prompt() {
        println!("✅ Último prompt gerado:");
        println!("{}", session.generation().optimized_prompt);
    }
    Ok(())
}
