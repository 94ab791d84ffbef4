//! Catalog command implementation.

use crate::app::api;
use crate::domain::CatalogEntry;

pub fn run_catalog() {
    let listing = api::catalog();

    println!("Personas:");
    for persona in listing.personas {
        println!("  {:<16} {} - {}", persona.id(), persona.label(), persona.description());
    }

    println!("\nGoals:");
    for goal in listing.goals {
        println!("  {:<16} {} - {}", goal.id(), goal.label(), goal.description());
    }

    println!("\nTones:");
    for tone in listing.tones {
        println!("  • {}", tone);
    }

    println!("\nLanguages:");
    for language in listing.languages {
        println!("  • {}", language);
    }
}
