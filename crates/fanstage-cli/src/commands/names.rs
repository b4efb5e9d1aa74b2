//! Names command - autocomplete for the inbox name filter

use std::path::Path;

use anyhow::{Context, Result};
use fanstage_config::Config;
use fanstage_core::load_letters;
use fanstage_inbox::suggest_names;

pub fn handle(letters: &Path, query: &str, limit: Option<usize>, config: &Config) -> Result<()> {
    let letters = load_letters(letters)
        .with_context(|| format!("Failed to load letters from {}", letters.display()))?;
    let limit = limit.unwrap_or(config.inbox.autocomplete_limit);

    let names = suggest_names(&letters, query, limit);
    if names.is_empty() {
        println!("No matching names.");
    } else {
        for name in names {
            println!("{}", name);
        }
    }

    Ok(())
}
