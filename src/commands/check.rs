//! Check command handler

use std::path::Path;

use anyhow::{Context, Result};

use storyline::tui::current_theme;
use storyline::Deck;

/// Validate a deck file and report what it contains.
pub fn handle(path: &Path) -> Result<()> {
    let deck = Deck::load(path).with_context(|| format!("{} is not a valid deck", path.display()))?;
    println!("{}", current_theme().success_text(&report(path, &deck)));
    Ok(())
}

/// One-line summary of a valid deck.
pub fn report(path: &Path, deck: &Deck) -> String {
    let noun = if deck.len() == 1 { "scene" } else { "scenes" };
    format!(
        "{}: \"{}\", {} {}",
        path.display(),
        deck.title,
        deck.len(),
        noun
    )
}
