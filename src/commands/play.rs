//! Play command handler

use std::path::Path;

use anyhow::{bail, Result};

use storyline::logging;
use storyline::tui::{current_theme, SceneApp, SlideshowOptions};
use storyline::Config;

use super::resolve_deck;

/// Run the slideshow for the selected deck.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, deck: Option<&Path>) -> Result<()> {
    let theme = current_theme();

    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("play needs an interactive terminal; use `storyline scenes` to list a deck instead");
    }

    let deck = resolve_deck(config, deck)?;
    let total = deck.len();
    let title = deck.title.clone();

    match logging::init(&config.logging, Config::log_dir().as_deref()) {
        Ok(Some(path)) => tracing::info!(log = %path.display(), deck = %title, "starting"),
        Ok(None) => {}
        Err(e) => eprintln!("{}", theme.secondary_text(&format!("Logging disabled: {:#}", e))),
    }

    let options = SlideshowOptions {
        theme: theme.clone(),
        show_footer: config.display.show_footer,
        mouse: config.display.mouse,
        ..Default::default()
    };

    // Scope the app so the terminal is restored before printing
    let visited = {
        let mut app = SceneApp::from_deck(deck, options)?;
        app.run()?
    };

    println!(
        "{}",
        theme.primary_text(&format!("{}: viewed {} of {} scenes", title, visited, total))
    );
    Ok(())
}
