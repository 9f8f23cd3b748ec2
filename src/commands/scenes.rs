//! Scenes command handler
//!
//! Lists a deck's scenes as a table sized to the terminal, or as JSON.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use terminal_size::{terminal_size, Width};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use storyline::tui::current_theme;
use storyline::{Config, Deck};

use super::resolve_deck;

/// Width used when stdout is not a terminal.
const DEFAULT_WIDTH: usize = 80;

/// Width of every column except the title.
const FIXED_COLUMNS: usize = 4 + 6 + 7 + 22;

#[derive(Debug, Serialize)]
pub struct DeckSummary<'a> {
    pub title: &'a str,
    pub label: &'a str,
    pub scenes: Vec<SceneSummary<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SceneSummary<'a> {
    pub number: usize,
    pub title: &'a str,
    pub image: &'a str,
    pub has_factoid: bool,
    pub info_boxes: usize,
    pub button_text: &'a str,
}

/// List the scenes of the selected deck.
pub fn handle(config: &Config, deck: Option<&Path>, json: bool) -> Result<()> {
    let deck = resolve_deck(config, deck)?;
    let summary = summarize(&deck);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH);
    let theme = current_theme();
    let lines = format_table(&summary, width);
    if let Some((header, rows)) = lines.split_first() {
        println!("{}", theme.accent_text(header));
        for row in rows {
            println!("{}", theme.primary_text(row));
        }
    }
    Ok(())
}

pub fn summarize(deck: &Deck) -> DeckSummary<'_> {
    let scenes = deck
        .scenes()
        .iter()
        .enumerate()
        .map(|(i, record)| SceneSummary {
            number: i + 1,
            title: record.title(),
            image: record.image().as_str(),
            has_factoid: record.factoid().is_some(),
            info_boxes: record.info_boxes().len(),
            button_text: record.button_text(),
        })
        .collect();

    DeckSummary {
        title: &deck.title,
        label: &deck.label,
        scenes,
    }
}

/// Title line, column header, then one row per scene.
pub fn format_table(summary: &DeckSummary, width: usize) -> Vec<String> {
    let title_width = width.saturating_sub(FIXED_COLUMNS).max(10);
    let last = summary.scenes.len();

    let mut lines = vec![format!(
        "{} ({} {}s)",
        summary.title,
        last,
        summary.label.to_lowercase()
    )];
    lines.push(format!(
        "{:>3} {} {:<5} {:<6} {}",
        "#",
        pad("Title", title_width),
        "Note",
        "Boxes",
        "Button"
    ));

    for scene in &summary.scenes {
        let button = if scene.number == last {
            "(start over)".to_string()
        } else {
            truncate(scene.button_text, 20)
        };
        lines.push(format!(
            "{:>3} {} {:<5} {:<6} {}",
            scene.number,
            pad(&truncate(scene.title, title_width), title_width),
            if scene.has_factoid { "yes" } else { "-" },
            scene.info_boxes,
            button
        ));
    }
    lines
}

/// Cut `text` to at most `max` display columns, marking the cut with "…".
fn truncate(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pad to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}
