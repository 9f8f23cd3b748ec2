//! Status line and footer rendering for the slideshow
//!
//! Provides rendering functions for the status bar (deck title and scene
//! position) and the footer bar (keybinding hints).

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::{current_theme, Theme};

/// Key hints for a scene that can still advance.
pub const SCENE_KEYS: &[(&str, &str)] = &[
    ("enter", "continue"),
    ("r", "start over"),
    ("z", "magnify"),
    ("?", "help"),
    ("q", "quit"),
];

/// Key hints for the last scene.
pub const TERMINAL_KEYS: &[(&str, &str)] = &[
    ("enter", "start over"),
    ("↑↓", "scroll"),
    ("?", "help"),
    ("q", "quit"),
];

/// Key hints while the help overlay is open.
pub const HELP_KEYS: &[(&str, &str)] = &[("any key", "close help")];

/// Compose the status text: deck title and scene position.
pub fn format_status(deck_title: &str, position: usize, total: usize) -> String {
    format!(" {}  ·  {}/{}", deck_title, position + 1, total)
}

/// Render a status line with the given text.
///
/// Displays the text in the secondary text color of the current theme.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str) {
    let theme = current_theme();
    let status = Paragraph::new(text.to_string()).style(Style::default().fg(theme.text_secondary));
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Takes pairs of (key, description) and joins them with " | " separators.
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let spans: Vec<Span<'static>> = build_footer_spans(keys, &theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Each key is highlighted with the theme accent color, descriptions use
/// the secondary text color, and entries are separated by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
