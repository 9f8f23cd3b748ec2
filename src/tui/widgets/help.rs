//! Help overlay for the slideshow.
//!
//! Displays a centered help box with all available keyboard and mouse
//! controls.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::tui::theme::Theme;
use crate::tui::ui::centered_box;

/// Key bindings shown in the overlay, grouped by section.
pub const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("Enter/Space/→", "Continue, or start over at the end"),
            ("r / Home", "Start over from the first scene"),
            ("↑/↓ PgUp/PgDn", "Scroll long scenes"),
        ],
    ),
    (
        "Image",
        &[
            ("z", "Toggle magnifier"),
            ("mouse over", "Magnify while the pointer rests on it"),
        ],
    ),
    (
        "General",
        &[
            ("click", "Activate the button"),
            ("?", "Show this help"),
            ("q / Esc", "Quit"),
        ],
    ),
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: u16 = 62;

/// Closing hint shown at the bottom of the box.
pub const HELP_CLOSE_HINT: &str = "Press any key to close";

/// Build the styled help lines.
pub fn build_help_lines(theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];

    for (section, bindings) in HELP_SECTIONS {
        lines.push(Line::from(Span::styled(
            format!("  {}", section),
            theme.accent_bold_style(),
        )));
        for (key, desc) in bindings.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("    {:<16}", key), theme.accent_style()),
                Span::styled(desc.to_string(), theme.text_style()),
            ]));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        format!("  {}", HELP_CLOSE_HINT),
        theme.text_secondary_style(),
    )));
    lines
}

/// Number of rows the box needs, borders included.
pub fn help_box_height() -> u16 {
    let rows: usize = HELP_SECTIONS
        .iter()
        .map(|(_, bindings)| bindings.len() + 2)
        .sum();
    // leading blank, close hint, two borders
    (rows + 4) as u16
}

/// Modal listing the controls.
pub struct HelpOverlay<'a> {
    theme: &'a Theme,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal = centered_box(area, HELP_BOX_WIDTH, help_box_height());
        Clear.render(modal, buf);
        Paragraph::new(build_help_lines(self.theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(self.theme.accent))
                    .title(" Help "),
            )
            .render(modal, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_quit_and_restart() {
        let text: Vec<String> = build_help_lines(&Theme::ocean())
            .iter()
            .map(|l| l.to_string())
            .collect();
        assert!(text.iter().any(|l| l.contains("Quit")));
        assert!(text.iter().any(|l| l.contains("Start over")));
        assert!(text.iter().any(|l| l.contains(HELP_CLOSE_HINT)));
    }

    #[test]
    fn box_height_matches_lines() {
        let lines = build_help_lines(&Theme::ocean()).len() as u16;
        assert_eq!(help_box_height(), lines + 2);
    }

    #[test]
    fn overlay_renders_title() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);
        HelpOverlay::new(&Theme::ocean()).render(area, &mut buf);
        let text: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Help"));
        assert!(text.contains("Toggle magnifier"));
    }
}
