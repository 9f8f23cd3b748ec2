//! Progress indicator for the slideshow.
//!
//! One marker per scene: scenes already seen are completed, the scene on
//! screen is active, the rest are pending. The indicator is a projection of
//! `(position, total)` and keeps no state of its own.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::theme::Theme;

/// Visual state of one progress marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerState {
    Completed,
    Active,
    Pending,
}

impl MarkerState {
    /// Glyph drawn for this state.
    pub fn glyph(self) -> char {
        match self {
            MarkerState::Completed => '●',
            MarkerState::Active => '◉',
            MarkerState::Pending => '○',
        }
    }

    fn style(self, theme: &Theme) -> Style {
        match self {
            MarkerState::Completed => Style::default().fg(theme.completed),
            MarkerState::Active => Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
            MarkerState::Pending => Style::default().fg(theme.pending),
        }
    }
}

/// Compute the marker states for `total` scenes with `position` on screen.
pub fn marker_states(position: usize, total: usize) -> Vec<MarkerState> {
    (0..total)
        .map(|i| {
            if i < position {
                MarkerState::Completed
            } else if i == position {
                MarkerState::Active
            } else {
                MarkerState::Pending
            }
        })
        .collect()
}

/// Caption such as "Clue 2 of 5" (position is zero-based).
pub fn format_caption(label: &str, position: usize, total: usize) -> String {
    format!("{} {} of {}", label, position + 1, total)
}

/// Centered row of progress markers.
pub struct ProgressIndicator<'a> {
    position: usize,
    total: usize,
    theme: &'a Theme,
}

impl<'a> ProgressIndicator<'a> {
    pub fn new(position: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            position,
            total,
            theme,
        }
    }

    pub fn states(&self) -> Vec<MarkerState> {
        marker_states(self.position, self.total)
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.total * 2);
        for (i, state) in self.states().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(state.glyph().to_string(), state.style(self.theme)));
        }
        Line::from(spans)
    }
}

impl Widget for ProgressIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
