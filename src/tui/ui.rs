//! UI rendering helpers for TUI
//!
//! Common UI utilities and layout helpers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::theme::current_theme;

/// Smallest terminal the slideshow draws scenes in.
pub const MIN_WIDTH: u16 = 30;
pub const MIN_HEIGHT: u16 = 12;

/// Split the frame into content, status line and footer.
///
/// The footer rows are dropped when `show_footer` is false.
pub fn build_slideshow_layout(area: Rect, show_footer: bool) -> [Rect; 3] {
    let footer = if show_footer { 1 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(footer),
            Constraint::Length(footer),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Center a `width` x `height` box in `area`, shrinking it to fit.
pub fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Whether `area` is large enough to draw a scene.
pub fn fits(area: Rect) -> bool {
    area.width >= MIN_WIDTH && area.height >= MIN_HEIGHT
}

/// Render a notice asking for a larger terminal.
pub fn render_too_small(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let notice = Paragraph::new(vec![
        Line::styled("Terminal too small", theme.error_style()),
        Line::styled(
            format!("need {}x{}", MIN_WIDTH, MIN_HEIGHT),
            theme.text_secondary_style(),
        ),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(notice, centered_box(area, area.width, 2));
}
