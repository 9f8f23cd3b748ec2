//! Image region of a scene.
//!
//! Terminals cannot show the referenced artwork, so the region draws a
//! framed placeholder naming the image and its alt text. While the pointer
//! rests on it the frame switches to a highlighted "magnified" look.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use crate::scene::ImageRef;
use crate::tui::theme::Theme;

/// Label shown on the frame while magnified.
pub const MAGNIFY_LABEL: &str = " ⌕ examining ";

/// Framed placeholder for a scene image.
pub struct ImagePanel<'a> {
    image: &'a ImageRef,
    alt: &'a str,
    magnified: bool,
    theme: &'a Theme,
}

impl<'a> ImagePanel<'a> {
    pub fn new(image: &'a ImageRef, alt: &'a str, theme: &'a Theme) -> Self {
        Self {
            image,
            alt,
            magnified: false,
            theme,
        }
    }

    pub fn magnified(mut self, magnified: bool) -> Self {
        self.magnified = magnified;
        self
    }

    fn block(&self) -> Block<'static> {
        let block = Block::default().borders(Borders::ALL);
        if self.magnified {
            block
                .border_type(BorderType::Thick)
                .border_style(self.theme.accent_style())
                .title(MAGNIFY_LABEL)
                .title_alignment(Alignment::Center)
        } else {
            block
                .border_type(BorderType::Rounded)
                .border_style(self.theme.text_secondary_style())
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let name = if self.image.is_empty() {
            "(no image)".to_string()
        } else {
            self.image.file_name().to_string()
        };
        let name_style = if self.magnified {
            self.theme.accent_bold_style()
        } else {
            self.theme.text_style()
        };

        vec![
            Line::from(Span::styled(format!("▣ {}", name), name_style)),
            Line::from(Span::styled(
                self.alt.to_string(),
                self.theme
                    .text_secondary_style()
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for ImagePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        // Vertically center the two placeholder lines
        let lines = self.lines();
        let top = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect {
            y: inner.y + top,
            height: inner.height.saturating_sub(top),
            ..inner
        };
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default())
            .render(body, buf);
    }
}
