//! Scene view widget
//!
//! Renders one scene: progress markers and caption at the top, the title,
//! image, narrative and optional annotations in a scrollable body, and a
//! single action control at the bottom. What is drawn depends only on the
//! record, its position, the scene count and whether it is the last scene.
//!
//! The view never mutates the store. Activating its control yields a
//! [`SceneCommand`] that the host executes.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, StatefulWidget, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::image::ImagePanel;
use super::progress::{format_caption, marker_states, MarkerState, ProgressIndicator};
use crate::scene::deck::DEFAULT_LABEL;
use crate::scene::{CurrentScene, ImageRef, InfoBox, SceneRecord, Stage};
use crate::tui::theme::Theme;

/// Label of the restart control on the last scene.
pub const RESTART_LABEL: &str = "Start Over";

/// Heading of the factoid annotation.
pub const FACTOID_HEADING: &str = "Investigation Note";

/// Widest the body grows on large terminals.
const MAX_CONTENT_WIDTH: u16 = 96;
/// Rows used by progress markers and caption.
const HEADER_HEIGHT: u16 = 2;
/// Rows used by the action button (bordered, one line of text).
const ACTION_HEIGHT: u16 = 3;
/// Image placeholder height inside the body.
const IMAGE_HEIGHT: u16 = 7;
/// Tallest a single body part is drawn; longer text is cut.
const MAX_PART_HEIGHT: u16 = 1024;

/// Request emitted when the user activates the scene's control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCommand {
    /// Move to the next scene
    Advance,
    /// Return to the first scene
    Restart,
}

/// The single control shown in the action region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionControl {
    /// Primary control labeled with the record's button text
    Advance { label: String },
    /// "Start over" control on the last scene
    Restart,
}

impl ActionControl {
    pub fn label(&self) -> &str {
        match self {
            ActionControl::Advance { label } => label,
            ActionControl::Restart => RESTART_LABEL,
        }
    }

    pub fn command(&self) -> SceneCommand {
        match self {
            ActionControl::Advance { .. } => SceneCommand::Advance,
            ActionControl::Restart => SceneCommand::Restart,
        }
    }

    /// Text drawn inside the button.
    fn caption(&self) -> String {
        match self {
            ActionControl::Advance { label } => format!("{} →", label),
            ActionControl::Restart => format!("↺ {}", RESTART_LABEL),
        }
    }
}

/// One rendered region of the scene, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewBlock<'a> {
    Progress {
        markers: Vec<MarkerState>,
        caption: String,
    },
    Title(&'a str),
    Image {
        image: &'a ImageRef,
        magnified: bool,
    },
    Description(&'a str),
    Factoid(&'a str),
    InfoBox(&'a InfoBox),
    Action(ActionControl),
}

/// Render output and scroll position of a [`SceneView`].
///
/// `scroll` is input; the areas are written by each render so the host can
/// hit-test pointer events against what is actually on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneViewState {
    /// First body row shown
    pub scroll: u16,
    /// Largest useful `scroll` for the last render
    pub max_scroll: u16,
    /// Visible part of the image region, if any
    pub image_area: Option<Rect>,
    /// Screen area of the action control, if any
    pub action_area: Option<Rect>,
}

impl SceneViewState {
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll);
    }

    /// Forget scroll position and hit areas (a different scene is shown).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn hits_image(&self, column: u16, row: u16) -> bool {
        self.image_area.is_some_and(|a| contains(a, column, row))
    }

    pub fn hits_action(&self, column: u16, row: u16) -> bool {
        self.action_area.is_some_and(|a| contains(a, column, row))
    }
}

/// The control a scene offers.
///
/// Scenes with a successor advance; the terminal scene offers restart when
/// available and never the advance control.
pub fn action_for(
    record: &SceneRecord,
    stage: Stage,
    restart_available: bool,
) -> Option<ActionControl> {
    match stage {
        Stage::Scene { .. } => Some(ActionControl::Advance {
            label: record.button_text().to_string(),
        }),
        Stage::Terminal if restart_available => Some(ActionControl::Restart),
        Stage::Terminal => None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}

/// Rendering of one scene record.
pub struct SceneView<'a> {
    record: &'a SceneRecord,
    position: usize,
    total: usize,
    stage: Stage,
    restart_available: bool,
    hovering: bool,
    label: &'a str,
    theme: &'a Theme,
}

impl<'a> SceneView<'a> {
    /// Create a view for `record` at `position` of `total`.
    ///
    /// `position` and `total` are trusted; the store is the only caller
    /// that produces them. The view starts in `Stage::Scene`; use
    /// [`SceneView::stage`] or [`SceneView::from_current`] for the last scene.
    pub fn new(record: &'a SceneRecord, position: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            record,
            position,
            total,
            stage: Stage::Scene { index: position },
            restart_available: false,
            hovering: false,
            label: DEFAULT_LABEL,
            theme,
        }
    }

    /// View of the store's current scene, with its stage.
    pub fn from_current(current: CurrentScene<'a>, theme: &'a Theme) -> Self {
        Self::new(current.record, current.position, current.total, theme).stage(current.stage())
    }

    /// Stage the view renders for; `Stage::Terminal` selects the final layout.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Offer the restart control on the terminal scene.
    pub fn restart(mut self, available: bool) -> Self {
        self.restart_available = available;
        self
    }

    /// Pointer currently rests on the image region.
    pub fn hovering(mut self, hovering: bool) -> Self {
        self.hovering = hovering;
        self
    }

    /// Caption noun ("Scene", "Clue", ...).
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Whether the image is drawn in its magnified state.
    ///
    /// The effect is suppressed on the terminal scene.
    pub fn is_magnified(&self) -> bool {
        self.hovering && self.stage != Stage::Terminal
    }

    /// The control shown in the action region, if any.
    pub fn action(&self) -> Option<ActionControl> {
        action_for(self.record, self.stage, self.restart_available)
    }

    /// Command issued by activating the visible control.
    pub fn activate(&self) -> Option<SceneCommand> {
        self.action().map(|a| a.command())
    }

    /// Everything this view draws, in display order.
    pub fn blocks(&self) -> Vec<ViewBlock<'a>> {
        let mut blocks = vec![
            ViewBlock::Progress {
                markers: marker_states(self.position, self.total),
                caption: format_caption(self.label, self.position, self.total),
            },
            ViewBlock::Title(self.record.title()),
            ViewBlock::Image {
                image: self.record.image(),
                magnified: self.is_magnified(),
            },
            ViewBlock::Description(self.record.description()),
        ];

        if let Some(factoid) = self.record.factoid() {
            blocks.push(ViewBlock::Factoid(factoid));
        }
        blocks.extend(self.record.info_boxes().iter().map(ViewBlock::InfoBox));
        if let Some(action) = self.action() {
            blocks.push(ViewBlock::Action(action));
        }

        blocks
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let markers = Rect { height: 1, ..area };
        ProgressIndicator::new(self.position, self.total, self.theme).render(markers, buf);

        if area.height > 1 {
            let caption = Rect {
                y: area.y + 1,
                height: 1,
                ..area
            };
            Paragraph::new(Span::styled(
                format_caption(self.label, self.position, self.total).to_uppercase(),
                self.theme.text_secondary_style(),
            ))
            .alignment(Alignment::Center)
            .render(caption, buf);
        }
    }

    /// Body parts with their heights for `width` columns.
    ///
    /// Each height is capped at [`MAX_PART_HEIGHT`].
    fn body_parts(&self, width: u16) -> Vec<(u16, ViewBlock<'a>)> {
        self.blocks()
            .into_iter()
            .filter_map(|block| {
                let height = match &block {
                    ViewBlock::Title(title) => wrapped_height(title, width).saturating_add(1),
                    ViewBlock::Image { .. } => IMAGE_HEIGHT + 1,
                    ViewBlock::Description(text) => {
                        wrapped_height(text, width.saturating_sub(4)).saturating_add(3)
                    }
                    ViewBlock::Factoid(text) => {
                        wrapped_height(text, width.saturating_sub(2)).saturating_add(2)
                    }
                    ViewBlock::InfoBox(info) => {
                        wrapped_height(&info.content, width.saturating_sub(4)).saturating_add(3)
                    }
                    ViewBlock::Progress { .. } | ViewBlock::Action(_) => return None,
                };
                Some((height.min(MAX_PART_HEIGHT), block))
            })
            .collect()
    }

    fn render_body_part(&self, block: &ViewBlock<'a>, area: Rect, buf: &mut Buffer) {
        // Every part but the title reserves one trailing spacer row
        let inner = Rect {
            height: area.height.saturating_sub(1),
            ..area
        };
        match block {
            ViewBlock::Title(title) => {
                Paragraph::new(Span::styled(
                    title.to_string(),
                    self.theme.accent_bold_style(),
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            }
            ViewBlock::Image { image, magnified } => {
                ImagePanel::new(image, self.record.title(), self.theme)
                    .magnified(*magnified)
                    .render(inner, buf);
            }
            ViewBlock::Description(text) => {
                Paragraph::new(text.to_string())
                    .style(self.theme.text_style())
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(self.theme.text_secondary_style())
                            .padding(Padding::horizontal(1)),
                    )
                    .render(inner, buf);
            }
            ViewBlock::Factoid(text) => {
                let lines = vec![
                    Line::from(Span::styled(
                        FACTOID_HEADING,
                        self.theme.annotation_style().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        text.to_string(),
                        self.theme.text_secondary_style(),
                    )),
                ];
                Paragraph::new(lines)
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::LEFT)
                            .border_type(BorderType::Thick)
                            .border_style(self.theme.annotation_style())
                            .padding(Padding::left(1)),
                    )
                    .render(inner, buf);
            }
            ViewBlock::InfoBox(info) => {
                Paragraph::new(info.content.clone())
                    .style(self.theme.text_secondary_style())
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(self.theme.text_secondary_style())
                            .title(Span::styled(
                                format!(" {} ", info.title),
                                self.theme.accent_bold_style(),
                            ))
                            .padding(Padding::horizontal(1)),
                    )
                    .render(inner, buf);
            }
            ViewBlock::Progress { .. } | ViewBlock::Action(_) => {}
        }
    }

    /// Render the body into `area`, skipping `scroll` rows.
    ///
    /// Only parts overlapping the visible window are drawn. Each one goes to
    /// its own buffer first and the visible rows are copied over, so parts
    /// cut by the scroll edge stay intact.
    fn render_body(&self, area: Rect, buf: &mut Buffer, state: &mut SceneViewState) {
        let parts = self.body_parts(area.width);
        let content_height: u32 = parts.iter().map(|(h, _)| u32::from(*h)).sum();

        let max_scroll = content_height.saturating_sub(u32::from(area.height));
        state.max_scroll = max_scroll.min(u32::from(u16::MAX)) as u16;
        state.scroll = state.scroll.min(state.max_scroll);
        state.image_area = None;

        let top = u32::from(state.scroll);
        let bottom = top + u32::from(area.height);
        let mut part_top = 0u32;

        for (height, block) in &parts {
            let part_bottom = part_top + u32::from(*height);
            let (first, last) = (top.max(part_top), bottom.min(part_bottom));

            if first < last {
                let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, *height));
                self.render_body_part(block, canvas.area, &mut canvas);
                for row in first..last {
                    let src = (row - part_top) as u16;
                    let dst = area.y + (row - top) as u16;
                    for col in 0..area.width {
                        buf[(area.x + col, dst)] = canvas[(col, src)].clone();
                    }
                }

                // The image ends one row early (spacer)
                let image_last = last.min(part_bottom.saturating_sub(1));
                if matches!(block, ViewBlock::Image { .. }) && first < image_last {
                    state.image_area = Some(Rect::new(
                        area.x,
                        area.y + (first - top) as u16,
                        area.width,
                        (image_last - first) as u16,
                    ));
                }
            }

            part_top = part_bottom;
            if part_top >= bottom {
                break;
            }
        }
    }

    fn render_action(&self, area: Rect, buf: &mut Buffer, state: &mut SceneViewState) {
        state.action_area = None;
        let Some(action) = self.action() else {
            return;
        };

        let caption = action.caption();
        let width = (caption.width() as u16 + 4).min(area.width);
        let button = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            height: area.height.min(ACTION_HEIGHT),
            ..area
        };

        let (style, border) = match action {
            ActionControl::Advance { .. } => (self.theme.action_style(), BorderType::Thick),
            ActionControl::Restart => (self.theme.accent_style(), BorderType::Rounded),
        };
        Paragraph::new(Span::styled(caption, style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(border)
                    .border_style(self.theme.accent_style()),
            )
            .render(button, buf);

        state.action_area = Some(button);
    }
}

impl StatefulWidget for SceneView<'_> {
    type State = SceneViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let width = area.width.min(MAX_CONTENT_WIDTH);
        let area = Rect {
            x: area.x + (area.width - width) / 2,
            width,
            ..area
        };

        let header_height = HEADER_HEIGHT.min(area.height);
        let action_height = ACTION_HEIGHT.min(area.height - header_height);
        let body_height = area.height - header_height - action_height;

        let header = Rect {
            height: header_height,
            ..area
        };
        let body = Rect {
            y: area.y + header_height,
            height: body_height,
            ..area
        };
        let action = Rect {
            y: body.bottom(),
            height: action_height,
            ..area
        };

        self.render_header(header, buf);
        self.render_body(body, buf, state);
        self.render_action(action, buf, state);
    }
}

/// Number of lines `text` takes when word-wrapped to `width` columns.
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let mut lines = 0usize;

    for paragraph in text.split('\n') {
        lines += 1;
        let mut line_width = 0usize;
        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if line_width > 0 && line_width + 1 + word_width <= width {
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                lines += 1;
            }
            line_width = word_width;
            while line_width > width {
                lines += 1;
                line_width -= width;
            }
        }
    }

    lines.min(u16::MAX as usize) as u16
}
