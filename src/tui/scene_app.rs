//! Slideshow TUI application
//!
//! Owns the terminal and the session state, runs the event loop and draws
//! the current scene through [`SceneView`].

use std::time::Duration;

use anyhow::Result;
use ratatui::Frame;
use tracing::{debug, info};

use super::app::status_footer::{
    format_status, render_footer, render_status_line, HELP_KEYS, SCENE_KEYS, TERMINAL_KEYS,
};
use super::app::App;
use super::input::handle_event;
use super::state::{InputResult, Mode, SlideshowState};
use super::theme::Theme;
use super::ui::{build_slideshow_layout, fits, render_too_small};
use super::widgets::{HelpOverlay, SceneView};
use crate::scene::{Deck, SceneStore, Stage};

/// Event poll interval; keeps resize handling responsive.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Presentation settings that do not change during a session.
#[derive(Debug, Clone)]
pub struct SlideshowOptions {
    /// Deck title for the status line
    pub title: String,
    /// Caption noun ("Scene", "Clue")
    pub label: String,
    pub theme: Theme,
    pub show_footer: bool,
    pub mouse: bool,
}

impl Default for SlideshowOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            label: crate::scene::deck::DEFAULT_LABEL.to_string(),
            theme: Theme::default(),
            show_footer: true,
            mouse: true,
        }
    }
}

/// Draw the whole slideshow screen for `state`.
///
/// Separate from [`SceneApp`] so it can be exercised with a test backend.
pub fn render_slideshow(frame: &mut Frame, state: &mut SlideshowState, options: &SlideshowOptions) {
    let area = frame.area();
    if !fits(area) {
        render_too_small(frame, area);
        return;
    }

    let [content, status, footer] = build_slideshow_layout(area, options.show_footer);
    let current = state.store.current();
    let hovering = state.is_hovering();

    let view = SceneView::from_current(current, &options.theme)
        .restart(SlideshowState::RESTART_AVAILABLE)
        .hovering(hovering)
        .label(&options.label);
    frame.render_stateful_widget(view, content, &mut state.view);

    if options.show_footer {
        render_status_line(
            frame,
            status,
            &format_status(&options.title, current.position, current.total),
        );
        let keys = match (state.mode, current.stage()) {
            (Mode::Help, _) => HELP_KEYS,
            (Mode::Normal, Stage::Terminal) => TERMINAL_KEYS,
            (Mode::Normal, Stage::Scene { .. }) => SCENE_KEYS,
        };
        render_footer(frame, footer, keys);
    }

    if state.mode == Mode::Help {
        frame.render_widget(HelpOverlay::new(&options.theme), area);
    }
}

/// Interactive slideshow over one deck.
pub struct SceneApp {
    /// Base app for terminal handling
    app: App,
    /// Session state (store, view state, mode)
    state: SlideshowState,
    options: SlideshowOptions,
}

impl SceneApp {
    /// Create the app and take over the terminal.
    pub fn new(store: SceneStore, options: SlideshowOptions) -> Result<Self> {
        let app = App::new(TICK_RATE, options.mouse)?;
        Ok(Self {
            app,
            state: SlideshowState::new(store),
            options,
        })
    }

    /// Build the app from a deck, using the deck's title and label.
    pub fn from_deck(deck: Deck, mut options: SlideshowOptions) -> Result<Self> {
        options.title = deck.title.clone();
        options.label = deck.label.clone();
        let store = deck.into_store()?;
        Self::new(store, options)
    }

    /// Run until the user quits. Returns the number of scenes visited.
    pub fn run(&mut self) -> Result<usize> {
        info!(scenes = self.state.store.len(), "slideshow started");
        let mut furthest = 0;

        loop {
            if self.state.needs_render {
                self.draw()?;
                self.state.needs_render = false;
            }

            let Some(event) = self.app.next_event()? else {
                continue;
            };
            debug!(?event, "input");
            if handle_event(event, &mut self.state) == InputResult::Quit {
                break;
            }
            furthest = furthest.max(self.state.store.current_index());
        }

        info!(furthest, "slideshow finished");
        Ok(furthest + 1)
    }

    fn draw(&mut self) -> Result<()> {
        // Borrow disjoint fields before the closure (self.app is borrowed mutably)
        let state = &mut self.state;
        let options = &self.options;
        self.app.draw(|frame| render_slideshow(frame, state, options))
    }
}
