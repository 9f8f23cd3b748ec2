//! Slideshow state management
//!
//! Contains `SlideshowState`, which owns the session's `SceneStore` together
//! with the render-only state of the scene view, as well as shared types
//! used across the input modules.

use tracing::info;

use crate::scene::SceneStore;
use crate::tui::widgets::scene_view::{action_for, SceneCommand, SceneViewState};

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the slideshow
    Quit,
}

/// UI mode of the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scene on screen, input drives navigation
    #[default]
    Normal,
    /// Help overlay visible; any key closes it
    Help,
}

/// Pointer hover over the image, tied to the scene it was observed on.
///
/// A flag recorded for one scene never carries over to another, so the
/// magnifier always starts off when the displayed record changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverState {
    scene: usize,
    hovering: bool,
}

impl HoverState {
    pub fn set(&mut self, scene: usize, hovering: bool) {
        self.scene = scene;
        self.hovering = hovering;
    }

    pub fn is_hovering(&self, scene: usize) -> bool {
        self.hovering && self.scene == scene
    }
}

/// Central state of one slideshow session.
#[derive(Debug)]
pub struct SlideshowState {
    /// The session's scene sequence and cursor
    pub store: SceneStore,
    /// Scroll position and hit areas of the scene view
    pub view: SceneViewState,
    /// Current UI mode
    pub mode: Mode,
    /// Pointer hover over the image
    pub hover: HoverState,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl SlideshowState {
    /// Whether the last scene offers a restart control.
    pub const RESTART_AVAILABLE: bool = true;

    pub fn new(store: SceneStore) -> Self {
        Self {
            store,
            view: SceneViewState::default(),
            mode: Mode::Normal,
            hover: HoverState::default(),
            needs_render: true,
        }
    }

    /// Execute a command produced by the scene view.
    pub fn dispatch(&mut self, command: SceneCommand) {
        let before = self.store.current_index();
        match command {
            SceneCommand::Advance => {
                self.store.advance();
            }
            SceneCommand::Restart => self.store.reset(),
        }
        let after = self.store.current_index();
        if before != after {
            info!(from = before, to = after, "scene changed");
            self.view.reset();
            self.hover = HoverState::default();
        }
        self.needs_render = true;
    }

    /// Command of the control currently shown, if any.
    pub fn visible_command(&self) -> Option<SceneCommand> {
        let current = self.store.current();
        action_for(current.record, current.stage(), Self::RESTART_AVAILABLE)
            .map(|action| action.command())
    }

    /// Activate the control on screen (Enter, Space, click).
    pub fn activate(&mut self) {
        if let Some(command) = self.visible_command() {
            self.dispatch(command);
        }
    }

    /// Whether the pointer rests on the current scene's image.
    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering(self.store.current_index())
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.is_hovering() != hovering {
            self.hover.set(self.store.current_index(), hovering);
            self.needs_render = true;
        }
    }

    /// Keyboard toggle of the magnifier.
    pub fn toggle_hovering(&mut self) {
        let hovering = !self.is_hovering();
        self.set_hovering(hovering);
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Normal => Mode::Help,
            Mode::Help => Mode::Normal,
        };
        self.needs_render = true;
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.view.scroll_up(rows);
        self.needs_render = true;
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.view.scroll_down(rows);
        self.needs_render = true;
    }
}
