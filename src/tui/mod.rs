//! TUI (Text User Interface) module for storyline
//!
//! Terminal rendering of a deck using ratatui/crossterm: the scene view
//! widget, input handling and the application loop that ties them together.

pub mod app;
pub mod input;
pub mod scene_app;
pub mod state;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use scene_app::{render_slideshow, SceneApp, SlideshowOptions};
pub use state::SlideshowState;
pub use theme::{current_theme, set_theme, Theme};
