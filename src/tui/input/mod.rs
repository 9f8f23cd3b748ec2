//! Input handling for the slideshow.
//!
//! This module handles keyboard and mouse input events, dispatching
//! them to the appropriate handlers and returning control flow signals.

mod keyboard;
mod mouse;

pub use keyboard::{handle_key_event, PAGE_ROWS};
pub use mouse::{handle_mouse_event, WHEEL_ROWS};

use crossterm::event::Event;

use crate::tui::state::{InputResult, SlideshowState};

/// Handle any input event, dispatching to the appropriate handler.
///
/// # Returns
/// `InputResult` indicating whether to continue or quit
pub fn handle_event(event: Event, state: &mut SlideshowState) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
        Event::Resize(_, _) => {
            state.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, paste, etc.
    }
}
