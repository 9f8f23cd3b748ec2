//! Mouse input handling for the slideshow.
//!
//! Pointer movement over the image drives the magnifier; a left click on
//! the action button activates it; the wheel scrolls long scenes.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::state::{InputResult, Mode, SlideshowState};

/// Rows moved per wheel notch.
pub const WHEEL_ROWS: u16 = 2;

/// Handle a mouse event.
///
/// Hit areas come from the last render, so events are matched against
/// what the user actually sees.
pub fn handle_mouse_event(mouse: MouseEvent, state: &mut SlideshowState) -> InputResult {
    if state.mode == Mode::Help {
        if let MouseEventKind::Down(_) = mouse.kind {
            state.toggle_help();
        }
        return InputResult::Continue;
    }

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            let over_image = state.view.hits_image(mouse.column, mouse.row);
            state.set_hovering(over_image);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if state.view.hits_action(mouse.column, mouse.row) {
                state.activate();
            }
        }
        MouseEventKind::ScrollUp => state.scroll_up(WHEEL_ROWS),
        MouseEventKind::ScrollDown => state.scroll_down(WHEEL_ROWS),
        _ => {}
    }

    InputResult::Continue
}
