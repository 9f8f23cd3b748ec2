//! Keyboard input handling for the slideshow.
//!
//! Handles all keyboard shortcuts: activating the scene's control,
//! restarting, scrolling, the magnifier toggle and the help overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::state::{InputResult, Mode, SlideshowState};
use crate::tui::widgets::scene_view::SceneCommand;

/// Rows moved by PageUp/PageDown.
pub const PAGE_ROWS: u16 = 8;

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates state or returns control flow signals.
pub fn handle_key_event(key: KeyEvent, state: &mut SlideshowState) -> InputResult {
    // Windows reports releases too; act on presses only
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    // If help is showing, any key closes it
    if state.mode == Mode::Help {
        state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,

        // === Navigation ===
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
            state.activate();
        }
        KeyCode::Char('r') | KeyCode::Home => state.dispatch(SceneCommand::Restart),

        // === Scrolling ===
        KeyCode::Up | KeyCode::Char('k') => state.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(PAGE_ROWS),
        KeyCode::PageDown => state.scroll_down(PAGE_ROWS),

        // === Mode toggles ===
        KeyCode::Char('z') => state.toggle_hovering(),
        KeyCode::Char('?') => state.toggle_help(),

        _ => {}
    }

    InputResult::Continue
}
