//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for TUI) and ANSI escape codes (for CLI).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the slideshow.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (narrative text)
    pub text_primary: Color,
    /// Secondary/dimmed text color (captions, footer hints)
    pub text_secondary: Color,
    /// Accent color for titles and the primary action
    pub accent: Color,
    /// Annotation color (factoid border and heading)
    pub annotation: Color,
    /// Progress marker for scenes already seen
    pub completed: Color,
    /// Progress marker for the scene on screen
    pub active: Color,
    /// Progress marker for scenes still ahead
    pub pending: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ocean()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`].
    pub const NAMES: [&'static str; 3] = ["ocean", "classic", "mono"];

    /// Sea blues with a coral annotation accent.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            annotation: Color::LightRed,
            completed: Color::LightRed,
            active: Color::Cyan,
            pending: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            annotation: Color::Green,
            completed: Color::Green,
            active: Color::Yellow,
            pending: Color::DarkGray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// No colors; relies on modifiers only.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            annotation: Color::Reset,
            completed: Color::Reset,
            active: Color::Reset,
            pending: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ocean" => Some(Self::ocean()),
            "classic" => Some(Self::classic()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (titles, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the factoid annotation.
    pub fn annotation_style(&self) -> Style {
        Style::default().fg(self.annotation)
    }

    /// Style for the focused action control.
    pub fn action_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    let code = color_to_ansi(color);
    if code.is_empty() || color == Color::Reset || no_color() {
        text.to_string()
    } else {
        format!("{}{}{}", code, text, ANSI_RESET)
    }
}

/// Honor the `NO_COLOR` convention for CLI output.
fn no_color() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process theme. Only the first call has an effect.
pub fn set_theme(theme: Theme) {
    let _ = THEME.set(theme);
}

/// The theme selected at startup, or the default one.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
