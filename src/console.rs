//! Console styling for CLI output
//!
//! Colors used by the `termcfg` binary for its own messages, plus
//! ANSI escape helpers. Colors are suppressed when `NO_COLOR` is set or
//! stdout is not a terminal, unless `FORCE_COLOR` is set.

use crossterm::style::Color;

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Theme for CLI messages.
#[derive(Debug, Clone)]
pub struct ConsoleTheme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for headers
    pub accent: Color,
    /// Error color
    pub error: Color,
    /// Warning color
    pub warning: Color,
    /// Success color
    pub success: Color,
    /// Whether escape codes are emitted at all
    pub enabled: bool,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            enabled: true,
        }
    }
}

/// Theme for the current process, honoring `NO_COLOR` / `FORCE_COLOR`.
pub fn current_theme() -> ConsoleTheme {
    ConsoleTheme {
        enabled: colors_enabled(),
        ..ConsoleTheme::default()
    }
}

/// Decide whether to emit color on stdout.
pub fn colors_enabled() -> bool {
    color_decision(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        atty::is(atty::Stream::Stdout),
    )
}

fn color_decision(no_color: bool, force_color: bool, is_tty: bool) -> bool {
    if no_color {
        return false;
    }
    force_color || is_tty
}

/// Convert a crossterm color to an ANSI foreground escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::DarkRed => "\x1b[31m",
        Color::DarkGreen => "\x1b[32m",
        Color::DarkYellow => "\x1b[33m",
        Color::DarkBlue => "\x1b[34m",
        Color::DarkMagenta => "\x1b[35m",
        Color::DarkCyan => "\x1b[36m",
        Color::Grey => "\x1b[37m",
        Color::DarkGrey => "\x1b[90m",
        Color::Red => "\x1b[91m",
        Color::Green => "\x1b[92m",
        Color::Yellow => "\x1b[93m",
        Color::Blue => "\x1b[94m",
        Color::Magenta => "\x1b[95m",
        Color::Cyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => ANSI_RESET,
        // RGB and indexed colors fall back to no color
        _ => "",
    }
}

impl ConsoleTheme {
    fn paint(&self, color: Color, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
        } else {
            text.to_string()
        }
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn warning_text(&self, text: &str) -> String {
        self.paint(self.warning, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}
