//! Color theme system for vidmood.
//!
//! A `Theme` holds named `ratatui::style::Color` fields covering every UI
//! surface vidmood renders. Two built-in themes are provided:
//!
//! - `dark` uses ANSI 16 colors (`Color::Reset`, `Color::DarkGray`, etc.)
//!   so it works on any terminal including 256-color SSH sessions.
//! - `catppuccin_mocha` uses the Catppuccin Mocha palette in RGB and needs
//!   truecolor support.

use ratatui::style::Color;

/// All color values used across vidmood's UI surfaces.
///
/// Every field is a `ratatui::style::Color`. Callers use `theme.field`
/// directly inside `Style::default().fg(theme.border_active)`.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color for the currently focused panel.
    pub border_active: Color,
    /// Border color for unfocused panels.
    pub border_inactive: Color,

    // Sentiment labels
    /// Positive records and bars.
    pub label_positive: Color,
    /// Negative records and bars.
    pub label_negative: Color,
    /// Neutral records and bars.
    pub label_neutral: Color,

    // Notice levels
    /// Informational notices.
    pub notice_info: Color,
    /// Warning notices (invalid URL, empty result).
    pub notice_warning: Color,
    /// Error notices (fetch failures).
    pub notice_error: Color,
    /// Success notices (fetch/analyze completed).
    pub notice_success: Color,

    // Status bar
    /// Status bar background.
    pub status_bar_bg: Color,
    /// Status bar foreground (general text).
    pub status_bar_fg: Color,
    /// Mode indicator color when in NORMAL mode.
    pub status_mode_normal: Color,
    /// Mode indicator color when in INSERT mode.
    pub status_mode_insert: Color,
    /// Fetch-in-flight indicator.
    pub status_fetching: Color,

    // General
    /// Dimmed text: placeholders, de-emphasised columns.
    pub text_dim: Color,
    /// Application background.
    pub background: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    ///
    /// Works on all terminals: 16-color, 256-color, and truecolor.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            label_positive: Color::Green,
            label_negative: Color::Red,
            label_neutral: Color::Yellow,

            notice_info: Color::Cyan,
            notice_warning: Color::Yellow,
            notice_error: Color::Red,
            notice_success: Color::Green,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode_normal: Color::Cyan,
            status_mode_insert: Color::Green,
            status_fetching: Color::Yellow,

            text_dim: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Colors degrade to the nearest ANSI 256-color approximation on
    /// non-truecolor terminals. Use `dark()` over SSH.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        // Catppuccin Mocha palette (selected subset)
        let green = Color::Rgb(166, 227, 161);    // #a6e3a1
        let red = Color::Rgb(243, 139, 168);      // #f38ba8
        let yellow = Color::Rgb(249, 226, 175);   // #f9e2af
        let teal = Color::Rgb(148, 226, 213);     // #94e2d5
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface1 = Color::Rgb(69, 71, 90);    // #45475a
        let base = Color::Rgb(30, 30, 46);        // #1e1e2e
        let text = Color::Rgb(205, 214, 244);     // #cdd6f4
        let peach = Color::Rgb(250, 179, 135);    // #fab387

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            label_positive: green,
            label_negative: red,
            label_neutral: yellow,

            notice_info: teal,
            notice_warning: peach,
            notice_error: red,
            notice_success: green,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode_normal: lavender,
            status_mode_insert: green,
            status_fetching: yellow,

            text_dim: overlay1,
            background: base,
        }
    }

    /// Resolves a theme name string to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` so a typo in config never
    /// prevents startup. The fallback is logged, not a hard error.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("unknown theme '{other}', falling back to 'dark'");
                Self::dark()
            }
        }
    }
}
