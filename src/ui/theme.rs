//! # Theme System
//!
//! Centralized colors for the intake TUI. Rendering code references semantic
//! [`Theme`] fields instead of hardcoding `ratatui::style::Color` values, so
//! the look can be switched from the config file.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default) - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Tokyo Night** - dark theme inspired by Tokyo city lights
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the intake TUI, grouped by semantic role.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Human-readable name matched against the config file.
    pub name: &'static str,

    /// Main background color.
    pub bg: Color,
    /// Primary text color (prompt text, panel values).
    pub fg: Color,
    /// Muted text (hero subtitle, placeholder, footer hints).
    pub fg_dim: Color,

    /// Brand accent: hero headline, focused borders.
    pub accent: Color,
    /// Secondary accent: open-toggle markers, the time unit value.
    pub secondary: Color,

    /// Submission confirmation.
    pub success: Color,

    /// Foreground of a selected chip or active toggle.
    pub chip_fg: Color,
    /// Background of a selected chip or active toggle.
    pub chip_bg: Color,
}

impl Theme {
    /// All built-in themes (order = documentation order).
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// The default theme (Catppuccin Mocha).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }
}

// ---------------------------------------------------------------------------
// Built-in theme definitions
// ---------------------------------------------------------------------------

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Catppuccin Mocha (default)
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
        success: Color::Rgb(166, 227, 161),   // green
        chip_fg: Color::Rgb(30, 30, 46),      // base
        chip_bg: Color::Rgb(205, 214, 244),   // text
    },
    // 1 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
        success: Color::Rgb(80, 250, 123),
        chip_fg: Color::Rgb(40, 42, 54),
        chip_bg: Color::Rgb(248, 248, 242),
    },
    // 2 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
        success: Color::Rgb(163, 190, 140),
        chip_fg: Color::Rgb(46, 52, 64),
        chip_bg: Color::Rgb(216, 222, 233),
    },
    // 3 - Tokyo Night
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),    // blue
        secondary: Color::Rgb(224, 175, 104), // yellow
        success: Color::Rgb(115, 218, 202),
        chip_fg: Color::Rgb(26, 27, 38),
        chip_bg: Color::Rgb(169, 177, 214),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(250, 189, 47), // yellow
        success: Color::Rgb(184, 187, 38),
        chip_fg: Color::Rgb(40, 40, 40),
        chip_bg: Color::Rgb(235, 219, 178),
    },
];
