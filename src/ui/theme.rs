//! # Theme System
//!
//! Every color and text style the renderer uses comes from a [`Theme`]. One
//! theme is chosen at startup and handed to [`crate::ui::render`] by
//! reference; nothing about styling is global.
//!
//! ## Built-in Themes
//!
//! - **Reel** (default) - red accent on a near-black background
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::{Color, Modifier, Style};

/// All colors used by the browser, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, matched by the `theme` config setting.
    pub name: &'static str,

    /// Pane background.
    pub bg: Color,
    /// Primary text color.
    pub fg: Color,
    /// Muted text: entry keys, inactive borders, footer.
    pub fg_dim: Color,
    /// Focused border and selected title.
    pub accent: Color,
    /// Tags and other secondary highlights in the detail pane.
    pub secondary: Color,
}

impl Theme {
    /// Return the list of all built-in themes.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    /// Return the default theme (Reel).
    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn active_border(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn inactive_border(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    pub fn selected_title(&self) -> Style {
        self.title().fg(self.accent)
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    pub fn tags(&self) -> Style {
        Style::default().fg(self.secondary)
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - Reel (default)
    Theme {
        name: "Reel",
        bg: Color::Rgb(15, 17, 26),
        fg: Color::Rgb(220, 220, 220),
        fg_dim: Color::Rgb(119, 119, 119),
        accent: Color::Rgb(219, 43, 57),
        secondary: Color::Rgb(224, 169, 109),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),           // base
        fg: Color::Rgb(205, 214, 244),        // text
        fg_dim: Color::Rgb(108, 112, 134),    // overlay0
        accent: Color::Rgb(137, 180, 250),    // blue
        secondary: Color::Rgb(249, 226, 175), // yellow
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(139, 233, 253),    // cyan
        secondary: Color::Rgb(241, 250, 140), // yellow
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),    // frost
        secondary: Color::Rgb(235, 203, 139), // yellow
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(131, 165, 152),   // blue
        secondary: Color::Rgb(250, 189, 47), // yellow
    },
];
