//! Theme and styling for the ParsePoint TUI.
//!
//! A [`Theme`] resolves to a [`Palette`] that renderers receive explicitly;
//! nothing reads a global theme.

use std::fmt;

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Theme
// ============================================================================

/// User-selectable colour scheme. Persisted as `"dark"` or `"light"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => DARK,
            Self::Light => LIGHT,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary accent - focused elements and highlights.
    pub primary: Color,
    /// Success indicator, also used for credits.
    pub success: Color,
    /// Warning indicator.
    pub warning: Color,
    /// Error indicator, also used for debits.
    pub error: Color,
    /// Muted text.
    pub muted: Color,
    /// Accent for section titles.
    pub accent: Color,
    /// Body text.
    pub text: Color,
    /// Screen background.
    pub background: Color,
    /// Unfocused borders.
    pub border: Color,
    /// Selected row background.
    pub selection: Color,
}

/// Tokyo Night-inspired dark palette.
pub const DARK: Palette = Palette {
    primary: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    muted: Color::Gray,
    accent: Color::Magenta,
    text: Color::White,
    background: Color::Rgb(26, 27, 38),
    border: Color::DarkGray,
    selection: Color::DarkGray,
};

/// Light palette for bright terminals.
pub const LIGHT: Palette = Palette {
    primary: Color::Blue,
    success: Color::Rgb(22, 128, 61),
    warning: Color::Rgb(180, 110, 0),
    error: Color::Rgb(190, 30, 45),
    muted: Color::Rgb(100, 100, 110),
    accent: Color::Rgb(130, 40, 160),
    text: Color::Black,
    background: Color::Rgb(245, 245, 240),
    border: Color::Rgb(160, 160, 170),
    selection: Color::Rgb(210, 220, 235),
};

impl Palette {
    /// Base style: text on background.
    #[must_use]
    pub const fn base(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    /// Default border style for unfocused elements.
    #[must_use]
    pub const fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    /// Border style for focused/active elements.
    #[must_use]
    pub const fn focused_border_style(&self) -> Style {
        Style::new().fg(self.primary)
    }

    /// Title style for focused/active elements.
    #[must_use]
    pub const fn focused_title_style(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Style for the selected table row.
    #[must_use]
    pub const fn selected_style(&self) -> Style {
        Style::new().bg(self.selection).add_modifier(Modifier::BOLD)
    }

    /// Style for hints and secondary text.
    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }
}
