//! Color theme and styling definitions using ratatui colors
//!
//! Category colors come from the dataset model; the theme decides whether to use them or
//! to fall back to terminal-safe colors.

use crate::dataset::Category;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

/// Named themes selectable from the command line or the config file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeName {
    #[default]
    Default,
    Monochrome,
    HighContrast,
}

/// Color theme for terminal UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// Normal text color (None uses terminal default)
    pub normal_text: Option<Color>,

    /// Search match highlighting
    pub search_match: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,

    /// Secondary text: motivations, captions, unselected chips
    pub muted_text: Color,

    /// Error/warning text
    pub error_text: Color,

    /// Selected timeline entry
    pub selection: Style,

    /// Use each category's own color for chips, markers and bars
    pub category_colors: bool,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            normal_text: None,
            search_match: Style::default().fg(Color::Black).bg(Color::Yellow),
            status_bg: Color::Blue,
            status_fg: Color::White,
            muted_text: Color::DarkGray,
            error_text: Color::Red,
            selection: Style::default().add_modifier(Modifier::REVERSED),
            category_colors: true,
        }
    }
}

impl ColorTheme {
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Default => Self::default(),
            ThemeName::Monochrome => Self::monochrome(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            normal_text: None,
            search_match: Style::default().fg(Color::Black).bg(Color::White),
            status_bg: Color::Black,
            status_fg: Color::White,
            muted_text: Color::Gray,
            error_text: Color::White,
            selection: Style::default().add_modifier(Modifier::REVERSED),
            category_colors: false,
        }
    }

    /// Create a high-contrast theme for accessibility
    pub fn high_contrast() -> Self {
        Self {
            normal_text: Some(Color::White),
            search_match: Style::default().fg(Color::Black).bg(Color::LightYellow),
            status_bg: Color::White,
            status_fg: Color::Black,
            muted_text: Color::Gray,
            error_text: Color::LightRed,
            selection: Style::default().fg(Color::Black).bg(Color::LightCyan),
            category_colors: true,
        }
    }

    /// Display color for a category under this theme.
    pub fn category_color(&self, category: Category) -> Color {
        if self.category_colors {
            let (r, g, b) = category.rgb();
            Color::Rgb(r, g, b)
        } else {
            self.normal_text.unwrap_or(Color::White)
        }
    }

    /// Base style for body text.
    pub fn text(&self) -> Style {
        match self.normal_text {
            Some(color) => Style::default().fg(color),
            None => Style::default(),
        }
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted_text)
    }

    /// Chip style for a category, dimmed when it is not selected.
    pub fn chip(&self, category: Category, selected: bool) -> Style {
        if selected {
            Style::default()
                .fg(Color::Black)
                .bg(self.category_color(category))
                .add_modifier(Modifier::BOLD)
        } else {
            self.muted().add_modifier(Modifier::DIM)
        }
    }
}
