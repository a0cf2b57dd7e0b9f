//! Colour palettes and the light/dark toggle

use crate::editor::EditorAdapter;
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub gutter: Color,
    pub gutter_active: Color,
    pub bar_bg: Color,
    pub current_line_bg: Color,
    pub function: Color,
}

pub const DARK_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),
    string: Color::Rgb(250, 179, 135),
    number: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    gutter: Color::Rgb(69, 71, 90),
    gutter_active: Color::Rgb(249, 226, 175),
    bar_bg: Color::Rgb(50, 50, 70),
    current_line_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),
};

pub const LIGHT_THEME: Theme = Theme {
    bg: Color::Rgb(239, 241, 245),
    fg: Color::Rgb(76, 79, 105),
    primary: Color::Rgb(30, 102, 245),
    secondary: Color::Rgb(254, 100, 11),
    comment: Color::Rgb(140, 143, 161),
    success: Color::Rgb(64, 160, 43),
    error: Color::Rgb(210, 15, 57),
    keyword: Color::Rgb(136, 57, 239),
    string: Color::Rgb(64, 160, 43),
    number: Color::Rgb(254, 100, 11),
    border_focused: Color::Rgb(223, 142, 29),
    border_normal: Color::Rgb(172, 176, 190),
    gutter: Color::Rgb(204, 208, 218),
    gutter_active: Color::Rgb(223, 142, 29),
    bar_bg: Color::Rgb(220, 224, 232),
    current_line_bg: Color::Rgb(230, 233, 239),
    function: Color::Rgb(30, 102, 245),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Indicator shown in the header (moon for dark, sun for light)
    pub fn glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☾",
            ThemeMode::Light => "☀",
        }
    }

    /// Theme name handed to the editor
    pub fn editor_theme(self) -> &'static str {
        match self {
            ThemeMode::Dark => "vs-dark",
            ThemeMode::Light => "vs",
        }
    }

    pub fn palette(self) -> &'static Theme {
        match self {
            ThemeMode::Dark => &DARK_THEME,
            ThemeMode::Light => &LIGHT_THEME,
        }
    }
}

/// Holds the current mode. Not persisted.
#[derive(Debug, Default)]
pub struct ThemeController {
    mode: ThemeMode,
}

impl ThemeController {
    pub fn new(mode: ThemeMode) -> Self {
        ThemeController { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn glyph(&self) -> &'static str {
        self.mode.glyph()
    }

    pub fn palette(&self) -> &'static Theme {
        self.mode.palette()
    }

    /// Flip light/dark and pass the new theme name to the editor
    pub fn toggle(&mut self, editor: &mut dyn EditorAdapter) -> ThemeMode {
        self.mode = self.mode.toggled();
        editor.set_theme(self.mode.editor_theme());
        tracing::debug!(theme = self.mode.editor_theme(), "theme toggled");
        self.mode
    }
}
