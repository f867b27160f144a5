// Theme system for the TUI
//
// Color themes that can be switched at runtime. Each theme defines colors
// for every element of the table screen.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
    Nord,
}

impl ThemeKind {
    pub fn all() -> &'static [ThemeKind] {
        &[ThemeKind::Dark, ThemeKind::Light, ThemeKind::Nord]
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        let themes = Self::all();
        let current = themes.iter().position(|&t| t == self).unwrap_or(0);
        themes[(current + 1) % themes.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
            ThemeKind::Nord => "nord",
        }
    }

    /// Look up a theme by config name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
            ThemeKind::Nord => Theme::nord(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,
    pub border_type: BorderType,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Table chrome
    pub heading: Color,
    pub divider: Color,
    pub header: Color,
    pub move_button: Color,

    // Cells
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub placeholder: Color,
    pub disabled: Color,
    pub invalid: Color,

    // Drag and drop
    pub drag_fg: Color,
    pub drag_bg: Color,
    pub drop_target: Color,

    pub status_bar: Color,

    // Log levels
    pub log_error: Color,
    pub log_warn: Color,
    pub log_info: Color,
    pub log_debug: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            kind: ThemeKind::Dark,
            border_type: BorderType::Rounded,
            background: Color::Reset,
            foreground: Color::White,
            border: Color::Gray,
            border_focused: Color::Cyan,
            heading: Color::Cyan,
            divider: Color::DarkGray,
            header: Color::Yellow,
            move_button: Color::LightBlue,
            selection_bg: Color::DarkGray,
            selection_fg: Color::White,
            placeholder: Color::DarkGray,
            disabled: Color::Gray,
            invalid: Color::LightRed,
            drag_fg: Color::Black,
            drag_bg: Color::Cyan,
            drop_target: Color::LightGreen,
            status_bar: Color::Gray,
            log_error: Color::Red,
            log_warn: Color::Yellow,
            log_info: Color::Green,
            log_debug: Color::DarkGray,
        }
    }

    pub fn light() -> Self {
        Self {
            kind: ThemeKind::Light,
            border_type: BorderType::Plain,
            background: Color::White,
            foreground: Color::Black,
            border: Color::DarkGray,
            border_focused: Color::Blue,
            heading: Color::Blue,
            divider: Color::Gray,
            header: Color::Magenta,
            move_button: Color::Blue,
            selection_bg: Color::Rgb(0xdd, 0xe6, 0xf5),
            selection_fg: Color::Black,
            placeholder: Color::Gray,
            disabled: Color::DarkGray,
            invalid: Color::Red,
            drag_fg: Color::White,
            drag_bg: Color::Blue,
            drop_target: Color::Green,
            status_bar: Color::DarkGray,
            log_error: Color::Red,
            log_warn: Color::Rgb(0xb3, 0x6b, 0x00),
            log_info: Color::Green,
            log_debug: Color::Gray,
        }
    }

    pub fn nord() -> Self {
        Self {
            kind: ThemeKind::Nord,
            border_type: BorderType::Rounded,
            background: Color::Rgb(0x2e, 0x34, 0x40),
            foreground: Color::Rgb(0xd8, 0xde, 0xe9),
            border: Color::Rgb(0x4c, 0x56, 0x6a),
            border_focused: Color::Rgb(0x88, 0xc0, 0xd0),
            heading: Color::Rgb(0x88, 0xc0, 0xd0),
            divider: Color::Rgb(0x4c, 0x56, 0x6a),
            header: Color::Rgb(0xeb, 0xcb, 0x8b),
            move_button: Color::Rgb(0x81, 0xa1, 0xc1),
            selection_bg: Color::Rgb(0x43, 0x4c, 0x5e),
            selection_fg: Color::Rgb(0xec, 0xef, 0xf4),
            placeholder: Color::Rgb(0x61, 0x6e, 0x88),
            disabled: Color::Rgb(0x8f, 0x9b, 0xb3),
            invalid: Color::Rgb(0xbf, 0x61, 0x6a),
            drag_fg: Color::Rgb(0x2e, 0x34, 0x40),
            drag_bg: Color::Rgb(0x88, 0xc0, 0xd0),
            drop_target: Color::Rgb(0xa3, 0xbe, 0x8c),
            status_bar: Color::Rgb(0x8f, 0x9b, 0xb3),
            log_error: Color::Rgb(0xbf, 0x61, 0x6a),
            log_warn: Color::Rgb(0xeb, 0xcb, 0x8b),
            log_info: Color::Rgb(0xa3, 0xbe, 0x8c),
            log_debug: Color::Rgb(0x61, 0x6e, 0x88),
        }
    }
}
