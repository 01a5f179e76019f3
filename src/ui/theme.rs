use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
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

    /// Parse a config/CLI value, defaulting to dark for unknown input.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }
}

/// Resolved style palette for one theme mode.
pub struct Theme {
    pub highlight: Style,
    pub header: Style,
    pub dim: Style,
    pub error: Style,
    pub success: Style,
    pub loading: Style,
    pub border: Style,
    pub border_focused: Style,
    pub status_bar: Style,
    pub badge_local: Style,
    pub badge_catalog: Style,
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                highlight: Style::new()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                header: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                dim: Style::new().fg(Color::DarkGray),
                error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
                success: Style::new().fg(Color::Green),
                loading: Style::new().fg(Color::Yellow),
                border: Style::new().fg(Color::DarkGray),
                border_focused: Style::new().fg(Color::Cyan),
                status_bar: Style::new().fg(Color::White).bg(Color::DarkGray),
                badge_local: Style::new().fg(Color::Green),
                badge_catalog: Style::new().fg(Color::Magenta),
            },
            ThemeMode::Light => Self {
                highlight: Style::new()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
                header: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
                dim: Style::new().fg(Color::Gray),
                error: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
                success: Style::new().fg(Color::Green),
                loading: Style::new().fg(Color::Blue),
                border: Style::new().fg(Color::Gray),
                border_focused: Style::new().fg(Color::Blue),
                status_bar: Style::new().fg(Color::Black).bg(Color::Gray),
                badge_local: Style::new().fg(Color::Green),
                badge_catalog: Style::new().fg(Color::Magenta),
            },
        }
    }
}
