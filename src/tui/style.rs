//! Color scheme and styles for the dashboard.

use ratatui::style::{Color, Modifier, Style};

use crate::data::Group;

/// Terminal palette for the dashboard chrome.
pub struct Theme;

impl Theme {
    // Header bar
    pub const HEADER_BG: Color = Color::DarkGray;
    pub const HEADER_FG: Color = Color::White;

    // Foreground colors
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    // Chart box chrome
    pub const BOX_BORDER: Color = Color::DarkGray;
    pub const VALUE_FG: Color = Color::Gray;

    // Dual-axis overlay tick
    pub const SECONDARY_MARK: Color = Color::White;
}

/// Per-group bar palette: a strong shade for the selected country's bar
/// and a light shade for its neighbors.
pub fn group_colors(group: Group) -> (Color, Color) {
    match group {
        Group::Economy => (Color::Yellow, Color::LightYellow),
        Group::People => (Color::White, Color::Gray),
        Group::Geography => (Color::Green, Color::LightGreen),
        Group::Science => (Color::Blue, Color::LightBlue),
    }
}

/// Accent color for a group's header line.
pub fn group_accent(group: Group) -> Color {
    group_colors(group).1
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Top header bar style.
    pub fn header() -> Style {
        Style::default().fg(Theme::HEADER_FG).bg(Theme::HEADER_BG)
    }

    /// Emphasized text inside the header bar.
    pub fn header_strong() -> Style {
        Self::header().add_modifier(Modifier::BOLD)
    }

    /// Group header line.
    pub fn group_header(group: Group) -> Style {
        Style::default()
            .fg(group_accent(group))
            .add_modifier(Modifier::BOLD)
    }

    /// Chart box border and footer chrome.
    pub fn box_chrome() -> Style {
        Style::default().fg(Theme::BOX_BORDER)
    }

    /// Chart box title.
    pub fn box_title() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Dimmed text (unit of measure, footer, hints).
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Country label of a regular bar.
    pub fn bar_label() -> Style {
        Style::default().fg(Theme::FG)
    }

    /// Country label of the selected country's bar.
    pub fn bar_label_selected() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    /// Value text drawn after a bar.
    pub fn bar_value() -> Style {
        Style::default().fg(Theme::VALUE_FG)
    }

    /// Filter input style for the country picker.
    pub fn picker_input() -> Style {
        Style::default()
            .fg(Theme::FG)
            .add_modifier(Modifier::UNDERLINED)
    }

    /// Selected row in the country picker list.
    pub fn picker_selected() -> Style {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    }

    /// Help key style (highlighted keys in hint lines).
    pub fn help_key() -> Style {
        Style::default().fg(Color::Yellow)
    }
}
