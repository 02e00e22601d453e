//! Main rendering logic.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::data::Dataset;

use super::state::{AppState, PopupState};
use super::style::Styles;
use super::widgets::{
    render_grid, render_header, render_help, render_picker, render_quit_confirm,
};

/// Main render function.
pub fn render(frame: &mut Frame, state: &mut AppState, dataset: &Dataset) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(5),    // Dashboard grid
        Constraint::Length(1), // Key hints
    ])
    .split(area);

    render_header(frame, chunks[0], state);
    render_grid(frame, chunks[1], state);
    render_hints(frame, chunks[2]);

    // Popups overlay everything else.
    if let PopupState::Help { scroll } = &mut state.popup {
        render_help(frame, area, scroll);
    } else if state.popup == PopupState::Picker {
        render_picker(frame, area, state, dataset.countries());
    } else if state.popup == PopupState::QuitConfirm {
        render_quit_confirm(frame, area);
    }
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let pairs = [
        ("t", "top 10"),
        ("c", "country"),
        ("x", "clear"),
        ("↑↓", "scroll"),
        ("?", "help"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(pairs.len() * 3);
    for (key, description) in pairs {
        spans.push(Span::styled(format!(" {}", key), Styles::help_key()));
        spans.push(Span::styled(format!(" {} ", description), Styles::dim()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
