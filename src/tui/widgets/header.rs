//! Top header bar: title, mode radio, current selection, transient status.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::{AppState, Mode};
use crate::tui::style::Styles;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![
        Span::styled(" Ranking the World ", Styles::header_strong()),
        Span::styled(
            "· compare countries across selected indicators ",
            Styles::header(),
        ),
        Span::styled(format!(" [{}]", state.mode.name()), Styles::header_strong()),
    ];

    if state.mode == Mode::Country {
        let selection = match &state.selected_country {
            Some(country) => format!(" {} ", country),
            None => " no country chosen — showing top 10 ".to_string(),
        };
        spans.push(Span::styled(selection, Styles::header()));
    }

    if let Some(message) = &state.status_message {
        spans.push(Span::styled(format!("  {}", message), Styles::header()));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::header()),
        area,
    );
}
