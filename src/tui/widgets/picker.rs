//! Country picker popup: a typeahead-filtered country list.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};

use crate::tui::state::AppState;
use crate::tui::style::Styles;

pub fn render_picker(frame: &mut Frame, area: Rect, state: &mut AppState, countries: &[String]) {
    let filtered: Vec<String> = state
        .picker
        .filtered(countries)
        .into_iter()
        .map(str::to_string)
        .collect();
    state.picker.resolve_selection(filtered.len());

    let popup_width = 36.min(area.width);
    let popup_height = ((filtered.len() as u16) + 4)
        .clamp(5, 18)
        .min(area.height);
    let popup_area = Rect::new(
        (area.width.saturating_sub(popup_width)) / 2,
        (area.height.saturating_sub(popup_height)) / 2,
        popup_width,
        popup_height,
    );

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Select a country ")
        .borders(Borders::ALL)
        .border_style(Styles::box_chrome());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // Filter input
        Constraint::Min(1),    // Country list
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let input = Line::from(vec![
        Span::styled("▸ ", Styles::dim()),
        Span::styled(state.picker.input.clone(), Styles::picker_input()),
        Span::styled("_", Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(input), chunks[0]);

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("no matches", Styles::dim())),
            chunks[1],
        );
    } else {
        let items: Vec<ListItem> = filtered.into_iter().map(ListItem::new).collect();
        let list = List::new(items).highlight_style(Styles::picker_selected());
        frame.render_stateful_widget(list, chunks[1], &mut state.picker.list_state);
    }

    let footer = Line::from(vec![
        Span::styled("type", Styles::help_key()),
        Span::styled(" filter · ", Styles::dim()),
        Span::styled("Enter", Styles::help_key()),
        Span::styled(" select · ", Styles::dim()),
        Span::styled("Esc", Styles::help_key()),
        Span::styled(" cancel", Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[2]);
}
