//! Quit confirmation popup.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::style::Styles;

pub fn render_quit_confirm(frame: &mut Frame, area: Rect) {
    let popup_width = 30.min(area.width);
    let popup_height = 4.min(area.height);
    let popup_area = Rect::new(
        (area.width.saturating_sub(popup_width)) / 2,
        (area.height.saturating_sub(popup_height)) / 2,
        popup_width,
        popup_height,
    );

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Quit? ")
        .borders(Borders::ALL)
        .border_style(Styles::box_chrome());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let lines = vec![
        Line::from("Leave the dashboard?"),
        Line::from(vec![
            Span::styled("Enter", Styles::help_key()),
            Span::styled(" quit · ", Styles::dim()),
            Span::styled("Esc", Styles::help_key()),
            Span::styled(" stay", Styles::dim()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
