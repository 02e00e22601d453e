//! Help popup with keybindings and a short explanation of the two modes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::style::Styles;

pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_width = (area.width * 60 / 100).clamp(40, 64).min(area.width);
    let popup_height = (area.height * 70 / 100).clamp(10, 22).min(area.height);
    let popup_area = Rect::new(
        (area.width.saturating_sub(popup_width)) / 2,
        (area.height.saturating_sub(popup_height)) / 2,
        popup_width,
        popup_height,
    );

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::box_chrome());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let content = help_lines();
    let max_scroll = content.len().saturating_sub(inner.height as usize);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn key_line(key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<10}", key), Styles::help_key()),
        Span::raw(description),
    ])
}

fn help_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled("Keys", Styles::box_title())),
        key_line("t", "show the top 10 countries per indicator"),
        key_line("c", "pick a country and rank around it"),
        key_line("Enter", "reopen the country picker (country mode)"),
        key_line("x / Del", "clear the selected country"),
        key_line("↑ / ↓", "scroll the dashboard"),
        key_line("PgUp/PgDn", "scroll faster"),
        key_line("Home/End", "jump to the top / bottom"),
        key_line("? / H", "toggle this help"),
        key_line("q", "quit"),
        Line::default(),
        Line::from(Span::styled("Country mode", Styles::box_title())),
        Line::from("  A country ranked in the top 10 shows the regular"),
        Line::from("  top-10 chart. One ranked near the bottom shows the"),
        Line::from("  bottom 10. Anywhere in between, the chart shows the"),
        Line::from("  five better-ranked and four worse-ranked neighbors."),
        Line::from("  Boxes without data for the country stay empty."),
        Line::default(),
        Line::from(Span::styled("Charts", Styles::box_title())),
        Line::from("  Bars are scaled to each indicator's axis maximum."),
        Line::from("  Dual-axis boxes overlay the secondary indicator as"),
        Line::from("  a tick mark on its own scale."),
    ]
}
