//! One indicator's chart box: title, unit of measure, up to ten horizontal
//! bars with rank-and-country labels, and a source footer.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::fmt;
use crate::tui::style::{Styles, Theme, group_colors};
use crate::view::{BarView, ChartView};

/// Outer box width, borders included.
pub const BOX_WIDTH: u16 = 38;
/// Outer box height: borders + unit line + ten bars + footer.
pub const BOX_HEIGHT: u16 = 14;

/// Width of the rank-and-country label column inside a box.
const LABEL_WIDTH: usize = 15;

pub fn render_chart_box(frame: &mut Frame, area: Rect, chart: &ChartView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::box_chrome())
        .title(Span::styled(
            format!(
                " {} ",
                fmt::truncate(&chart.indicator, (area.width as usize).saturating_sub(4))
            ),
            Styles::box_title(),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    lines.push(centered(&chart.uom, width, Styles::dim()));

    if chart.bars.is_empty() {
        // The selected country has no data for this indicator.
        while lines.len() < inner.height as usize / 2 {
            lines.push(Line::default());
        }
        lines.push(centered("no data", width, Styles::dim()));
    } else {
        let colors = group_colors(chart.group);
        for bar in &chart.bars {
            lines.push(bar_line(bar, width, colors));
        }
    }

    // Footer sits on the last inner line.
    while lines.len() + 1 < inner.height as usize {
        lines.push(Line::default());
    }
    let footer = format!(
        "{} | {} | {} countries",
        chart.source, chart.year, chart.country_count
    );
    lines.truncate(inner.height as usize - 1);
    lines.push(centered(&footer, width, Styles::dim()));

    frame.render_widget(Paragraph::new(lines), inner);
}

fn centered(text: &str, width: usize, style: Style) -> Line<'static> {
    let text = fmt::truncate(text, width);
    let pad = width.saturating_sub(text.chars().count()) / 2;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text, style),
    ])
}

/// Lays out one bar: label column, then the bar area with the value text
/// outside or inside the bar and an optional secondary-axis tick.
fn bar_line(bar: &BarView, width: usize, (strong, light): (Color, Color)) -> Line<'static> {
    let label_style = if bar.highlighted {
        Styles::bar_label_selected()
    } else {
        Styles::bar_label()
    };
    let label = format!(
        "{:<width$}",
        fmt::truncate(&bar.label, LABEL_WIDTH - 1),
        width = LABEL_WIDTH
    );

    let bar_area = width.saturating_sub(LABEL_WIDTH);
    let mut cells: Vec<(char, Style)> = vec![(' ', Style::default()); bar_area];

    let color = if bar.highlighted { strong } else { light };
    let bar_len = ((bar.ratio * bar_area as f64).round() as usize).min(bar_area);
    for cell in cells.iter_mut().take(bar_len) {
        *cell = ('█', Style::default().fg(color));
    }

    let text: Vec<char> = bar.text.chars().collect();
    if bar.text_inside && text.len() < bar_len {
        // Value drawn over the bar tail; an outside label would spill
        // past the box edge.
        let text_fg = if bar.highlighted {
            Color::White
        } else {
            Color::Black
        };
        let start = bar_len - text.len();
        for (i, ch) in text.iter().enumerate() {
            cells[start + i] = (*ch, Style::default().fg(text_fg).bg(color));
        }
    } else {
        let start = bar_len + 1;
        for (i, ch) in text.iter().enumerate() {
            if let Some(cell) = cells.get_mut(start + i) {
                *cell = (*ch, Styles::bar_value());
            }
        }
    }

    if let Some(mark) = &bar.secondary {
        let pos = ((mark.ratio * bar_area as f64).round() as usize).min(bar_area.saturating_sub(1));
        // The tick only overwrites bar or blank cells, never the value text.
        if let Some(cell) = cells.get_mut(pos)
            && matches!(cell.0, ' ' | '█')
        {
            *cell = ('┃', Style::default().fg(Theme::SECONDARY_MARK));
        }
    }

    let mut spans = vec![Span::styled(label, label_style)];
    spans.extend(runs(&cells));
    Line::from(spans)
}

/// Compresses styled cells into spans, merging equal-style runs.
fn runs(cells: &[(char, Style)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut current = String::new();
    let mut current_style: Option<Style> = None;
    for (ch, style) in cells {
        match current_style {
            Some(s) if s == *style => current.push(*ch),
            Some(s) => {
                spans.push(Span::styled(std::mem::take(&mut current), s));
                current.push(*ch);
                current_style = Some(*style);
            }
            None => {
                current.push(*ch);
                current_style = Some(*style);
            }
        }
    }
    if let Some(style) = current_style {
        spans.push(Span::styled(current, style));
    }
    spans
}
