//! Scrollable grid of chart boxes grouped into thematic rows.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::state::AppState;
use crate::tui::style::Styles;
use crate::view::{ChartView, GroupView};

use super::chart_box::{BOX_HEIGHT, BOX_WIDTH, render_chart_box};

/// One vertically stacked scroll unit of the grid.
enum Unit<'a> {
    GroupHeader(&'a GroupView),
    BoxRow(&'a [ChartView]),
}

impl Unit<'_> {
    fn height(&self) -> u16 {
        match self {
            Unit::GroupHeader(_) => 1,
            Unit::BoxRow(_) => BOX_HEIGHT,
        }
    }
}

pub fn render_grid(frame: &mut Frame, area: Rect, state: &mut AppState) {
    let per_row = (area.width / (BOX_WIDTH + 1)).max(1) as usize;

    let mut units: Vec<Unit> = Vec::new();
    for group in &state.display {
        units.push(Unit::GroupHeader(group));
        for row in group.charts.chunks(per_row) {
            units.push(Unit::BoxRow(row));
        }
    }

    // Largest scroll offset at which the remaining units still fill the
    // viewport; scrolling further would only reveal blank space.
    let mut tail = 0u16;
    let mut max_scroll = 0;
    for (i, unit) in units.iter().enumerate().rev() {
        tail = tail.saturating_add(unit.height());
        if tail > area.height {
            max_scroll = i + 1;
            break;
        }
    }
    state.max_scroll = max_scroll;
    state.scroll = state.scroll.min(max_scroll);

    let mut y = area.y;
    for unit in units.iter().skip(state.scroll) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining == 0 {
            break;
        }
        let height = unit.height().min(remaining);
        match unit {
            Unit::GroupHeader(group) => {
                let line = Line::from(vec![
                    Span::styled(
                        format!("▌ {} ", group.group.name()),
                        Styles::group_header(group.group),
                    ),
                    Span::styled(format!("· {} indicators", group.charts.len()), Styles::dim()),
                ]);
                frame.render_widget(Paragraph::new(line), Rect::new(area.x, y, area.width, height));
            }
            Unit::BoxRow(charts) => {
                let mut x = area.x;
                for chart in *charts {
                    if x + BOX_WIDTH > area.right() {
                        break;
                    }
                    render_chart_box(frame, Rect::new(x, y, BOX_WIDTH, height), chart);
                    x += BOX_WIDTH + 1;
                }
            }
        }
        y += height;
    }
}
