//! UI-agnostic view models for the dashboard grid.
//!
//! These types carry presentation data without any dependency on a specific
//! rendering framework; the TUI widgets map them to ratatui spans. Each user
//! interaction rebuilds the whole dashboard from the immutable dataset.

mod chart;

pub use chart::{ChartConfigs, ChartKind};

use crate::data::{Dataset, Group};
use crate::select::DisplayMode;

/// Secondary-series overlay on a dual-axis chart, scaled to the secondary
/// indicator's own axis.
#[derive(Debug, Clone, PartialEq)]
pub struct SecondaryMark {
    pub ratio: f64,
    pub text: String,
}

/// One bar of a chart box.
#[derive(Debug, Clone, PartialEq)]
pub struct BarView {
    pub country: String,
    /// Rank-and-country label, e.g. `"12. France"`.
    pub label: String,
    pub value: f64,
    /// Value formatted for display (thousands grouping, dynamic decimals).
    pub text: String,
    /// Bar length as a share of the axis upper bound, clamped to [0, 1].
    pub ratio: f64,
    /// Draw the value text inside the bar; an outside label would spill
    /// past the box edge.
    pub text_inside: bool,
    /// This bar belongs to the selected country.
    pub highlighted: bool,
    pub secondary: Option<SecondaryMark>,
}

/// One chart box, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub indicator: String,
    pub group: Group,
    pub uom: String,
    pub source: String,
    pub year: String,
    /// Total number of countries with data for this indicator.
    pub country_count: usize,
    /// Name of the overlaid secondary indicator on dual-axis charts.
    pub secondary_name: Option<String>,
    /// Display order: best rank first. Empty when the selected country has
    /// no data for this indicator.
    pub bars: Vec<BarView>,
}

/// One dashboard row: a group header plus its chart boxes.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView {
    pub group: Group,
    pub charts: Vec<ChartView>,
}

/// Rebuilds the whole dashboard for `mode`.
pub fn build_dashboard(
    dataset: &Dataset,
    configs: &ChartConfigs,
    mode: DisplayMode<'_>,
) -> Vec<GroupView> {
    dataset
        .layout()
        .iter()
        .map(|row| GroupView {
            group: row.group,
            charts: row
                .indicators
                .iter()
                .filter_map(|name| chart::build_chart(dataset, configs, name, mode))
                .collect(),
        })
        .collect()
}
