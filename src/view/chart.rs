//! Per-indicator chart construction, one handler per chart kind.

use std::collections::HashMap;

use crate::data::{Dataset, IndicatorMeta, IndicatorRow, IndicatorTable};
use crate::fmt;
use crate::select::{self, DisplayMode};

use super::{BarView, ChartView, SecondaryMark};

/// Bars longer than this share of the axis draw their value inside the bar.
const INSIDE_TEXT_RATIO: f64 = 0.75;

/// How a chart box draws its window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartKind {
    /// Plain horizontal bars; the default for every indicator.
    Bar,
    /// Main bars plus the named secondary indicator overlaid as a tick
    /// mark on the secondary's own axis scale.
    Dual { secondary: String },
    /// Stacked composition with the named secondary indicator.
    Stacked { secondary: String },
}

/// Per-indicator chart-kind overrides; everything else draws plain bars.
#[derive(Debug, Clone, Default)]
pub struct ChartConfigs {
    overrides: HashMap<String, ChartKind>,
}

impl ChartConfigs {
    /// The default dashboard: plain bars everywhere, with the budget pair
    /// drawn as a dual-axis chart.
    pub fn standard() -> Self {
        Self::default().with(
            "Budget",
            ChartKind::Dual {
                secondary: "Budget (% of GDP)".to_string(),
            },
        )
    }

    /// Overrides the chart kind for one indicator.
    pub fn with(mut self, indicator: &str, kind: ChartKind) -> Self {
        self.overrides.insert(indicator.to_string(), kind);
        self
    }

    pub fn kind_for(&self, indicator: &str) -> &ChartKind {
        self.overrides.get(indicator).unwrap_or(&ChartKind::Bar)
    }
}

/// Builds the chart box for one indicator, or `None` when the indicator has
/// no table or no metadata (already logged at load time).
pub(super) fn build_chart(
    dataset: &Dataset,
    configs: &ChartConfigs,
    indicator: &str,
    mode: DisplayMode<'_>,
) -> Option<ChartView> {
    let table = dataset.table(indicator)?;
    let meta = dataset.meta(indicator)?;
    let view = match configs.kind_for(indicator) {
        ChartKind::Bar => bar_chart(table, meta, mode),
        ChartKind::Dual { secondary } => dual_chart(dataset, table, meta, secondary, mode),
        ChartKind::Stacked { secondary } => stacked_chart(dataset, table, meta, secondary, mode),
    };
    Some(view)
}

fn bar_chart(table: &IndicatorTable, meta: &IndicatorMeta, mode: DisplayMode<'_>) -> ChartView {
    let selected = match mode {
        DisplayMode::Around(Some(country)) => Some(country),
        _ => None,
    };

    let mut rows = select::select(table, mode);
    // Display order: best rank on top, regardless of the window ordering
    // the selector returned.
    rows.sort_by_key(|r| r.rank);

    let one_decimal = fmt::one_decimal_for(window_max(&rows));
    let bars = rows
        .iter()
        .map(|row| {
            let ratio = axis_ratio(row.value, meta.max_value);
            BarView {
                country: row.country.clone(),
                label: row.country_with_rank.clone(),
                value: row.value,
                text: fmt::format_value(row.value, one_decimal),
                ratio,
                text_inside: ratio > INSIDE_TEXT_RATIO,
                highlighted: selected == Some(row.country.as_str()),
                secondary: None,
            }
        })
        .collect();

    ChartView {
        indicator: table.name.clone(),
        group: meta.group,
        uom: meta.uom.clone(),
        source: meta.source.clone(),
        year: meta.year.clone(),
        country_count: table.len(),
        secondary_name: None,
        bars,
    }
}

/// Dual-axis chart: the main indicator's bars with the secondary
/// indicator's value for the same countries overlaid as a tick mark.
fn dual_chart(
    dataset: &Dataset,
    table: &IndicatorTable,
    meta: &IndicatorMeta,
    secondary: &str,
    mode: DisplayMode<'_>,
) -> ChartView {
    let mut view = bar_chart(table, meta, mode);
    let (Some(sec_table), Some(sec_meta)) = (dataset.table(secondary), dataset.meta(secondary))
    else {
        // Secondary series absent from the dataset: plain bars.
        return view;
    };

    let sec_values: Vec<Option<f64>> = view
        .bars
        .iter()
        .map(|bar| sec_value(sec_table, &bar.country))
        .collect();
    let one_decimal = fmt::one_decimal_for(
        sec_values
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, &v| acc.max(v)),
    );
    for (bar, value) in view.bars.iter_mut().zip(sec_values) {
        bar.secondary = value.map(|v| SecondaryMark {
            ratio: axis_ratio(v, sec_meta.max_value),
            text: fmt::format_value(v, one_decimal),
        });
    }
    view.secondary_name = Some(secondary.to_string());
    view
}

/// Stacked bars need a component breakdown the data table does not carry
/// yet, so this draws the plain bar layout.
/// TODO: stack the secondary series once data.csv gains component columns.
fn stacked_chart(
    _dataset: &Dataset,
    table: &IndicatorTable,
    meta: &IndicatorMeta,
    _secondary: &str,
    mode: DisplayMode<'_>,
) -> ChartView {
    bar_chart(table, meta, mode)
}

fn sec_value(table: &IndicatorTable, country: &str) -> Option<f64> {
    table
        .rows
        .iter()
        .find(|r| r.country == country)
        .map(|r| r.value)
}

fn window_max(rows: &[&IndicatorRow]) -> f64 {
    rows.iter().map(|r| r.value).fold(0.0_f64, f64::max)
}

/// Bar length as a share of the axis upper bound, clamped to [0, 1].
fn axis_ratio(value: f64, max_value: f64) -> f64 {
    if max_value > 0.0 {
        (value / max_value).clamp(0.0, 1.0)
    } else {
        0.0
    }
}
