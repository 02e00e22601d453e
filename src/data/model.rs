//! Core reference-data model: indicator tables, metadata, dashboard layout.
//!
//! Everything in this module is loaded once at startup and stays immutable
//! for the process lifetime. There are no writes and no concurrent mutation;
//! the TUI layer reads the same [`Dataset`] on every interaction.

use std::collections::HashMap;

/// Thematic category used purely for visual grouping of indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    People,
    Economy,
    Geography,
    Science,
}

impl Group {
    /// All groups in dashboard row order (top to bottom).
    pub fn all() -> &'static [Group] {
        &[Group::People, Group::Economy, Group::Geography, Group::Science]
    }

    /// Display name of the group.
    pub fn name(&self) -> &'static str {
        match self {
            Group::People => "People",
            Group::Economy => "Economy",
            Group::Geography => "Geography",
            Group::Science => "Science",
        }
    }

    /// Parses a metadata `Group` cell. Returns `None` for anything outside
    /// the fixed enumeration.
    pub fn parse(s: &str) -> Option<Group> {
        match s.trim() {
            "People" => Some(Group::People),
            "Economy" => Some(Group::Economy),
            "Geography" => Some(Group::Geography),
            "Science" => Some(Group::Science),
            _ => None,
        }
    }
}

/// One (country, value) entry of an indicator table.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorRow {
    pub country: String,
    pub value: f64,
    /// Dense 1-based position within the table, 1 = highest value.
    pub rank: u32,
    /// Display label combining rank and country, e.g. `"12. France"`.
    pub country_with_rank: String,
}

/// All rows of one indicator, sorted ascending by rank at rest.
///
/// Rank density (a contiguous 1..N sequence) is the data producer's
/// contract; it is not re-derived here.
#[derive(Debug, Clone)]
pub struct IndicatorTable {
    pub name: String,
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorTable {
    /// Number of countries with data for this indicator.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Highest rank in the table. Equals the row count while ranks stay
    /// dense, which is the producer's contract.
    pub fn max_rank(&self) -> u32 {
        self.rows.iter().map(|r| r.rank).max().unwrap_or(0)
    }

    /// Rank of `country`, or `None` when the country has no row here.
    pub fn rank_of(&self, country: &str) -> Option<u32> {
        self.rows.iter().find(|r| r.country == country).map(|r| r.rank)
    }
}

/// Per-indicator metadata row.
#[derive(Debug, Clone)]
pub struct IndicatorMeta {
    pub indicator: String,
    pub group: Group,
    pub source: String,
    pub year: String,
    /// Unit of measure, shown above the chart box.
    pub uom: String,
    /// Chart axis lower bound.
    pub min_value: f64,
    /// Chart axis upper bound; bar lengths are scaled against this.
    pub max_value: f64,
}

/// Ordered indicators of one dashboard row.
#[derive(Debug, Clone)]
pub struct GroupLayout {
    pub group: Group,
    pub indicators: Vec<String>,
}

/// Immutable reference data for the whole dashboard.
///
/// Built once at startup and passed by reference into the rank selector and
/// the rendering layer; there are no process-wide mutable singletons.
#[derive(Debug, Clone)]
pub struct Dataset {
    tables: HashMap<String, IndicatorTable>,
    metadata: HashMap<String, IndicatorMeta>,
    layout: Vec<GroupLayout>,
    countries: Vec<String>,
}

impl Dataset {
    pub(crate) fn new(
        tables: HashMap<String, IndicatorTable>,
        metadata: HashMap<String, IndicatorMeta>,
        layout: Vec<GroupLayout>,
        countries: Vec<String>,
    ) -> Self {
        Self {
            tables,
            metadata,
            layout,
            countries,
        }
    }

    /// Table for `indicator`, or `None` when no data row referenced it.
    pub fn table(&self, indicator: &str) -> Option<&IndicatorTable> {
        self.tables.get(indicator)
    }

    /// Metadata for `indicator`.
    pub fn meta(&self, indicator: &str) -> Option<&IndicatorMeta> {
        self.metadata.get(indicator)
    }

    /// Dashboard rows: groups in fixed order, indicators in metadata order.
    pub fn layout(&self) -> &[GroupLayout] {
        &self.layout
    }

    /// Options for the country picker.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Total number of indicators on the dashboard.
    pub fn indicator_count(&self) -> usize {
        self.layout.iter().map(|g| g.indicators.len()).sum()
    }
}
