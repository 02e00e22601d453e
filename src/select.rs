//! Rank window selection for one indicator table.
//!
//! Decides which rows of a rank-sorted table end up in a chart box: the
//! global top ten, or a window of neighbors around the selected country.
//! This is a pure, stateless query over the immutable [`Dataset`] tables,
//! re-evaluated on every user interaction.
//!
//! [`Dataset`]: crate::data::Dataset

use std::cmp::Ordering;

use crate::data::{IndicatorRow, IndicatorTable};

/// How many rows a chart box displays at most.
pub const WINDOW: usize = 10;

/// What a chart box should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode<'a> {
    /// The ten highest-value countries.
    TopTen,
    /// Neighbors of the selected country. `None` while the country picker
    /// is active but nothing has been chosen yet; that falls back to the
    /// top ten.
    Around(Option<&'a str>),
}

/// Selects the rows of `table` to display under `mode`.
///
/// Returns at most [`WINDOW`] rows. An empty result occurs only when the
/// selected country has no row in `table` — a deliberate "no data" signal
/// rendered as an empty box, never an error.
///
/// Ordering: ascending by value for top/bottom windows, ascending by rank
/// for neighbor windows. Callers needing a different display order re-sort
/// the result.
pub fn select<'t>(table: &'t IndicatorTable, mode: DisplayMode<'_>) -> Vec<&'t IndicatorRow> {
    let country = match mode {
        DisplayMode::TopTen | DisplayMode::Around(None) => {
            return largest_by_value(&table.rows, WINDOW);
        }
        DisplayMode::Around(Some(country)) => country,
    };

    let Some(rank) = table.rank_of(country) else {
        return Vec::new();
    };
    let count = table.max_rank();

    if rank <= 10 {
        largest_by_value(&table.rows, WINDOW)
    } else if rank >= count.saturating_sub(10) {
        smallest_by_value(&table.rows, WINDOW)
    } else {
        // Five better-ranked neighbors, the country itself, four worse.
        // Rows are rank-sorted at rest, so the filtered window is already
        // ascending by rank.
        table
            .rows
            .iter()
            .filter(|r| r.rank >= rank - 5 && r.rank <= rank + 4)
            .collect()
    }
}

fn by_value_ascending(rows: &[IndicatorRow]) -> Vec<&IndicatorRow> {
    let mut sorted: Vec<&IndicatorRow> = rows.iter().collect();
    sorted.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
    sorted
}

/// The `n` largest values, ordered ascending by value.
fn largest_by_value(rows: &[IndicatorRow], n: usize) -> Vec<&IndicatorRow> {
    let mut sorted = by_value_ascending(rows);
    sorted.split_off(sorted.len().saturating_sub(n))
}

/// The `n` smallest values, ordered ascending by value.
fn smallest_by_value(rows: &[IndicatorRow], n: usize) -> Vec<&IndicatorRow> {
    let mut sorted = by_value_ascending(rows);
    sorted.truncate(n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Table with `n` rows: rank r has value `(n - r + 1) * 10`, country
    /// "C{r}". Rank 1 holds the highest value, as the producer guarantees.
    fn table(n: u32) -> IndicatorTable {
        IndicatorTable {
            name: "GDP".to_string(),
            rows: (1..=n)
                .map(|rank| IndicatorRow {
                    country: format!("C{}", rank),
                    value: f64::from((n - rank + 1) * 10),
                    rank,
                    country_with_rank: format!("{}. C{}", rank, rank),
                })
                .collect(),
        }
    }

    fn ranks(rows: &[&IndicatorRow]) -> Vec<u32> {
        rows.iter().map(|r| r.rank).collect()
    }

    #[test]
    fn top_ten_returns_ten_rows_value_ascending() {
        let t = table(50);
        let rows = select(&t, DisplayMode::TopTen);
        assert_eq!(rows.len(), 10);
        for pair in rows.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
        // The ten largest values belong to ranks 10..=1.
        assert_eq!(ranks(&rows), vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn top_ten_on_small_table_returns_all_rows() {
        let t = table(4);
        let rows = select(&t, DisplayMode::TopTen);
        assert_eq!(ranks(&rows), vec![4, 3, 2, 1]);
    }

    #[test]
    fn around_without_chosen_country_falls_back_to_top_ten() {
        let t = table(50);
        assert_eq!(
            ranks(&select(&t, DisplayMode::Around(None))),
            ranks(&select(&t, DisplayMode::TopTen))
        );
    }

    #[test]
    fn around_top_ranked_country_equals_top_ten() {
        let t = table(50);
        let top = ranks(&select(&t, DisplayMode::TopTen));
        for rank in [1, 5, 10] {
            let country = format!("C{}", rank);
            let rows = select(&t, DisplayMode::Around(Some(&country)));
            assert_eq!(ranks(&rows), top, "rank {} should show the top ten", rank);
        }
    }

    #[test]
    fn around_middle_country_returns_rank_window() {
        let t = table(50);
        let rows = select(&t, DisplayMode::Around(Some("C30")));
        // [r-5, r+4] inclusive, ascending by rank, containing the country.
        assert_eq!(ranks(&rows), (25..=34).collect::<Vec<u32>>());
        assert!(rows.iter().any(|r| r.country == "C30"));
    }

    #[test]
    fn around_bottom_country_returns_ten_smallest_values() {
        let t = table(50);
        // Rank 45 >= 50 - 10, so the bottom window applies.
        let rows = select(&t, DisplayMode::Around(Some("C45")));
        assert_eq!(rows.len(), 10);
        for pair in rows.windows(2) {
            assert!(pair[0].value <= pair[1].value);
        }
        // The ten smallest values belong to ranks 50..=41.
        assert_eq!(ranks(&rows), vec![50, 49, 48, 47, 46, 45, 44, 43, 42, 41]);
    }

    #[test]
    fn absent_country_returns_empty_window() {
        let t = table(50);
        let rows = select(&t, DisplayMode::Around(Some("Atlantis")));
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_table_returns_empty_window() {
        let t = IndicatorTable {
            name: "GDP".to_string(),
            rows: Vec::new(),
        };
        assert!(select(&t, DisplayMode::TopTen).is_empty());
        assert!(select(&t, DisplayMode::Around(Some("C1"))).is_empty());
    }

    #[test]
    fn small_table_keeps_literal_thresholds() {
        // With N=15 the top and bottom conditions overlap; the top branch
        // wins because it is checked first, and ranks just past ten fall
        // through to the bottom window.
        let t = table(15);
        let top = select(&t, DisplayMode::Around(Some("C8")));
        assert_eq!(ranks(&top), vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

        let bottom = select(&t, DisplayMode::Around(Some("C12")));
        assert_eq!(bottom.len(), 10);
        assert_eq!(ranks(&bottom), vec![15, 14, 13, 12, 11, 10, 9, 8, 7, 6]);
    }

    #[test]
    fn select_is_idempotent() {
        let t = table(50);
        let first = ranks(&select(&t, DisplayMode::Around(Some("C30"))));
        let second = ranks(&select(&t, DisplayMode::Around(Some("C30"))));
        assert_eq!(first, second);
    }
}
