//! Loading of the two denormalized CSV tables (plus the optional country
//! list) into an immutable [`Dataset`].
//!
//! The data directory is expected to contain:
//! - `data.csv` — one row per (indicator, country): `Indicator, Country,
//!   Value, Rank`. Rank-sorted and rank-dense per indicator is the
//!   producer's contract; this loader only re-establishes the rank order.
//! - `metadata.csv` — one row per indicator: `Indicator, Group, Source,
//!   Year, UoM, Min_value, Max_value`.
//! - `countries.csv` (optional) — one `Country` column with the picker
//!   options. When absent, the distinct countries of `data.csv` are used.

mod model;

pub use model::{Dataset, Group, GroupLayout, IndicatorMeta, IndicatorRow, IndicatorTable};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

/// Error types for dataset loading.
#[derive(Debug)]
pub enum DataError {
    /// CSV file could not be read or parsed.
    Csv { path: PathBuf, source: csv::Error },
    /// Metadata `Group` cell outside the fixed enumeration.
    UnknownGroup { indicator: String, group: String },
    /// No indicator ended up with both data rows and metadata.
    NoIndicators,
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Csv { path, source } => {
                write!(f, "failed to read '{}': {}", path.display(), source)
            }
            DataError::UnknownGroup { indicator, group } => {
                write!(f, "indicator '{}' has unknown group '{}'", indicator, group)
            }
            DataError::NoIndicators => {
                write!(f, "no indicator has both data rows and metadata")
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Csv { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DataRecord {
    #[serde(rename = "Indicator")]
    indicator: String,
    #[serde(rename = "Country")]
    country: String,
    #[serde(rename = "Value")]
    value: f64,
    #[serde(rename = "Rank")]
    rank: u32,
}

#[derive(Debug, Deserialize)]
struct MetaRecord {
    #[serde(rename = "Indicator")]
    indicator: String,
    #[serde(rename = "Group")]
    group: String,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Year")]
    year: String,
    #[serde(rename = "UoM")]
    uom: String,
    #[serde(rename = "Min_value")]
    min_value: f64,
    #[serde(rename = "Max_value")]
    max_value: f64,
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    #[serde(rename = "Country")]
    country: String,
}

impl Dataset {
    /// Loads the reference data from `dir`.
    ///
    /// Indicators missing either data rows or metadata are logged and
    /// excluded from the dashboard; an entirely unusable directory is an
    /// error.
    pub fn load(dir: &Path) -> Result<Dataset, DataError> {
        let metas = load_metadata(&dir.join("metadata.csv"))?;
        let tables = load_tables(&dir.join("data.csv"))?;

        // Dashboard layout: groups in fixed order, indicators in metadata
        // file order within each group.
        let mut metadata = HashMap::new();
        let mut layout = Vec::new();
        for group in Group::all() {
            let indicators: Vec<String> = metas
                .iter()
                .filter(|m| m.group == *group)
                .filter(|m| {
                    if tables.contains_key(&m.indicator) {
                        true
                    } else {
                        warn!(indicator = %m.indicator, "metadata without data rows, skipping");
                        false
                    }
                })
                .map(|m| m.indicator.clone())
                .collect();
            if !indicators.is_empty() {
                layout.push(GroupLayout {
                    group: *group,
                    indicators,
                });
            }
        }
        for m in metas {
            metadata.insert(m.indicator.clone(), m);
        }
        for name in tables.keys() {
            if !metadata.contains_key(name) {
                warn!(indicator = %name, "data rows without metadata, not displayed");
            }
        }
        if layout.is_empty() {
            return Err(DataError::NoIndicators);
        }

        let countries = load_countries(&dir.join("countries.csv"), &tables)?;

        let dataset = Dataset::new(tables, metadata, layout, countries);
        info!(
            indicators = dataset.indicator_count(),
            countries = dataset.countries().len(),
            "reference data loaded"
        );
        Ok(dataset)
    }
}

fn load_metadata(path: &Path) -> Result<Vec<IndicatorMeta>, DataError> {
    let mut reader = csv_reader(path)?;
    let mut metas = Vec::new();
    for record in reader.deserialize() {
        let record: MetaRecord = record.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let group = Group::parse(&record.group).ok_or_else(|| DataError::UnknownGroup {
            indicator: record.indicator.clone(),
            group: record.group.clone(),
        })?;
        metas.push(IndicatorMeta {
            indicator: record.indicator,
            group,
            source: record.source,
            year: record.year,
            uom: record.uom,
            min_value: record.min_value,
            max_value: record.max_value,
        });
    }
    Ok(metas)
}

fn load_tables(path: &Path) -> Result<HashMap<String, IndicatorTable>, DataError> {
    let mut reader = csv_reader(path)?;
    let mut tables: HashMap<String, IndicatorTable> = HashMap::new();
    for record in reader.deserialize() {
        let record: DataRecord = record.map_err(|source| DataError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let DataRecord {
            indicator,
            country,
            value,
            rank,
        } = record;
        let row = IndicatorRow {
            country_with_rank: format!("{}. {}", rank, country),
            country,
            value,
            rank,
        };
        tables
            .entry(indicator.clone())
            .or_insert_with(|| IndicatorTable {
                name: indicator,
                rows: Vec::new(),
            })
            .rows
            .push(row);
    }
    // Rank order at rest; the selector and the widgets rely on it.
    for table in tables.values_mut() {
        table.rows.sort_by_key(|r| r.rank);
    }
    Ok(tables)
}

/// Picker options: `countries.csv` in file order when present, otherwise the
/// distinct countries of the data table, sorted. The separate file lets a
/// country with no data anywhere still be selected (every box then renders
/// its empty placeholder).
fn load_countries(
    path: &Path,
    tables: &HashMap<String, IndicatorTable>,
) -> Result<Vec<String>, DataError> {
    if path.exists() {
        let mut reader = csv_reader(path)?;
        let mut countries = Vec::new();
        for record in reader.deserialize() {
            let record: CountryRecord = record.map_err(|source| DataError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            countries.push(record.country);
        }
        return Ok(countries);
    }

    let mut countries: Vec<String> = Vec::new();
    for table in tables.values() {
        for row in &table.rows {
            if !countries.contains(&row.country) {
                countries.push(row.country.clone());
            }
        }
    }
    countries.sort();
    Ok(countries)
}

fn csv_reader(path: &Path) -> Result<csv::Reader<std::fs::File>, DataError> {
    csv::Reader::from_path(path).map_err(|source| DataError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    const METADATA: &str = "\
Indicator,Group,Source,Year,UoM,Min_value,Max_value
GDP,Economy,World Bank,2023,current US$ billions,0,30000
Population,People,UN,2024,millions,0,1500
Land area,Geography,FAO,2022,thousand sq. km,0,18000
";

    // data.csv rows are intentionally shuffled: the loader re-establishes
    // rank order.
    const DATA: &str = "\
Indicator,Country,Value,Rank
GDP,Germany,4500,3
GDP,United States,27000,1
GDP,China,18000,2
Population,India,1440,1
Population,China,1410,2
Land area,Russia,16380,1
";

    #[test]
    fn load_sorts_rows_by_rank_and_derives_labels() {
        let dir = write_dir(&[("metadata.csv", METADATA), ("data.csv", DATA)]);
        let dataset = Dataset::load(dir.path()).unwrap();

        let gdp = dataset.table("GDP").unwrap();
        let ranks: Vec<u32> = gdp.rows.iter().map(|r| r.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(gdp.rows[0].country_with_rank, "1. United States");
        assert_eq!(gdp.max_rank(), 3);
        assert_eq!(gdp.rank_of("Germany"), Some(3));
        assert_eq!(gdp.rank_of("Atlantis"), None);
    }

    #[test]
    fn layout_follows_group_order_then_metadata_order() {
        let dir = write_dir(&[("metadata.csv", METADATA), ("data.csv", DATA)]);
        let dataset = Dataset::load(dir.path()).unwrap();

        let groups: Vec<Group> = dataset.layout().iter().map(|g| g.group).collect();
        assert_eq!(groups, vec![Group::People, Group::Economy, Group::Geography]);
        assert_eq!(dataset.indicator_count(), 3);
    }

    #[test]
    fn countries_fall_back_to_distinct_data_countries() {
        let dir = write_dir(&[("metadata.csv", METADATA), ("data.csv", DATA)]);
        let dataset = Dataset::load(dir.path()).unwrap();

        assert_eq!(
            dataset.countries(),
            ["China", "Germany", "India", "Russia", "United States"]
        );
    }

    #[test]
    fn countries_file_wins_over_fallback() {
        let countries = "Country\nAtlantis\nChina\n";
        let dir = write_dir(&[
            ("metadata.csv", METADATA),
            ("data.csv", DATA),
            ("countries.csv", countries),
        ]);
        let dataset = Dataset::load(dir.path()).unwrap();

        assert_eq!(dataset.countries(), ["Atlantis", "China"]);
    }

    #[test]
    fn unknown_group_is_an_error() {
        let bad = "\
Indicator,Group,Source,Year,UoM,Min_value,Max_value
GDP,Finance,World Bank,2023,US$,0,30000
";
        let dir = write_dir(&[("metadata.csv", bad), ("data.csv", DATA)]);
        let err = Dataset::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::UnknownGroup { .. }));
    }

    #[test]
    fn metadata_without_data_rows_is_skipped() {
        let extra = "\
Indicator,Group,Source,Year,UoM,Min_value,Max_value
GDP,Economy,World Bank,2023,US$,0,30000
Inflation,Economy,IMF,2023,%,0,100
";
        let data = "Indicator,Country,Value,Rank\nGDP,China,18000,1\n";
        let dir = write_dir(&[("metadata.csv", extra), ("data.csv", data)]);
        let dataset = Dataset::load(dir.path()).unwrap();

        assert_eq!(dataset.layout().len(), 1);
        assert_eq!(dataset.layout()[0].indicators, ["GDP"]);
        // Metadata stays queryable even for skipped indicators.
        assert!(dataset.meta("Inflation").is_some());
    }

    #[test]
    fn empty_overlap_is_an_error() {
        let data = "Indicator,Country,Value,Rank\nInflation,China,2.1,1\n";
        let dir = write_dir(&[("metadata.csv", METADATA), ("data.csv", data)]);
        let err = Dataset::load(dir.path()).unwrap_err();
        assert!(matches!(err, DataError::NoIndicators));
    }
}
