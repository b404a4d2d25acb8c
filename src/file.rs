// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportTable};
use crate::csv::to_export_string;
use crate::fixture::{Fixture, DATE_FMT};
use crate::store::{DataSet, EVENT_HEADERS};

pub const FIXTURE_TABLE_HEADERS: [&str; 7] =
    ["Date", "Home team", "Home", "Away", "Away team", "Result", "Events"];

/// One row per fixture.
pub fn fixtures_table(fixtures: &[Fixture]) -> DataSet {
    let rows = fixtures
        .iter()
        .map(|f| {
            cells![
                f.date().format(DATE_FMT),
                f.home_team(),
                f.home_score(),
                f.away_score(),
                f.away_team(),
                f.result(),
                f.timeline().len(),
            ]
        })
        .collect();
    DataSet { headers: Some(FIXTURE_TABLE_HEADERS.iter().map(|h| s!(*h)).collect()), rows }
}

/// One row per event, fixtures in the given order.
pub fn events_table(fixtures: &[Fixture]) -> DataSet {
    let rows = fixtures
        .iter()
        .flat_map(|f| f.events())
        .map(|e| {
            let f = e.fixture();
            cells![f.date().format(DATE_FMT), f.home_team(), f.away_team(), e.minute(), e.kind(), e.player()]
        })
        .collect();
    DataSet { headers: Some(EVENT_HEADERS.iter().map(|h| s!(*h)).collect()), rows }
}

pub fn table_for(table: ExportTable, fixtures: &[Fixture]) -> DataSet {
    match table {
        ExportTable::Fixtures => fixtures_table(fixtures),
        ExportTable::Events => events_table(fixtures),
    }
}

/// Text for Copy/Export according to the export options.
pub fn to_export_text(export: &ExportOptions, ds: &DataSet) -> String {
    let headers = ds.headers.clone().unwrap_or_default();
    to_export_string(&headers, &ds.rows, export.include_headers, export.delim())
}

/// Write a single export file. Returns the final path written to.
pub fn write_export(
    export: &ExportOptions,
    ds: &DataSet,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    std::fs::write(&path, to_export_text(export, ds))?;
    logf!("Export: {} rows → {}", ds.row_count(), path.display());
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::DecodeOptions;
    use crate::fixture::RawFixture;

    fn sample() -> Vec<Fixture> {
        let raw = RawFixture {
            date: s!("2019-02-23"),
            home_team: s!("Fulham"),
            home_score: s!("1"),
            away_score: s!("2"),
            away_team: s!("West Ham"),
            scorers: vec![
                (s!("Babel"), s!("77'77'")),
                (s!("Hernandez"), s!("(12'12', 90'+3'90'+3')")),
            ],
        };
        vec![Fixture::parse(&raw, &DecodeOptions::default()).unwrap()]
    }

    #[test]
    fn fixture_rows_carry_derived_result() {
        let ds = fixtures_table(&sample());
        assert_eq!(ds.header_count(), 7);
        assert_eq!(ds.rows[0], cells!["2019-02-23", "Fulham", 1, 2, "West Ham", "Away Win", 3]);
    }

    #[test]
    fn event_rows_follow_timeline_order() {
        let ds = events_table(&sample());
        let minutes: Vec<&str> = ds.rows.iter().map(|r| r[3].as_str()).collect();
        assert_eq!(minutes, vec!["12", "77", "93"]);
        assert_eq!(ds.rows[0][1], "Fulham");
        assert_eq!(ds.rows[2][5], "Hernandez");
    }
}
