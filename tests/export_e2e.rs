// tests/export_e2e.rs
use std::fs;
use std::path::PathBuf;

use football_scrape::config::options::{AppOptions, DecodeOptions, ExportFormat, ExportTable};
use football_scrape::file;
use football_scrape::fixture::{Fixture, RawFixture};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fs_export_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn fixtures() -> Vec<Fixture> {
    let raw = |date: &str, home: &str, hs: &str, a: &str, away: &str, scorers: &[(&str, &str)]| RawFixture {
        date: date.into(),
        home_team: home.into(),
        home_score: hs.into(),
        away_score: a.into(),
        away_team: away.into(),
        scorers: scorers.iter().map(|(p, f)| (p.to_string(), f.to_string())).collect(),
    };
    let opts = DecodeOptions::default();
    vec![
        Fixture::parse(&raw("2019-02-23", "Fulham", "1", "1", "West Ham", &[
            ("Ryan Babel", "(77'77')"),
            ("Javier Hernandez", "(45'+1'45'+1')"),
        ]), &opts).unwrap(),
        Fixture::parse(&raw("2019-02-24", "Chelsea", "0", "0", "Tottenham, London", &[]), &opts).unwrap(),
    ]
}

#[test]
fn fixtures_csv_quotes_commas() {
    let dir = tmp_dir("csv");
    let mut opts = AppOptions::default();
    opts.export.set_path(dir.join("pl.csv").to_str().unwrap());

    let ds = file::table_for(ExportTable::Fixtures, &fixtures());
    let path = file::write_export(&opts.export, &ds).unwrap();
    assert!(path.ends_with("pl.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,Home team,Home,Away,Away team,Result,Events");
    assert_eq!(lines[1], "2019-02-23,Fulham,1,1,West Ham,Draw,2");
    assert_eq!(lines[2], "2019-02-24,Chelsea,0,0,\"Tottenham, London\",Draw,0");
}

#[test]
fn events_tsv_without_headers() {
    let dir = tmp_dir("tsv");
    let mut opts = AppOptions::default();
    opts.export.format = ExportFormat::Tsv;
    opts.export.table = ExportTable::Events;
    opts.export.include_headers = false;
    opts.export.set_path(dir.join("nested").join("events.tsv").to_str().unwrap());

    let ds = file::table_for(opts.export.table, &fixtures());
    let path = file::write_export(&opts.export, &ds).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "2019-02-23\tFulham\tWest Ham\t46\tgoal\tJavier Hernandez",
            "2019-02-23\tFulham\tWest Ham\t77\tgoal\tRyan Babel",
        ]
    );
}

#[test]
fn default_path_follows_table_and_format() {
    let mut opts = AppOptions::default();
    assert!(opts.export.out_path().ends_with("fixtures.csv"));
    opts.export.format = ExportFormat::Tsv;
    opts.export.table = ExportTable::Events;
    assert!(opts.export.out_path().ends_with("events.tsv"));
}
