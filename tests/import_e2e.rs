// tests/import_e2e.rs
use std::fs;
use std::path::PathBuf;

use football_scrape::config::options::{AppOptions, LeagueFilter, TextShape};
use football_scrape::fixture::{EventKind, MatchResult};
use football_scrape::runner;
use football_scrape::store::{CsvStore, Session, StoreError};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("fs_e2e_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const FEED: &str = r#"# matchday 26
league,Premier League
fixture,2019-02-23,Fulham,1,1,West Ham
event,Ryan Babel,"(77'77')"
event,Javier Hernandez,"(45'+1'45'+1')"
fixture,2019-02-23,Crystal Palace,1,4,Leicester City
event,Luka Milivojevic,"(12' pen12' pen)"
event,Jamie Vardy,"(12'12', 90'+3'90'+3')"
event,Wilfred Ndidi,"(Dismissed at 67'Dismissed at 67')"
fixture,2019-02-23,Burnley,two,1,Spurs
league,Scottish Premiership
fixture,2019-02-23,Celtic,2,0,Hibernian
"#;

fn write_feed(dir: &PathBuf, text: &str) -> PathBuf {
    let path = dir.join("feed.csv");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn feed_to_store_and_back() {
    let dir = tmp_dir("roundtrip");
    let feed = write_feed(&dir, FEED);
    let mut store = CsvStore::new(dir.join("store"));

    let summary = runner::import_path(&feed, &AppOptions::default(), &mut store, None).unwrap();
    assert_eq!(summary.imported(), 2);
    assert_eq!(summary.failed(), 1);
    assert_eq!(summary.skipped_leagues, vec!["Scottish Premiership".to_string()]);
    assert_eq!(store.leagues().unwrap(), vec!["Premier League".to_string()]);

    let fixtures = store.load_league("Premier League").unwrap();
    assert_eq!(fixtures.len(), 2);

    let palace = fixtures.iter().find(|f| f.home_team() == "Crystal Palace").unwrap();
    assert_eq!(palace.result(), MatchResult::AwayWin);

    // ordered by minute; the two 12th-minute events keep feed order
    let got: Vec<(u32, EventKind, &str)> = palace
        .timeline()
        .iter()
        .map(|e| (e.minute(), e.kind(), e.player()))
        .collect();
    assert_eq!(
        got,
        vec![
            (12, EventKind::Penalty, "Luka Milivojevic"),
            (12, EventKind::Goal, "Jamie Vardy"),
            (67, EventKind::RedCard, "Wilfred Ndidi"),
            (93, EventKind::Goal, "Jamie Vardy"),
        ]
    );

    let fulham = fixtures.iter().find(|f| f.home_team() == "Fulham").unwrap();
    assert_eq!(fulham.result(), MatchResult::Draw);
    assert_eq!(fulham.timeline().first_at(46).map(|e| e.player()), Some("Javier Hernandez"));
}

#[test]
fn reimport_replaces_same_fixture() {
    let dir = tmp_dir("upsert");
    let mut store = CsvStore::new(dir.join("store"));
    let mut options = AppOptions::default();
    options.import.leagues = LeagueFilter::All;

    let first = write_feed(&dir, FEED);
    runner::import_path(&first, &options, &mut store, None).unwrap();
    assert_eq!(store.leagues().unwrap().len(), 2);

    // corrected score for Celtic, plus one new fixture
    let second = write_feed(
        &dir,
        "league,Scottish Premiership\nfixture,2019-02-23,Celtic,3,0,Hibernian\nfixture,2019-02-24,Rangers,1,1,Aberdeen\n",
    );
    runner::import_path(&second, &options, &mut store, None).unwrap();

    let scot = store.load_league("Scottish Premiership").unwrap();
    assert_eq!(scot.len(), 2);
    assert_eq!(scot[0].home_team(), "Celtic");
    assert_eq!(scot[0].home_score(), 3);
    assert_eq!(scot[1].result(), MatchResult::Draw);

    // untouched league keeps its fixtures
    assert_eq!(store.load_league("Premier League").unwrap().len(), 2);
}

#[test]
fn plain_feed_needs_plain_shape() {
    let dir = tmp_dir("plain");
    let feed = write_feed(
        &dir,
        "league,Premier League\nfixture,2019-02-23,Fulham,1,0,West Ham\nevent,Ryan Babel,77'\n",
    );

    let mut store = CsvStore::new(dir.join("store"));
    let summary = runner::import_path(&feed, &AppOptions::default(), &mut store, None).unwrap();
    assert_eq!(summary.imported(), 0);
    assert_eq!(summary.failed(), 1);

    let mut options = AppOptions::default();
    options.decode.shape = TextShape::Plain;
    let summary = runner::import_path(&feed, &options, &mut store, None).unwrap();
    assert_eq!(summary.imported(), 1);
    let fx = store.load_league("Premier League").unwrap();
    assert_eq!(fx[0].timeline().iter().next().map(|e| e.minute()), Some(77));
}

#[test]
fn contradicting_result_is_corrupt() {
    let dir = tmp_dir("corrupt");
    let feed = write_feed(&dir, "league,Premier League\nfixture,2019-02-23,Fulham,2,0,West Ham\n");
    let mut store = CsvStore::new(dir.join("store"));
    runner::import_path(&feed, &AppOptions::default(), &mut store, None).unwrap();

    let fx_file = dir.join("store").join("premier_league").join("fixtures.csv");
    let text = fs::read_to_string(&fx_file).unwrap();
    assert!(text.contains("Home Win"));
    fs::write(&fx_file, text.replace("Home Win", "Draw")).unwrap();

    let err = store.load_league("Premier League").unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { row: 1, .. }), "{err}");
}

#[test]
fn missing_feed_is_an_error() {
    let dir = tmp_dir("missing");
    let mut store = CsvStore::new(dir.join("store"));
    let res = runner::import_path(&dir.join("nope.csv"), &AppOptions::default(), &mut store, None);
    assert!(res.is_err());
    assert!(store.leagues().unwrap().is_empty());
}
