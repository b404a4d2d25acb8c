// src/store.rs
//! Local fixture cache.
//!
//! Layout under the store root (one directory per league):
//! ```text
//! .store/premier_league/league.txt     display name
//! .store/premier_league/fixtures.csv   Date,Home team,Home,Away,Away team,Result
//! .store/premier_league/events.csv     Date,Home team,Away team,Minute,Kind,Player
//! ```
//! Directory names are case-folded, so "Premier League" and
//! "PREMIER LEAGUE" are one league; `league.txt` keeps the first casing seen.
//! Results are written for humans reading the CSV; on load they are
//! re-derived from the scores and a mismatch counts as corruption.

use std::{
    collections::{BTreeMap, HashMap},
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::config::consts::{EVENTS_FILE, FIXTURES_FILE, LEAGUE_NAME_FILE, STORE_SEP};
use crate::core::sanitize::sanitize_filename;
use crate::csv::{parse_rows, strip_header, to_export_string};
use crate::fixture::{model::parse_date, Event, EventKind, Fixture, FixtureKey, MatchResult, DATE_FMT};

pub const FIXTURE_HEADERS: [&str; 6] = ["Date", "Home team", "Home", "Away", "Away team", "Result"];
pub const EVENT_HEADERS: [&str; 6] = ["Date", "Home team", "Away team", "Minute", "Kind", "Player"];

/// Headers + rows, the shape every table in the app is passed around in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize { self.rows.len() }
    pub fn header_count(&self) -> usize { self.headers.as_ref().map(|h| h.len()).unwrap_or(0) }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: row {row}: {reason}", path.display())]
    Corrupt { path: PathBuf, row: usize, reason: String },
}

/// Where finished fixtures go. Implementations own all storage concerns.
pub trait Session {
    /// Display names of every stored league, sorted.
    fn leagues(&self) -> Result<Vec<String>, StoreError>;

    /// Stored fixtures of one league, by date then home team.
    /// An unknown league is empty, not an error.
    fn load_league(&self, league: &str) -> Result<Vec<Fixture>, StoreError>;

    /// Upsert fixtures by (date, home, away). Returns how many were written.
    fn update_league(&mut self, league: &str, fixtures: &[Fixture]) -> Result<usize, StoreError>;
}

/// CSV-file session rooted at a directory.
#[derive(Clone, Debug)]
pub struct CsvStore {
    root: PathBuf,
}

impl CsvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path { &self.root }

    fn league_dir(&self, league: &str) -> PathBuf {
        self.root.join(sanitize_filename(&league.trim().to_lowercase()))
    }
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> StoreError + '_ {
    move |source| StoreError::Io { path: path.to_path_buf(), source }
}

fn corrupt(path: &Path, row: usize, reason: impl Into<String>) -> StoreError {
    StoreError::Corrupt { path: path.to_path_buf(), row, reason: reason.into() }
}

/// Missing file reads as empty.
fn read_table(path: &Path) -> Result<Vec<Vec<String>>, StoreError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(strip_header(parse_rows(&text, STORE_SEP), "Date")),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(io_err(path)(e)),
    }
}

fn table_text(headers: &[&str], rows: &[Vec<String>]) -> String {
    let headers: Vec<String> = headers.iter().map(|h| s!(*h)).collect();
    to_export_string(&headers, rows, true, STORE_SEP)
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write every file to a staging path first and rename them into place only
/// once all writes succeeded. A failed write leaves the old tables as they were.
fn replace_files(files: &[(PathBuf, String)]) -> Result<(), StoreError> {
    let mut staged: Vec<PathBuf> = Vec::with_capacity(files.len());
    for (path, text) in files {
        let tmp = staging_path(path);
        if let Err(e) = fs::write(&tmp, text) {
            for t in &staged {
                let _ = fs::remove_file(t);
            }
            return Err(io_err(&tmp)(e));
        }
        staged.push(tmp);
    }
    for ((path, _), tmp) in files.iter().zip(&staged) {
        fs::rename(tmp, path).map_err(io_err(path))?;
    }
    Ok(())
}

fn cell<'a>(row: &'a [String], ix: usize, path: &Path, n: usize) -> Result<&'a str, StoreError> {
    row.get(ix)
        .map(|s| s.as_str())
        .ok_or_else(|| corrupt(path, n, format!("missing column {ix}")))
}

fn num(s: &str, what: &str, path: &Path, n: usize) -> Result<u32, StoreError> {
    s.trim().parse().map_err(|_| corrupt(path, n, format!("bad {what} {s:?}")))
}

impl Session for CsvStore {
    fn leagues(&self) -> Result<Vec<String>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_err(&self.root)(e)),
        };

        let mut out = Vec::new();
        for entry in entries {
            let path = entry.map_err(io_err(&self.root))?.path();
            if !path.is_dir() || !path.join(FIXTURES_FILE).is_file() {
                continue;
            }
            let name = fs::read_to_string(path.join(LEAGUE_NAME_FILE))
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .or_else(|| path.file_name().map(|f| f.to_string_lossy().replace('_', " ")));
            if let Some(name) = name {
                out.push(name);
            }
        }
        out.sort();
        Ok(out)
    }

    fn load_league(&self, league: &str) -> Result<Vec<Fixture>, StoreError> {
        let dir = self.league_dir(league);
        let fx_path = dir.join(FIXTURES_FILE);
        let ev_path = dir.join(EVENTS_FILE);

        // Events first, grouped by the fixture they belong to
        let mut events: HashMap<FixtureKey, Vec<Event>> = HashMap::new();
        for (i, row) in read_table(&ev_path)?.iter().enumerate() {
            let n = i + 1;
            let date = parse_date(cell(row, 0, &ev_path, n)?)
                .map_err(|e| corrupt(&ev_path, n, e.to_string()))?;
            let key = FixtureKey {
                date,
                home_team: s!(cell(row, 1, &ev_path, n)?),
                away_team: s!(cell(row, 2, &ev_path, n)?),
            };
            let minute = num(cell(row, 3, &ev_path, n)?, "minute", &ev_path, n)?;
            let kind_txt = cell(row, 4, &ev_path, n)?;
            let kind = EventKind::from_str_opt(kind_txt)
                .ok_or_else(|| corrupt(&ev_path, n, format!("unknown kind {kind_txt:?}")))?;
            let player = cell(row, 5, &ev_path, n)?;
            events.entry(key).or_default().push(Event::new(player, kind, minute));
        }

        let mut fixtures = Vec::new();
        for (i, row) in read_table(&fx_path)?.iter().enumerate() {
            let n = i + 1;
            let date = parse_date(cell(row, 0, &fx_path, n)?)
                .map_err(|e| corrupt(&fx_path, n, e.to_string()))?;
            let home_team = s!(cell(row, 1, &fx_path, n)?);
            let home = num(cell(row, 2, &fx_path, n)?, "home score", &fx_path, n)?;
            let away = num(cell(row, 3, &fx_path, n)?, "away score", &fx_path, n)?;
            let away_team = s!(cell(row, 4, &fx_path, n)?);

            let stored = cell(row, 5, &fx_path, n)?;
            let derived = MatchResult::from_scores(home, away);
            if MatchResult::from_label(stored) != Some(derived) {
                return Err(corrupt(&fx_path, n, format!("result {stored:?} contradicts {home}:{away}")));
            }

            let key = FixtureKey { date, home_team, away_team };
            let evs = events.remove(&key).unwrap_or_default();
            fixtures.push(Fixture::restore(key, home, away, evs));
        }

        if let Some((key, _)) = events.iter().next() {
            return Err(corrupt(
                &ev_path,
                0,
                format!("events for unknown fixture {} {} vs {}", key.date, key.home_team, key.away_team),
            ));
        }

        fixtures.sort_by(|a, b| a.key().cmp(&b.key()));
        Ok(fixtures)
    }

    fn update_league(&mut self, league: &str, fixtures: &[Fixture]) -> Result<usize, StoreError> {
        let dir = self.league_dir(league);
        fs::create_dir_all(&dir).map_err(io_err(&dir))?;

        let mut merged: BTreeMap<FixtureKey, Fixture> = self
            .load_league(league)?
            .into_iter()
            .map(|f| (f.key(), f))
            .collect();
        for f in fixtures {
            merged.insert(f.key(), f.clone());
        }

        let mut fx_rows = Vec::with_capacity(merged.len());
        let mut ev_rows = Vec::new();
        for f in merged.values() {
            let date = f.date().format(DATE_FMT).to_string();
            fx_rows.push(cells![date, f.home_team(), f.home_score(), f.away_score(), f.away_team(), f.result()]);
            for e in f.timeline() {
                ev_rows.push(cells![date, f.home_team(), f.away_team(), e.minute(), e.kind(), e.player()]);
            }
        }

        replace_files(&[
            (dir.join(FIXTURES_FILE), table_text(&FIXTURE_HEADERS, &fx_rows)),
            (dir.join(EVENTS_FILE), table_text(&EVENT_HEADERS, &ev_rows)),
        ])?;
        let name_path = dir.join(LEAGUE_NAME_FILE);
        if !name_path.is_file() {
            fs::write(&name_path, league.trim()).map_err(io_err(&name_path))?;
        }

        logf!(
            "Store: {} → {} ({} new/updated, {} total, {} events)",
            league, dir.display(), fixtures.len(), fx_rows.len(), ev_rows.len()
        );
        Ok(fixtures.len())
    }
}
