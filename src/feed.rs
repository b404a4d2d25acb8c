// src/feed.rs
//! Hand-off format from the fetch layer.
//!
//! ```text
//! # comment
//! league,Premier League
//! fixture,2019-02-23,Fulham,1,1,West Ham
//! event,Ryan Babel,"(77'77')"
//! ```
//!
//! `fixture` rows attach to the latest `league`, `event` rows to the latest
//! `fixture`. Cells may still carry the per-character `<span>` markup; only
//! visible text is kept. Scores stay text here and are validated when the
//! fixture is built.

use std::{fs, path::{Path, PathBuf}};

use thiserror::Error;

use crate::config::consts::FEED_COMMENT;
use crate::core::vischars::visible_text;
use crate::csv::parse_rows_skipping_comments;
use crate::fixture::RawFixture;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("cannot read feed {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: `{kind}` row before any `{parent}` row")]
    Orphan { line: usize, kind: &'static str, parent: &'static str },

    #[error("line {line}: unknown record kind {kind:?}")]
    UnknownKind { line: usize, kind: String },

    #[error("line {line}: `{kind}` row needs {expected} cells, got {got}")]
    MissingCells { line: usize, kind: &'static str, expected: usize, got: usize },
}

/// All fixtures of one league, in feed order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LeagueFeed {
    pub league: String,
    pub fixtures: Vec<RawFixture>,
}

impl LeagueFeed {
    pub fn scorer_blocks(&self) -> usize {
        self.fixtures.iter().map(|f| f.scorers.len()).sum()
    }
}

pub fn read_feed(path: &Path) -> Result<Vec<LeagueFeed>, FeedError> {
    let text = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let t = std::time::Instant::now();
    let out = parse_feed(&text);
    logd!("Feed: Parse {} in {:?}", path.display(), t.elapsed());
    out
}

/// Split out for unit tests.
pub fn parse_feed(text: &str) -> Result<Vec<LeagueFeed>, FeedError> {
    let mut leagues: Vec<LeagueFeed> = Vec::new();
    // index into `leagues` of the league receiving fixtures
    let mut current: Option<usize> = None;

    for (line, row) in parse_rows_skipping_comments(text, ',', FEED_COMMENT) {
        let kind = row.first().map(|c| c.trim()).unwrap_or("");
        if kind.is_empty() {
            continue;
        }

        match kind.to_ascii_lowercase().as_str() {
            "league" => {
                need(&row, 2, line, "league")?;
                let name = visible_text(&row[1]);
                let idx = match leagues.iter().position(|l| l.league.eq_ignore_ascii_case(&name)) {
                    Some(i) => i,
                    None => {
                        leagues.push(LeagueFeed { league: name, fixtures: Vec::new() });
                        leagues.len() - 1
                    }
                };
                current = Some(idx);
            }
            "fixture" => {
                need(&row, 6, line, "fixture")?;
                let idx = current.ok_or(FeedError::Orphan { line, kind: "fixture", parent: "league" })?;
                leagues[idx].fixtures.push(RawFixture {
                    date: visible_text(&row[1]),
                    home_team: visible_text(&row[2]),
                    home_score: visible_text(&row[3]),
                    away_score: visible_text(&row[4]),
                    away_team: visible_text(&row[5]),
                    scorers: Vec::new(),
                });
            }
            "event" => {
                need(&row, 3, line, "event")?;
                let last = match current {
                    Some(idx) => leagues[idx].fixtures.last_mut(),
                    None => None,
                };
                let fixture = last.ok_or(FeedError::Orphan { line, kind: "event", parent: "fixture" })?;
                fixture.scorers.push((visible_text(&row[1]), visible_text(&row[2])));
            }
            _ => return Err(FeedError::UnknownKind { line, kind: s!(kind) }),
        }
    }

    Ok(leagues)
}

fn need(row: &[String], expected: usize, line: usize, kind: &'static str) -> Result<(), FeedError> {
    if row.len() < expected {
        return Err(FeedError::MissingCells { line, kind, expected, got: row.len() });
    }
    Ok(())
}
