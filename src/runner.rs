// src/runner.rs
use std::error::Error;
use std::path::Path;

use crate::{
    config::options::{AppOptions, DecodeOptions},
    feed::{self, LeagueFeed},
    fixture::{Fixture, FixtureError, RawFixture, DATE_FMT},
    progress::{NullProgress, Progress},
    store::Session,
};

/// What one league contributed to an import.
#[derive(Debug)]
pub struct LeagueSummary {
    pub league: String,
    pub imported: usize,
    pub failed: Vec<(String, FixtureError)>,
}

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub leagues: Vec<LeagueSummary>,
    /// Leagues present in the feed but excluded by the filter.
    pub skipped_leagues: Vec<String>,
}

impl ImportSummary {
    pub fn imported(&self) -> usize { self.leagues.iter().map(|l| l.imported).sum() }
    pub fn failed(&self) -> usize { self.leagues.iter().map(|l| l.failed.len()).sum() }
}

pub fn fixture_label(raw: &RawFixture) -> String {
    format!("{} {} vs {}", raw.date.trim(), raw.home_team.trim(), raw.away_team.trim())
}

/// Build every fixture of a league. A fixture that fails to parse is
/// dropped whole and reported; the others still come through.
pub fn build_fixtures(
    league: &LeagueFeed,
    opts: &DecodeOptions,
    progress: &mut dyn Progress,
) -> (Vec<Fixture>, Vec<(String, FixtureError)>) {
    let mut ok = Vec::with_capacity(league.fixtures.len());
    let mut failed = Vec::new();

    for raw in &league.fixtures {
        let label = fixture_label(raw);
        match Fixture::parse(raw, opts) {
            Ok(fx) => {
                logd!("Import: {} → {} events", label, fx.timeline().len());
                progress.item_done(&label);
                ok.push(fx);
            }
            Err(e) => {
                loge!("Import: {}: {}", label, e);
                progress.item_failed(&label, &e.to_string());
                failed.push((label, e));
            }
        }
    }

    (ok, failed)
}

/// Feed → fixtures → session, league by league.
pub fn import_feed(
    leagues: &[LeagueFeed],
    options: &AppOptions,
    session: &mut dyn Session,
    progress: Option<&mut dyn Progress>,
) -> Result<ImportSummary, Box<dyn Error>> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    let mut summary = ImportSummary::default();

    let (wanted, skipped): (Vec<&LeagueFeed>, Vec<&LeagueFeed>) = leagues
        .iter()
        .partition(|l| options.import.leagues.accepts(&l.league));
    summary.skipped_leagues = skipped.iter().map(|l| l.league.clone()).collect();
    if !summary.skipped_leagues.is_empty() {
        logd!("Import: Skipping leagues {:?}", summary.skipped_leagues);
    }

    let total: usize = wanted.iter().map(|l| l.fixtures.len()).sum();
    progress.begin(total);

    for league in wanted {
        progress.log(&format!("Importing {}…", league.league));
        logd!(
            "Import: {} fixtures={} scorer_blocks={}",
            league.league, league.fixtures.len(), league.scorer_blocks()
        );

        let (fixtures, failed) = build_fixtures(league, &options.decode, &mut *progress);

        let imported = if fixtures.is_empty() {
            0
        } else {
            session.update_league(&league.league, &fixtures)?
        };

        logf!(
            "Import: {} imported={} failed={}",
            league.league, imported, failed.len()
        );
        summary.leagues.push(LeagueSummary { league: league.league.clone(), imported, failed });
    }

    progress.finish();
    Ok(summary)
}

/// Read a feed file and import it.
pub fn import_path(
    path: &Path,
    options: &AppOptions,
    session: &mut dyn Session,
    progress: Option<&mut dyn Progress>,
) -> Result<ImportSummary, Box<dyn Error>> {
    logf!("Import: Begin {}", path.display());
    let leagues = feed::read_feed(path)?;
    import_feed(&leagues, options, session, progress)
}

/// Stored fixtures of a league, optionally narrowed to one day.
pub fn fixtures_on(
    session: &dyn Session,
    league: &str,
    date: Option<chrono::NaiveDate>,
) -> Result<Vec<Fixture>, Box<dyn Error>> {
    let mut fixtures = session.load_league(league)?;
    if let Some(d) = date {
        fixtures.retain(|f| f.date() == d);
    }
    logd!(
        "Load: {} on {} → {} fixtures",
        league,
        date.map(|d| d.format(DATE_FMT).to_string()).unwrap_or_else(|| s!("any date")),
        fixtures.len()
    );
    Ok(fixtures)
}
