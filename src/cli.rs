// src/cli.rs
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{eyre, Result, WrapErr};

use crate::{
    config::{
        consts::STORE_DIR,
        options::{AppOptions, DecodeOptions, ExportFormat, ExportTable, LeagueFilter},
    },
    file,
    fixture::{self, model::parse_date},
    progress::Progress,
    runner,
    store::{CsvStore, Session},
};

#[derive(Debug, Parser)]
#[command(name = "cli", version, about = "Decode, store and export football fixtures")]
pub struct Args {
    /// Fixture store directory
    #[arg(long, global = true, default_value = STORE_DIR)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import a feed file into the store
    Import {
        feed: PathBuf,
        /// Only these leagues (repeatable); defaults to the big five
        #[arg(long = "league")]
        leagues: Vec<String>,
        /// Import every league in the feed
        #[arg(long, conflicts_with = "leagues")]
        all_leagues: bool,
        /// Event fragments are already deduplicated
        #[arg(long)]
        plain: bool,
    },
    /// List stored leagues, or one league's fixtures
    Show {
        #[arg(long)]
        league: Option<String>,
        /// Only fixtures on this day (YYYY-MM-DD)
        #[arg(long, requires = "league")]
        date: Option<String>,
    },
    /// Write a league's fixtures (or events) as CSV/TSV
    Export {
        #[arg(long)]
        league: String,
        /// Export the event timeline instead of fixtures
        #[arg(long)]
        events: bool,
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
        #[arg(long)]
        no_headers: bool,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Decode one scorer fragment and print the events
    Decode {
        player: String,
        fragment: String,
        #[arg(long)]
        plain: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

/// Prints one line per fixture to stderr.
struct ConsoleProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("  ok   [{}/{}] {}", self.done + self.failed, self.total, label);
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.failed += 1;
        eprintln!("  FAIL [{}/{}] {}: {}", self.done + self.failed, self.total, label, reason);
    }
    fn finish(&mut self) {
        eprintln!("Done: {} imported, {} failed", self.done, self.failed);
    }
}

pub fn run() -> Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> Result<()> {
    crate::log::init(args.store.join("debug.log"));
    let mut options = AppOptions::default();
    options.import.store_dir = args.store;
    let mut store = CsvStore::new(&options.import.store_dir);

    match args.command {
        Command::Import { feed, leagues, all_leagues, plain } => {
            if all_leagues {
                options.import.leagues = LeagueFilter::All;
            } else if !leagues.is_empty() {
                options.import.leagues = LeagueFilter::Named(leagues);
            }
            if plain {
                options.decode = DecodeOptions::plain();
            }

            let mut progress = ConsoleProgress { done: 0, failed: 0, total: 0 };
            let summary = runner::import_path(&feed, &options, &mut store, Some(&mut progress))
                .map_err(|e| eyre!("{e}"))
                .wrap_err_with(|| format!("importing {}", feed.display()))?;

            for skipped in &summary.skipped_leagues {
                eprintln!("Skipped league: {skipped}");
            }
            println!("{} fixtures imported into {}", summary.imported(), store.root().display());
        }

        Command::Show { league: None, .. } => {
            for league in store.leagues()? {
                let n = store.load_league(&league)?.len();
                println!("{league} ({n} fixtures)");
            }
        }

        Command::Show { league: Some(league), date } => {
            let day = date.as_deref().map(parse_date).transpose()?;
            let fixtures = runner::fixtures_on(&store, &league, day).map_err(|e| eyre!("{e}"))?;
            if fixtures.is_empty() {
                println!("No fixtures for {league}");
            }
            for fx in &fixtures {
                println!("{} [{}]", fx, fx.result());
            }
        }

        Command::Export { league, events, format, no_headers, out } => {
            let fixtures = store.load_league(&league)?;
            if fixtures.is_empty() {
                return Err(eyre!("no stored fixtures for {league}"));
            }

            let export = &mut options.export;
            export.format = format.into();
            export.table = if events { ExportTable::Events } else { ExportTable::Fixtures };
            export.include_headers = !no_headers;
            if let Some(p) = out {
                export.set_path(&p.to_string_lossy());
            }

            let ds = file::table_for(export.table, &fixtures);
            let path = file::write_export(export, &ds).map_err(|e| eyre!("{e}"))?;
            println!("Wrote {} rows to {}", ds.row_count(), path.display());
        }

        Command::Decode { player, fragment, plain } => {
            let opts = if plain { DecodeOptions::plain() } else { DecodeOptions::default() };
            let timeline = fixture::decode_fragment(&player, &fragment, &opts)?;
            if timeline.is_empty() {
                println!("(no events)");
            }
            for event in &timeline {
                println!("{event}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse() {
        let args = Args::try_parse_from([
            "cli", "--store", "/tmp/x", "import", "feed.csv", "--league", "Premier League", "--plain",
        ])
        .unwrap();
        assert_eq!(args.store, PathBuf::from("/tmp/x"));
        match args.command {
            Command::Import { feed, leagues, all_leagues, plain } => {
                assert_eq!(feed, PathBuf::from("feed.csv"));
                assert_eq!(leagues, vec![s!("Premier League")]);
                assert!(!all_leagues);
                assert!(plain);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn date_requires_league() {
        assert!(Args::try_parse_from(["cli", "show", "--date", "2019-02-23"]).is_err());
        assert!(Args::try_parse_from(["cli", "show", "--league", "X", "--date", "2019-02-23"]).is_ok());
    }

    #[test]
    fn import_lands_in_the_given_store() {
        let dir = std::env::temp_dir().join(format!("fs_cli_store_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let feed = dir.join("feed.csv");
        std::fs::write(&feed, "league,Premier League\nfixture,2019-02-23,Fulham,1,0,West Ham\n").unwrap();
        let store_dir = dir.join("store");

        let args = Args::try_parse_from([
            "cli", "--store", store_dir.to_str().unwrap(), "import", feed.to_str().unwrap(),
        ])
        .unwrap();
        run_with(args).unwrap();

        let store = CsvStore::new(&store_dir);
        assert_eq!(store.leagues().unwrap(), vec![s!("Premier League")]);
        assert_eq!(store.load_league("Premier League").unwrap().len(), 1);
    }

    #[test]
    fn decode_subcommand_runs() {
        let args = Args::try_parse_from(["cli", "decode", "Kane", "(23'23', 78' pen78' pen)"]).unwrap();
        run_with(args).unwrap();
    }
}
