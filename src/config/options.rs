// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub decode: DecodeOptions,
    pub import: ImportOptions,
    pub export: ExportOptions,
}

/// How the raw event fragments arrive from upstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextShape {
    /// Every sub-event is present twice back to back (source markup artifact).
    #[default]
    Doubled,
    /// Already deduplicated text.
    Plain,
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DecodeOptions {
    pub shape: TextShape,
}

impl DecodeOptions {
    pub fn plain() -> Self {
        Self { shape: TextShape::Plain }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LeagueFilter {
    All,
    Named(Vec<String>),
}

impl LeagueFilter {
    /// Case-insensitive league match.
    pub fn accepts(&self, league: &str) -> bool {
        match self {
            LeagueFilter::All => true,
            LeagueFilter::Named(names) => names.iter().any(|n| n.trim().eq_ignore_ascii_case(league.trim())),
        }
    }
}

impl Default for LeagueFilter {
    fn default() -> Self {
        LeagueFilter::Named(DEFAULT_LEAGUES.iter().map(|s| s!(*s)).collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportOptions {
    pub leagues: LeagueFilter,
    pub store_dir: PathBuf,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            leagues: LeagueFilter::default(),
            store_dir: PathBuf::from(STORE_DIR),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// Which table an export writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportTable {
    Fixtures,
    Events,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub table: ExportTable,
    pub include_headers: bool,
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            table: ExportTable::Fixtures,
            include_headers: true,
            out_path: None,
        }
    }
}

impl ExportOptions {
    /// Explicit path if one was set, else `out/<stem>.<ext>` with the
    /// extension following the current format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => {
                let stem = match self.table {
                    ExportTable::Fixtures => DEFAULT_FILE,
                    ExportTable::Events => "events",
                };
                PathBuf::from(DEFAULT_OUT_DIR).join(join!(stem, ".", self.format.ext()))
            }
        }
    }

    /// Set from user text. Blank text restores the default path.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out_path = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn delim(&self) -> char {
        self.format.delim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format_until_set() {
        let mut export = ExportOptions::default();
        assert!(export.out_path().to_string_lossy().ends_with("fixtures.csv"));

        export.format = ExportFormat::Tsv;
        assert!(export.out_path().to_string_lossy().ends_with("fixtures.tsv"));

        export.set_path("somewhere/else.txt");
        export.format = ExportFormat::Csv;
        assert_eq!(export.out_path(), PathBuf::from("somewhere/else.txt"));

        export.set_path("   ");
        assert!(export.out_path().to_string_lossy().ends_with("fixtures.csv"));
    }

    #[test]
    fn league_filter_is_case_insensitive() {
        let f = LeagueFilter::default();
        assert!(f.accepts("PREMIER LEAGUE"));
        assert!(f.accepts(" premier league "));
        assert!(!f.accepts("Scottish Championship"));
        assert!(LeagueFilter::All.accepts("Scottish Championship"));
    }
}
