// src/config/consts.rs

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const STORE_SEP: char = ',';

// Store file names (one directory per league)
pub const FIXTURES_FILE: &str = "fixtures.csv";
pub const EVENTS_FILE: &str = "events.csv";
pub const LEAGUE_NAME_FILE: &str = "league.txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "fixtures";

// Feed
pub const FEED_COMMENT: char = '#';

// GUI
pub const DATE_STRIP_DAYS: i64 = 8;

// Leagues imported when no filter is given
pub const DEFAULT_LEAGUES: &[&str] = &[
    "Premier League",
    "German Bundesliga",
    "Spanish La Liga",
    "Italian Serie A",
    "Champions League",
];
