// src/config/state.rs
use chrono::NaiveDate;

use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active league tab index into the loaded league list
    pub current_league_index: usize,

    /// Last day shown on the date strip
    pub strip_end: NaiveDate,

    /// Day filter; `None` shows every stored date
    pub selected_date: Option<NaiveDate>,

    /// Row index into the visible fixtures of the selected fixture
    pub selected_fixture: Option<usize>,

    /// Import bar text
    pub feed_path_text: String,

    pub window_w: u32,
    pub window_h: u32,
}

impl GuiState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_league_index: 0,
            strip_end: today,
            selected_date: None,
            selected_fixture: None,
            feed_path_text: s!(),
            window_w: 1100,
            window_h: 700,
        }
    }
}

impl Default for GuiState {
    fn default() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
