// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    fixture::Fixture,
    store::{CsvStore, Session},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Football Scrape",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub store: CsvStore,

    // league tabs, from the store
    pub leagues: Vec<String>,

    // every stored fixture of the current league, sorted by date
    pub fixtures: Vec<Fixture>,
    // indices into `fixtures` passing the date filter
    pub visible: Vec<usize>,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status/progress (import writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let store = CsvStore::new(&state.options.import.store_dir);
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            store,
            leagues: Vec::new(),
            fixtures: Vec::new(),
            visible: Vec::new(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
        };

        app.reload_leagues();
        logf!("Init: leagues={}, store={}", app.leagues.len(), app.store.root().display());
        if !app.fixtures.is_empty() {
            app.status("Loaded local data");
        }
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn current_league(&self) -> Option<&str> {
        self.leagues.get(self.state.gui.current_league_index).map(|s| s.as_str())
    }

    /// Fixture whose timeline is shown.
    pub fn selected_fixture(&self) -> Option<&Fixture> {
        let row = self.state.gui.selected_fixture?;
        self.visible.get(row).and_then(|&ix| self.fixtures.get(ix))
    }

    /// Fixtures as shown in the table.
    pub fn visible_fixtures(&self) -> Vec<Fixture> {
        self.visible.iter().filter_map(|&ix| self.fixtures.get(ix).cloned()).collect()
    }

    /// Re-read the league list, keeping the current tab when it still exists.
    pub fn reload_leagues(&mut self) {
        let keep = self.current_league().map(|s| s.to_owned());
        self.leagues = match self.store.leagues() {
            Ok(v) => v,
            Err(e) => {
                loge!("Store: Cannot list leagues: {}", e);
                self.status(format!("Error: {e}"));
                Vec::new()
            }
        };
        self.state.gui.current_league_index = keep
            .and_then(|name| self.leagues.iter().position(|l| *l == name))
            .unwrap_or(0);
        self.load_current_league();
    }

    /// Load the active tab's fixtures from the store and rebuild the view.
    pub fn load_current_league(&mut self) {
        self.fixtures = match self.current_league().map(|l| (l.to_owned(), self.store.load_league(l))) {
            Some((league, Ok(v))) => {
                logd!("Store: Loaded {} ({} fixtures)", league, v.len());
                v
            }
            Some((league, Err(e))) => {
                loge!("Store: Load failed {}: {}", league, e);
                self.status(format!("Error: {e}"));
                Vec::new()
            }
            None => Vec::new(),
        };
        self.state.gui.selected_fixture = None;
        if let Some(d) = self.latest_date() {
            self.state.gui.strip_end = d;
        }
        self.rebuild_view();
    }

    /// Apply the date filter.
    pub fn rebuild_view(&mut self) {
        let day = self.state.gui.selected_date;
        self.visible = self
            .fixtures
            .iter()
            .enumerate()
            .filter(|(_, f)| day.is_none_or(|d| f.date() == d))
            .map(|(ix, _)| ix)
            .collect();

        if self.state.gui.selected_fixture.is_some_and(|row| row >= self.visible.len()) {
            self.state.gui.selected_fixture = None;
        }
    }

    /// Most recent stored date of the current league.
    pub fn latest_date(&self) -> Option<chrono::NaiveDate> {
        self.fixtures.iter().map(|f| f.date()).max()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            let msg = self.status.lock().map(|s| s.clone()).unwrap_or_default();
            ui.label(msg);
        });

        egui::SidePanel::right("timeline")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| {
                crate::gui::components::timeline::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::import_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::league_tabs::draw(ui, self);
            crate::gui::components::date_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::fixture_table::draw(ui, self);
        });
    }
}
