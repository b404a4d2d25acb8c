// src/gui/actions/import.rs
use std::path::PathBuf;

use crate::{gui::app::App, gui::progress::GuiProgress, runner};

pub fn import(app: &mut App) {
    let text = app.state.gui.feed_path_text.trim();
    if text.is_empty() {
        app.status("Choose a feed file first");
        return;
    }
    let path = PathBuf::from(text);

    logf!(
        "Import: Begin feed={} leagues={:?} shape={:?}",
        path.display(),
        app.state.options.import.leagues,
        app.state.options.decode.shape
    );

    app.running = true;
    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the import happens ←
    let res = runner::import_path(&path, &app.state.options, &mut app.store, Some(&mut prog));
    app.running = false;

    match res {
        Ok(summary) => {
            logf!(
                "Import: OK imported={} failed={} skipped_leagues={}",
                summary.imported(),
                summary.failed(),
                summary.skipped_leagues.len()
            );
            // new leagues may have appeared; keeps the current tab if possible
            app.reload_leagues();
            if summary.leagues.is_empty() {
                app.status("Nothing imported (no matching leagues)");
            }
        }
        Err(e) => {
            loge!("Import: Error {}: {}", path.display(), e);
            app.status(format!("Error: {e}"));
        }
    }
}
