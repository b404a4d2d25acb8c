// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,export,import}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod import;  // src/gui/actions/import.rs

pub use copy::copy;
pub use export::export;
pub use import::import;

use crate::{file, gui::app::App, store::DataSet};

/// Table chosen in the export bar, built from the visible fixtures.
pub(super) fn current_table(app: &App) -> Option<DataSet> {
    if app.visible.is_empty() {
        return None;
    }
    Some(file::table_for(app.state.options.export.table, &app.visible_fixtures()))
}
