// src/gui/actions/copy.rs
use eframe::egui;
use crate::{gui::app::App, file};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(ds) = super::current_table(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    logf!(
        "Copy: table={:?}, rows={}, headers={}",
        app.state.options.export.table,
        ds.row_count(),
        ds.header_count()
    );

    ui_ctx.copy_text(file::to_export_text(&app.state.options.export, &ds));
    app.status("Copied to clipboard");
}
