// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let Some(ds) = super::current_table(app) else {
        logd!("Export: Clicked, but there's nothing to export");
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    logf!(
        "Export: Begin league={:?}, table={:?}, rows={}",
        app.current_league(),
        export.table,
        ds.row_count()
    );

    let msg = match file::write_export(export, &ds) {
        Ok(path) => format!("Exported {} rows to {}", ds.row_count(), path.display()),
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };
    app.status(msg);
}
