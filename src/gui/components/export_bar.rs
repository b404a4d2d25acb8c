// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::{ExportFormat, ExportTable},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;
        let before = (export.format, export.table);

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
            ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");

            ui.separator();

            ui.label("Table:");
            ui.selectable_value(&mut export.table, ExportTable::Fixtures, "Fixtures");
            ui.selectable_value(&mut export.table, ExportTable::Events, "Events");

            ui.separator();

            let before_headers = export.include_headers;
            ui.checkbox(&mut export.include_headers, "Include headers");
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });

        if (export.format, export.table) != before {
            logf!("UI: Export format={:?} table={:?}", export.format, export.table);
            // default file name follows the table and extension
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        let enabled = !app.visible.is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.add_enabled(enabled, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
    });
}
