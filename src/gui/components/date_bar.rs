// src/gui/components/date_bar.rs
//
// A strip of consecutive days ending at `strip_end`. `<` and `>` move the
// strip one day; clicking a day filters the table, "All dates" clears it.

use chrono::{Days, NaiveDate};
use eframe::egui;

use crate::{config::consts::DATE_STRIP_DAYS, gui::app::App};

/// Days shown on the strip, oldest first.
pub fn strip_days(end: NaiveDate, count: i64) -> Vec<NaiveDate> {
    (0..count.max(1))
        .rev()
        .filter_map(|back| end.checked_sub_days(Days::new(back as u64)))
        .collect()
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut picked: Option<Option<NaiveDate>> = None;

    ui.horizontal(|ui| {
        let gui = &mut app.state.gui;

        if ui.button("<").clicked() {
            gui.strip_end = gui.strip_end.pred_opt().unwrap_or(gui.strip_end);
        }

        for day in strip_days(gui.strip_end, DATE_STRIP_DAYS) {
            let n = app.fixtures.iter().filter(|f| f.date() == day).count();
            let label = if n > 0 {
                format!("{} ({n})", day.format("%a %d %b"))
            } else {
                day.format("%a %d %b").to_string()
            };
            if ui.selectable_label(gui.selected_date == Some(day), label).clicked() {
                picked = Some(Some(day));
            }
        }

        if ui.button(">").clicked() {
            gui.strip_end = gui.strip_end.succ_opt().unwrap_or(gui.strip_end);
        }

        ui.separator();

        if ui.selectable_label(gui.selected_date.is_none(), "All dates").clicked() {
            picked = Some(None);
        }
        if ui.button("Latest").clicked() {
            if let Some(d) = app.fixtures.iter().map(|f| f.date()).max() {
                gui.strip_end = d;
            }
        }
    });

    if let Some(day) = picked {
        if day != app.state.gui.selected_date {
            logd!("UI: Date filter → {:?}", day);
            app.state.gui.selected_date = day;
            app.state.gui.selected_fixture = None;
            app.rebuild_view();
        }
    }
}
