// src/gui/components/fixture_table.rs
//
// Fixtures of the current league after the date filter. Clicking a row
// selects it for the timeline panel.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{
    fixture::{MatchResult, DATE_FMT},
    gui::app::App,
};

const HEADERS: [&str; 6] = ["Date", "Home team", "Score", "Away team", "Result", "Events"];
const WIDTHS: [f32; 6] = [90.0, 170.0, 60.0, 170.0, 80.0, 60.0];

fn result_color(r: MatchResult) -> egui::Color32 {
    match r {
        MatchResult::HomeWin => egui::Color32::from_rgb(0x64, 0xB4, 0xFF),
        MatchResult::AwayWin => egui::Color32::from_rgb(0xF0, 0xD2, 0x3C),
        MatchResult::Draw => egui::Color32::GRAY,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.visible.is_empty() {
        ui.label(if app.fixtures.is_empty() { "No fixtures" } else { "No fixtures on this day" });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked: Option<usize> = None;
    let selected = app.state.gui.selected_fixture;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .min_scrolled_height(0.0);
    for w in WIDTHS {
        table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
    }

    table
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| {
                    ui.add(egui::Label::new(RichText::new(h).strong()).selectable(false));
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.visible.len(), |mut row| {
                let row_idx = row.index();
                let Some(fx) = app.visible.get(row_idx).and_then(|&ix| app.fixtures.get(ix)) else {
                    return;
                };
                row.set_selected(selected == Some(row_idx));

                let cells = [
                    fx.date().format(DATE_FMT).to_string(),
                    s!(fx.home_team()),
                    format!("{} : {}", fx.home_score(), fx.away_score()),
                    s!(fx.away_team()),
                    s!(fx.result().label()),
                    fx.timeline().len().to_string(),
                ];
                for (ci, cell) in cells.into_iter().enumerate() {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(cell);
                        if ci == 4 {
                            rt = rt.color(result_color(fx.result()));
                        }
                        // score and counts centered
                        if matches!(ci, 2 | 5) {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        } else {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        }
                    });
                }

                if row.response().clicked() {
                    clicked = Some(row_idx);
                }
            });
        });

    if let Some(row_idx) = clicked {
        let next = if selected == Some(row_idx) { None } else { Some(row_idx) };
        logd!("UI: Fixture selection → {:?}", next);
        app.state.gui.selected_fixture = next;
    }
}
