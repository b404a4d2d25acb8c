// src/gui/components/timeline.rs

use eframe::egui::{self, RichText};

use crate::{fixture::EventKind, gui::app::App};

fn kind_text(kind: EventKind) -> RichText {
    match kind {
        EventKind::Goal => RichText::new("Goal"),
        EventKind::Penalty => RichText::new("Penalty").color(egui::Color32::from_rgb(0xFF, 0xA5, 0x00)),
        EventKind::RedCard => RichText::new("Red card").color(egui::Color32::from_rgb(0xDC, 0x61, 0x49)),
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Timeline");
    ui.separator();

    let Some(fx) = app.selected_fixture() else {
        ui.label("Select a fixture");
        return;
    };

    ui.label(RichText::new(format!("{} vs {}", fx.home_team(), fx.away_team())).strong());
    ui.label(format!("{}  {} : {}  ({})", fx.date(), fx.home_score(), fx.away_score(), fx.result()));
    ui.separator();

    if fx.timeline().is_empty() {
        ui.label("No events");
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("timeline_scroll")
        .show(ui, |ui| {
            egui::Grid::new("timeline_grid").striped(true).num_columns(3).show(ui, |ui| {
                for event in fx.timeline() {
                    ui.label(RichText::new(format!("{}'", event.minute())).monospace());
                    ui.label(kind_text(event.kind()));
                    let name = RichText::new(event.player());
                    ui.label(if event.kind().is_scoring() { name.strong() } else { name });
                    ui.end_row();
                }
            });
        });
}
