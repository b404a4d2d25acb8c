// src/gui/components/league_tabs.rs
//
// One tab per stored league. Switching loads that league from the store.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.leagues.is_empty() {
        ui.label("No leagues stored yet. Import a feed to begin.");
        return;
    }

    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;
        let cur = app.state.gui.current_league_index;

        for (idx, league) in app.leagues.iter().enumerate() {
            let selected = idx == cur;
            if ui.selectable_label(selected, league).clicked() && !selected {
                clicked = Some(idx);
            }
        }
    });

    if let Some(idx) = clicked {
        logf!("UI: Tab switch {:?} → {:?}", app.current_league(), app.leagues.get(idx));
        app.state.gui.current_league_index = idx;
        app.load_current_league();
        app.status(format!("{} fixtures", app.fixtures.len()));
    }
}
