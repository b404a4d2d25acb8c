// src/gui/components/import_bar.rs

use eframe::egui;
use crate::{
    config::options::{LeagueFilter, TextShape},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Feed:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.feed_path_text)
                .font(egui::TextStyle::Monospace)
                .hint_text("path/to/feed.csv"),
        );

        let mut plain = app.state.options.decode.shape == TextShape::Plain;
        if ui.checkbox(&mut plain, "Plain text").on_hover_text("Event text is not doubled").changed() {
            app.state.options.decode.shape = if plain { TextShape::Plain } else { TextShape::Doubled };
            logf!("UI: Decode shape → {:?}", app.state.options.decode.shape);
        }

        let mut all = matches!(app.state.options.import.leagues, LeagueFilter::All);
        if ui.checkbox(&mut all, "All leagues").changed() {
            app.state.options.import.leagues = if all { LeagueFilter::All } else { LeagueFilter::default() };
            logf!("UI: League filter → {:?}", app.state.options.import.leagues);
        }

        let enabled = !app.running && !app.state.gui.feed_path_text.trim().is_empty();
        if ui.add_enabled(enabled, egui::Button::new("Import")).clicked() {
            actions::import(app);
        }
    });
}
