// src/gui/components/mod.rs
pub mod date_bar;
pub mod export_bar;
pub mod fixture_table;
pub mod import_bar;
pub mod league_tabs;
pub mod timeline;
