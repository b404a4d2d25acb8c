// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod fixture;

pub mod csv;
pub mod feed;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod store;
