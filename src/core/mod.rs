// src/core/mod.rs

pub mod sanitize;
pub mod vischars;

pub use vischars::VisChars;
