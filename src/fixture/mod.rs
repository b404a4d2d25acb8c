// src/fixture/mod.rs
//! Fixtures, their event timelines, and the decoder that fills them.
//!
//! ```text
//! RawFixture ─ Fixture::parse ─┬─ date / teams / scores validated
//!                              └─ decode::decode_into per player block
//! ```
//!
//! A `Fixture` is read-only once built. Its result is computed from the
//! scores on every call, so it can never disagree with them.

pub mod decode;
pub mod error;
pub mod model;

pub use decode::{decode_fragment, undouble};
pub use error::{DecodeError, FixtureError};
pub use model::{
    Event, EventKind, EventRef, Fixture, FixtureKey, MatchResult, RawFixture, Timeline, DATE_FMT,
};
