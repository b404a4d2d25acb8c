// src/fixture/error.rs
use thiserror::Error;

/// Failure decoding one sub-event of a player's fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("sub-event {text:?} is not a doubled string")]
    NotDoubled { text: String },

    #[error("no minute digits in {text:?}")]
    MissingMinute { text: String },

    #[error("'+' without stoppage digits in {text:?}")]
    BadStoppage { text: String },

    #[error("minute out of range in {text:?}")]
    MinuteOutOfRange { text: String },
}

/// Failure building a fixture. No partial fixture survives any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("missing {field}")]
    MissingField { field: &'static str },

    #[error("bad date {value:?} (expected YYYY-MM-DD)")]
    BadDate { value: String },

    #[error("bad {side} score {value:?}")]
    BadScore { side: &'static str, value: String },

    #[error("event for {player:?}: {source}")]
    Event {
        player: String,
        #[source]
        source: DecodeError,
    },
}
