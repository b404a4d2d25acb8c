// src/fixture/decode.rs
//! Player-block event decoder.
//!
//! A block holds one player's events for a match, comma separated, e.g.
//! `(12' pen12' pen, 45'+2'45'+2')`. Each sub-event shows up twice back to
//! back because the source markup wraps every visible character in its own
//! tag and the visible text gets concatenated with its hidden twin.
//!
//! Per sub-event:
//! 1. drop parentheses, collapse whitespace, skip if empty
//! 2. undouble (unless the feed says text is already plain)
//! 3. classify: `pen` → penalty, `Dismissed` → red card, else goal
//! 4. minute = leading integer, plus the digits after `+` if present

use std::borrow::Cow;

use crate::config::options::{DecodeOptions, TextShape};
use crate::core::sanitize::normalize_ws;

use super::error::DecodeError;
use super::model::{Event, EventKind, Timeline};

const PENALTY_MARK: &str = "pen";
const RED_CARD_MARK: &str = "Dismissed";
const RED_CARD_PREFIX: &str = "Dismissed at ";

/// Highest regular-time-plus-extra-time minute we accept as a base.
pub const MAX_BASE_MINUTE: u32 = 120;
/// Loose ceiling for a single stoppage-time addition.
pub const MAX_STOPPAGE: u32 = 30;

/// Decode one player's fragment and push every event onto `timeline`.
/// Returns how many events were added.
///
/// On error nothing is added: events are collected first and only
/// committed once the whole fragment decoded.
pub fn decode_into(
    timeline: &mut Timeline,
    player: &str,
    fragment: &str,
    opts: &DecodeOptions,
) -> Result<usize, DecodeError> {
    let mut pending = Vec::new();

    for sub in fragment.split(',') {
        let cleaned = clean(sub);
        if cleaned.is_empty() {
            continue;
        }

        let text = match opts.shape {
            TextShape::Doubled => undouble(&cleaned)
                .ok_or_else(|| DecodeError::NotDoubled { text: cleaned.clone() })?,
            TextShape::Plain => cleaned.as_str(),
        };

        let (kind, body) = classify(text);
        let minute = minute_of(&body)?;
        pending.push(Event::new(player, kind, minute));
    }

    let added = pending.len();
    for event in pending {
        timeline.insert(event);
    }
    Ok(added)
}

/// Decode a fragment on its own, without a fixture. Handy for checking
/// what a single block turns into.
pub fn decode_fragment(
    player: &str,
    fragment: &str,
    opts: &DecodeOptions,
) -> Result<Timeline, DecodeError> {
    let mut timeline = Timeline::default();
    decode_into(&mut timeline, player, fragment, opts)?;
    Ok(timeline)
}

/// Drop parentheses and normalize whitespace.
fn clean(sub: &str) -> String {
    let no_parens: String = sub.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    normalize_ws(&no_parens)
}

/// Return one copy of a string made of the same text twice.
///
/// The halves may be separated by whitespace. Cut points are tried from
/// the middle outwards so the longest repeated half wins.
pub fn undouble(s: &str) -> Option<&str> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let mid = s.len() / 2;

    let mut cuts: Vec<usize> = s.char_indices().map(|(i, _)| i).filter(|&i| i > 0).collect();
    cuts.sort_by_key(|&i| i.abs_diff(mid));

    for cut in cuts {
        let (left, right) = s.split_at(cut);
        let left = left.trim_end();
        if !left.is_empty() && left == right.trim_start() {
            return Some(left);
        }
    }
    None
}

/// Kind by substring, in priority order. Red cards lose their
/// `Dismissed at ` prefix so the minute is leading.
fn classify(text: &str) -> (EventKind, Cow<'_, str>) {
    if text.contains(PENALTY_MARK) {
        (EventKind::Penalty, Cow::Borrowed(text))
    } else if text.contains(RED_CARD_MARK) {
        (EventKind::RedCard, Cow::Owned(text.replace(RED_CARD_PREFIX, "")))
    } else {
        (EventKind::Goal, Cow::Borrowed(text))
    }
}

/// `90'` → 90, `45'+2'` → 47, `45+2` → 47.
fn minute_of(text: &str) -> Result<u32, DecodeError> {
    let t = text.trim();
    let head = t.split('\'').next().unwrap_or("");

    let base_digits = leading_digits(head.trim_start());
    if base_digits.is_empty() {
        return Err(DecodeError::MissingMinute { text: s!(t) });
    }
    let base: u32 = base_digits
        .parse()
        .map_err(|_| DecodeError::MinuteOutOfRange { text: s!(t) })?;
    if base > MAX_BASE_MINUTE {
        return Err(DecodeError::MinuteOutOfRange { text: s!(t) });
    }

    let extra = match t.find('+') {
        None => 0,
        Some(plus) => {
            let digits = leading_digits(t[plus + 1..].trim_start());
            if digits.is_empty() {
                return Err(DecodeError::BadStoppage { text: s!(t) });
            }
            let extra: u32 = digits
                .parse()
                .map_err(|_| DecodeError::MinuteOutOfRange { text: s!(t) })?;
            if extra > MAX_STOPPAGE {
                return Err(DecodeError::MinuteOutOfRange { text: s!(t) });
            }
            extra
        }
    };

    Ok(base + extra)
}

fn leading_digits(s: &str) -> &str {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    &s[..end]
}
