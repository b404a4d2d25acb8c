// src/fixture/model.rs
use std::fmt;
use std::ops::Deref;

use chrono::NaiveDate;

use crate::config::options::DecodeOptions;
use super::decode;
use super::error::FixtureError;

/// Calendar-day format used everywhere a fixture date is read or written.
pub const DATE_FMT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    Goal,
    Penalty,
    RedCard,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Goal => "goal",
            EventKind::Penalty => "penalty",
            EventKind::RedCard => "red_card",
        }
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim() {
            "goal" => Some(EventKind::Goal),
            "penalty" => Some(EventKind::Penalty),
            "red_card" => Some(EventKind::RedCard),
            _ => None,
        }
    }

    /// Goals and penalties change the score; red cards don't.
    pub fn is_scoring(&self) -> bool {
        matches!(self, EventKind::Goal | EventKind::Penalty)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchResult {
    HomeWin,
    AwayWin,
    Draw,
}

impl MatchResult {
    pub fn from_scores(home: u32, away: u32) -> Self {
        use std::cmp::Ordering::*;
        match home.cmp(&away) {
            Greater => MatchResult::HomeWin,
            Less => MatchResult::AwayWin,
            Equal => MatchResult::Draw,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchResult::HomeWin => "Home Win",
            MatchResult::AwayWin => "Away Win",
            MatchResult::Draw => "Draw",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim() {
            "Home Win" => Some(MatchResult::HomeWin),
            "Away Win" => Some(MatchResult::AwayWin),
            "Draw" => Some(MatchResult::Draw),
            _ => None,
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One goal, penalty or red card. Only built by the decoder or the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    player: String,
    kind: EventKind,
    minute: u32,
}

impl Event {
    pub(crate) fn new(player: impl Into<String>, kind: EventKind, minute: u32) -> Self {
        Self { player: player.into(), kind, minute }
    }

    pub fn player(&self) -> &str { &self.player }
    pub fn kind(&self) -> EventKind { self.kind }
    pub fn minute(&self) -> u32 { self.minute }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time: {} Player: {} Type: {}", self.minute, self.player, self.kind)
    }
}

/// Events of one fixture, ordered by minute. Same-minute events keep
/// the order they were decoded in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<Event>,
}

impl Timeline {
    pub(crate) fn insert(&mut self, event: Event) {
        let at = self.events.partition_point(|e| e.minute <= event.minute);
        self.events.insert(at, event);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }

    pub fn at_minute(&self, minute: u32) -> impl Iterator<Item = &Event> {
        let lo = self.events.partition_point(|e| e.minute < minute);
        let hi = self.events.partition_point(|e| e.minute <= minute);
        self.events[lo..hi].iter()
    }

    pub fn first_at(&self, minute: u32) -> Option<&Event> {
        self.at_minute(minute).next()
    }

    pub fn count_kind(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;
    fn into_iter(self) -> Self::IntoIter { self.events.iter() }
}

/// Unparsed fixture as handed over by the fetch layer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawFixture {
    pub date: String,
    pub home_team: String,
    pub home_score: String,
    pub away_score: String,
    pub away_team: String,
    /// (player name, raw event fragment) per player block
    pub scorers: Vec<(String, String)>,
}

/// Identity of a fixture inside one league.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixtureKey {
    pub date: NaiveDate,
    pub home_team: String,
    pub away_team: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    date: NaiveDate,
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    timeline: Timeline,
}

impl Fixture {
    /// Validate the raw fields and decode every player block.
    /// Any failure aborts the whole fixture.
    pub fn parse(raw: &RawFixture, opts: &DecodeOptions) -> Result<Self, FixtureError> {
        let date = parse_date(&raw.date)?;
        let home_team = required(&raw.home_team, "home team")?;
        let away_team = required(&raw.away_team, "away team")?;
        let home_score = parse_score(&raw.home_score, "home")?;
        let away_score = parse_score(&raw.away_score, "away")?;

        let mut timeline = Timeline::default();
        for (player, fragment) in &raw.scorers {
            decode::decode_into(&mut timeline, player, fragment, opts)
                .map_err(|source| FixtureError::Event { player: player.clone(), source })?;
        }

        Ok(Self { date, home_team, away_team, home_score, away_score, timeline })
    }

    /// Rebuild from stored, already-decoded parts.
    pub(crate) fn restore(
        key: FixtureKey,
        home_score: u32,
        away_score: u32,
        events: Vec<Event>,
    ) -> Self {
        let mut timeline = Timeline::default();
        for e in events {
            timeline.insert(e);
        }
        Self {
            date: key.date,
            home_team: key.home_team,
            away_team: key.away_team,
            home_score,
            away_score,
            timeline,
        }
    }

    pub fn date(&self) -> NaiveDate { self.date }
    pub fn home_team(&self) -> &str { &self.home_team }
    pub fn away_team(&self) -> &str { &self.away_team }
    pub fn home_score(&self) -> u32 { self.home_score }
    pub fn away_score(&self) -> u32 { self.away_score }
    pub fn timeline(&self) -> &Timeline { &self.timeline }

    /// Always derived from the two scores.
    pub fn result(&self) -> MatchResult {
        MatchResult::from_scores(self.home_score, self.away_score)
    }

    pub fn key(&self) -> FixtureKey {
        FixtureKey {
            date: self.date,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
        }
    }

    /// Events with a handle back to this fixture.
    pub fn events(&self) -> impl Iterator<Item = EventRef<'_>> {
        self.timeline.iter().map(move |event| EventRef { fixture: self, event })
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} vs {} --> {}:{}",
            self.date.format(DATE_FMT),
            self.home_team,
            self.away_team,
            self.home_score,
            self.away_score
        )?;
        for event in &self.timeline {
            writeln!(f, "{event}")?;
        }
        Ok(())
    }
}

/// Borrowed event plus the fixture it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct EventRef<'a> {
    fixture: &'a Fixture,
    event: &'a Event,
}

impl<'a> EventRef<'a> {
    pub fn fixture(&self) -> &'a Fixture { self.fixture }
    pub fn event(&self) -> &'a Event { self.event }
}

impl Deref for EventRef<'_> {
    type Target = Event;
    fn deref(&self) -> &Event { self.event }
}

/* ---------------- field validation ---------------- */

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, FixtureError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(FixtureError::MissingField { field: "date" });
    }
    NaiveDate::parse_from_str(t, DATE_FMT).map_err(|_| FixtureError::BadDate { value: s!(t) })
}

fn required(s: &str, field: &'static str) -> Result<String, FixtureError> {
    let t = s.trim();
    if t.is_empty() {
        Err(FixtureError::MissingField { field })
    } else {
        Ok(s!(t))
    }
}

fn parse_score(s: &str, side: &'static str) -> Result<u32, FixtureError> {
    let t = s.trim();
    if t.is_empty() {
        return Err(FixtureError::MissingField {
            field: if side == "home" { "home score" } else { "away score" },
        });
    }
    if !t.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FixtureError::BadScore { side, value: s!(t) });
    }
    t.parse().map_err(|_| FixtureError::BadScore { side, value: s!(t) })
}
