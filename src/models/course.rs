//! Course and meeting slot models.
//!
//! A course is a catalog entry: code, display name, credits, and the
//! weekly meeting slots a student must attend if the course is taken.
//! Taking a course means taking *all* of its slots.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::time::{ClockTime, TimeWindow};
use crate::error::ParseError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl Weekday {
    /// All days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];

    /// Three-letter upper-case symbol (`"MON"`).
    pub fn symbol(self) -> &'static str {
        match self {
            Weekday::Sun => "SUN",
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
        }
    }
}

impl FromStr for Weekday {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .into_iter()
            .find(|d| d.symbol() == s)
            .ok_or_else(|| ParseError::InvalidDay {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Kind of meeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKind {
    #[default]
    Lecture,
    Tutorial,
    Lab,
}

/// One weekly meeting of a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingSlot {
    /// Meeting kind; `lecture` when absent from the source data.
    #[serde(rename = "type", default)]
    pub kind: SlotKind,
    /// Day of the week.
    pub day: Weekday,
    /// Start time (inclusive).
    pub start: ClockTime,
    /// End time (exclusive).
    pub end: ClockTime,
    /// Room label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
}

impl MeetingSlot {
    /// Creates a lecture slot.
    pub fn new(day: Weekday, start: ClockTime, end: ClockTime) -> Self {
        Self {
            kind: SlotKind::Lecture,
            day,
            start,
            end,
            room: None,
        }
    }

    /// Parses a slot from a day and two `HH:MM` strings.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, ParseError> {
        Ok(Self::new(day, start.parse()?, end.parse()?))
    }

    /// Sets the meeting kind.
    pub fn with_kind(mut self, kind: SlotKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the room label.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = Some(room.into());
        self
    }

    /// Time range of this slot within its day.
    #[inline]
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start, self.end)
    }

    /// Whether two slots collide: same day and intersecting half-open ranges.
    ///
    /// Slots on different days never overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.window().overlaps(&other.window())
    }
}

/// A catalog course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Credit value.
    pub credits: u32,
    /// Weekly meetings, in catalog order.
    #[serde(rename = "classes", default)]
    pub slots: Vec<MeetingSlot>,
}

impl Course {
    /// Creates a course with no meetings.
    pub fn new(code: impl Into<String>, name: impl Into<String>, credits: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            slots: Vec::new(),
        }
    }

    /// Adds a meeting slot.
    pub fn with_slot(mut self, slot: MeetingSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Whether any meeting falls on `day`.
    pub fn meets_on(&self, day: Weekday) -> bool {
        self.slots.iter().any(|s| s.day == day)
    }

    /// Total weekly contact time in minutes.
    pub fn weekly_minutes(&self) -> u32 {
        self.slots
            .iter()
            .map(|s| u32::from(s.window().duration_minutes()))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Weekday, start: &str, end: &str) -> MeetingSlot {
        MeetingSlot::parse(day, start, end).unwrap()
    }

    #[test]
    fn test_weekday_symbols() {
        for day in Weekday::ALL {
            assert_eq!(day.symbol().parse::<Weekday>().unwrap(), day);
        }
        assert!("Mon".parse::<Weekday>().is_err());
        assert!("XYZ".parse::<Weekday>().is_err());
        assert_eq!(serde_json::to_string(&Weekday::Thu).unwrap(), "\"THU\"");
    }

    #[test]
    fn test_slot_overlap_same_day() {
        let a = slot(Weekday::Mon, "09:00", "11:00");
        let b = slot(Weekday::Mon, "10:00", "12:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_slot_overlap_different_days() {
        let a = slot(Weekday::Mon, "09:00", "11:00");
        let b = slot(Weekday::Tue, "09:00", "11:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_slot_touching() {
        let a = slot(Weekday::Wed, "09:00", "10:00");
        let b = slot(Weekday::Wed, "10:00", "11:00");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_slot_kind_defaults_to_lecture() {
        let s: MeetingSlot =
            serde_json::from_str(r#"{"day":"TUE","start":"13:00","end":"14:30"}"#).unwrap();
        assert_eq!(s.kind, SlotKind::Lecture);
        assert_eq!(s.room, None);

        let lab: MeetingSlot = serde_json::from_str(
            r#"{"type":"lab","day":"FRI","start":"08:00","end":"10:00","room":"B-12"}"#,
        )
        .unwrap();
        assert_eq!(lab.kind, SlotKind::Lab);
        assert_eq!(lab.room.as_deref(), Some("B-12"));
    }

    #[test]
    fn test_course_builder() {
        let c = Course::new("CS101", "Intro to CS", 4)
            .with_slot(slot(Weekday::Sun, "09:00", "11:00"))
            .with_slot(slot(Weekday::Tue, "09:00", "10:30").with_kind(SlotKind::Tutorial));

        assert!(c.meets_on(Weekday::Sun));
        assert!(!c.meets_on(Weekday::Mon));
        assert_eq!(c.weekly_minutes(), 210);
    }
}
