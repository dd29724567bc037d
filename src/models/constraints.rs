//! Student constraints for one scheduling request.
//!
//! # Lenient Parsing
//! Avoid rules arrive as free text (`"TUE 13:00-15:00"`). Rules that do not
//! parse are ignored rather than rejected; [`AvoidRule::parse`] reports this
//! as [`AvoidRuleParse::Ignored`] so callers can see what was dropped.

use serde::{Deserialize, Serialize};

use super::course::{MeetingSlot, Weekday};
use super::time::TimeWindow;

/// Credit cap applied when a request does not specify one.
pub const DEFAULT_MAX_CREDITS: i64 = 22;

/// Cap used when `max_credits` is absent or zero.
pub const UNBOUNDED_CREDITS: i64 = 99;

/// User-specified filtering rules for schedule construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Constraints {
    /// Credit cap. The course that reaches the cap is still kept, so a
    /// negative cap stops after the first accepted course.
    pub max_credits: Option<i64>,
    /// Days on which no meeting may take place.
    pub busy_days: Vec<Weekday>,
    /// Avoid rules, `"DAY HH:MM-HH:MM"`.
    pub avoid_times: Vec<String>,
    /// Preferred day off. Accepted but not enforced.
    pub free_day: Option<Weekday>,
    /// Reject any course with a meeting ending after 12:00.
    pub morning_only: bool,
}

impl Default for Constraints {
    fn default() -> Self {
        Self {
            max_credits: Some(DEFAULT_MAX_CREDITS),
            busy_days: Vec::new(),
            avoid_times: Vec::new(),
            free_day: None,
            morning_only: false,
        }
    }
}

impl Constraints {
    /// Constraints with the default cap and no restrictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the credit cap.
    pub fn with_max_credits(mut self, max_credits: i64) -> Self {
        self.max_credits = Some(max_credits);
        self
    }

    /// Removes the credit cap (falls back to [`UNBOUNDED_CREDITS`]).
    pub fn without_credit_cap(mut self) -> Self {
        self.max_credits = None;
        self
    }

    /// Adds a busy day.
    pub fn with_busy_day(mut self, day: Weekday) -> Self {
        self.busy_days.push(day);
        self
    }

    /// Adds an avoid rule.
    pub fn with_avoid(mut self, rule: impl Into<String>) -> Self {
        self.avoid_times.push(rule.into());
        self
    }

    /// Sets the preferred free day.
    pub fn with_free_day(mut self, day: Weekday) -> Self {
        self.free_day = Some(day);
        self
    }

    /// Enables the morning-only preference.
    pub fn morning_only(mut self) -> Self {
        self.morning_only = true;
        self
    }

    /// Effective credit cap. `None` and `Some(0)` both mean [`UNBOUNDED_CREDITS`].
    /// Negative caps are returned as-is.
    pub fn credit_cap(&self) -> i64 {
        match self.max_credits {
            None | Some(0) => UNBOUNDED_CREDITS,
            Some(cap) => cap,
        }
    }

    /// Whether a running credit total has reached the cap.
    pub fn cap_reached(&self, credits: u32) -> bool {
        i64::from(credits) >= self.credit_cap()
    }

    /// Whether `day` is listed as busy.
    pub fn is_busy(&self, day: Weekday) -> bool {
        self.busy_days.contains(&day)
    }

    /// Parses all avoid rules, keeping ignored entries in the output.
    pub fn parse_avoid_rules(&self) -> Vec<AvoidRuleParse> {
        self.avoid_times.iter().map(|r| AvoidRule::parse(r)).collect()
    }
}

/// A day and time range in which no meeting may be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvoidRule {
    pub day: Weekday,
    pub window: TimeWindow,
}

/// Outcome of parsing one avoid rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvoidRuleParse {
    /// Well-formed rule.
    Rule(AvoidRule),
    /// Malformed text, skipped without error.
    Ignored { raw: String },
}

impl AvoidRule {
    /// Parses `"<DAY> <HH:MM>-<HH:MM>"`.
    ///
    /// Exactly one space separates day and range. Anything else is
    /// [`AvoidRuleParse::Ignored`].
    ///
    /// ```
    /// use u_timetable::models::{AvoidRule, AvoidRuleParse, Weekday};
    ///
    /// match AvoidRule::parse("TUE 13:00-15:00") {
    ///     AvoidRuleParse::Rule(rule) => assert_eq!(rule.day, Weekday::Tue),
    ///     AvoidRuleParse::Ignored { .. } => unreachable!(),
    /// }
    /// assert!(matches!(AvoidRule::parse("tuesday afternoon"), AvoidRuleParse::Ignored { .. }));
    /// ```
    pub fn parse(raw: &str) -> AvoidRuleParse {
        let ignored = || AvoidRuleParse::Ignored {
            raw: raw.to_string(),
        };

        let mut parts = raw.split(' ');
        let (Some(day), Some(range), None) = (parts.next(), parts.next(), parts.next()) else {
            return ignored();
        };
        let Ok(day) = day.parse::<Weekday>() else {
            return ignored();
        };
        match TimeWindow::parse(range) {
            Ok(window) => AvoidRuleParse::Rule(AvoidRule { day, window }),
            Err(_) => ignored(),
        }
    }

    /// Whether `slot` meets inside this rule's window.
    pub fn blocks(&self, slot: &MeetingSlot) -> bool {
        slot.day == self.day && slot.window().overlaps(&self.window)
    }
}
