//! Per-course acceptance checks.
//!
//! # Rejection Order
//!
//! A course is rejected by the first matching check:
//! 1. Any meeting falls on a busy day.
//! 2. Morning-only is set and any meeting ends after 12:00.
//! 3. Any meeting falls inside an avoid rule.
//! 4. Any meeting overlaps a meeting already committed.
//!
//! A single offending meeting rejects the whole course.

use serde::Serialize;
use std::fmt;

use crate::models::{
    AvoidRule, AvoidRuleParse, ClockTime, Constraints, Course, MeetingSlot, Weekday, NOON,
};

/// Why a course was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum RejectReason {
    /// Meets on a day the student marked busy.
    BusyDay { day: Weekday },
    /// Ends after noon while morning-only is set.
    AfterNoon { day: Weekday, end: ClockTime },
    /// Falls inside an avoid rule.
    AvoidedTime { day: Weekday, start: ClockTime },
    /// Overlaps a meeting of an already chosen course.
    Overlap { day: Weekday, start: ClockTime },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::BusyDay { day } => write!(f, "meets on busy day {day}"),
            RejectReason::AfterNoon { day, end } => write!(f, "{day} meeting ends at {end}"),
            RejectReason::AvoidedTime { day, start } => {
                write!(f, "{day} {start} meeting is inside an avoided time")
            }
            RejectReason::Overlap { day, start } => {
                write!(f, "{day} {start} meeting overlaps a chosen course")
            }
        }
    }
}

/// Acceptance decision for one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Whether `slot` falls inside any avoid rule.
///
/// Malformed rules are skipped.
pub fn violates_avoid<S: AsRef<str>>(slot: &MeetingSlot, avoid: &[S]) -> bool {
    avoid.iter().any(|raw| match AvoidRule::parse(raw.as_ref()) {
        AvoidRuleParse::Rule(rule) => rule.blocks(slot),
        AvoidRuleParse::Ignored { .. } => false,
    })
}

/// Decides whether `course` can join a schedule that already occupies `occupied`.
///
/// `free_day` is not consulted.
///
/// ```
/// use u_timetable::models::{Constraints, Course, MeetingSlot, Weekday};
/// use u_timetable::scheduler::course_acceptable;
///
/// let course = Course::new("A", "Algebra", 6)
///     .with_slot(MeetingSlot::parse(Weekday::Mon, "09:00", "11:00").unwrap());
///
/// let busy_monday = Constraints::new().with_busy_day(Weekday::Mon);
/// assert!(!course_acceptable(&course, &busy_monday, &[]).is_accepted());
/// assert!(course_acceptable(&course, &Constraints::new(), &[]).is_accepted());
/// ```
pub fn course_acceptable(
    course: &Course,
    constraints: &Constraints,
    occupied: &[MeetingSlot],
) -> Verdict {
    let rules = AcceptanceRules::compile(constraints);
    rules.evaluate(course, occupied)
}

/// Constraints prepared once per scheduling run.
///
/// Avoid rules are parsed up front so that a run does not re-parse them
/// for every slot.
#[derive(Debug, Clone)]
pub(crate) struct AcceptanceRules<'a> {
    constraints: &'a Constraints,
    avoid: Vec<AvoidRule>,
}

impl<'a> AcceptanceRules<'a> {
    pub(crate) fn compile(constraints: &'a Constraints) -> Self {
        let mut avoid = Vec::with_capacity(constraints.avoid_times.len());
        for parsed in constraints.parse_avoid_rules() {
            match parsed {
                AvoidRuleParse::Rule(rule) => avoid.push(rule),
                AvoidRuleParse::Ignored { raw } => {
                    log::debug!("ignoring malformed avoid rule {raw:?}");
                }
            }
        }
        Self { constraints, avoid }
    }

    pub(crate) fn evaluate(&self, course: &Course, occupied: &[MeetingSlot]) -> Verdict {
        let slots = &course.slots;

        if let Some(s) = slots.iter().find(|s| self.constraints.is_busy(s.day)) {
            return Verdict::Rejected(RejectReason::BusyDay { day: s.day });
        }

        if self.constraints.morning_only {
            if let Some(s) = slots.iter().find(|s| s.window().ends_after(NOON)) {
                return Verdict::Rejected(RejectReason::AfterNoon {
                    day: s.day,
                    end: s.end,
                });
            }
        }

        // Avoid and overlap are checked slot by slot, avoid first.
        for slot in slots {
            if self.avoid.iter().any(|rule| rule.blocks(slot)) {
                return Verdict::Rejected(RejectReason::AvoidedTime {
                    day: slot.day,
                    start: slot.start,
                });
            }
            if occupied.iter().any(|used| slot.overlaps(used)) {
                return Verdict::Rejected(RejectReason::Overlap {
                    day: slot.day,
                    start: slot.start,
                });
            }
        }

        Verdict::Accepted
    }
}
