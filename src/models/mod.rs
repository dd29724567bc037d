//! Timetable domain models.
//!
//! Provides the core data types for course selection: catalog entries,
//! their weekly meetings, the student's constraints, and the resulting
//! timetable.
//!
//! # Domain Mappings
//!
//! | u-timetable | Scheduling term | Example |
//! |-------------|-----------------|---------|
//! | Course | Task | CS101 Intro to CS |
//! | MeetingSlot | Activity (fixed time) | MON 09:00-11:00 lecture |
//! | Constraints | Hard filters | busy FRI, morning only |
//! | Timetable | Schedule | chosen courses + credits |

mod constraints;
mod course;
mod time;
mod timetable;

pub use constraints::{
    AvoidRule, AvoidRuleParse, Constraints, DEFAULT_MAX_CREDITS, UNBOUNDED_CREDITS,
};
pub use course::{Course, MeetingSlot, SlotKind, Weekday};
pub use time::{to_minutes, ClockTime, TimeWindow, NOON};
pub use timetable::{SelectedCourse, Timetable};
