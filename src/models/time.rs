//! Clock times and time windows within a single day.
//!
//! # Time Model
//! All times are minutes since midnight (0..1440). Windows are half-open
//! `[start, end)`: touching windows do not overlap, and a zero-length
//! window overlaps nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// Minutes in one hour.
const MINUTES_PER_HOUR: u16 = 60;

/// 12:00 as minute-of-day. Morning-only schedules must end by this time.
pub const NOON: ClockTime = ClockTime(12 * MINUTES_PER_HOUR);

/// Parses an `HH:MM` string into minutes since midnight.
///
/// Accepts one or two hour digits and exactly two minute digits.
/// Hours must be in 0..=23 and minutes in 0..=59.
///
/// ```
/// use u_timetable::models::to_minutes;
///
/// assert_eq!(to_minutes("09:30").unwrap(), 570);
/// assert_eq!(to_minutes("8:05").unwrap(), 485);
/// assert!(to_minutes("9am").is_err());
/// ```
pub fn to_minutes(hhmm: &str) -> Result<u16, ParseError> {
    let invalid = || ParseError::InvalidClockTime {
        input: hhmm.to_string(),
    };

    let (h, m) = hhmm.trim().split_once(':').ok_or_else(invalid)?;
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(h) || h.len() > 2 || !all_digits(m) || m.len() != 2 {
        return Err(invalid());
    }

    let hours: u16 = h.parse().map_err(|_| invalid())?;
    let minutes: u16 = m.parse().map_err(|_| invalid())?;

    if hours > 23 {
        return Err(ParseError::HourOutOfRange {
            input: hhmm.to_string(),
        });
    }
    if minutes >= MINUTES_PER_HOUR {
        return Err(ParseError::MinuteOutOfRange {
            input: hhmm.to_string(),
        });
    }

    Ok(hours * MINUTES_PER_HOUR + minutes)
}

/// A time of day with minute precision.
///
/// Serialized as an `HH:MM` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

impl ClockTime {
    /// Creates a clock time from hour and minute.
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < MINUTES_PER_HOUR).then_some(Self(hour * MINUTES_PER_HOUR + minute))
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component (0..=23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    /// Minute component (0..=59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        to_minutes(s).map(Self)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(t: ClockTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A time interval [start, end) within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: ClockTime,
    /// Interval end (exclusive).
    pub end: ClockTime,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: ClockTime, end: ClockTime) -> Self {
        Self { start, end }
    }

    /// Parses `HH:MM-HH:MM`.
    pub fn parse(range: &str) -> Result<Self, ParseError> {
        let (s, e) = range
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidClockTime {
                input: range.to_string(),
            })?;
        Ok(Self::new(s.parse()?, e.parse()?))
    }

    /// Duration in minutes. Zero for inverted windows.
    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    /// Whether two windows overlap: `max(starts) < min(ends)`.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start.max(other.start) < self.end.min(other.end)
    }

    /// Whether the window ends strictly after `time`.
    #[inline]
    pub fn ends_after(&self, time: ClockTime) -> bool {
        self.end > time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_to_minutes() {
        assert_eq!(to_minutes("00:00").unwrap(), 0);
        assert_eq!(to_minutes("09:00").unwrap(), 540);
        assert_eq!(to_minutes("12:00").unwrap(), 720);
        assert_eq!(to_minutes("23:59").unwrap(), 1439);
        assert_eq!(to_minutes("7:45").unwrap(), 465);
    }

    #[test]
    fn test_to_minutes_rejects_malformed() {
        for bad in ["", "9", "9:0", "09-00", "ab:cd", "09:000", "123:00", "+9:00", "09:5x"] {
            assert!(
                matches!(to_minutes(bad), Err(ParseError::InvalidClockTime { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_minutes_out_of_range() {
        assert!(matches!(
            to_minutes("24:00"),
            Err(ParseError::HourOutOfRange { .. })
        ));
        assert!(matches!(
            to_minutes("10:60"),
            Err(ParseError::MinuteOutOfRange { .. })
        ));
    }

    #[test]
    fn test_clock_time_display() {
        assert_eq!(t("9:05").to_string(), "09:05");
        assert_eq!(ClockTime::from_hm(13, 30).unwrap().to_string(), "13:30");
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert_eq!(NOON.minutes(), 720);
    }

    #[test]
    fn test_clock_time_serde() {
        let json = serde_json::to_string(&t("08:30")).unwrap();
        assert_eq!(json, "\"08:30\"");
        let back: ClockTime = serde_json::from_str("\"14:15\"").unwrap();
        assert_eq!(back.minutes(), 855);
        assert!(serde_json::from_str::<ClockTime>("\"noon\"").is_err());
    }

    #[test]
    fn test_window_overlap() {
        let a = TimeWindow::new(t("09:00"), t("11:00"));
        let b = TimeWindow::new(t("10:00"), t("12:00"));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(t("11:00"), t("12:00")); // touching
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_zero_length_window_never_overlaps() {
        let point = TimeWindow::new(t("10:00"), t("10:00"));
        let wide = TimeWindow::new(t("08:00"), t("12:00"));
        assert!(!point.overlaps(&wide));
        assert!(!wide.overlaps(&point));
        assert_eq!(point.duration_minutes(), 0);
    }

    #[test]
    fn test_window_parse() {
        let w = TimeWindow::parse("13:00-15:00").unwrap();
        assert_eq!(w.start, t("13:00"));
        assert_eq!(w.end, t("15:00"));
        assert_eq!(w.duration_minutes(), 120);
        assert!(TimeWindow::parse("13:00").is_err());
        assert!(TimeWindow::parse("13:00-3pm").is_err());
    }

    #[test]
    fn test_ends_after() {
        let w = TimeWindow::new(t("10:00"), t("12:00"));
        assert!(!w.ends_after(NOON));
        let late = TimeWindow::new(t("11:00"), t("12:01"));
        assert!(late.ends_after(NOON));
    }
}
