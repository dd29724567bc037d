//! Calendar export and reminder collaborators.
//!
//! Only mock implementations ship with this crate. They create nothing and
//! return fixed identifiers so callers can wire the full flow end to end.

use serde::{Deserialize, Serialize};

use crate::models::Timetable;

/// Identifier returned by the mock calendar export.
pub const MOCK_EVENT_ID: &str = "evt_mock_001";
/// Status reported by the mock calendar export.
pub const MOCK_EVENTS_STATUS: &str = "mock_created";
/// Identifier returned by the mock reminder service.
pub const MOCK_REMINDER_ID: &str = "rem_mock_001";
/// Status reported by the mock reminder service.
pub const MOCK_REMINDER_STATUS: &str = "scheduled(mock)";

/// Calendar provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarProvider {
    Google,
    #[default]
    Mock,
}

/// Reminder delivery channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderChannel {
    #[default]
    Mock,
    Email,
    Push,
}

/// Result of exporting a timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEvents {
    pub event_ids: Vec<String>,
    pub status: String,
}

/// Result of scheduling a reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReminder {
    pub reminder_id: String,
    pub status: String,
}

/// Pushes a timetable into an external calendar.
pub trait CalendarExport: Send + Sync {
    fn export(&self, timetable: &Timetable, provider: CalendarProvider) -> ExportedEvents;
}

/// Schedules a reminder with an external service.
pub trait ReminderService: Send + Sync {
    fn schedule(&self, topic: &str, when: &str, channel: ReminderChannel) -> ScheduledReminder;
}

/// Calendar export that creates nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCalendarExport;

impl CalendarExport for MockCalendarExport {
    fn export(&self, timetable: &Timetable, provider: CalendarProvider) -> ExportedEvents {
        log::debug!(
            "mock calendar export: {} courses via {provider:?}",
            timetable.course_count()
        );
        ExportedEvents {
            event_ids: vec![MOCK_EVENT_ID.to_string()],
            status: MOCK_EVENTS_STATUS.to_string(),
        }
    }
}

/// Reminder service that schedules nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockReminderService;

impl ReminderService for MockReminderService {
    fn schedule(&self, topic: &str, when: &str, channel: ReminderChannel) -> ScheduledReminder {
        log::debug!("mock reminder '{topic}' at {when} via {channel:?}");
        ScheduledReminder {
            reminder_id: MOCK_REMINDER_ID.to_string(),
            status: MOCK_REMINDER_STATUS.to_string(),
        }
    }
}
