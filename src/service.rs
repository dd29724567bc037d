//! Request/response surface for a serving layer.
//!
//! `PlannerService` owns a shared catalog and the collaborators and exposes
//! the four tool operations (health, build schedule, calendar export,
//! reminders) with JSON-ready request and response types. It holds no
//! mutable state, so one instance can serve concurrent requests.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::integrations::{
    CalendarExport, CalendarProvider, MockCalendarExport, MockReminderService, ReminderChannel,
    ReminderService,
};
use crate::models::{Constraints, Timetable};

/// Liveness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub ok: bool,
}

/// Build-schedule input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildScheduleRequest {
    /// Course codes to consider, in preference order.
    pub courses: Vec<String>,
    #[serde(default)]
    pub constraints: Constraints,
}

/// Build-schedule output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildScheduleResponse {
    pub timetable: Timetable,
    #[serde(default)]
    pub alternatives: Vec<Timetable>,
}

/// Calendar export input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRequest {
    pub timetable: Timetable,
    #[serde(default)]
    pub provider: CalendarProvider,
}

/// Calendar export output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub provider: CalendarProvider,
    pub event_ids: Vec<String>,
    pub status: String,
}

/// Reminder input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderRequest {
    pub topic: String,
    pub when: String,
    #[serde(default)]
    pub channel: ReminderChannel,
}

/// Reminder output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub reminder_id: String,
    pub topic: String,
    pub when: String,
    pub status: String,
}

/// Planner entry point for a serving layer.
#[derive(Clone)]
pub struct PlannerService {
    catalog: Arc<Catalog>,
    config: PlannerConfig,
    calendar: Arc<dyn CalendarExport>,
    reminders: Arc<dyn ReminderService>,
}

impl PlannerService {
    /// Creates a service with default configuration and mock collaborators.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: PlannerConfig::default(),
            calendar: Arc::new(MockCalendarExport),
            reminders: Arc::new(MockReminderService),
        }
    }

    /// Loads the catalog named by `config`.
    pub fn from_config(config: PlannerConfig) -> Result<Self> {
        let catalog = Arc::new(config.load_catalog()?);
        Ok(Self::new(catalog).with_config(config))
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_calendar(mut self, calendar: Arc<dyn CalendarExport>) -> Self {
        self.calendar = calendar;
        self
    }

    pub fn with_reminders(mut self, reminders: Arc<dyn ReminderService>) -> Self {
        self.reminders = reminders;
        self
    }

    /// The shared catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn health(&self) -> Health {
        Health { ok: true }
    }

    /// Builds the primary timetable and alternatives.
    ///
    /// # Errors
    /// [`TimetableError::NoValidCourses`](crate::error::TimetableError::NoValidCourses)
    /// when no requested code is known; callers map it to a client error.
    pub fn build_schedule(&self, request: &BuildScheduleRequest) -> Result<BuildScheduleResponse> {
        let outcome = self
            .config
            .builder(&self.catalog)
            .build(&request.courses, &request.constraints)?;
        Ok(BuildScheduleResponse {
            timetable: outcome.timetable,
            alternatives: outcome.alternatives,
        })
    }

    pub fn create_calendar_events(&self, request: &CalendarRequest) -> CalendarResponse {
        let exported = self.calendar.export(&request.timetable, request.provider);
        CalendarResponse {
            provider: request.provider,
            event_ids: exported.event_ids,
            status: exported.status,
        }
    }

    pub fn set_reminder(&self, request: &ReminderRequest) -> ReminderResponse {
        let scheduled = self
            .reminders
            .schedule(&request.topic, &request.when, request.channel);
        ReminderResponse {
            reminder_id: scheduled.reminder_id,
            topic: request.topic.clone(),
            when: request.when.clone(),
            status: scheduled.status,
        }
    }
}

impl std::fmt::Debug for PlannerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerService")
            .field("courses", &self.catalog.len())
            .field("config", &self.config)
            .finish()
    }
}
