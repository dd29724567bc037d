//! Read-only course catalog.
//!
//! The catalog is built once (from courses or from a JSON file) and then
//! only read. It holds no interior mutability, so a shared reference or an
//! `Arc<Catalog>` can be handed to any number of concurrent requests.
//!
//! # JSON Format
//!
//! An array of courses. Slot `type` defaults to `lecture`; `room` is optional.
//!
//! ```json
//! [
//!   {"code": "CS101", "name": "Intro to CS", "credits": 4,
//!    "classes": [{"type": "lecture", "day": "MON", "start": "09:00", "end": "11:00"}]}
//! ]
//! ```

use log::{debug, info};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Result, TimetableError};
use crate::models::{Course, MeetingSlot, SlotKind, Weekday};
use crate::validation::validate_catalog;

/// Outcome of looking up a requested code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeResolution<'a> {
    /// Code exists in the catalog.
    Known(&'a Course),
    /// Code is unknown and is skipped without error.
    Ignored { code: &'a str },
}

/// Immutable course catalog keyed by code.
///
/// Enumeration order is the order courses were supplied in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from courses without validation.
    ///
    /// When a code repeats, the last course with that code wins lookups.
    pub fn from_courses(courses: impl IntoIterator<Item = Course>) -> Self {
        let courses: Vec<Course> = courses.into_iter().collect();
        let index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.code.clone(), i))
            .collect();
        Self { courses, index }
    }

    /// Builds a catalog after running [`validate_catalog`].
    pub fn validated(courses: Vec<Course>) -> Result<Self> {
        validate_catalog(&courses).map_err(TimetableError::InvalidCatalog)?;
        Ok(Self::from_courses(courses))
    }

    /// Parses and validates a JSON catalog.
    ///
    /// Malformed times fail with [`TimetableError::Parse`] naming the course.
    ///
    /// The loader is stricter than the scheduler: one inverted or zero-length
    /// slot, blank code or duplicate code rejects the whole catalog with
    /// [`TimetableError::InvalidCatalog`]. Use [`Catalog::from_courses`] to
    /// load such data unchecked; those slots then overlap nothing.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CourseRecord> = serde_json::from_str(json)?;
        let courses = records
            .into_iter()
            .map(Course::try_from)
            .collect::<Result<Vec<_>>>()?;
        let catalog = Self::validated(courses)?;
        info!("catalog loaded: {} courses", catalog.len());
        Ok(catalog)
    }

    /// Reads a JSON catalog from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("reading catalog from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Looks up a course by code.
    pub fn lookup(&self, code: &str) -> Option<&Course> {
        self.index.get(code).map(|&i| &self.courses[i])
    }

    /// Whether `code` exists.
    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Resolves a requested code, reporting unknown codes as ignored.
    pub fn resolve<'a>(&'a self, code: &'a str) -> CodeResolution<'a> {
        match self.lookup(code) {
            Some(course) => CodeResolution::Known(course),
            None => CodeResolution::Ignored { code },
        }
    }

    /// All courses in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Catalog entry as stored on disk.
#[derive(Debug, Deserialize)]
struct CourseRecord {
    code: String,
    name: String,
    credits: u32,
    #[serde(default)]
    classes: Vec<SlotRecord>,
}

#[derive(Debug, Deserialize)]
struct SlotRecord {
    #[serde(rename = "type", default)]
    kind: SlotKind,
    day: Weekday,
    start: String,
    end: String,
    #[serde(default)]
    room: Option<String>,
}

impl TryFrom<CourseRecord> for Course {
    type Error = TimetableError;

    fn try_from(record: CourseRecord) -> Result<Self> {
        let mut slots = Vec::with_capacity(record.classes.len());
        for raw in record.classes {
            let mut slot = MeetingSlot::parse(raw.day, &raw.start, &raw.end)
                .map_err(|source| TimetableError::Parse {
                    course: record.code.clone(),
                    source,
                })?
                .with_kind(raw.kind);
            slot.room = raw.room;
            slots.push(slot);
        }
        Ok(Course {
            code: record.code,
            name: record.name,
            credits: record.credits,
            slots,
        })
    }
}
