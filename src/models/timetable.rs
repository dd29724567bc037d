//! Timetable (result) model.
//!
//! A timetable is the output of one scheduling run: the chosen courses in
//! acceptance order, their credit total, and a short note describing how
//! it was produced. It is built once and never mutated.

use serde::{Deserialize, Serialize};

use super::Course;

/// A chosen course as shown to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCourse {
    pub code: String,
    pub name: String,
}

/// One complete timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Chosen courses in acceptance order.
    pub selected: Vec<SelectedCourse>,
    /// Sum of the chosen courses' credits, saturating at `u32::MAX`.
    pub credits: u32,
    /// How this timetable was produced.
    #[serde(default)]
    pub notes: String,
}

impl Timetable {
    /// Builds a timetable from chosen courses.
    pub fn from_courses<'a>(
        courses: impl IntoIterator<Item = &'a Course>,
        notes: impl Into<String>,
    ) -> Self {
        let mut selected = Vec::new();
        let mut credits: u32 = 0;
        for course in courses {
            credits = credits.saturating_add(course.credits);
            selected.push(SelectedCourse {
                code: course.code.clone(),
                name: course.name.clone(),
            });
        }
        Self {
            selected,
            credits,
            notes: notes.into(),
        }
    }

    /// Chosen course codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.selected.iter().map(|c| c.code.as_str()).collect()
    }

    /// Number of chosen courses.
    pub fn course_count(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
