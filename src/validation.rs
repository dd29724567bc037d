//! Catalog integrity checks.
//!
//! Run when a catalog is loaded from external data. Detects:
//! - Duplicate course codes
//! - Blank codes or names
//! - Meeting slots whose end is not after their start
//!
//! The scheduling core itself never validates slots: an inverted slot
//! simply overlaps nothing. These checks keep such data out of loaded
//! catalogs.

use crate::models::Course;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share the same code.
    DuplicateCode,
    /// A course has a blank code.
    EmptyCode,
    /// A course has a blank name.
    EmptyName,
    /// A meeting slot ends at or before its start.
    InvertedSlot,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates catalog courses.
///
/// Checks:
/// 1. Every course has a non-blank code and name
/// 2. No duplicate codes
/// 3. Every slot has `start < end`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut codes = HashSet::new();

    for course in courses {
        if course.code.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyCode,
                format!("Course '{}' has a blank code", course.name),
            ));
        } else if !codes.insert(course.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCode,
                format!("Duplicate course code: {}", course.code),
            ));
        }

        if course.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                format!("Course '{}' has no name", course.code),
            ));
        }

        for slot in &course.slots {
            if slot.start >= slot.end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedSlot,
                    format!(
                        "Course '{}' has slot {} {}-{} that does not end after it starts",
                        course.code, slot.day, slot.start, slot.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MeetingSlot, Weekday};

    fn slot(day: Weekday, start: &str, end: &str) -> MeetingSlot {
        MeetingSlot::parse(day, start, end).unwrap()
    }

    fn sample_courses() -> Vec<Course> {
        vec![
            Course::new("A", "Algebra", 6).with_slot(slot(Weekday::Mon, "09:00", "11:00")),
            Course::new("B", "Biology", 4).with_slot(slot(Weekday::Mon, "10:00", "12:00")),
        ]
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_courses()).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_code() {
        let mut courses = sample_courses();
        courses.push(Course::new("A", "Algebra II", 3));

        let errors = validate_catalog(&courses).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateCode);
        assert!(errors[0].message.contains('A'));
    }

    #[test]
    fn test_blank_fields() {
        let courses = vec![Course::new(" ", "Nameless code", 1), Course::new("X", "", 1)];

        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyCode));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyName));
    }

    #[test]
    fn test_inverted_and_empty_slots() {
        let courses = vec![Course::new("C", "Chemistry", 3)
            .with_slot(slot(Weekday::Tue, "11:00", "10:00"))
            .with_slot(slot(Weekday::Wed, "10:00", "10:00"))
            .with_slot(slot(Weekday::Thu, "10:00", "11:00"))];

        let errors = validate_catalog(&courses).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::InvertedSlot));
        assert!(errors[0].message.contains("TUE 11:00-10:00"));
    }

    #[test]
    fn test_multiple_errors() {
        let courses = vec![
            Course::new("D", "", 2),
            Course::new("D", "Dup", 2).with_slot(slot(Weekday::Fri, "12:00", "08:00")),
        ];
        let errors = validate_catalog(&courses).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
