//! Primary timetable plus alternatives.
//!
//! # Algorithm
//!
//! 1. Keep only requested codes present in the catalog; fail with
//!    [`TimetableError::NoValidCourses`] when none remain.
//! 2. Run the greedy scheduler over the primary ordering (requested order
//!    by default) to get the primary timetable.
//! 3. For each alternative ordering (reverse order by default), run the
//!    scheduler again. Keep the result only if its chosen list differs
//!    from the primary and from every alternative already kept.

use log::info;
use std::sync::Arc;

use super::greedy::{GreedyScheduler, Selection};
use crate::catalog::Catalog;
use crate::error::{Result, TimetableError};
use crate::models::{Constraints, Timetable};
use crate::ordering::{strategies, OrderingStrategy};

/// Note on the primary timetable when none is configured.
pub const DEFAULT_PRIMARY_NOTE: &str = "Greedy first-pass schedule; may be refined later";

/// A primary timetable and its distinct alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    pub timetable: Timetable,
    pub alternatives: Vec<Timetable>,
}

#[derive(Debug, Clone)]
struct Alternative {
    strategy: Arc<dyn OrderingStrategy>,
    note: Option<String>,
}

/// Builds timetables from requested course codes.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{Constraints, Course, MeetingSlot, Weekday};
/// use u_timetable::scheduler::ScheduleBuilder;
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("A", "Algebra", 6)
///         .with_slot(MeetingSlot::parse(Weekday::Mon, "09:00", "11:00").unwrap()),
///     Course::new("B", "Biology", 4)
///         .with_slot(MeetingSlot::parse(Weekday::Mon, "10:00", "12:00").unwrap()),
/// ]);
///
/// let outcome = ScheduleBuilder::new(&catalog)
///     .build(&["A", "B"], &Constraints::new())
///     .unwrap();
/// assert_eq!(outcome.timetable.codes(), vec!["A"]);
/// assert_eq!(outcome.alternatives[0].codes(), vec!["B"]);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder<'c> {
    scheduler: GreedyScheduler<'c>,
    primary: Arc<dyn OrderingStrategy>,
    primary_note: String,
    alternatives: Vec<Alternative>,
}

impl<'c> ScheduleBuilder<'c> {
    /// Requested order for the primary, reverse order for the alternative.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            scheduler: GreedyScheduler::new(catalog),
            primary: Arc::new(strategies::AsRequested),
            primary_note: DEFAULT_PRIMARY_NOTE.to_string(),
            alternatives: vec![Alternative {
                strategy: Arc::new(strategies::Reversed),
                note: None,
            }],
        }
    }

    /// Sets the primary ordering.
    pub fn with_primary<S: OrderingStrategy + 'static>(mut self, strategy: S) -> Self {
        self.primary = Arc::new(strategy);
        self
    }

    /// Sets the primary timetable's note.
    pub fn with_primary_note(mut self, note: impl Into<String>) -> Self {
        self.primary_note = note.into();
        self
    }

    /// Removes all alternative orderings.
    pub fn without_alternatives(mut self) -> Self {
        self.alternatives.clear();
        self
    }

    /// Adds an alternative ordering, noted with its description.
    pub fn with_alternative<S: OrderingStrategy + 'static>(self, strategy: S) -> Self {
        self.with_alternative_arc(Arc::new(strategy), None)
    }

    /// Adds a shared alternative ordering with an optional note override.
    pub fn with_alternative_arc(
        mut self,
        strategy: Arc<dyn OrderingStrategy>,
        note: Option<String>,
    ) -> Self {
        self.alternatives.push(Alternative { strategy, note });
        self
    }

    /// Builds the primary timetable and its alternatives.
    ///
    /// # Errors
    /// [`TimetableError::NoValidCourses`] when no requested code is in the catalog.
    pub fn build<S: AsRef<str>>(
        &self,
        requested: &[S],
        constraints: &Constraints,
    ) -> Result<BuildOutcome> {
        let catalog = self.scheduler.catalog();
        let base: Vec<String> = requested
            .iter()
            .map(|code| code.as_ref())
            .filter(|code| catalog.contains(code))
            .map(str::to_string)
            .collect();
        if base.is_empty() {
            return Err(TimetableError::NoValidCourses);
        }

        let primary = self.run(self.primary.as_ref(), &base, constraints);
        let timetable = self.timetable(&primary, self.primary_note.clone());

        let mut kept: Vec<Selection> = Vec::new();
        let mut alternatives = Vec::new();
        for alt in &self.alternatives {
            let selection = self.run(alt.strategy.as_ref(), &base, constraints);
            if selection.same_choice(&primary) || kept.iter().any(|k| k.same_choice(&selection)) {
                continue;
            }
            let note = alt
                .note
                .clone()
                .unwrap_or_else(|| alt.strategy.description().to_string());
            alternatives.push(self.timetable(&selection, note));
            kept.push(selection);
        }

        info!(
            "built timetable: {} of {} courses, {} credits, {} alternatives",
            timetable.course_count(),
            base.len(),
            timetable.credits,
            alternatives.len()
        );

        Ok(BuildOutcome {
            timetable,
            alternatives,
        })
    }

    fn run(
        &self,
        strategy: &dyn OrderingStrategy,
        base: &[String],
        constraints: &Constraints,
    ) -> Selection {
        let ordered = strategy.order(base, self.scheduler.catalog());
        self.scheduler.schedule(&ordered, constraints)
    }

    fn timetable(&self, selection: &Selection, note: String) -> Timetable {
        let catalog = self.scheduler.catalog();
        Timetable::from_courses(
            selection
                .chosen
                .iter()
                .filter_map(|code| catalog.lookup(code)),
            note,
        )
    }
}
