//! Greedy first-fit course selection.
//!
//! # Algorithm
//!
//! 1. Walk the candidate codes strictly in the given order.
//! 2. Skip codes the catalog does not know.
//! 3. Accept a course if [`course_acceptable`](super::course_acceptable)
//!    passes against the meetings committed so far.
//! 4. On acceptance, commit all of its meetings; stop once the chosen
//!    credits reach the cap. The course that reaches the cap is kept.
//!
//! No backtracking and no look-ahead: a rejected course is never
//! reconsidered, even when later capacity would allow it.
//!
//! # Complexity
//! O(n * s * m) where n=candidates, s=slots per course, m=committed slots.

use log::debug;

use super::evaluator::{AcceptanceRules, RejectReason, Verdict};
use crate::catalog::{Catalog, CodeResolution};
use crate::models::{Constraints, Course, MeetingSlot};

/// Working state and result of one greedy run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    /// Accepted course codes in acceptance order.
    pub chosen: Vec<String>,
    /// Meetings of all accepted courses, flattened.
    pub occupied: Vec<MeetingSlot>,
    /// Rejected candidates with the reason.
    pub rejected: Vec<(String, RejectReason)>,
    /// Candidates skipped because the catalog does not know them.
    pub ignored: Vec<String>,
    /// Sum of accepted credits, saturating at `u32::MAX`.
    pub credits: u32,
}

impl Selection {
    fn accept(&mut self, course: &Course) {
        self.chosen.push(course.code.clone());
        self.occupied.extend(course.slots.iter().cloned());
        self.credits = self.credits.saturating_add(course.credits);
    }

    /// Whether the chosen list equals another run's chosen list.
    pub fn same_choice(&self, other: &Self) -> bool {
        self.chosen == other.chosen
    }
}

/// Greedy scheduler over a read-only catalog.
///
/// # Example
///
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{Constraints, Course, MeetingSlot, Weekday};
/// use u_timetable::scheduler::GreedyScheduler;
///
/// let catalog = Catalog::from_courses(vec![
///     Course::new("A", "Algebra", 6)
///         .with_slot(MeetingSlot::parse(Weekday::Mon, "09:00", "11:00").unwrap()),
///     Course::new("B", "Biology", 4)
///         .with_slot(MeetingSlot::parse(Weekday::Mon, "10:00", "12:00").unwrap()),
/// ]);
///
/// let scheduler = GreedyScheduler::new(&catalog);
/// let selection = scheduler.schedule(&["A", "B"], &Constraints::new());
/// assert_eq!(selection.chosen, vec!["A"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GreedyScheduler<'c> {
    catalog: &'c Catalog,
}

impl<'c> GreedyScheduler<'c> {
    /// Creates a scheduler reading from `catalog`.
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this scheduler reads from.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// Runs one greedy pass over `codes` in order.
    pub fn schedule<S: AsRef<str>>(&self, codes: &[S], constraints: &Constraints) -> Selection {
        let rules = AcceptanceRules::compile(constraints);
        let mut selection = Selection::default();

        if let Some(day) = constraints.free_day {
            debug!("free day {day} requested; not enforced");
        }

        for code in codes {
            let course = match self.catalog.resolve(code.as_ref()) {
                CodeResolution::Known(course) => course,
                CodeResolution::Ignored { code } => {
                    debug!("skipping unknown course {code}");
                    selection.ignored.push(code.to_string());
                    continue;
                }
            };

            match rules.evaluate(course, &selection.occupied) {
                Verdict::Accepted => {
                    selection.accept(course);
                    if constraints.cap_reached(selection.credits) {
                        debug!(
                            "credit cap {} reached at {} ({} credits)",
                            constraints.credit_cap(),
                            course.code,
                            selection.credits
                        );
                        break;
                    }
                }
                Verdict::Rejected(reason) => {
                    debug!("rejected {}: {reason}", course.code);
                    selection.rejected.push((course.code.clone(), reason));
                }
            }
        }

        selection
    }
}
