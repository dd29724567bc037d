//! Constraint checks, greedy selection, and timetable building.
//!
//! # Algorithm
//!
//! `GreedyScheduler` makes one deterministic left-to-right pass over the
//! candidates, accepting each course that passes the constraint checks
//! against the meetings already committed. It is first-fit, not optimal.
//!
//! `ScheduleBuilder` runs the scheduler once per ordering strategy and
//! turns each run into a [`Timetable`](crate::models::Timetable).
//!
//! # Concurrency
//!
//! Every run owns its working state; the catalog is only read. Independent
//! requests can run on separate threads against one shared catalog.

mod builder;
mod evaluator;
mod greedy;

pub use builder::{BuildOutcome, ScheduleBuilder, DEFAULT_PRIMARY_NOTE};
pub use evaluator::{course_acceptable, violates_avoid, RejectReason, Verdict};
pub use greedy::{GreedyScheduler, Selection};
