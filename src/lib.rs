//! Course timetable planning for the U-Engine ecosystem.
//!
//! Turns a list of candidate course codes plus student constraints into a
//! conflict-free, credit-bounded timetable, with alternatives produced by
//! re-running the same greedy selection under different candidate orders.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `MeetingSlot`, `Constraints`,
//!   `Timetable`, clock times and time windows
//! - **`catalog`**: Read-only course catalog, loaded once from JSON
//! - **`validation`**: Catalog integrity checks (duplicate codes, inverted slots)
//! - **`scheduler`**: Constraint evaluator, greedy scheduler, schedule builder
//! - **`ordering`**: Candidate ordering strategies for alternatives
//! - **`integrations`**: Calendar export and reminder collaborators (mock)
//! - **`service`**: Request/response surface for a serving layer
//! - **`config`**: TOML planner configuration
//!
//! # Algorithm
//!
//! Selection is greedy and first-fit, not optimal: a course is accepted if
//! it passes the busy-day, morning-only, and avoid-time checks and does not
//! overlap any course already chosen. Selection stops once the credit cap
//! is reached, keeping the course that reached it.
//!
//! # Lenient Input
//!
//! Unknown course codes and malformed avoid rules are skipped rather than
//! reported as errors. A request whose codes are *all* unknown fails with
//! [`TimetableError::NoValidCourses`].
//!
//! # Logging
//!
//! Emits `log` records; installing a logger is left to the application.

pub mod catalog;
pub mod config;
pub mod error;
pub mod integrations;
pub mod models;
pub mod ordering;
pub mod scheduler;
pub mod service;
pub mod validation;

pub use error::{ParseError, Result, TimetableError};
