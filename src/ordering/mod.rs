//! Candidate ordering strategies.
//!
//! The greedy scheduler is order-sensitive: the same candidates in a
//! different order can yield a different timetable. An ordering strategy
//! decides the order; the per-course acceptance checks never change.
//!
//! # Usage
//!
//! ```
//! use u_timetable::catalog::Catalog;
//! use u_timetable::models::Course;
//! use u_timetable::ordering::{strategies, OrderingStrategy};
//!
//! let catalog = Catalog::from_courses(vec![
//!     Course::new("A", "Algebra", 3),
//!     Course::new("B", "Biology", 5),
//! ]);
//! let codes = vec!["A".to_string(), "B".to_string()];
//! assert_eq!(strategies::CreditsDescending.order(&codes, &catalog), vec!["B", "A"]);
//! ```

pub mod strategies;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use crate::catalog::Catalog;

/// Produces the order in which candidates are offered to the scheduler.
///
/// Implementations return a permutation of `codes`; they must not add or
/// drop codes.
pub trait OrderingStrategy: Send + Sync + Debug {
    /// Strategy name (e.g., "reversed").
    fn name(&self) -> &'static str;

    /// Returns `codes` in scheduling order.
    fn order(&self, codes: &[String], catalog: &Catalog) -> Vec<String>;

    /// Human-readable description, used in timetable notes.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Built-in strategies by name, for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingKind {
    AsRequested,
    Reversed,
    CreditsDescending,
    CreditsAscending,
    ByName,
    Shuffled { seed: u64 },
}

impl OrderingKind {
    /// Instantiates the strategy.
    pub fn strategy(self) -> Arc<dyn OrderingStrategy> {
        match self {
            OrderingKind::AsRequested => Arc::new(strategies::AsRequested),
            OrderingKind::Reversed => Arc::new(strategies::Reversed),
            OrderingKind::CreditsDescending => Arc::new(strategies::CreditsDescending),
            OrderingKind::CreditsAscending => Arc::new(strategies::CreditsAscending),
            OrderingKind::ByName => Arc::new(strategies::ByName),
            OrderingKind::Shuffled { seed } => Arc::new(strategies::Shuffled::new(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(OrderingKind::AsRequested.strategy().name(), "as_requested");
        assert_eq!(OrderingKind::Reversed.strategy().name(), "reversed");
        assert_eq!(
            OrderingKind::Shuffled { seed: 7 }.strategy().name(),
            "shuffled"
        );
    }

    #[test]
    fn test_kind_serde() {
        let kinds: Vec<OrderingKind> =
            serde_json::from_str(r#"["reversed", "by_name", {"shuffled": {"seed": 3}}]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                OrderingKind::Reversed,
                OrderingKind::ByName,
                OrderingKind::Shuffled { seed: 3 }
            ]
        );
    }
}
