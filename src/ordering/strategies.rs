//! Built-in ordering strategies.
//!
//! # Categories
//!
//! - **Positional**: AsRequested, Reversed
//! - **Credit-based**: CreditsDescending, CreditsAscending
//! - **Lexical**: ByName
//! - **Random**: Shuffled (seeded, reproducible)
//!
//! Sorting strategies are stable: ties keep the requested order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::OrderingStrategy;
use crate::catalog::Catalog;

/// Keeps the requested order.
#[derive(Debug, Clone, Copy)]
pub struct AsRequested;

impl OrderingStrategy for AsRequested {
    fn name(&self) -> &'static str {
        "as_requested"
    }

    fn order(&self, codes: &[String], _catalog: &Catalog) -> Vec<String> {
        codes.to_vec()
    }

    fn description(&self) -> &'static str {
        "Greedy first-pass schedule in requested order"
    }
}

/// Reverses the requested order.
#[derive(Debug, Clone, Copy)]
pub struct Reversed;

impl OrderingStrategy for Reversed {
    fn name(&self) -> &'static str {
        "reversed"
    }

    fn order(&self, codes: &[String], _catalog: &Catalog) -> Vec<String> {
        codes.iter().rev().cloned().collect()
    }

    fn description(&self) -> &'static str {
        "Reverse-order alternative"
    }
}

fn credits_of(catalog: &Catalog, code: &str) -> u32 {
    catalog.lookup(code).map_or(0, |c| c.credits)
}

/// Highest-credit courses first.
///
/// Tends to fill the cap with few courses.
#[derive(Debug, Clone, Copy)]
pub struct CreditsDescending;

impl OrderingStrategy for CreditsDescending {
    fn name(&self) -> &'static str {
        "credits_descending"
    }

    fn order(&self, codes: &[String], catalog: &Catalog) -> Vec<String> {
        let mut ordered = codes.to_vec();
        ordered.sort_by_key(|code| std::cmp::Reverse(credits_of(catalog, code)));
        ordered
    }

    fn description(&self) -> &'static str {
        "Alternative preferring high-credit courses"
    }
}

/// Lowest-credit courses first.
///
/// Tends to fit more courses under the cap.
#[derive(Debug, Clone, Copy)]
pub struct CreditsAscending;

impl OrderingStrategy for CreditsAscending {
    fn name(&self) -> &'static str {
        "credits_ascending"
    }

    fn order(&self, codes: &[String], catalog: &Catalog) -> Vec<String> {
        let mut ordered = codes.to_vec();
        ordered.sort_by_key(|code| credits_of(catalog, code));
        ordered
    }

    fn description(&self) -> &'static str {
        "Alternative preferring low-credit courses"
    }
}

/// Alphabetical by display name. Unknown codes sort by code.
#[derive(Debug, Clone, Copy)]
pub struct ByName;

impl OrderingStrategy for ByName {
    fn name(&self) -> &'static str {
        "by_name"
    }

    fn order(&self, codes: &[String], catalog: &Catalog) -> Vec<String> {
        let mut ordered = codes.to_vec();
        ordered.sort_by(|a, b| {
            let name = |code: &String| catalog.lookup(code).map_or(code.clone(), |c| c.name.clone());
            name(a).cmp(&name(b))
        });
        ordered
    }

    fn description(&self) -> &'static str {
        "Alternative in alphabetical order"
    }
}

/// Seeded random permutation.
#[derive(Debug, Clone, Copy)]
pub struct Shuffled {
    pub seed: u64,
}

impl Shuffled {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl OrderingStrategy for Shuffled {
    fn name(&self) -> &'static str {
        "shuffled"
    }

    fn order(&self, codes: &[String], _catalog: &Catalog) -> Vec<String> {
        let mut ordered = codes.to_vec();
        let mut rng = StdRng::seed_from_u64(self.seed);
        ordered.shuffle(&mut rng);
        ordered
    }

    fn description(&self) -> &'static str {
        "Randomly ordered alternative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("A", "Zoology", 4),
            Course::new("B", "Art", 2),
            Course::new("C", "Music", 6),
            Course::new("D", "Botany", 4),
        ])
    }

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_as_requested() {
        let input = codes(&["C", "A", "B"]);
        assert_eq!(AsRequested.order(&input, &catalog()), input);
    }

    #[test]
    fn test_reversed() {
        let input = codes(&["A", "B", "C"]);
        assert_eq!(Reversed.order(&input, &catalog()), codes(&["C", "B", "A"]));
    }

    #[test]
    fn test_credits_descending_is_stable() {
        let input = codes(&["D", "B", "A", "C"]);
        // A and D tie at 4; D was requested first
        assert_eq!(
            CreditsDescending.order(&input, &catalog()),
            codes(&["C", "D", "A", "B"])
        );
    }

    #[test]
    fn test_credits_ascending() {
        let input = codes(&["A", "B", "C", "D"]);
        assert_eq!(
            CreditsAscending.order(&input, &catalog()),
            codes(&["B", "A", "D", "C"])
        );
    }

    #[test]
    fn test_by_name() {
        let input = codes(&["A", "B", "C", "D"]);
        assert_eq!(ByName.order(&input, &catalog()), codes(&["B", "D", "C", "A"]));
    }

    #[test]
    fn test_shuffled_is_reproducible_permutation() {
        let input = codes(&["A", "B", "C", "D"]);
        let first = Shuffled::new(42).order(&input, &catalog());
        let second = Shuffled::new(42).order(&input, &catalog());
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_unknown_codes_are_kept() {
        let input = codes(&["X", "C"]);
        assert_eq!(CreditsDescending.order(&input, &catalog()), codes(&["C", "X"]));
        assert_eq!(ByName.order(&input, &catalog()), codes(&["C", "X"]));
    }
}
