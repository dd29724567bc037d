//! Planner configuration.
//!
//! Read from TOML. Every key is optional; unknown keys are an error:
//!
//! ```toml
//! catalog_path = "data/courses.json"
//! primary_note = "Greedy first-pass schedule; may be refined later"
//! alternative_note = "Reverse-order alternative"
//! alternatives = ["reversed", { shuffled = { seed = 7 } }]
//!
//! [alternative_notes]
//! shuffled = "Random-order alternative"
//! ```
//!
//! `alternative_note` labels the reversed alternative. `alternative_notes`
//! overrides the note of any strategy by name and wins over
//! `alternative_note` for `reversed`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::ordering::{strategies, OrderingKind, OrderingStrategy};
use crate::scheduler::{ScheduleBuilder, DEFAULT_PRIMARY_NOTE};

/// Planner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// JSON catalog location.
    pub catalog_path: Option<PathBuf>,
    /// Note attached to the primary timetable.
    pub primary_note: String,
    /// Note attached to the reversed alternative.
    pub alternative_note: String,
    /// Orderings tried for alternatives, in order.
    pub alternatives: Vec<OrderingKind>,
    /// Note overrides keyed by strategy name.
    pub alternative_notes: HashMap<String, String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            primary_note: DEFAULT_PRIMARY_NOTE.to_string(),
            alternative_note: strategies::Reversed.description().to_string(),
            alternatives: vec![OrderingKind::Reversed],
            alternative_notes: HashMap::new(),
        }
    }
}

impl PlannerConfig {
    /// Parses TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Loads the configured catalog, or an empty one when no path is set.
    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::from_json_file(path),
            None => {
                log::warn!("no catalog_path configured; using an empty catalog");
                Ok(Catalog::default())
            }
        }
    }

    fn alternative_note_for(&self, kind: &OrderingKind, name: &str) -> Option<String> {
        match self.alternative_notes.get(name) {
            Some(note) => Some(note.clone()),
            None if *kind == OrderingKind::Reversed => Some(self.alternative_note.clone()),
            None => None,
        }
    }

    /// Creates a builder with this configuration's notes and orderings.
    pub fn builder<'c>(&self, catalog: &'c Catalog) -> ScheduleBuilder<'c> {
        self.alternatives.iter().fold(
            ScheduleBuilder::new(catalog)
                .with_primary_note(self.primary_note.clone())
                .without_alternatives(),
            |builder, kind| {
                let strategy = kind.strategy();
                let note = self.alternative_note_for(kind, strategy.name());
                builder.with_alternative_arc(strategy, note)
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimetableError;
    use crate::models::{Constraints, Course, MeetingSlot, Weekday};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = PlannerConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, PlannerConfig::default());
        assert_eq!(cfg.alternatives, vec![OrderingKind::Reversed]);
        assert_eq!(cfg.primary_note, DEFAULT_PRIMARY_NOTE);
        assert_eq!(cfg.alternative_note, "Reverse-order alternative");
    }

    #[test]
    fn test_parse_full() {
        let cfg = PlannerConfig::from_toml_str(
            r#"
            catalog_path = "data/courses.json"
            primary_note = "first pass"
            alternatives = ["credits_descending", { shuffled = { seed = 7 } }]

            [alternative_notes]
            credits_descending = "big courses first"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.catalog_path, Some(PathBuf::from("data/courses.json")));
        assert_eq!(cfg.primary_note, "first pass");
        assert_eq!(
            cfg.alternatives,
            vec![
                OrderingKind::CreditsDescending,
                OrderingKind::Shuffled { seed: 7 }
            ]
        );
        assert_eq!(cfg.alternative_notes["credits_descending"], "big courses first");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            PlannerConfig::from_toml_str("alternatives = [\"sideways\"]"),
            Err(TimetableError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            PlannerConfig::from_toml_str("alternative_nots = \"typo\""),
            Err(TimetableError::Config(_))
        ));
    }

    fn overlapping_catalog() -> Catalog {
        Catalog::from_courses(vec![
            Course::new("A", "Algebra", 6)
                .with_slot(MeetingSlot::parse(Weekday::Mon, "09:00", "11:00").unwrap()),
            Course::new("B", "Biology", 4)
                .with_slot(MeetingSlot::parse(Weekday::Mon, "10:00", "12:00").unwrap()),
        ])
    }

    #[test]
    fn test_alternative_note_labels_reversed() {
        let catalog = overlapping_catalog();
        let cfg = PlannerConfig::from_toml_str("alternative_note = \"X\"").unwrap();

        let outcome = cfg
            .builder(&catalog)
            .build(&["A", "B"], &Constraints::new())
            .unwrap();
        assert_eq!(outcome.alternatives[0].codes(), vec!["B"]);
        assert_eq!(outcome.alternatives[0].notes, "X");
    }

    #[test]
    fn test_alternative_note_only_for_reversed() {
        let catalog = overlapping_catalog();
        let cfg = PlannerConfig::from_toml_str(
            r#"
            alternative_note = "X"
            alternatives = ["by_name", "reversed"]
            "#,
        )
        .unwrap();

        let outcome = cfg
            .builder(&catalog)
            .build(&["B", "A"], &Constraints::new())
            .unwrap();
        // by_name gives [A] which differs from the primary [B]; reversed gives [A] again
        assert_eq!(outcome.alternatives.len(), 1);
        assert_eq!(outcome.alternatives[0].codes(), vec!["A"]);
        assert_eq!(outcome.alternatives[0].notes, strategies::ByName.description());
    }

    #[test]
    fn test_builder_uses_notes() {
        let catalog = overlapping_catalog();
        let cfg = PlannerConfig::from_toml_str(
            r#"
            primary_note = "p"
            alternative_note = "ignored for reversed"
            [alternative_notes]
            reversed = "r"
            "#,
        )
        .unwrap();

        let outcome = cfg
            .builder(&catalog)
            .build(&["A", "B"], &Constraints::new())
            .unwrap();
        assert_eq!(outcome.timetable.notes, "p");
        assert_eq!(outcome.alternatives[0].notes, "r");
    }

    #[test]
    fn test_from_file_and_load_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("courses.json");
        std::fs::write(
            &catalog_path,
            r#"[{"code":"A","name":"Algebra","credits":6}]"#,
        )
        .unwrap();

        let config_path = dir.path().join("planner.toml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "catalog_path = {:?}", catalog_path.display().to_string()).unwrap();

        let cfg = PlannerConfig::from_file(&config_path).unwrap();
        let catalog = cfg.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_load_catalog_without_path() {
        let catalog = PlannerConfig::default().load_catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
