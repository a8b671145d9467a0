//! Classification tally maps
//!
//! Running occurrence counts for resolved classification codes, keyed by
//! the classification's symbolic name and segmented by category. A record
//! whose code failed to resolve contributes to no tally.

use crate::app::models::{LocaleCode, SchoolStatus, UrbanLocale};
use crate::constants::categories;
use std::collections::HashMap;
use tracing::warn;

/// Per-category label → count maps for resolved classifications
#[derive(Debug, Default)]
pub struct ClassificationTallies {
    locale: HashMap<String, u64>,
    urban: HashMap<String, u64>,
    status: HashMap<String, u64>,
}

impl ClassificationTallies {
    /// Create empty tallies
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a resolved metro-centric locale classification
    pub fn record_locale(&mut self, classification: Option<LocaleCode>) {
        if let Some(code) = classification {
            *self.locale.entry(code.name().to_string()).or_insert(0) += 1;
        }
    }

    /// Tally a resolved urban-centric locale classification
    pub fn record_urban(&mut self, classification: Option<UrbanLocale>) {
        if let Some(code) = classification {
            *self.urban.entry(code.name().to_string()).or_insert(0) += 1;
        }
    }

    /// Tally a resolved status classification
    pub fn record_status(&mut self, classification: Option<SchoolStatus>) {
        if let Some(code) = classification {
            *self.status.entry(code.name().to_string()).or_insert(0) += 1;
        }
    }

    /// Tally map for the named category (`locale`, `urban`, or `status`)
    ///
    /// An unrecognized category yields an empty map and a diagnostic,
    /// never an error.
    pub fn counts_for(&self, category: &str) -> HashMap<String, u64> {
        match category {
            categories::LOCALE => self.locale.clone(),
            categories::URBAN => self.urban.clone(),
            categories::STATUS => self.status.clone(),
            other => {
                warn!(
                    "`{}` is not a valid classification count category. Options are: {}",
                    other,
                    categories::CLASSIFICATION.join(" ")
                );
                HashMap::new()
            }
        }
    }

    /// All category tally maps, in declaration order
    pub fn all_counts(&self) -> Vec<(&'static str, HashMap<String, u64>)> {
        vec![
            (categories::LOCALE, self.locale.clone()),
            (categories::URBAN, self.urban.clone()),
            (categories::STATUS, self.status.clone()),
        ]
    }

    /// Total number of tallied records in one category
    pub fn total_for(&self, category: &str) -> u64 {
        self.counts_for(category).values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_locale_tallies_by_name() {
        let mut tallies = ClassificationTallies::new();
        tallies.record_locale(LocaleCode::from_code(1));
        tallies.record_locale(LocaleCode::from_code(1));
        tallies.record_locale(LocaleCode::from_code(6));

        let counts = tallies.counts_for("locale");
        assert_eq!(counts.get("LARGE_CITY"), Some(&2));
        assert_eq!(counts.get("SMALL_TOWN"), Some(&1));
    }

    #[test]
    fn test_unresolved_code_is_not_tallied() {
        let mut tallies = ClassificationTallies::new();
        tallies.record_locale(None);
        tallies.record_urban(None);
        tallies.record_status(None);

        assert!(tallies.counts_for("locale").is_empty());
        assert!(tallies.counts_for("urban").is_empty());
        assert!(tallies.counts_for("status").is_empty());
    }

    #[test]
    fn test_categories_are_independent() {
        let mut tallies = ClassificationTallies::new();
        tallies.record_locale(LocaleCode::from_code(1));
        tallies.record_status(SchoolStatus::from_code(1));

        assert_eq!(tallies.counts_for("locale").len(), 1);
        assert_eq!(tallies.counts_for("status").len(), 1);
        assert!(tallies.counts_for("urban").is_empty());
    }

    #[test]
    fn test_total_matches_resolved_count() {
        let mut tallies = ClassificationTallies::new();
        tallies.record_urban(UrbanLocale::from_code(11));
        tallies.record_urban(UrbanLocale::from_code(43));
        tallies.record_urban(UrbanLocale::from_code(99)); // unresolved
        tallies.record_urban(None);

        assert_eq!(tallies.total_for("urban"), 2);
    }

    #[test]
    fn test_unknown_category_is_empty_not_error() {
        let tallies = ClassificationTallies::new();
        assert!(tallies.counts_for("metro").is_empty());
        assert_eq!(tallies.total_for("metro"), 0);
    }

    #[test]
    fn test_all_counts_order() {
        let tallies = ClassificationTallies::new();
        let all = tallies.all_counts();
        let names: Vec<_> = all.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["locale", "urban", "status"]);
    }
}
