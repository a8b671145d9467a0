//! School dataset assembly and aggregate queries
//!
//! Loads an 11-field CSV of school records into an ordered in-memory
//! collection, deduplicating agencies and cities through the registries and
//! tallying classification counts along the way. Per-row failures are
//! recovered by skipping the offending row with a diagnostic; only a
//! missing or unreadable input file fails the load as a whole.

use crate::app::models::{Coordinate, LocaleCode, School, SchoolStatus, UrbanLocale};
use crate::app::services::registry::{AgencyRegistry, CityRegistry};
use crate::app::services::tallies::ClassificationTallies;
use crate::constants::{categories, fields, PROGRESS_UPDATE_INTERVAL, RECORD_FIELD_COUNT};
use crate::{Error, Result};
use csv::StringRecord;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Statistics describing a completed CSV load
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Total data rows read from the file
    pub rows_read: u64,

    /// Rows that produced a school record
    pub records_created: u64,

    /// Rows dropped for any reason (field count, decode error, identity)
    pub rows_skipped: u64,

    /// Wall-clock time spent loading
    pub elapsed: Duration,
}

/// Aggregate summary of a loaded dataset
#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    /// Total number of school records
    pub total_schools: usize,

    /// School count per state, from the city registry request counters
    pub schools_by_state: BTreeMap<String, u64>,

    /// School count per resolved metro-centric locale label
    pub schools_by_locale: BTreeMap<String, u64>,

    /// City with the highest lookup count, if any records were loaded
    pub top_city: Option<TopCity>,

    /// Number of distinct city entities registered
    pub unique_cities: usize,
}

/// The city with the most associated schools
#[derive(Debug, Clone, Serialize)]
pub struct TopCity {
    pub city: String,
    pub count: u64,
}

/// Ordered collection of school records with their reference registries
///
/// Insertion order matches input file order; schools are never deduplicated
/// at this level. The registries and tallies are owned here and live as
/// long as the dataset.
#[derive(Debug, Default)]
pub struct SchoolDataset {
    schools: Vec<School>,
    agencies: AgencyRegistry,
    cities: CityRegistry,
    tallies: ClassificationTallies,
}

impl SchoolDataset {
    /// Create a new empty dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// All school records in input order
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Number of school records
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// Check if the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// Agency registry populated during ingest
    pub fn agencies(&self) -> &AgencyRegistry {
        &self.agencies
    }

    /// City registry populated during ingest
    pub fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    /// Classification tallies populated during ingest
    pub fn tallies(&self) -> &ClassificationTallies {
        &self.tallies
    }

    /// Load school records from a CSV file
    ///
    /// Rows with a field count other than 11 are skipped, as are rows that
    /// fail to decode or violate an identity constraint. Skips are logged,
    /// never fatal.
    pub fn load_csv(&mut self, path: &Path, has_header: bool, show_progress: bool) -> Result<LoadStats> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        info!("Processing {}...", path.display());
        let started = Instant::now();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(has_header)
            .flexible(true)
            .from_path(path)
            .map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    "Failed to open CSV reader",
                    Some(e),
                )
            })?;

        let progress = if show_progress {
            let bar = ProgressBar::new_spinner();
            bar.set_style(
                ProgressStyle::with_template("{spinner} Read count: {pos}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            bar
        } else {
            ProgressBar::hidden()
        };

        let mut stats = LoadStats::default();

        for result in reader.records() {
            stats.rows_read += 1;
            if stats.rows_read % PROGRESS_UPDATE_INTERVAL == 0 {
                progress.set_position(stats.rows_read);
            }

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!("Line read error: {}", e);
                    stats.rows_skipped += 1;
                    continue;
                }
            };

            match self.ingest_record(&record) {
                Ok(true) => stats.records_created += 1,
                Ok(false) => {
                    debug!(
                        "Skipping row {}: expected {} fields, found {}",
                        stats.rows_read,
                        RECORD_FIELD_COUNT,
                        record.len()
                    );
                    stats.rows_skipped += 1;
                }
                Err(e) => {
                    warn!("Invalid value found: {}", e);
                    stats.rows_skipped += 1;
                }
            }
        }

        progress.finish_and_clear();
        stats.elapsed = started.elapsed();

        info!(
            "Loaded {} records from {} rows ({} skipped) in {:.2?}",
            stats.records_created, stats.rows_read, stats.rows_skipped, stats.elapsed
        );

        Ok(stats)
    }

    /// Assemble one school record from a parsed CSV row
    ///
    /// Returns `Ok(false)` when the row has the wrong field count, and
    /// `Err` when an identity constraint fails; classification and
    /// coordinate conversion failures are recovered inside.
    pub fn ingest_record(&mut self, record: &StringRecord) -> Result<bool> {
        if record.len() != RECORD_FIELD_COUNT {
            return Ok(false);
        }

        let field = |index: usize| record.get(index).unwrap_or("").trim();

        let agency = self
            .agencies
            .get_or_create(field(fields::AGENCY_ID), field(fields::AGENCY_NAME));
        let city = self
            .cities
            .get_or_create(field(fields::CITY), field(fields::STATE))?;

        let locale = LocaleCode::resolve(field(fields::LOCALE_CODE));
        self.tallies.record_locale(locale);

        let urban_locale = UrbanLocale::resolve(field(fields::URBAN_CODE));
        self.tallies.record_urban(urban_locale);

        let status = SchoolStatus::resolve(field(fields::STATUS_CODE));
        self.tallies.record_status(status);

        self.schools.push(School::new(
            field(fields::SCHOOL_ID),
            field(fields::SCHOOL_NAME),
            agency,
            city,
            Coordinate::parse(field(fields::LATITUDE)),
            Coordinate::parse(field(fields::LONGITUDE)),
            locale,
            urban_locale,
            status,
        ));

        Ok(true)
    }

    /// Count occurrences of a derived key across all schools
    ///
    /// Schools for which the key function yields `None` are skipped.
    pub fn occurrence_count<F>(&self, key_fn: F) -> BTreeMap<String, u64>
    where
        F: Fn(&School) -> Option<String>,
    {
        let mut results = BTreeMap::new();
        for school in &self.schools {
            if let Some(key) = key_fn(school) {
                *results.entry(key).or_insert(0) += 1;
            }
        }
        results
    }

    /// Schools per state, derived from the records themselves
    pub fn state_occurrence_count(&self) -> BTreeMap<String, u64> {
        self.occurrence_count(|school| Some(school.city.state.clone()))
    }

    /// Schools per city name, derived from the records themselves
    pub fn city_occurrence_count(&self) -> BTreeMap<String, u64> {
        self.occurrence_count(|school| Some(school.city.name.clone()))
    }

    /// Schools per resolved metro-centric locale label
    pub fn locale_occurrence_count(&self) -> BTreeMap<String, u64> {
        self.occurrence_count(|school| school.locale.map(|l| l.name().to_string()))
    }

    /// Build the aggregate summary exposed to callers
    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            total_schools: self.schools.len(),
            schools_by_state: self
                .cities
                .counts_for(categories::STATE)
                .into_iter()
                .collect(),
            schools_by_locale: self
                .tallies
                .counts_for(categories::LOCALE)
                .into_iter()
                .collect(),
            top_city: self
                .cities
                .top_city()
                .map(|(city, count)| TopCity { city, count }),
            unique_cities: self.cities.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn record(fields: Vec<&str>) -> StringRecord {
        StringRecord::from(fields)
    }

    fn springfield_row(sid: &str, locale: &str) -> StringRecord {
        record(vec![
            sid,
            "A1",
            "Springfield District",
            "Lincoln Elementary",
            "Springfield",
            "IL",
            "39.78",
            "-89.65",
            locale,
            "12",
            "1",
        ])
    }

    #[test]
    fn test_ingest_shares_reference_entities() {
        let mut dataset = SchoolDataset::new();
        assert!(dataset.ingest_record(&springfield_row("1", "1")).unwrap());
        assert!(dataset.ingest_record(&springfield_row("2", "3")).unwrap());

        let schools = dataset.schools();
        assert_eq!(schools.len(), 2);
        assert!(Rc::ptr_eq(&schools[0].agency, &schools[1].agency));
        assert!(Rc::ptr_eq(&schools[0].city, &schools[1].city));

        // Request volume, not distinct entities
        assert_eq!(dataset.cities().city_counts().get("Springfield"), Some(&2));
        assert_eq!(dataset.cities().len(), 1);
        assert_eq!(dataset.agencies().len(), 1);

        // One locale tally entry per resolved label
        let locale_counts = dataset.tallies().counts_for("locale");
        assert_eq!(locale_counts.get("LARGE_CITY"), Some(&1));
        assert_eq!(locale_counts.get("URBAN_FRINGE_LARGE_CITY"), Some(&1));
    }

    #[test]
    fn test_ingest_rejects_wrong_field_count() {
        let mut dataset = SchoolDataset::new();
        let short = record(vec!["1", "A1", "District", "School", "City", "IL"]);

        assert!(!dataset.ingest_record(&short).unwrap());
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_ingest_propagates_invalid_identity() {
        let mut dataset = SchoolDataset::new();
        let bad_state = record(vec![
            "1",
            "A1",
            "District",
            "School",
            "Springfield",
            "Illinois",
            "39.78",
            "-89.65",
            "1",
            "12",
            "1",
        ]);

        assert!(dataset.ingest_record(&bad_state).is_err());
        assert!(dataset.is_empty());
        assert!(dataset.cities().is_empty());
    }

    #[test]
    fn test_ingest_recovers_conversion_failures() {
        let mut dataset = SchoolDataset::new();
        let row = record(vec![
            "1",
            "A1",
            "District",
            "School",
            "Springfield",
            "IL",
            "not-a-lat",
            "-89.65",
            "N",
            "",
            "99",
        ]);

        assert!(dataset.ingest_record(&row).unwrap());
        let school = &dataset.schools()[0];
        assert_eq!(school.latitude, Coordinate::Raw("not-a-lat".to_string()));
        assert_eq!(school.longitude.value(), Some(-89.65));
        assert_eq!(school.locale, None);
        assert_eq!(school.urban_locale, None);
        assert_eq!(school.status, None);
        assert!(dataset.tallies().counts_for("locale").is_empty());
    }

    #[test]
    fn test_occurrence_counts() {
        let mut dataset = SchoolDataset::new();
        dataset.ingest_record(&springfield_row("1", "1")).unwrap();
        dataset.ingest_record(&springfield_row("2", "1")).unwrap();
        dataset.ingest_record(&springfield_row("3", "bad")).unwrap();

        assert_eq!(dataset.state_occurrence_count().get("IL"), Some(&3));
        assert_eq!(
            dataset.city_occurrence_count().get("Springfield"),
            Some(&3)
        );
        // Unresolved locale rows are skipped by the keying closure
        assert_eq!(dataset.locale_occurrence_count().get("LARGE_CITY"), Some(&2));
    }

    #[test]
    fn test_summary() {
        let mut dataset = SchoolDataset::new();
        dataset.ingest_record(&springfield_row("1", "1")).unwrap();
        dataset.ingest_record(&springfield_row("2", "2")).unwrap();

        let summary = dataset.summary();
        assert_eq!(summary.total_schools, 2);
        assert_eq!(summary.schools_by_state.get("IL"), Some(&2));
        assert_eq!(summary.schools_by_locale.get("LARGE_CITY"), Some(&1));
        assert_eq!(summary.schools_by_locale.get("MIDSIZE_CITY"), Some(&1));
        assert_eq!(summary.unique_cities, 1);

        let top = summary.top_city.unwrap();
        assert_eq!(top.city, "Springfield");
        assert_eq!(top.count, 2);
    }

    #[test]
    fn test_load_csv_missing_file() {
        let mut dataset = SchoolDataset::new();
        let result = dataset.load_csv(Path::new("/nonexistent/schools.csv"), true, false);
        assert!(matches!(result, Err(Error::FileNotFound { .. })));
    }
}
