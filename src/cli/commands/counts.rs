//! Counts command implementation
//!
//! Loads the dataset and reports aggregate counts: the headline summary
//! plus per-category classification and registry tallies, in human or
//! JSON form.

use crate::app::services::dataset::DatasetSummary;
use crate::cli::args::{CountsArgs, OutputFormat};
use crate::cli::commands::shared;
use crate::constants::{categories, is_known_category};
use crate::{Error, Result, SchoolDataset};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;

/// Full counts report in a serializable form
///
/// Maps are ordered so human and JSON output are both deterministic.
#[derive(Debug, Serialize)]
pub struct CountsReport {
    pub summary: DatasetSummary,
    pub classifications: BTreeMap<String, BTreeMap<String, u64>>,
    pub registry: BTreeMap<String, BTreeMap<String, u64>>,
}

impl CountsReport {
    /// Assemble the report from a loaded dataset
    pub fn from_dataset(dataset: &SchoolDataset) -> Self {
        let classifications = dataset
            .tallies()
            .all_counts()
            .into_iter()
            .map(|(name, counts)| (name.to_string(), counts.into_iter().collect()))
            .collect();

        let registry = dataset
            .cities()
            .all_counts()
            .into_iter()
            .map(|(name, counts)| (name.to_string(), counts.into_iter().collect()))
            .collect();

        Self {
            summary: dataset.summary(),
            classifications,
            registry,
        }
    }
}

/// Execute the counts command
pub fn run_counts(args: CountsArgs) -> Result<()> {
    args.data.validate()?;
    shared::setup_logging(&args.data)?;

    if let Some(category) = &args.category {
        if !is_known_category(category) {
            return Err(Error::configuration(format!(
                "Unknown count category '{}'. Options are: {} {}",
                category,
                categories::CLASSIFICATION.join(" "),
                categories::CITY_REGISTRY.join(" ")
            )));
        }
    }

    let (dataset, _stats) = shared::load_dataset(&args.data)?;

    match (&args.category, &args.output_format) {
        (Some(category), OutputFormat::Human) => print_category(&dataset, category),
        (Some(category), OutputFormat::Json) => {
            let counts: BTreeMap<String, u64> =
                category_counts(&dataset, category).into_iter().collect();
            println!("{}", serde_json::to_string_pretty(&counts)?);
        }
        (None, OutputFormat::Human) => print_report(&CountsReport::from_dataset(&dataset)),
        (None, OutputFormat::Json) => {
            let report = CountsReport::from_dataset(&dataset);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

/// Counts for one category, whichever side of the model it lives on
fn category_counts(
    dataset: &SchoolDataset,
    category: &str,
) -> std::collections::HashMap<String, u64> {
    if categories::CITY_REGISTRY.contains(&category) {
        dataset.cities().counts_for(category)
    } else {
        dataset.tallies().counts_for(category)
    }
}

fn print_category(dataset: &SchoolDataset, category: &str) {
    println!("{}", format!("Counts for `{}`:", category).bold());
    let counts: BTreeMap<String, u64> = category_counts(dataset, category).into_iter().collect();
    for (label, count) in counts {
        println!("{}: {}", label, count);
    }
}

fn print_report(report: &CountsReport) {
    println!("{}: {}", "Total Schools".bold(), report.summary.total_schools);

    println!("{}", "Schools by State:".bold());
    for (state, count) in &report.summary.schools_by_state {
        println!("{}: {}", state, count);
    }
    println!("...");

    println!("{}", "Schools by Metro-centric Locale:".bold());
    for (label, count) in &report.summary.schools_by_locale {
        println!("{}: {}", label, count);
    }
    println!("...");

    if let Some(top) = &report.summary.top_city {
        println!(
            "{}: {} ({} schools)",
            "City with the most schools".bold(),
            top.city.cyan(),
            top.count
        );
    }

    println!(
        "{}: {}",
        "Unique cities with at least one school".bold(),
        report.summary.unique_cities
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use csv::StringRecord;

    fn test_dataset() -> SchoolDataset {
        let mut dataset = SchoolDataset::new();
        for (sid, city, state, locale) in [
            ("1", "Springfield", "IL", "1"),
            ("2", "Springfield", "IL", "2"),
            ("3", "Chicago", "IL", "1"),
        ] {
            let record = StringRecord::from(vec![
                sid, "A1", "District", "School", city, state, "39.78", "-89.65", locale, "12", "1",
            ]);
            dataset.ingest_record(&record).unwrap();
        }
        dataset
    }

    #[test]
    fn test_report_from_dataset() {
        let report = CountsReport::from_dataset(&test_dataset());

        assert_eq!(report.summary.total_schools, 3);
        assert_eq!(report.summary.unique_cities, 2);
        assert_eq!(report.classifications["locale"]["LARGE_CITY"], 2);
        assert_eq!(report.registry["state"]["IL"], 3);
        assert_eq!(report.registry["city"]["Springfield"], 2);
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = CountsReport::from_dataset(&test_dataset());
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"total_schools\": 3"));
        assert!(json.contains("\"Springfield\""));
    }

    #[test]
    fn test_category_counts_routing() {
        let dataset = test_dataset();
        assert_eq!(category_counts(&dataset, "city")["Springfield"], 2);
        assert_eq!(category_counts(&dataset, "status")["OPERATIONAL"], 3);
    }
}
