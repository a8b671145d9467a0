//! Shared components for CLI commands
//!
//! Logging setup and the dataset loading step common to both subcommands.

use crate::app::services::dataset::LoadStats;
use crate::cli::args::DataArgs;
use crate::config::Config;
use crate::{Result, SchoolDataset};
use tracing::{debug, info};

/// Set up structured logging from the shared data arguments
pub fn setup_logging(args: &DataArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("school_explorer={}", log_level)));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve configuration and load the dataset from the input CSV
pub fn load_dataset(args: &DataArgs) -> Result<(SchoolDataset, LoadStats)> {
    let config = Config::from_cli(args.input_path.clone(), args.no_header);
    config.validate()?;

    let mut dataset = SchoolDataset::new();
    let stats = dataset.load_csv(&config.input_path, config.has_header, args.show_progress())?;

    info!(
        "Dataset ready: {} schools, {} agencies, {} cities",
        dataset.len(),
        dataset.agencies().len(),
        dataset.cities().len()
    );

    Ok((dataset, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_dataset_with_header() {
        let file = write_csv(&[
            "school_id,agency_id,agency_name,school_name,city,state,lat,long,locale,urban,status",
            "1,A1,Springfield District,Lincoln Elementary,Springfield,IL,39.78,-89.65,1,12,1",
        ]);

        let args = DataArgs {
            input_path: Some(file.path().to_path_buf()),
            ..DataArgs::default()
        };
        let (dataset, stats) = load_dataset(&args).unwrap();

        assert_eq!(dataset.len(), 1);
        assert_eq!(stats.rows_read, 1);
        assert_eq!(stats.records_created, 1);
    }

    #[test]
    fn test_load_dataset_missing_file() {
        let args = DataArgs {
            input_path: None,
            ..DataArgs::default()
        };
        // Default data file is absent in the test environment
        assert!(load_dataset(&args).is_err());
    }
}
