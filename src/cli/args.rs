//! Command-line argument definitions for the school explorer
//!
//! The complete CLI interface using the clap derive API: a `counts`
//! subcommand for aggregate reports and a `search` subcommand for the
//! interactive phrase search loop.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the school data explorer
///
/// Loads a flat CSV file of US public school records and exposes
/// aggregate classification counts and interactive phrase search over
/// the loaded dataset.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "school-explorer",
    version,
    about = "Explore US public school directory data from a CSV file",
    long_about = "Loads an 11-field CSV of school records into an in-memory dataset with \
                  deduplicated agencies and cities, then answers aggregate count queries \
                  and free-text phrase searches over it. All analysis is ad-hoc and \
                  in-memory; nothing is written back to disk."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the school explorer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Report classification and registry counts for the loaded dataset
    Counts(CountsArgs),
    /// Search school records by free-text phrase
    Search(SearchArgs),
}

/// Arguments shared by both subcommands for loading the dataset
#[derive(Debug, Clone, Parser)]
pub struct DataArgs {
    /// Input path to the school records CSV file
    ///
    /// Each data row carries 11 comma-separated fields. If not specified,
    /// defaults to ./school_data.csv
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input path to the school records CSV file"
    )]
    pub input_path: Option<PathBuf>,

    /// Treat the first row as data instead of a header
    ///
    /// By default the first row is assumed to be a header and skipped.
    #[arg(long = "no-header", help = "Treat the first row as data, not a header")]
    pub no_header: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the counts command (aggregate reports)
#[derive(Debug, Clone, Parser)]
pub struct CountsArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Report a single category instead of all of them
    ///
    /// Classification categories: locale, urban, status.
    /// Registry categories: city, state.
    #[arg(
        short = 'c',
        long = "category",
        value_name = "NAME",
        help = "Report a single count category (locale, urban, status, city, state)"
    )]
    pub category: Option<String>,

    /// Output format for the counts report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the counts report"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the search command (interactive phrase search)
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Run a single query and exit instead of entering the interactive loop
    #[arg(
        long = "query",
        value_name = "PHRASE",
        help = "Run one query and exit instead of the interactive loop"
    )]
    pub query: Option<String>,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl DataArgs {
    /// Validate the dataset loading arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input path exists (only if explicitly provided)
        if let Some(input_path) = &self.input_path {
            if !input_path.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input_path.display()
                )));
            }

            if !input_path.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input_path.display()
                )));
            }
        }

        Ok(())
    }

    /// The input path to load, falling back to the default data file
    pub fn input_path(&self) -> PathBuf {
        self.input_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress output (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl Default for DataArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            no_header: false,
            verbose: 0,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_data_args_validation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "header").unwrap();

        let args = DataArgs {
            input_path: Some(file.path().to_path_buf()),
            ..DataArgs::default()
        };
        assert!(args.validate().is_ok());

        // Unspecified path defers existence checking to load time
        let args = DataArgs::default();
        assert!(args.validate().is_ok());

        // Nonexistent explicit path
        let args = DataArgs {
            input_path: Some(PathBuf::from("/nonexistent/schools.csv")),
            ..DataArgs::default()
        };
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_input_path_default() {
        let args = DataArgs::default();
        assert_eq!(args.input_path(), PathBuf::from(DEFAULT_DATA_FILE));

        let args = DataArgs {
            input_path: Some(PathBuf::from("custom.csv")),
            ..DataArgs::default()
        };
        assert_eq!(args.input_path(), PathBuf::from("custom.csv"));
    }

    #[test]
    fn test_log_level() {
        let mut args = DataArgs::default();
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = DataArgs::default();
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(["school-explorer", "counts", "--format", "json"]);
        match args.get_command() {
            Commands::Counts(counts) => {
                assert!(matches!(counts.output_format, OutputFormat::Json));
                assert!(counts.category.is_none());
            }
            _ => panic!("expected counts subcommand"),
        }

        let args = Args::parse_from([
            "school-explorer",
            "search",
            "-i",
            "data.csv",
            "--query",
            "springfield",
        ]);
        match args.get_command() {
            Commands::Search(search) => {
                assert_eq!(search.data.input_path, Some(PathBuf::from("data.csv")));
                assert_eq!(search.query.as_deref(), Some("springfield"));
            }
            _ => panic!("expected search subcommand"),
        }
    }
}
