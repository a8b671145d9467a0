//! Configuration management and validation.
//!
//! Provides the runtime configuration assembled from CLI arguments:
//! input file location and header handling.

use crate::constants::DEFAULT_DATA_FILE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Runtime configuration for dataset loading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the input CSV file
    pub input_path: PathBuf,

    /// Whether the input file starts with a header row to skip
    pub has_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_DATA_FILE),
            has_header: true,
        }
    }
}

impl Config {
    /// Build a configuration from CLI-provided values, falling back to defaults
    pub fn from_cli(input_path: Option<PathBuf>, no_header: bool) -> Self {
        Self {
            input_path: input_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            has_header: !no_header,
        }
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input_path.exists() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if !self.input_path.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input_path.display()
            )));
        }

        Ok(())
    }
}
