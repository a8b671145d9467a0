//! Application constants for school-explorer
//!
//! This module contains record layout positions, count category names,
//! and default values used throughout the application.

// =============================================================================
// Record Layout
// =============================================================================

/// Number of fields a data row must contain to be ingested
pub const RECORD_FIELD_COUNT: usize = 11;

/// Required length of a state abbreviation (e.g. "IL", "CA")
pub const STATE_ABBREVIATION_LEN: usize = 2;

/// Positional field indices within an 11-field school record
pub mod fields {
    pub const SCHOOL_ID: usize = 0;
    pub const AGENCY_ID: usize = 1;
    pub const AGENCY_NAME: usize = 2;
    pub const SCHOOL_NAME: usize = 3;
    pub const CITY: usize = 4;
    pub const STATE: usize = 5;
    pub const LATITUDE: usize = 6;
    pub const LONGITUDE: usize = 7;
    pub const LOCALE_CODE: usize = 8;
    pub const URBAN_CODE: usize = 9;
    pub const STATUS_CODE: usize = 10;
}

// =============================================================================
// Count Categories
// =============================================================================

/// Category names accepted by the counts aggregation queries
pub mod categories {
    /// Metro-centric locale classification tallies
    pub const LOCALE: &str = "locale";

    /// Urban-centric locale classification tallies
    pub const URBAN: &str = "urban";

    /// Operational status classification tallies
    pub const STATUS: &str = "status";

    /// City lookup request counts
    pub const CITY: &str = "city";

    /// State lookup request counts
    pub const STATE: &str = "state";

    /// Categories backed by classification tallies
    pub const CLASSIFICATION: &[&str] = &[LOCALE, URBAN, STATUS];

    /// Categories backed by the city registry
    pub const CITY_REGISTRY: &[&str] = &[CITY, STATE];
}

// =============================================================================
// Search Configuration
// =============================================================================

/// Maximum number of results returned by a phrase search
pub const MAX_SEARCH_RESULTS: usize = 3;

/// Token that terminates the interactive search loop
pub const QUIT_TOKEN: &str = "q";

// =============================================================================
// Defaults and Reporting
// =============================================================================

/// Default input file name when no path is provided
pub const DEFAULT_DATA_FILE: &str = "school_data.csv";

/// Progress reporting update interval (number of rows read)
pub const PROGRESS_UPDATE_INTERVAL: u64 = 1000;

/// Check if a name refers to a known count category
pub fn is_known_category(name: &str) -> bool {
    categories::CLASSIFICATION.contains(&name) || categories::CITY_REGISTRY.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_positions_cover_record() {
        assert_eq!(fields::SCHOOL_ID, 0);
        assert_eq!(fields::STATUS_CODE, RECORD_FIELD_COUNT - 1);
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("locale"));
        assert!(is_known_category("urban"));
        assert!(is_known_category("status"));
        assert!(is_known_category("city"));
        assert!(is_known_category("state"));
        assert!(!is_known_category("county"));
        assert!(!is_known_category(""));
    }
}
