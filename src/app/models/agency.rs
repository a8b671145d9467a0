//! Operating agency reference entity
//!
//! An agency (school district or other operating authority) is identified by
//! the pair of its opaque identifier and name. Agencies never mutate after
//! creation; deduplication is handled by the agency registry.

use std::fmt;

/// An operating agency referenced by school records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agency {
    /// Opaque agency identifier as it appears in the input file
    pub agency_id: String,

    /// Agency display name
    pub agency_name: String,
}

impl Agency {
    /// Create a new agency
    ///
    /// Both identity fields are opaque strings; no format constraints apply.
    pub fn new(agency_id: impl Into<String>, agency_name: impl Into<String>) -> Self {
        Self {
            agency_id: agency_id.into(),
            agency_name: agency_name.into(),
        }
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.agency_id, self.agency_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agency_creation() {
        let agency = Agency::new("A100", "Springfield District");
        assert_eq!(agency.agency_id, "A100");
        assert_eq!(agency.agency_name, "Springfield District");
    }

    #[test]
    fn test_agency_display() {
        let agency = Agency::new("A100", "Springfield District");
        assert_eq!(format!("{}", agency), "A100: Springfield District");
    }

    #[test]
    fn test_agency_equality_is_field_wise() {
        let a = Agency::new("A100", "Springfield District");
        let b = Agency::new("A100", "Springfield District");
        let c = Agency::new("A100", "Shelbyville District");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
