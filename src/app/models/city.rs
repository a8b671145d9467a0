//! City reference entity
//!
//! A city is identified by its name together with a 2-letter state
//! abbreviation. The state constraint is enforced at construction time:
//! a malformed abbreviation is an identity violation, never silently
//! coerced.

use crate::constants::STATE_ABBREVIATION_LEN;
use crate::{Error, Result};
use std::fmt;

/// A city referenced by school records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// City name as it appears in the input file
    pub name: String,

    /// 2-letter state abbreviation (e.g. "IL")
    pub state: String,
}

impl City {
    /// Create a new city with identity validation
    pub fn new(name: impl Into<String>, state: impl Into<String>) -> Result<Self> {
        let state = state.into();
        Self::validate_state(&state)?;
        Ok(Self {
            name: name.into(),
            state,
        })
    }

    /// Validate a state abbreviation against the 2-character identity rule
    pub fn validate_state(state: &str) -> Result<()> {
        if state.chars().count() != STATE_ABBREVIATION_LEN {
            return Err(Error::invalid_identity(format!(
                "State abbreviation must be {} letters long. Found: '{}'",
                STATE_ABBREVIATION_LEN, state
            )));
        }
        Ok(())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_creation_valid() {
        let city = City::new("Springfield", "IL").unwrap();
        assert_eq!(city.name, "Springfield");
        assert_eq!(city.state, "IL");
    }

    #[test]
    fn test_city_state_length_validation() {
        assert!(matches!(
            City::new("Springfield", "ILL"),
            Err(Error::InvalidIdentity { .. })
        ));
        assert!(matches!(
            City::new("Springfield", "I"),
            Err(Error::InvalidIdentity { .. })
        ));
        assert!(matches!(
            City::new("Springfield", ""),
            Err(Error::InvalidIdentity { .. })
        ));
    }

    #[test]
    fn test_city_display() {
        let city = City::new("Springfield", "IL").unwrap();
        assert_eq!(format!("{}", city), "Springfield, IL");
    }
}
