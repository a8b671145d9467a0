//! School record structure
//!
//! A school is one row of the input dataset. Schools are not deduplicated:
//! the school_id is assumed unique per input line. Each school holds shared
//! references to its deduplicated agency and city, best-effort parsed
//! coordinates, and three independently resolved classification codes.

use crate::app::models::classification::{LocaleCode, SchoolStatus, UrbanLocale};
use crate::app::models::{Agency, City};
use std::fmt;
use std::rc::Rc;

/// A geographic coordinate parsed on a best-effort basis
///
/// Conversion failures are recovered locally: the original raw value is
/// retained unconverted rather than failing the whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum Coordinate {
    /// Successfully parsed numeric value
    Parsed(f64),

    /// Raw field value kept verbatim after a failed conversion
    Raw(String),
}

impl Coordinate {
    /// Parse a raw coordinate field, keeping the original value on failure
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(value) => Self::Parsed(value),
            Err(_) => Self::Raw(raw.to_string()),
        }
    }

    /// Numeric value, if the conversion succeeded
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Parsed(value) => Some(*value),
            Self::Raw(_) => None,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(value) => write!(f, "{}", value),
            Self::Raw(raw) => write!(f, "{}", raw),
        }
    }
}

/// One school record from the input dataset
#[derive(Debug, Clone)]
pub struct School {
    /// School identifier, assumed unique per input line
    pub school_id: String,

    /// School display name
    pub name: String,

    /// Owning agency (shared with other schools of the same agency)
    pub agency: Rc<Agency>,

    /// City the school is located in (shared)
    pub city: Rc<City>,

    /// Latitude, best-effort parsed
    pub latitude: Coordinate,

    /// Longitude, best-effort parsed
    pub longitude: Coordinate,

    /// Metro-centric locale classification, if the code resolved
    pub locale: Option<LocaleCode>,

    /// Urban-centric locale classification, if the code resolved
    pub urban_locale: Option<UrbanLocale>,

    /// Operational status classification, if the code resolved
    pub status: Option<SchoolStatus>,
}

impl School {
    /// Create a new school record
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        school_id: impl Into<String>,
        name: impl Into<String>,
        agency: Rc<Agency>,
        city: Rc<City>,
        latitude: Coordinate,
        longitude: Coordinate,
        locale: Option<LocaleCode>,
        urban_locale: Option<UrbanLocale>,
        status: Option<SchoolStatus>,
    ) -> Self {
        Self {
            school_id: school_id.into(),
            name: name.into(),
            agency,
            city,
            latitude,
            longitude,
            locale,
            urban_locale,
            status,
        }
    }

    /// Lowercase searchable text for this record: name, city, and state
    /// joined by single spaces
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.name.to_lowercase(),
            self.city.name.to_lowercase(),
            self.city.state.to_lowercase()
        )
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} located in {}, {}",
            self.school_id, self.name, self.city.name, self.city.state
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_school() -> School {
        School::new(
            "S001",
            "Lincoln Elementary",
            Rc::new(Agency::new("A100", "Springfield District")),
            Rc::new(City::new("Springfield", "IL").unwrap()),
            Coordinate::parse("39.7817"),
            Coordinate::parse("-89.6501"),
            LocaleCode::from_code(2),
            UrbanLocale::from_code(12),
            SchoolStatus::from_code(1),
        )
    }

    #[test]
    fn test_coordinate_parse_numeric() {
        assert_eq!(Coordinate::parse("39.7817"), Coordinate::Parsed(39.7817));
        assert_eq!(Coordinate::parse(" -89.65 "), Coordinate::Parsed(-89.65));
    }

    #[test]
    fn test_coordinate_parse_failure_keeps_raw() {
        let coord = Coordinate::parse("not-a-number");
        assert_eq!(coord, Coordinate::Raw("not-a-number".to_string()));
        assert_eq!(coord.value(), None);
        assert_eq!(format!("{}", coord), "not-a-number");
    }

    #[test]
    fn test_school_search_text() {
        let school = create_test_school();
        assert_eq!(school.search_text(), "lincoln elementary springfield il");
    }

    #[test]
    fn test_school_display() {
        let school = create_test_school();
        assert_eq!(
            format!("{}", school),
            "S001, Lincoln Elementary located in Springfield, IL"
        );
    }

    #[test]
    fn test_school_classification_fields() {
        let school = create_test_school();
        assert_eq!(school.locale, Some(LocaleCode::MidsizeCity));
        assert_eq!(school.urban_locale, Some(UrbanLocale::CityMidsize));
        assert_eq!(school.status, Some(SchoolStatus::Operational));
    }
}
