//! Classification code enumerations
//!
//! School records carry three independent integer-coded classifications:
//! metro-centric locale, urban-centric locale, and operational status.
//! Each enumeration offers a total, non-throwing lookup: unknown codes and
//! values that fail numeric coercion resolve to `None` rather than an error,
//! because a record may legitimately carry no classification.

use crate::{Error, Result};
use std::fmt;

/// Parse a raw field into an integer classification code
///
/// Coercion failures are recovered locally: the caller receives `None`
/// exactly as it would for an unknown-but-numeric code.
fn coerce_code(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

// =============================================================================
// Metro-centric Locale
// =============================================================================

/// Metro-centric locale classification (codes 1-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    LargeCity = 1,
    MidsizeCity = 2,
    UrbanFringeLargeCity = 3,
    UrbanFringeMidsizeCity = 4,
    LargeTown = 5,
    SmallTown = 6,
    RuralOutsideCbsa = 7,
    RuralInsideCbsa = 8,
}

impl LocaleCode {
    /// Look up a classification by integer code, yielding `None` for
    /// unknown codes
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::LargeCity),
            2 => Some(Self::MidsizeCity),
            3 => Some(Self::UrbanFringeLargeCity),
            4 => Some(Self::UrbanFringeMidsizeCity),
            5 => Some(Self::LargeTown),
            6 => Some(Self::SmallTown),
            7 => Some(Self::RuralOutsideCbsa),
            8 => Some(Self::RuralInsideCbsa),
            _ => None,
        }
    }

    /// Resolve a raw field value: numeric coercion followed by code lookup
    pub fn resolve(raw: &str) -> Option<Self> {
        coerce_code(raw).and_then(Self::from_code)
    }

    /// Stable symbolic label used as the tally key
    pub fn name(self) -> &'static str {
        match self {
            Self::LargeCity => "LARGE_CITY",
            Self::MidsizeCity => "MIDSIZE_CITY",
            Self::UrbanFringeLargeCity => "URBAN_FRINGE_LARGE_CITY",
            Self::UrbanFringeMidsizeCity => "URBAN_FRINGE_MIDSIZE_CITY",
            Self::LargeTown => "LARGE_TOWN",
            Self::SmallTown => "SMALL_TOWN",
            Self::RuralOutsideCbsa => "RURAL_OUTSIDE_CBSA",
            Self::RuralInsideCbsa => "RURAL_INSIDE_CBSA",
        }
    }

    /// Human-readable description for reports
    pub fn description(self) -> &'static str {
        match self {
            Self::LargeCity => "Large city",
            Self::MidsizeCity => "Midsize city",
            Self::UrbanFringeLargeCity => "Urban fringe of a large city",
            Self::UrbanFringeMidsizeCity => "Urban fringe of a midsize city",
            Self::LargeTown => "Large town",
            Self::SmallTown => "Small town",
            Self::RuralOutsideCbsa => "Rural, outside CBSA",
            Self::RuralInsideCbsa => "Rural, inside CBSA",
        }
    }

    /// Integer code for this classification
    pub fn code(self) -> i64 {
        self as i64
    }

    /// All defined locale classifications
    pub fn all_values() -> [LocaleCode; 8] {
        [
            Self::LargeCity,
            Self::MidsizeCity,
            Self::UrbanFringeLargeCity,
            Self::UrbanFringeMidsizeCity,
            Self::LargeTown,
            Self::SmallTown,
            Self::RuralOutsideCbsa,
            Self::RuralInsideCbsa,
        ]
    }
}

impl TryFrom<i64> for LocaleCode {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_code(value).ok_or_else(|| {
            Error::data_validation(format!("Unknown metro-centric locale code: {}", value))
        })
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Urban-centric Locale
// =============================================================================

/// Urban-centric locale classification (codes 11-43)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrbanLocale {
    CityLarge = 11,
    CityMidsize = 12,
    CitySmall = 13,
    SuburbLarge = 21,
    SuburbMidsize = 22,
    SuburbSmall = 23,
    TownFringe = 31,
    TownDistant = 32,
    TownRemote = 33,
    RuralFringe = 41,
    RuralDistant = 42,
    RuralRemote = 43,
}

impl UrbanLocale {
    /// Look up a classification by integer code, yielding `None` for
    /// unknown codes
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            11 => Some(Self::CityLarge),
            12 => Some(Self::CityMidsize),
            13 => Some(Self::CitySmall),
            21 => Some(Self::SuburbLarge),
            22 => Some(Self::SuburbMidsize),
            23 => Some(Self::SuburbSmall),
            31 => Some(Self::TownFringe),
            32 => Some(Self::TownDistant),
            33 => Some(Self::TownRemote),
            41 => Some(Self::RuralFringe),
            42 => Some(Self::RuralDistant),
            43 => Some(Self::RuralRemote),
            _ => None,
        }
    }

    /// Resolve a raw field value: numeric coercion followed by code lookup
    pub fn resolve(raw: &str) -> Option<Self> {
        coerce_code(raw).and_then(Self::from_code)
    }

    /// Stable symbolic label used as the tally key
    pub fn name(self) -> &'static str {
        match self {
            Self::CityLarge => "CITY_LARGE",
            Self::CityMidsize => "CITY_MIDSIZE",
            Self::CitySmall => "CITY_SMALL",
            Self::SuburbLarge => "SUBURB_LARGE",
            Self::SuburbMidsize => "SUBURB_MIDSIZE",
            Self::SuburbSmall => "SUBURB_SMALL",
            Self::TownFringe => "TOWN_FRINGE",
            Self::TownDistant => "TOWN_DISTANT",
            Self::TownRemote => "TOWN_REMOTE",
            Self::RuralFringe => "RURAL_FRINGE",
            Self::RuralDistant => "RURAL_DISTANT",
            Self::RuralRemote => "RURAL_REMOTE",
        }
    }

    /// Human-readable description for reports
    pub fn description(self) -> &'static str {
        match self {
            Self::CityLarge => "City, large",
            Self::CityMidsize => "City, midsize",
            Self::CitySmall => "City, small",
            Self::SuburbLarge => "Suburb, large",
            Self::SuburbMidsize => "Suburb, midsize",
            Self::SuburbSmall => "Suburb, small",
            Self::TownFringe => "Town, fringe",
            Self::TownDistant => "Town, distant",
            Self::TownRemote => "Town, remote",
            Self::RuralFringe => "Rural, fringe",
            Self::RuralDistant => "Rural, distant",
            Self::RuralRemote => "Rural, remote",
        }
    }

    /// Integer code for this classification
    pub fn code(self) -> i64 {
        self as i64
    }

    /// All defined urban-centric locale classifications
    pub fn all_values() -> [UrbanLocale; 12] {
        [
            Self::CityLarge,
            Self::CityMidsize,
            Self::CitySmall,
            Self::SuburbLarge,
            Self::SuburbMidsize,
            Self::SuburbSmall,
            Self::TownFringe,
            Self::TownDistant,
            Self::TownRemote,
            Self::RuralFringe,
            Self::RuralDistant,
            Self::RuralRemote,
        ]
    }
}

impl TryFrom<i64> for UrbanLocale {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_code(value).ok_or_else(|| {
            Error::data_validation(format!("Unknown urban-centric locale code: {}", value))
        })
    }
}

impl fmt::Display for UrbanLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Operational Status
// =============================================================================

/// School operational status classification (codes 1-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchoolStatus {
    Operational = 1,
    Closed = 2,
    Opened = 3,
    OperationalNewlyListed = 4,
    NewAgency = 5,
    TempClosed = 6,
    WillBeOperational = 7,
    Reopened = 8,
}

impl SchoolStatus {
    /// Look up a classification by integer code, yielding `None` for
    /// unknown codes
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Operational),
            2 => Some(Self::Closed),
            3 => Some(Self::Opened),
            4 => Some(Self::OperationalNewlyListed),
            5 => Some(Self::NewAgency),
            6 => Some(Self::TempClosed),
            7 => Some(Self::WillBeOperational),
            8 => Some(Self::Reopened),
            _ => None,
        }
    }

    /// Resolve a raw field value: numeric coercion followed by code lookup
    pub fn resolve(raw: &str) -> Option<Self> {
        coerce_code(raw).and_then(Self::from_code)
    }

    /// Stable symbolic label used as the tally key
    pub fn name(self) -> &'static str {
        match self {
            Self::Operational => "OPERATIONAL",
            Self::Closed => "CLOSED",
            Self::Opened => "OPENED",
            Self::OperationalNewlyListed => "OPERATIONAL_NEWLY_LISTED",
            Self::NewAgency => "NEW_AGENCY",
            Self::TempClosed => "TEMP_CLOSED",
            Self::WillBeOperational => "WILL_BE_OPERATIONAL",
            Self::Reopened => "REOPENED",
        }
    }

    /// Human-readable description for reports
    pub fn description(self) -> &'static str {
        match self {
            Self::Operational => "Currently operational",
            Self::Closed => "Closed since the last report",
            Self::Opened => "Opened since the last report",
            Self::OperationalNewlyListed => "Operational, not previously listed",
            Self::NewAgency => "Transferred to a new agency",
            Self::TempClosed => "Temporarily closed",
            Self::WillBeOperational => "Expected to become operational",
            Self::Reopened => "Reopened after a previous closure",
        }
    }

    /// Integer code for this classification
    pub fn code(self) -> i64 {
        self as i64
    }

    /// All defined status classifications
    pub fn all_values() -> [SchoolStatus; 8] {
        [
            Self::Operational,
            Self::Closed,
            Self::Opened,
            Self::OperationalNewlyListed,
            Self::NewAgency,
            Self::TempClosed,
            Self::WillBeOperational,
            Self::Reopened,
        ]
    }
}

impl TryFrom<i64> for SchoolStatus {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::from_code(value)
            .ok_or_else(|| Error::data_validation(format!("Unknown status code: {}", value)))
    }
}

impl fmt::Display for SchoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
