//! Entity registries for deduplicated reference entities
//!
//! A registry guarantees at most one instance per distinct identity within
//! its lifetime: `get_or_create` performs a linear scan over all registered
//! entities matching on every identity field, and either hands back the
//! existing shared instance or registers a new one.
//!
//! The city registry additionally tracks request volume: every
//! `get_or_create` call increments a per-city-name counter and a separate
//! per-state counter, hit or miss. These counters deliberately measure how
//! often a city was looked up, not how many distinct cities exist.

use crate::app::models::{Agency, City};
use crate::constants::categories;
use crate::Result;
use std::collections::HashMap;
use std::rc::Rc;
use tracing::warn;

/// A partial-field query matched against registered entities
///
/// Fields absent from the query always match, so a query may narrow on any
/// subset of an entity's identity fields.
pub trait RegistryQuery<E> {
    /// Whether the entity satisfies every field present in the query
    fn matches(&self, entity: &E) -> bool;
}

// =============================================================================
// Agency Registry
// =============================================================================

/// Query over agency identity fields
#[derive(Debug, Clone, Default)]
pub struct AgencyQuery {
    pub agency_id: Option<String>,
    pub agency_name: Option<String>,
}

impl RegistryQuery<Agency> for AgencyQuery {
    fn matches(&self, entity: &Agency) -> bool {
        self.agency_id
            .as_deref()
            .is_none_or(|id| entity.agency_id == id)
            && self
                .agency_name
                .as_deref()
                .is_none_or(|name| entity.agency_name == name)
    }
}

/// Lookup-or-create store for agencies, deduplicated by (id, name)
#[derive(Debug, Default)]
pub struct AgencyRegistry {
    entries: Vec<Rc<Agency>>,
}

impl AgencyRegistry {
    /// Create a new empty agency registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct agencies registered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry holds no agencies
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered agencies in creation order
    pub fn entries(&self) -> &[Rc<Agency>] {
        &self.entries
    }

    /// Find agencies matching every field present in the query
    pub fn search(&self, query: &AgencyQuery) -> Vec<Rc<Agency>> {
        self.entries
            .iter()
            .filter(|agency| query.matches(agency))
            .cloned()
            .collect()
    }

    /// Return the agency with the given identity, creating it on first sight
    pub fn get_or_create(&mut self, agency_id: &str, agency_name: &str) -> Rc<Agency> {
        let query = AgencyQuery {
            agency_id: Some(agency_id.to_string()),
            agency_name: Some(agency_name.to_string()),
        };

        if let Some(existing) = self.entries.iter().find(|agency| query.matches(agency)) {
            return Rc::clone(existing);
        }

        let agency = Rc::new(Agency::new(agency_id, agency_name));
        self.entries.push(Rc::clone(&agency));
        agency
    }
}

// =============================================================================
// City Registry
// =============================================================================

/// Query over city identity fields
#[derive(Debug, Clone, Default)]
pub struct CityQuery {
    pub name: Option<String>,
    pub state: Option<String>,
}

impl RegistryQuery<City> for CityQuery {
    fn matches(&self, entity: &City) -> bool {
        self.name.as_deref().is_none_or(|name| entity.name == name)
            && self
                .state
                .as_deref()
                .is_none_or(|state| entity.state == state)
    }
}

/// Lookup-or-create store for cities, deduplicated by (name, state)
///
/// Tracks request counts per city name and per state as a side effect of
/// every successful lookup, regardless of hit or miss.
#[derive(Debug, Default)]
pub struct CityRegistry {
    entries: Vec<Rc<City>>,
    city_counts: HashMap<String, u64>,
    state_counts: HashMap<String, u64>,
}

impl CityRegistry {
    /// Create a new empty city registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct cities registered
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry holds no cities
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered cities in creation order
    pub fn entries(&self) -> &[Rc<City>] {
        &self.entries
    }

    /// Find cities matching every field present in the query
    pub fn search(&self, query: &CityQuery) -> Vec<Rc<City>> {
        self.entries
            .iter()
            .filter(|city| query.matches(city))
            .cloned()
            .collect()
    }

    /// Return the city with the given identity, creating it on first sight
    ///
    /// Identity validation happens before anything else: a malformed state
    /// abbreviation fails with `InvalidIdentity`, creates no instance, and
    /// increments no counter. On a valid identity, both request counters
    /// are incremented exactly once whether or not the city already exists.
    pub fn get_or_create(&mut self, name: &str, state: &str) -> Result<Rc<City>> {
        City::validate_state(state)?;

        let query = CityQuery {
            name: Some(name.to_string()),
            state: Some(state.to_string()),
        };
        let existing = self
            .entries
            .iter()
            .find(|city| query.matches(city))
            .cloned();

        *self.city_counts.entry(name.to_string()).or_insert(0) += 1;
        *self.state_counts.entry(state.to_string()).or_insert(0) += 1;

        if let Some(city) = existing {
            return Ok(city);
        }

        let city = Rc::new(City::new(name, state)?);
        self.entries.push(Rc::clone(&city));
        Ok(city)
    }

    /// Live per-city-name request counts
    pub fn city_counts(&self) -> &HashMap<String, u64> {
        &self.city_counts
    }

    /// Live per-state request counts
    pub fn state_counts(&self) -> &HashMap<String, u64> {
        &self.state_counts
    }

    /// Request counts for the named category (`city` or `state`)
    ///
    /// An unrecognized category yields an empty map and a diagnostic,
    /// never an error.
    pub fn counts_for(&self, category: &str) -> HashMap<String, u64> {
        match category {
            categories::CITY => self.city_counts.clone(),
            categories::STATE => self.state_counts.clone(),
            other => {
                warn!(
                    "`{}` is not a valid city registry count category. Options are: {}",
                    other,
                    categories::CITY_REGISTRY.join(" ")
                );
                HashMap::new()
            }
        }
    }

    /// All category count maps, in declaration order
    pub fn all_counts(&self) -> Vec<(&'static str, HashMap<String, u64>)> {
        vec![
            (categories::CITY, self.city_counts.clone()),
            (categories::STATE, self.state_counts.clone()),
        ]
    }

    /// The city name with the highest request count, with that count
    ///
    /// Ties are broken toward the lexicographically smaller name so the
    /// result is deterministic.
    pub fn top_city(&self) -> Option<(String, u64)> {
        self.city_counts
            .iter()
            .max_by(|(name_a, count_a), (name_b, count_b)| {
                count_a.cmp(count_b).then(name_b.cmp(name_a))
            })
            .map(|(name, count)| (name.clone(), *count))
    }
}
