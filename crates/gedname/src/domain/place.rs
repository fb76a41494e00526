//! Place parsing for comma-separated, GEDCOM-style places.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::{sentinel, slot};
use crate::types::FieldRecord;

static BUILTIN_COUNTRIES: LazyLock<CountrySet> =
    LazyLock::new(|| CountrySet::from_names(BUILTIN_COUNTRY_NAMES.iter().copied()));

/// City, county, state, and country slots of a parsed place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceComponents {
    pub city: String,
    pub county: String,
    pub state: String,
    pub country: String,
}

impl Default for PlaceComponents {
    fn default() -> Self {
        PlaceComponents {
            city: sentinel(),
            county: sentinel(),
            state: sentinel(),
            country: sentinel(),
        }
    }
}

impl PlaceComponents {
    /// Field record keyed `city`/`county`/`state`/`country`, sentinels mapped
    /// to absent.
    pub fn into_record(self) -> FieldRecord {
        FieldRecord::new()
            .with("city", slot(self.city))
            .with("county", slot(self.county))
            .with("state", slot(self.state))
            .with("country", slot(self.country))
    }
}

/// Names recognized as a country when a place has a single segment.
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Example
///
/// ```
/// use gedname::domain::CountrySet;
///
/// let countries = CountrySet::builtin().clone().with_names(["Prussia"]);
/// assert!(countries.contains("usa"));
/// assert!(countries.contains("PRUSSIA"));
/// assert!(!countries.contains("Boston"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountrySet {
    names: HashSet<String>,
}

impl CountrySet {
    /// The built-in list of common genealogical countries and codes.
    pub fn builtin() -> &'static CountrySet {
        &BUILTIN_COUNTRIES
    }

    /// Build a set from names.
    pub fn from_names<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Self {
        CountrySet::default().with_names(names)
    }

    /// Add names to the set.
    #[must_use]
    pub fn with_names<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names
            .extend(names.into_iter().map(|name| normalize(name.as_ref())));
        self
    }

    /// Returns true if `segment` names a known country.
    pub fn contains(&self, segment: &str) -> bool {
        self.names.contains(&normalize(segment))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Parse a place using the built-in country list.
///
/// # Example
///
/// ```
/// use gedname::domain::parse_place_input;
///
/// let place = parse_place_input("Cleveland, Cuyahoga, Ohio, USA");
/// assert_eq!(place.county, "Cuyahoga");
///
/// assert_eq!(parse_place_input("Boston").city, "Boston");
/// assert_eq!(parse_place_input("USA").country, "USA");
/// ```
pub fn parse_place_input(input: &str) -> PlaceComponents {
    parse_place_with(input, CountrySet::builtin())
}

/// Parse a place, using `countries` to classify a lone segment.
///
/// Segments are anchored on the last one, which is always the country:
/// - 4 segments: city, county, state, country
/// - 3 segments: city, state, country
/// - 2 segments: city, country
/// - 1 segment: country if listed in `countries`, city otherwise
///
/// With more than four segments only the last four are used.
pub fn parse_place_with(input: &str, countries: &CountrySet) -> PlaceComponents {
    let segments: Vec<&str> = input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    let segments = &segments[segments.len().saturating_sub(4)..];

    let owned = |s: &&str| (*s).to_string();
    match segments {
        [] => PlaceComponents::default(),
        [single] if countries.contains(single) => PlaceComponents {
            country: owned(single),
            ..PlaceComponents::default()
        },
        [single] => PlaceComponents {
            city: owned(single),
            ..PlaceComponents::default()
        },
        [city, country] => PlaceComponents {
            city: owned(city),
            country: owned(country),
            ..PlaceComponents::default()
        },
        [city, state, country] => PlaceComponents {
            city: owned(city),
            county: sentinel(),
            state: owned(state),
            country: owned(country),
        },
        [city, county, state, country, ..] => PlaceComponents {
            city: owned(city),
            county: owned(county),
            state: owned(state),
            country: owned(country),
        },
    }
}

const BUILTIN_COUNTRY_NAMES: &[&str] = &[
    "USA",
    "US",
    "U.S.A.",
    "United States",
    "United States of America",
    "America",
    "Canada",
    "Mexico",
    "UK",
    "United Kingdom",
    "Great Britain",
    "England",
    "Scotland",
    "Wales",
    "Northern Ireland",
    "Ireland",
    "France",
    "Germany",
    "Deutschland",
    "Austria",
    "Switzerland",
    "Netherlands",
    "Holland",
    "Belgium",
    "Luxembourg",
    "Denmark",
    "Norway",
    "Sweden",
    "Finland",
    "Iceland",
    "Poland",
    "Czech Republic",
    "Slovakia",
    "Hungary",
    "Italy",
    "Spain",
    "Portugal",
    "Greece",
    "Russia",
    "Ukraine",
    "Australia",
    "New Zealand",
    "South Africa",
    "India",
    "China",
    "Japan",
    "Philippines",
    "Brazil",
    "Argentina",
];
