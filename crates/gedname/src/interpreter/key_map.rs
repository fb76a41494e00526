//! Placeholder-name to field-key maps.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use gedname_semantics::Domain;

static DATE: LazyLock<KeyMap> = LazyLock::new(|| KeyMap::for_table(Domain::Date));
static NAME: LazyLock<KeyMap> = LazyLock::new(|| KeyMap::for_table(Domain::Name));
static PLACE: LazyLock<KeyMap> = LazyLock::new(|| KeyMap::for_table(Domain::Place));
static COMBINED: LazyLock<KeyMap> = LazyLock::new(|| {
    KeyMap::from_pairs(
        Domain::ALL
            .iter()
            .flat_map(|domain| domain.key_table().iter().copied()),
    )
});

/// Maps placeholder names (`YYYY`, `CO`...) to field keys (`year`, `county`...).
///
/// Several placeholders may share one field key; they are told apart by the
/// placeholder-level formatting rules, not by the key.
///
/// # Example
///
/// ```
/// use gedname::interpreter::KeyMap;
///
/// let dates = KeyMap::date();
/// assert_eq!(dates.resolve("YY"), Some("year"));
/// assert_eq!(dates.resolve("SURNAME"), None);
///
/// let custom = KeyMap::from_pairs([("NAME", "name")]);
/// assert_eq!(custom.resolve("NAME"), Some("name"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    entries: BTreeMap<String, String>,
}

impl KeyMap {
    /// Build a key map from `(placeholder, field key)` pairs.
    pub fn from_pairs<P, K>(pairs: impl IntoIterator<Item = (P, K)>) -> Self
    where
        P: Into<String>,
        K: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(placeholder, key)| (placeholder.into(), key.into()))
                .collect(),
        }
    }

    fn for_table(domain: Domain) -> Self {
        Self::from_pairs(domain.key_table().iter().copied())
    }

    /// The fixed key map for a domain.
    pub fn for_domain(domain: Domain) -> &'static KeyMap {
        match domain {
            Domain::Date => Self::date(),
            Domain::Name => Self::name(),
            Domain::Place => Self::place(),
        }
    }

    /// `YYYY`, `YY` → year; `MM`, `M` → month; `DD`, `D` → day.
    pub fn date() -> &'static KeyMap {
        &DATE
    }

    /// `SURNAME`, `GIVEN`, `MIDDLE`.
    pub fn name() -> &'static KeyMap {
        &NAME
    }

    /// `COUNTRY`/`C`, `STATE`/`S`, `COUNTY`/`CO`, `CITY`/`CI`.
    pub fn place() -> &'static KeyMap {
        &PLACE
    }

    /// Every domain's placeholders in one map.
    pub fn combined() -> &'static KeyMap {
        &COMBINED
    }

    /// Resolve a placeholder name to its field key.
    pub fn resolve(&self, placeholder: &str) -> Option<&str> {
        self.entries.get(placeholder).map(String::as_str)
    }

    /// All placeholder names, sorted.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}
