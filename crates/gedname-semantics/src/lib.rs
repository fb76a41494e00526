//! Shared gedname semantic tables used by both the runtime and the CLI.
//!
//! This crate centralizes modifier name resolution, the placeholder key maps
//! and the placeholder-level formatting rules so the renderer and the template
//! linter cannot drift apart.

/// Canonical modifier identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierId {
    Upper,
    Lower,
    Title,
    Abbrev,
}

impl ModifierId {
    /// The canonical lowercase name of this modifier.
    pub fn name(self) -> &'static str {
        match self {
            ModifierId::Upper => "upper",
            ModifierId::Lower => "lower",
            ModifierId::Title => "title",
            ModifierId::Abbrev => "abbrev",
        }
    }
}

/// Resolve a modifier name to a canonical modifier id.
///
/// Matching is case-insensitive: `UPPER`, `Upper` and `upper` all resolve to
/// [`ModifierId::Upper`].
pub fn resolve_modifier(name: &str) -> Option<ModifierId> {
    match name.to_ascii_lowercase().as_str() {
        "upper" => Some(ModifierId::Upper),
        "lower" => Some(ModifierId::Lower),
        "title" => Some(ModifierId::Title),
        "abbrev" => Some(ModifierId::Abbrev),
        _ => None,
    }
}

/// Accepted modifier names.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_modifier_names() -> &'static [&'static str] {
    MODIFIER_NAMES
}

/// Formatting applied to a fetched value before any modifier runs.
///
/// The rule is tied to the placeholder name, not the field key: `YYYY` and
/// `YY` both read `year` but render differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// Value is used as-is.
    Verbatim,
    /// Numeric values are left-padded with `0` to width 2.
    PadTwo,
    /// Numeric values are reduced modulo 100 and padded to width 2.
    TwoDigitYear,
}

/// Look up the formatting rule for a placeholder name.
pub fn field_format(placeholder: &str) -> FieldFormat {
    match placeholder {
        "MM" | "DD" => FieldFormat::PadTwo,
        "YY" => FieldFormat::TwoDigitYear,
        _ => FieldFormat::Verbatim,
    }
}

/// Placeholder domains with a fixed key map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Date,
    Name,
    Place,
}

impl Domain {
    /// All domains in display order.
    pub const ALL: [Domain; 3] = [Domain::Date, Domain::Name, Domain::Place];

    /// Lowercase domain name.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Date => "date",
            Domain::Name => "name",
            Domain::Place => "place",
        }
    }

    /// `(placeholder, field key)` pairs for this domain.
    pub fn key_table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Domain::Date => DATE_KEYS,
            Domain::Name => NAME_KEYS,
            Domain::Place => PLACE_KEYS,
        }
    }

    /// The template used when the caller supplies none.
    pub fn default_template(self) -> &'static str {
        match self {
            Domain::Date => "{YYYY}.{MM}.{DD}",
            Domain::Name => "{SURNAME:upper}.{GIVEN}",
            Domain::Place => "{COUNTRY}.{STATE}.{COUNTY}.{CITY}",
        }
    }
}

const MODIFIER_NAMES: &[&str] = &["upper", "lower", "title", "abbrev"];

const DATE_KEYS: &[(&str, &str)] = &[
    ("YYYY", "year"),
    ("YY", "year"),
    ("MM", "month"),
    ("M", "month"),
    ("DD", "day"),
    ("D", "day"),
];

const NAME_KEYS: &[(&str, &str)] = &[
    ("SURNAME", "surname"),
    ("GIVEN", "given"),
    ("MIDDLE", "middle"),
];

const PLACE_KEYS: &[(&str, &str)] = &[
    ("COUNTRY", "country"),
    ("C", "country"),
    ("STATE", "state"),
    ("S", "state"),
    ("COUNTY", "county"),
    ("CO", "county"),
    ("CITY", "city"),
    ("CI", "city"),
];
