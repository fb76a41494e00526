use std::collections::HashSet;

use gedname_semantics::{
    Domain, FieldFormat, ModifierId, accepted_modifier_names, field_format, resolve_modifier,
};

fn field_key(domain: Domain, placeholder: &str) -> Option<&'static str> {
    domain
        .key_table()
        .iter()
        .find(|(name, _)| *name == placeholder)
        .map(|(_, key)| *key)
}

#[test]
fn modifier_resolution_is_case_insensitive() {
    assert_eq!(resolve_modifier("upper"), Some(ModifierId::Upper));
    assert_eq!(resolve_modifier("UPPER"), Some(ModifierId::Upper));
    assert_eq!(resolve_modifier("Upper"), Some(ModifierId::Upper));
    assert_eq!(resolve_modifier("LoWeR"), Some(ModifierId::Lower));
    assert_eq!(resolve_modifier("TITLE"), Some(ModifierId::Title));
    assert_eq!(resolve_modifier("Abbrev"), Some(ModifierId::Abbrev));
}

#[test]
fn unknown_modifiers_do_not_resolve() {
    assert_eq!(resolve_modifier(""), None);
    assert_eq!(resolve_modifier("invalid"), None);
    assert_eq!(resolve_modifier("cap"), None);
    assert_eq!(resolve_modifier("uppercase"), None);
}

#[test]
fn accepted_names_round_trip_through_resolution() {
    for name in accepted_modifier_names() {
        let id = resolve_modifier(name).unwrap_or_else(|| panic!("{name} should resolve"));
        assert_eq!(id.name(), *name);
    }
}

#[test]
fn formatting_rules_follow_placeholder_name() {
    assert_eq!(field_format("MM"), FieldFormat::PadTwo);
    assert_eq!(field_format("DD"), FieldFormat::PadTwo);
    assert_eq!(field_format("YY"), FieldFormat::TwoDigitYear);
    assert_eq!(field_format("YYYY"), FieldFormat::Verbatim);
    assert_eq!(field_format("M"), FieldFormat::Verbatim);
    assert_eq!(field_format("D"), FieldFormat::Verbatim);
    assert_eq!(field_format("SURNAME"), FieldFormat::Verbatim);
}

#[test]
fn aliases_share_field_keys() {
    let date: HashSet<&str> = Domain::Date.key_table().iter().map(|(_, k)| *k).collect();
    assert_eq!(date, HashSet::from(["year", "month", "day"]));

    let place: HashSet<&str> = Domain::Place.key_table().iter().map(|(_, k)| *k).collect();
    assert_eq!(place, HashSet::from(["country", "state", "county", "city"]));

    assert_eq!(field_key(Domain::Date, "YY"), field_key(Domain::Date, "YYYY"));
    assert_eq!(field_key(Domain::Place, "CO"), Some("county"));
    assert_eq!(field_key(Domain::Place, "CI"), Some("city"));
    assert_eq!(field_key(Domain::Place, "C"), Some("country"));
    assert_eq!(field_key(Domain::Name, "NAME"), None);
}

#[test]
fn placeholder_names_are_unique_across_domains() {
    let mut seen = HashSet::new();
    for domain in Domain::ALL {
        for (name, _) in domain.key_table() {
            assert!(seen.insert(*name), "duplicate placeholder {name}");
        }
    }
}

#[test]
fn default_templates() {
    assert_eq!(Domain::Date.default_template(), "{YYYY}.{MM}.{DD}");
    assert_eq!(Domain::Name.default_template(), "{SURNAME:upper}.{GIVEN}");
    assert_eq!(
        Domain::Place.default_template(),
        "{COUNTRY}.{STATE}.{COUNTY}.{CITY}"
    );
}
