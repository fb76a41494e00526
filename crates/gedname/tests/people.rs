//! Tests for additional-people formatting.

use gedname::people::{DEFAULT_PEOPLE_TEMPLATE, format_people_with, split_delimiter};
use gedname::{EvalContext, Person, format_additional_people, sanitize_for_filename};

fn two_people() -> Vec<Person> {
    vec![
        Person::new("Jane", "Doe").with_middle(""),
        Person::new("Robert", "Smith").with_middle("James"),
    ]
}

// =========================================================================
// Templates and delimiters
// =========================================================================

#[test]
fn default_template() {
    assert_eq!(
        format_additional_people(&two_people(), DEFAULT_PEOPLE_TEMPLATE),
        "Jane.Doe+Robert.Smith"
    );
}

#[test]
fn modifiers_apply_per_person() {
    let people = two_people();
    assert_eq!(
        format_additional_people(&people, "{SURNAME:upper}.{GIVEN}|+"),
        "DOE.Jane+SMITH.Robert"
    );
    assert_eq!(
        format_additional_people(&people, "{GIVEN:lower}-{SURNAME}|+"),
        "jane-Doe+robert-Smith"
    );
    assert_eq!(
        format_additional_people(&people, "{GIVEN}.{MIDDLE:abbrev}.{SURNAME}|+"),
        "Jane.x.Doe+Robert.J.Smith"
    );
}

#[test]
fn entries_are_sanitized_but_delimiter_is_not() {
    assert_eq!(
        format_additional_people(&two_people(), "{GIVEN:title} {SURNAME:upper}|, "),
        "Jane-DOE, Robert-SMITH"
    );
}

#[test]
fn empty_name_template_uses_name_default() {
    assert_eq!(
        format_additional_people(&two_people(), "|_"),
        "DOE.Jane_SMITH.Robert"
    );
}

#[test]
fn no_delimiter_concatenates() {
    assert_eq!(
        format_additional_people(&two_people(), "[{GIVEN}]"),
        "[Jane][Robert]"
    );
}

#[test]
fn trailing_empty_delimiter() {
    let people = [Person::new("Alice", "Johnson").with_middle("Marie")];
    assert_eq!(
        format_additional_people(&people, "{SURNAME:upper}, {GIVEN} {MIDDLE:abbrev}|"),
        "JOHNSON,-Alice-M"
    );
}

#[test]
fn last_pipe_splits() {
    assert_eq!(split_delimiter("{GIVEN}|a|b"), ("{GIVEN}|a", "b"));
    assert_eq!(split_delimiter("{GIVEN}|"), ("{GIVEN}", ""));
    assert_eq!(split_delimiter("{GIVEN}"), ("{GIVEN}", ""));
}

#[test]
fn empty_list_renders_empty() {
    assert_eq!(format_additional_people(&[], DEFAULT_PEOPLE_TEMPLATE), "");
}

// =========================================================================
// Person names
// =========================================================================

#[test]
fn full_name_skips_blank_parts() {
    assert_eq!(Person::new("Jane", "Doe").with_middle("  ").full_name(), "Jane Doe");
    let surname_only = Person {
        surname: Some("Doe".into()),
        ..Person::default()
    };
    assert_eq!(surname_only.full_name(), "Doe");
    assert_eq!(Person::default().full_name(), "");
}

#[test]
fn surname_only_person_is_parsed_as_given() {
    let people = [Person {
        surname: Some("Doe".into()),
        ..Person::default()
    }];
    assert_eq!(format_additional_people(&people, "{GIVEN}.{SURNAME}|+"), "Doe.x");
}

#[test]
fn person_from_json() {
    let person: Person = serde_json::from_str(
        r#"{"givenName": "Jane", "surname": "Doe", "relationship": "witness"}"#,
    )
    .unwrap();
    assert_eq!(person, Person::new("Jane", "Doe"));
}

#[test]
fn diagnostics_are_collected() {
    let mut ctx = EvalContext::new();
    let out = format_people_with(&two_people(), "{FIRST}|+", &mut ctx);
    assert_eq!(out, "{FIRST}+{FIRST}");
    assert_eq!(ctx.warnings().len(), 1);
}

// =========================================================================
// Sanitizing
// =========================================================================

#[test]
fn sanitize_collapses_whitespace_runs() {
    assert_eq!(sanitize_for_filename("a  b\t\nc"), "a-b-c");
    assert_eq!(sanitize_for_filename(" lead and trail "), "-lead-and-trail-");
    assert_eq!(sanitize_for_filename("O'Brien/Smith"), "O'Brien/Smith");
    assert_eq!(sanitize_for_filename(""), "");
}
