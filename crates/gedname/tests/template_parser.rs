//! Integration tests for template parsing.

use gedname::parser::{Segment, parse_template};

fn placeholder(name: &str, modifiers: &[&str], raw: &str) -> Segment {
    Segment::Placeholder {
        name: name.to_string(),
        modifiers: modifiers.iter().map(ToString::to_string).collect(),
        raw: raw.to_string(),
    }
}

// =============================================================================
// Basic parsing
// =============================================================================

#[test]
fn test_empty_string() {
    let t = parse_template("");
    assert_eq!(t.segments, vec![]);
}

#[test]
fn test_pure_literal() {
    let t = parse_template("Hello, world!");
    assert_eq!(t.segments, vec![Segment::Literal("Hello, world!".into())]);
}

#[test]
fn test_placeholders_and_literals() {
    let t = parse_template("{YYYY}.{MM}");
    assert_eq!(
        t.segments,
        vec![
            placeholder("YYYY", &[], "{YYYY}"),
            Segment::Literal(".".into()),
            placeholder("MM", &[], "{MM}"),
        ]
    );
}

#[test]
fn test_adjacent_placeholders() {
    let t = parse_template("{GIVEN}{SURNAME}");
    assert_eq!(
        t.segments,
        vec![
            placeholder("GIVEN", &[], "{GIVEN}"),
            placeholder("SURNAME", &[], "{SURNAME}"),
        ]
    );
}

#[test]
fn test_unicode_literals_preserved() {
    let t = parse_template("Café – {CITY} ñ");
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("Café – ".into()),
            placeholder("CITY", &[], "{CITY}"),
            Segment::Literal(" ñ".into()),
        ]
    );
}

// =============================================================================
// Modifier chains
// =============================================================================

#[test]
fn test_single_modifier() {
    let t = parse_template("{SURNAME:upper}");
    assert_eq!(
        t.segments,
        vec![placeholder("SURNAME", &["upper"], "{SURNAME:upper}")]
    );
}

#[test]
fn test_modifier_chain_keeps_case_and_order() {
    let t = parse_template("{GIVEN:UPPER:lower:Title}");
    assert_eq!(
        t.segments,
        vec![placeholder(
            "GIVEN",
            &["UPPER", "lower", "Title"],
            "{GIVEN:UPPER:lower:Title}"
        )]
    );
    assert_eq!(t.segments[0].effective_modifier(), Some("Title"));
}

#[test]
fn test_empty_chain_elements() {
    let t = parse_template("{GIVEN::}");
    assert_eq!(t.segments, vec![placeholder("GIVEN", &["", "", ""], "{GIVEN::}")]);
    assert_eq!(t.segments[0].effective_modifier(), Some(""));
}

#[test]
fn test_no_modifier_has_no_effective_modifier() {
    let t = parse_template("{GIVEN}");
    assert_eq!(t.segments[0].effective_modifier(), None);
}

// =============================================================================
// Text that is not a token
// =============================================================================

#[test]
fn test_lowercase_name_is_literal() {
    let t = parse_template("{yyyy}");
    assert_eq!(t.segments, vec![Segment::Literal("{yyyy}".into())]);
}

#[test]
fn test_mixed_case_name_is_literal() {
    let t = parse_template("{Given}");
    assert_eq!(t.segments, vec![Segment::Literal("{Given}".into())]);
}

#[test]
fn test_empty_braces_are_literal() {
    let t = parse_template("{}");
    assert_eq!(t.segments, vec![Segment::Literal("{}".into())]);
}

#[test]
fn test_trailing_colon_is_literal() {
    let t = parse_template("{GIVEN:}");
    assert_eq!(t.segments, vec![Segment::Literal("{GIVEN:}".into())]);
}

#[test]
fn test_digit_in_modifier_is_literal() {
    let t = parse_template("{GIVEN:up1}");
    assert_eq!(t.segments, vec![Segment::Literal("{GIVEN:up1}".into())]);
}

#[test]
fn test_space_inside_braces_is_literal() {
    let t = parse_template("{ GIVEN }");
    assert_eq!(t.segments, vec![Segment::Literal("{ GIVEN }".into())]);
}

#[test]
fn test_unclosed_brace_is_literal() {
    let t = parse_template("{GIVEN");
    assert_eq!(t.segments, vec![Segment::Literal("{GIVEN".into())]);
}

#[test]
fn test_double_braces_wrap_a_token() {
    let t = parse_template("{{YYYY}}");
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("{".into()),
            placeholder("YYYY", &[], "{YYYY}"),
            Segment::Literal("}".into()),
        ]
    );
}

#[test]
fn test_scan_resumes_after_failed_brace() {
    let t = parse_template("{a{MM}");
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("{a".into()),
            placeholder("MM", &[], "{MM}"),
        ]
    );
}

#[test]
fn test_placeholders_iterator() {
    let t = parse_template("a{YYYY}b{MM:upper}c");
    let names: Vec<&str> = t
        .placeholders()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
        .collect();
    assert_eq!(names, vec!["YYYY", "MM"]);
}
