//! Tests for the text-case modifiers.

use gedname::EvalContext;
use gedname::interpreter::{Diagnostic, apply_modifier, apply_modifier_with};

// =============================================================================
// Basic transforms
// =============================================================================

#[test]
fn test_upper() {
    assert_eq!(apply_modifier("john", "upper"), "JOHN");
}

#[test]
fn test_lower() {
    assert_eq!(apply_modifier("SMITH", "lower"), "smith");
}

#[test]
fn test_title() {
    assert_eq!(apply_modifier("john william", "title"), "John William");
    assert_eq!(apply_modifier("JOHN WILLIAM", "title"), "John William");
}

#[test]
fn test_abbrev() {
    assert_eq!(apply_modifier("john", "abbrev"), "J");
    assert_eq!(apply_modifier("a", "abbrev"), "A");
    assert_eq!(apply_modifier("Ann Louise", "abbrev"), "A");
}

#[test]
fn test_abbrev_is_one_character() {
    assert_eq!(apply_modifier("e\u{301}mile", "abbrev"), "E");
    assert_eq!(apply_modifier("\u{e9}lise", "abbrev"), "\u{c9}");
}

// =============================================================================
// Case-insensitive names
// =============================================================================

#[test]
fn test_modifier_names_are_case_insensitive() {
    assert_eq!(apply_modifier("john", "UPPER"), "JOHN");
    assert_eq!(apply_modifier("john", "Upper"), "JOHN");
    assert_eq!(apply_modifier("SMITH", "LOWER"), "smith");
    assert_eq!(apply_modifier("john william", "TITLE"), "John William");
    assert_eq!(apply_modifier("john", "ABBREV"), "J");
}

// =============================================================================
// Title case word boundaries
// =============================================================================

#[test]
fn test_title_apostrophe_does_not_start_word() {
    assert_eq!(apply_modifier("o'brien", "title"), "O'brien");
}

#[test]
fn test_title_hyphen_does_not_start_word() {
    assert_eq!(apply_modifier("mary-jane smith", "title"), "Mary-jane Smith");
}

#[test]
fn test_title_with_digits() {
    assert_eq!(apply_modifier("john 123", "title"), "John 123");
}

#[test]
fn test_title_leading_punctuation() {
    assert_eq!(apply_modifier("(john) smith", "title"), "(John) Smith");
}

#[test]
fn test_title_preserves_whitespace() {
    assert_eq!(apply_modifier("  new   york ", "title"), "  New   York ");
}

#[test]
fn test_title_unicode() {
    assert_eq!(apply_modifier("élise müller", "title"), "Élise Müller");
}

// =============================================================================
// No-op cases
// =============================================================================

#[test]
fn test_empty_value_is_unchanged() {
    assert_eq!(apply_modifier("", "upper"), "");
    assert_eq!(apply_modifier("", "abbrev"), "");
}

#[test]
fn test_empty_modifier_is_unchanged() {
    assert_eq!(apply_modifier("john", ""), "john");
}

#[test]
fn test_unknown_modifier_passes_value_through() {
    assert_eq!(apply_modifier("Smith", "invalid"), "Smith");
}

#[test]
fn test_unknown_modifier_is_reported() {
    let mut ctx = EvalContext::new();
    assert_eq!(apply_modifier_with("Smith", "uper", &mut ctx), "Smith");
    assert_eq!(
        ctx.warnings(),
        &[Diagnostic::UnknownModifier {
            modifier: "uper".to_string(),
            suggestions: vec!["upper".to_string()],
        }]
    );
}

#[test]
fn test_known_modifier_is_not_reported() {
    let mut ctx = EvalContext::new();
    apply_modifier_with("Smith", "upper", &mut ctx);
    assert!(ctx.warnings().is_empty());
}

#[test]
fn test_empty_value_skips_unknown_modifier_report() {
    let mut ctx = EvalContext::new();
    apply_modifier_with("", "bogus", &mut ctx);
    assert!(ctx.warnings().is_empty());
}

// =============================================================================
// Laws
// =============================================================================

#[test]
fn test_upper_is_idempotent() {
    for value in ["john", "O'Brien", "straße", "ÉLISE", "mIxEd 123"] {
        let once = apply_modifier(value, "upper");
        assert_eq!(apply_modifier(&once, "upper"), once, "value: {value}");
    }
}

#[test]
fn test_lower_and_title_are_idempotent() {
    for value in ["john", "O'Brien", "new york", "ÉLISE"] {
        let lower = apply_modifier(value, "lower");
        assert_eq!(apply_modifier(&lower, "lower"), lower);
        let title = apply_modifier(value, "title");
        assert_eq!(apply_modifier(&title, "title"), title);
    }
}
