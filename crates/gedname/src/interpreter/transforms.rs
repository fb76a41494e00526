//! Text-case modifiers applied to rendered placeholder values.

use gedname_semantics::{ModifierId, resolve_modifier};

use crate::interpreter::{Diagnostic, EvalContext};

/// Apply a modifier by name, logging unknown modifiers.
///
/// Empty values and empty modifier names are returned unchanged. Names are
/// matched case-insensitively. An unknown modifier is not an error: it is
/// reported and the value passes through untouched.
///
/// # Example
///
/// ```
/// use gedname::interpreter::apply_modifier;
///
/// assert_eq!(apply_modifier("smith", "UPPER"), "SMITH");
/// assert_eq!(apply_modifier("o'brien", "title"), "O'brien");
/// assert_eq!(apply_modifier("Robert", "abbrev"), "R");
/// assert_eq!(apply_modifier("Robert", "bogus"), "Robert");
/// ```
pub fn apply_modifier(value: &str, modifier: &str) -> String {
    apply_modifier_with(value, modifier, &mut EvalContext::new())
}

/// Apply a modifier by name, reporting unknown modifiers to `ctx`.
pub fn apply_modifier_with(value: &str, modifier: &str, ctx: &mut EvalContext) -> String {
    if value.is_empty() || modifier.is_empty() {
        return value.to_string();
    }

    match resolve_modifier(modifier) {
        Some(id) => apply(id, value),
        None => {
            ctx.add_warning(Diagnostic::unknown_modifier(modifier));
            value.to_string()
        }
    }
}

fn apply(id: ModifierId, value: &str) -> String {
    match id {
        ModifierId::Upper => value.to_uppercase(),
        ModifierId::Lower => value.to_lowercase(),
        ModifierId::Title => title_case(value),
        ModifierId::Abbrev => abbreviate(value),
    }
}

/// Uppercase the first character of each word and lowercase the rest.
///
/// A word starts at a word character (alphanumeric or `_`) and runs to the
/// next whitespace, so punctuation inside a word does not start a new one:
/// `o'brien` becomes `O'brien` and `mary-jane` becomes `Mary-jane`.
fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut in_word = false;

    for c in value.chars() {
        if in_word {
            if c.is_whitespace() {
                in_word = false;
                result.push(c);
            } else {
                result.extend(c.to_lowercase());
            }
        } else if c.is_alphanumeric() || c == '_' {
            in_word = true;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// The first character of `value`, uppercased.
///
/// Combining marks after the first character are dropped, so `e\u{301}mile`
/// abbreviates to `E`.
fn abbreviate(value: &str) -> String {
    value
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
