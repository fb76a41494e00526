//! Static checks for templates.
//!
//! Linting reports the same problems rendering would, without needing a
//! record. It also checks modifiers that rendering never reaches: earlier
//! elements of a chain and modifiers on placeholders whose value is absent.

use gedname_semantics::resolve_modifier;

use crate::interpreter::{Diagnostic, KeyMap};
use crate::parser::{Segment, parse_template};

/// Report unknown placeholders and unknown modifiers in `template`.
///
/// Each distinct problem is reported once, in template order.
pub fn lint_template(template: &str, key_map: &KeyMap) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    let mut push = |warning: Diagnostic| {
        if !warnings.contains(&warning) {
            warnings.push(warning);
        }
    };

    for segment in parse_template(template).placeholders() {
        let Segment::Placeholder {
            name, modifiers, ..
        } = segment
        else {
            continue;
        };

        if key_map.resolve(name).is_none() {
            push(Diagnostic::unknown_placeholder(name, key_map.placeholders()));
        }

        for modifier in modifiers {
            if !modifier.is_empty() && resolve_modifier(modifier).is_none() {
                push(Diagnostic::unknown_modifier(modifier));
            }
        }
    }

    warnings
}
