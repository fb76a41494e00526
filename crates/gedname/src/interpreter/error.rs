//! Diagnostics reported by the substitution engine.

use strsim::levenshtein;
use thiserror::Error;

/// A recoverable problem found while rendering or linting a template.
///
/// Diagnostics never change control flow: an unknown placeholder is echoed
/// verbatim and an unknown modifier leaves the value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// The placeholder name is not in the active key map.
    #[error("unknown placeholder '{{{placeholder}}}'{}", did_you_mean(.suggestions))]
    UnknownPlaceholder {
        placeholder: String,
        suggestions: Vec<String>,
    },

    /// The modifier name is not a known transform.
    #[error("unknown modifier ':{modifier}'{}", did_you_mean(.suggestions))]
    UnknownModifier {
        modifier: String,
        suggestions: Vec<String>,
    },
}

impl Diagnostic {
    /// Build an unknown-placeholder diagnostic with suggestions from `known`.
    pub fn unknown_placeholder<'a>(
        placeholder: &str,
        known: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Diagnostic::UnknownPlaceholder {
            placeholder: placeholder.to_string(),
            suggestions: compute_suggestions(placeholder, known),
        }
    }

    /// Build an unknown-modifier diagnostic with suggestions from the
    /// accepted modifier names.
    pub fn unknown_modifier(modifier: &str) -> Self {
        Diagnostic::UnknownModifier {
            modifier: modifier.to_string(),
            suggestions: compute_suggestions(
                &modifier.to_ascii_lowercase(),
                gedname_semantics::accepted_modifier_names().iter().copied(),
            ),
        }
    }

    /// Short machine-readable kind, used by the CLI.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::UnknownPlaceholder { .. } => "unknown-placeholder",
            Diagnostic::UnknownModifier { .. } => "unknown-modifier",
        }
    }

    /// The offending name as written in the template.
    pub fn subject(&self) -> &str {
        match self {
            Diagnostic::UnknownPlaceholder { placeholder, .. } => placeholder,
            Diagnostic::UnknownModifier { modifier, .. } => modifier,
        }
    }

    /// Close matches for the offending name, best first.
    pub fn suggestions(&self) -> &[String] {
        match self {
            Diagnostic::UnknownPlaceholder { suggestions, .. }
            | Diagnostic::UnknownModifier { suggestions, .. } => suggestions,
        }
    }
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute up to three typo suggestions for `name` from `available`.
///
/// Candidates within Levenshtein distance 1 (names of 3 characters or less)
/// or 2 (longer names) are returned, closest first. Exact matches are not
/// suggestions.
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
