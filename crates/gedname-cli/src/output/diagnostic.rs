//! Miette diagnostic wrapper for template lint findings.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use gedname::Diagnostic;
use miette::{Diagnostic as MietteDiagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at one placeholder token.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("{message}")]
#[diagnostic(code(gedname::template))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic for the token at `offset..offset + len`.
    pub fn new(template: &str, offset: usize, len: usize, diagnostic: &Diagnostic) -> Self {
        let help = match diagnostic.suggestions() {
            [] => None,
            suggestions => Some(format!("did you mean: {}?", suggestions.join(", "))),
        };

        // Clamp to the template to avoid a miette panic on out-of-bounds spans
        let offset = offset.min(template.len());
        let len = len.min(template.len() - offset);

        TemplateDiagnostic {
            src: NamedSource::new("template", template.to_string()),
            span: (offset, len).into(),
            message: match diagnostic {
                Diagnostic::UnknownPlaceholder { placeholder, .. } => {
                    format!("unknown placeholder '{placeholder}'")
                }
                Diagnostic::UnknownModifier { modifier, .. } => {
                    format!("unknown modifier '{modifier}'")
                }
            },
            help,
        }
    }
}
