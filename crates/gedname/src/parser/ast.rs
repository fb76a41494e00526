//! Public AST types for placeholder templates.
//!
//! These types are public so tooling (the linter, the CLI `check` command)
//! can inspect templates without rendering them.

/// A parsed template string containing segments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub segments: Vec<Segment>,
}

impl Template {
    /// Iterate over the placeholder segments only.
    pub fn placeholders(&self) -> impl Iterator<Item = &Segment> {
        self.segments
            .iter()
            .filter(|segment| matches!(segment, Segment::Placeholder { .. }))
    }
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text, passed through verbatim.
    Literal(String),
    /// A placeholder token: `{NAME}` or `{NAME:mod1:mod2}`.
    Placeholder {
        /// Uppercase placeholder name (e.g. "YYYY", "SURNAME").
        name: String,
        /// Modifier chain as written, split on `:`. Empty when the token has
        /// no suffix. Elements may be empty (`{A::}`).
        modifiers: Vec<String>,
        /// The exact token text, braces included.
        raw: String,
    },
}

impl Segment {
    /// The modifier that is applied at render time.
    ///
    /// Only the last element of a chain takes effect; earlier elements are
    /// discarded. This may be revisited to compose the chain instead.
    pub fn effective_modifier(&self) -> Option<&str> {
        match self {
            Segment::Placeholder { modifiers, .. } => modifiers.last().map(String::as_str),
            Segment::Literal(_) => None,
        }
    }
}
