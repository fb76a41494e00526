//! Template string parser using winnow.
//!
//! Parses template strings into an AST. Handles:
//! - Literal text segments
//! - Placeholder tokens `{NAME}` with an optional `:mod1:mod2` chain
//!
//! A `{` that does not open a well-formed token is literal text, and scanning
//! resumes at the following character. This gives the same result as a
//! left-to-right, non-overlapping match of `\{([A-Z]+)(?::([a-zA-Z:]+))?\}`.

use super::ast::{Segment, Template};
use winnow::combinator::{alt, delimited, opt, preceded, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    let segments: Vec<Segment> = repeat(0.., segment)
        .parse_next(&mut remaining)
        .unwrap_or_else(|_| vec![Segment::Literal(input.to_string())]);

    Template {
        segments: merge_literals(segments),
    }
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder { .. } => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a single literal character, including braces that do not open a token.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: `{NAME}` or `{NAME:chain}`.
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited(
        '{',
        (placeholder_name, opt(preceded(':', modifier_chain))),
        '}',
    )
    .with_taken()
    .map(|((name, chain), raw)| Segment::Placeholder {
        name: name.to_string(),
        modifiers: chain
            .map(|chain| chain.split(':').map(str::to_string).collect())
            .unwrap_or_default(),
        raw: raw.to_string(),
    })
    .parse_next(input)
}

/// Parse a placeholder name (one or more uppercase ASCII letters).
fn placeholder_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_uppercase()).parse_next(input)
}

/// Parse a modifier chain (ASCII letters and colons, any case).
fn modifier_chain<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphabetic() || c == ':').parse_next(input)
}
