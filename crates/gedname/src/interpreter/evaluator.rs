//! Template evaluation.
//!
//! Literal segments are copied to the output. Each placeholder is resolved in
//! four steps:
//! 1. Placeholder name → field key through the [`KeyMap`]; unknown names are
//!    reported and echoed verbatim.
//! 2. Field key → value; absent values render as the missing-value handler
//!    and skip the remaining steps.
//! 3. Placeholder-level formatting (`MM`/`DD` padding, `YY` truncation).
//! 4. The last modifier of the chain, if any.

use gedname_semantics::{FieldFormat, field_format};

use crate::interpreter::{Diagnostic, EvalContext, KeyMap, apply_modifier_with};
use crate::parser::{Segment, Template, parse_template};
use crate::types::FieldRecord;

/// Parse and render `template` against `record`.
///
/// An empty template renders as the empty string. Rendering cannot fail;
/// problems are reported to `ctx` and the output degrades instead.
///
/// # Example
///
/// ```
/// use gedname::interpreter::{EvalContext, KeyMap, process_sub_template};
/// use gedname::fields;
///
/// let record = fields! { "year" => "2024", "month" => "3", "day" => None::<&str> };
/// let mut ctx = EvalContext::new();
/// let out = process_sub_template("{YY}-{MM}-{DD}", &record, KeyMap::date(), &mut ctx);
/// assert_eq!(out, "24-03-x");
/// ```
pub fn process_sub_template(
    template: &str,
    record: &FieldRecord,
    key_map: &KeyMap,
    ctx: &mut EvalContext,
) -> String {
    if template.is_empty() {
        return String::new();
    }
    eval_template(&parse_template(template), record, key_map, ctx)
}

/// Render an already-parsed template against `record`.
pub fn eval_template(
    template: &Template,
    record: &FieldRecord,
    key_map: &KeyMap,
    ctx: &mut EvalContext,
) -> String {
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(s) => output.push_str(s),
            Segment::Placeholder {
                name,
                modifiers,
                raw,
            } => {
                let value = resolve_placeholder(name, modifiers, raw, record, key_map, ctx);
                output.push_str(&value);
            }
        }
    }
    output
}

fn resolve_placeholder(
    name: &str,
    modifiers: &[String],
    raw: &str,
    record: &FieldRecord,
    key_map: &KeyMap,
    ctx: &mut EvalContext,
) -> String {
    let Some(field_key) = key_map.resolve(name) else {
        ctx.add_warning(Diagnostic::unknown_placeholder(name, key_map.placeholders()));
        return raw.to_string();
    };

    let Some(value) = record.get(field_key).as_text() else {
        return ctx.missing_value().to_string();
    };

    let formatted = format_field(name, value);
    match modifiers.last() {
        Some(modifier) => apply_modifier_with(&formatted, modifier, ctx),
        None => formatted,
    }
}

/// Apply the formatting rule tied to the placeholder name.
fn format_field(placeholder: &str, value: String) -> String {
    match field_format(placeholder) {
        FieldFormat::PadTwo if is_numeric(&value) => format!("{value:0>2}"),
        FieldFormat::TwoDigitYear if is_numeric(&value) => two_digit_year(&value),
        FieldFormat::Verbatim | FieldFormat::PadTwo | FieldFormat::TwoDigitYear => value,
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Year modulo 100, zero-padded. `value` must be all ASCII digits.
fn two_digit_year(value: &str) -> String {
    let tail = &value[value.len().saturating_sub(2)..];
    let year: u8 = tail.parse().unwrap_or_default();
    format!("{year:02}")
}
