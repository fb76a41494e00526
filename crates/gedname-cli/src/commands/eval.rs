//! Implementation of the `gedname eval` command.

use gedname::{FieldRecord, FieldValue};

use super::{load_formatter, print_rendered};
use crate::GlobalArgs;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Template string to render (any date, name, or place placeholder)
    pub template: String,

    /// Field values in key=value format (repeatable), e.g. -f year=1850
    #[arg(short = 'f', long = "field", value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,
}

/// Parse a key=value field string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid field format '{}': expected key=value", s))?;
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs, global: &GlobalArgs) -> miette::Result<i32> {
    let mut formatter = match load_formatter(global) {
        Ok(formatter) => formatter,
        Err(code) => return Ok(code),
    };

    // Canonical integers become numbers; "0850" stays text to keep its zero
    let record: FieldRecord = args
        .fields
        .into_iter()
        .map(|(key, value)| {
            let value = match value.parse::<i64>() {
                Ok(n) if n.to_string() == value => FieldValue::from(n),
                _ => FieldValue::from(value),
            };
            (key, value)
        })
        .collect();

    let rendered = formatter.eval(&args.template, &record);
    Ok(print_rendered(global, rendered, formatter.warnings()))
}
