//! CLI command implementations.

mod check;
mod eval;
mod field;
mod keys;
mod people;

pub use check::{run_check, CheckArgs};
pub use eval::{run_eval, EvalArgs};
pub use field::{run_field, FieldArgs, FieldKind};
pub use keys::{run_keys, KeysArgs};
pub use people::{run_people, PeopleArgs};

use gedname::{Diagnostic, Formatter, Settings};
use serde::Serialize;

use crate::GlobalArgs;

/// JSON output for rendering commands.
#[derive(Serialize)]
pub struct RenderResult {
    pub result: String,
    pub warnings: Vec<String>,
}

/// Build a formatter from the global settings file, if any.
///
/// On failure the error is printed and the exit code returned.
fn load_formatter(global: &GlobalArgs) -> Result<Formatter, i32> {
    let Some(path) = &global.settings else {
        return Ok(Formatter::default());
    };

    match Settings::load(path) {
        Ok(settings) => {
            tracing::debug!(path = %path.display(), "loaded settings");
            Ok(Formatter::new(settings))
        }
        Err(e) => {
            eprintln!("Settings error: {}", e);
            Err(exitcode::CONFIG)
        }
    }
}

/// Print a rendered value, plain or as JSON.
fn print_rendered(global: &GlobalArgs, result: String, warnings: &[Diagnostic]) -> i32 {
    if global.json {
        let output = RenderResult {
            result,
            warnings: warnings.iter().map(ToString::to_string).collect(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", result);
    }
    exitcode::OK
}
