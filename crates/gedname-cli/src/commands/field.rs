//! Implementation of the `gedname date`, `gedname name`, and `gedname place`
//! commands.

use gedname::sanitize_for_filename;

use super::{load_formatter, print_rendered};
use crate::GlobalArgs;

/// Which field a command renders.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Date,
    Name,
    Place,
}

/// Arguments for the field commands.
#[derive(Debug, clap::Args)]
pub struct FieldArgs {
    /// Raw field text (e.g. "Abt 1850-06", "John Robert Smith")
    pub input: String,

    /// Sub-template; defaults to the settings file, then the built-in default
    #[arg(short, long)]
    pub template: Option<String>,

    /// Collapse whitespace to '-' for use in a filename
    #[arg(long)]
    pub sanitize: bool,
}

/// Run a field command.
pub fn run_field(kind: FieldKind, args: FieldArgs, global: &GlobalArgs) -> miette::Result<i32> {
    let mut formatter = match load_formatter(global) {
        Ok(formatter) => formatter,
        Err(code) => return Ok(code),
    };

    let template = args.template.as_deref();
    let rendered = match kind {
        FieldKind::Date => formatter.date(&args.input, template),
        FieldKind::Name => formatter.name(&args.input, template),
        FieldKind::Place => formatter.place(&args.input, template),
    };
    let rendered = if args.sanitize {
        sanitize_for_filename(&rendered)
    } else {
        rendered
    };

    Ok(print_rendered(global, rendered, formatter.warnings()))
}
