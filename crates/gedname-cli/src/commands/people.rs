//! Implementation of the `gedname people` command.

use std::fs::read_to_string;
use std::io::{read_to_string as read_all, stdin};
use std::path::PathBuf;

use gedname::Person;

use super::{load_formatter, print_rendered};
use crate::GlobalArgs;

/// Arguments for the people command.
#[derive(Debug, clap::Args)]
pub struct PeopleArgs {
    /// JSON file with an array of people, or '-' for stdin
    pub file: PathBuf,

    /// Name template with optional '|delimiter' suffix (e.g. "{SURNAME:upper}.{GIVEN}|+")
    #[arg(short, long)]
    pub template: Option<String>,
}

/// Run the people command.
pub fn run_people(args: PeopleArgs, global: &GlobalArgs) -> miette::Result<i32> {
    let mut formatter = match load_formatter(global) {
        Ok(formatter) => formatter,
        Err(code) => return Ok(code),
    };

    let content = if args.file.as_os_str() == "-" {
        read_all(stdin())
    } else {
        read_to_string(&args.file)
    };
    let content = match content {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Cannot read people file {}: {}", args.file.display(), e);
            return Ok(exitcode::NOINPUT);
        }
    };

    let people: Vec<Person> = match serde_json::from_str(&content) {
        Ok(people) => people,
        Err(e) => {
            eprintln!("Invalid people JSON in {}: {}", args.file.display(), e);
            return Ok(exitcode::DATAERR);
        }
    };
    tracing::debug!(count = people.len(), "loaded people");

    let rendered = formatter.additional_people(&people, args.template.as_deref());
    Ok(print_rendered(global, rendered, formatter.warnings()))
}
