//! Implementation of the `gedname keys` command.

use gedname::Domain;
use gedname_semantics::{field_format, FieldFormat};

use super::check::DomainArg;
use crate::output::table::{format_keys_table, KeyRow};
use crate::GlobalArgs;

/// Arguments for the keys command.
#[derive(Debug, clap::Args)]
pub struct KeysArgs {
    /// Only list one domain's placeholders
    #[arg(long, value_enum, default_value_t = DomainArg::All)]
    pub domain: DomainArg,
}

/// Run the keys command.
pub fn run_keys(args: KeysArgs, global: &GlobalArgs) -> miette::Result<i32> {
    let domains: Vec<Domain> = match args.domain.domain() {
        Some(domain) => vec![domain],
        None => Domain::ALL.to_vec(),
    };

    let rows: Vec<KeyRow> = domains
        .into_iter()
        .flat_map(|domain| {
            domain
                .key_table()
                .iter()
                .map(move |&(placeholder, field)| KeyRow {
                    domain: domain.name(),
                    placeholder,
                    field,
                    format: describe(field_format(placeholder)),
                })
        })
        .collect();

    if global.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).expect("JSON serialization should not fail")
        );
    } else {
        println!("{}", format_keys_table(&rows));
    }
    Ok(exitcode::OK)
}

fn describe(format: FieldFormat) -> &'static str {
    match format {
        FieldFormat::Verbatim => "as written",
        FieldFormat::PadTwo => "zero-padded to 2 digits",
        FieldFormat::TwoDigitYear => "last 2 digits of year",
    }
}
