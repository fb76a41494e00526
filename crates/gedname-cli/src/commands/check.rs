//! Implementation of the `gedname check` command.

use clap::ValueEnum;
use gedname::interpreter::lint_template;
use gedname::parser::{parse_template, Segment};
use gedname::{Domain, KeyMap};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::output::diagnostic::TemplateDiagnostic;
use crate::GlobalArgs;

/// Placeholder set a template is checked against.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DomainArg {
    Date,
    Name,
    Place,
    All,
}

impl DomainArg {
    /// The selected domain, or `None` for all of them.
    pub fn domain(self) -> Option<Domain> {
        match self {
            DomainArg::Date => Some(Domain::Date),
            DomainArg::Name => Some(Domain::Name),
            DomainArg::Place => Some(Domain::Place),
            DomainArg::All => None,
        }
    }

    fn key_map(self) -> &'static KeyMap {
        self.domain().map_or(KeyMap::combined(), KeyMap::for_domain)
    }
}

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Template to check
    pub template: String,

    /// Placeholder set to check against
    #[arg(long, value_enum, default_value_t = DomainArg::All)]
    pub domain: DomainArg,
}

/// JSON output for one lint finding.
#[derive(Serialize)]
pub struct Finding {
    pub kind: &'static str,
    pub name: String,
    pub offset: usize,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs, global: &GlobalArgs) -> miette::Result<i32> {
    let key_map = args.domain.key_map();
    let mut findings = Vec::new();
    let mut reports = Vec::new();
    let mut offset = 0;

    for segment in parse_template(&args.template).segments {
        match segment {
            Segment::Literal(text) => offset += text.len(),
            Segment::Placeholder { raw, .. } => {
                for diagnostic in lint_template(&raw, key_map) {
                    reports.push(TemplateDiagnostic::new(
                        &args.template,
                        offset,
                        raw.len(),
                        &diagnostic,
                    ));
                    findings.push(Finding {
                        kind: diagnostic.kind(),
                        name: diagnostic.subject().to_string(),
                        offset,
                        message: diagnostic.to_string(),
                        suggestions: diagnostic.suggestions().to_vec(),
                    });
                }
                offset += raw.len();
            }
        }
    }

    if global.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&findings).expect("JSON serialization should not fail")
        );
    } else if reports.is_empty() {
        println!(
            "{} {}",
            "ok".if_supports_color(Stream::Stdout, |text| text.green()),
            args.template
        );
    } else {
        for report in reports {
            eprintln!("{:?}", miette::Report::new(report));
        }
        let summary = format!("{} problem(s) found", findings.len());
        eprintln!(
            "{}",
            summary.if_supports_color(Stream::Stderr, |text| text.red())
        );
    }

    if findings.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
