//! gedname CLI entry point.
//!
//! Provides command-line access to the filename templates:
//! - `gedname date|name|place` - Render one field through its sub-template
//! - `gedname people` - Render a JSON list of additional people
//! - `gedname eval` - Render a template against explicit field values
//! - `gedname check` - Lint a template
//! - `gedname keys` - List placeholders

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_eval, run_field, run_keys, run_people, CheckArgs, EvalArgs, FieldArgs,
    FieldKind, KeysArgs, PeopleArgs,
};
use tracing_subscriber::EnvFilter;

/// Genealogical filename template tools.
#[derive(Debug, Parser)]
#[command(name = "gedname")]
#[command(about = "Genealogical filename template tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (JSON)
    #[arg(long, global = true, env = "GEDNAME_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a date through the date sub-template
    Date(FieldArgs),
    /// Render a name through the name sub-template
    Name(FieldArgs),
    /// Render a place through the place sub-template
    Place(FieldArgs),
    /// Render a JSON list of additional people
    People(PeopleArgs),
    /// Render a template against explicit field values
    Eval(EvalArgs),
    /// Report unknown placeholders and modifiers in a template
    Check(CheckArgs),
    /// List placeholders and the fields they read
    Keys(KeysArgs),
}

/// Global options shared by every command.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub settings: Option<PathBuf>,
    pub json: bool,
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send log events to stderr, filtered by `RUST_LOG` (default `warn`).
fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let global = GlobalArgs {
        settings: cli.settings,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Date(args) => run_field(FieldKind::Date, args, &global),
        Commands::Name(args) => run_field(FieldKind::Name, args, &global),
        Commands::Place(args) => run_field(FieldKind::Place, args, &global),
        Commands::People(args) => run_people(args, &global),
        Commands::Eval(args) => run_eval(args, &global),
        Commands::Check(args) => run_check(args, &global),
        Commands::Keys(args) => run_keys(args, &global),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
