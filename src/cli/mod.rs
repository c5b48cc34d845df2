//! CLI layer: argument parsing, command dispatch, and output rendering.

pub mod args;

pub use args::*;

use clap::{Parser, Subcommand};

use locator::index::build_report;
use locator::locate::{NameMatch, QueryOptions, Scope};
use locator::report::Report;
use locator::LocatorError;

// ─── CLI ─────────────────────────────────────────────────────────────

/// Method location and call-reference index: find where methods are
/// declared and what they call, straight from the AST
#[derive(Parser, Debug)]
#[command(name = "locator", version, about, after_help = "\
Run 'locator <COMMAND> --help' for detailed options and examples.\n\
Common options: -d <DIR> (directory), -e <EXT> (extension filter), --json")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Locate declarations of a method and the calls its body makes
    Find(FindArgs),

    /// List method invocations per file or per declaration
    Calls(CallsArgs),
}

// ─── Main entry point ───────────────────────────────────────────────

pub fn run() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Find(args) => cmd_find(args),
        Commands::Calls(args) => cmd_calls(args),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

// ─── Subcommands ────────────────────────────────────────────────────

fn cmd_find(args: FindArgs) -> Result<(), LocatorError> {
    let extensions = split_extensions(&args.ext);
    let target = NameMatch::Exact(args.method.clone());
    let options = QueryOptions {
        scope: Scope::SingleDeclaration,
        include_nested_declarations: args.include_nested.then_some(true),
    };
    let report = build_report(&args.dir, &extensions, args.threads, &target, &options)?;
    emit(&report, args.json)
}

fn cmd_calls(args: CallsArgs) -> Result<(), LocatorError> {
    let extensions = split_extensions(&args.ext);
    let target = match &args.method {
        Some(name) => NameMatch::Exact(name.clone()),
        None => NameMatch::Any,
    };
    let options = QueryOptions {
        scope: Scope::WholeFile,
        include_nested_declarations: args.exclude_nested.then_some(false),
    };
    let report = build_report(&args.dir, &extensions, args.threads, &target, &options)?;
    emit(&report, args.json)
}

fn split_extensions(ext: &str) -> Vec<String> {
    ext.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn emit(report: &Report, json: bool) -> Result<(), LocatorError> {
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
