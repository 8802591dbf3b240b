//! dictum CLI entry point.
//!
//! Command-line tools for directories of `<code>.json` translation files:
//! - `dictum check` - Parse and build every language
//! - `dictum coverage` - Report translated, inherited and missing keys
//! - `dictum eval` - Translate a single key
//! - `dictum number` - Format a number with given separators

mod commands;
mod loader;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_eval, run_number, CheckArgs, CoverageArgs, EvalArgs, NumberArgs,
};
use tracing_subscriber::EnvFilter;

/// Translation dictionary tools.
#[derive(Debug, Parser)]
#[command(name = "dictum")]
#[command(about = "Translation dictionary tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Log dictionary building at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

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
    /// Parse and build every language in a translations directory
    Check(CheckArgs),
    /// Report translation coverage against a source language
    Coverage(CoverageArgs),
    /// Translate a key
    Eval(EvalArgs),
    /// Format a number
    Number(NumberArgs),
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

/// Log to stderr; `--verbose` wins over `RUST_LOG`.
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dictum=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(stderr)
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

    let result = match cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
        Commands::Eval(args) => run_eval(args),
        Commands::Number(args) => run_number(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
