//! Implementation of the `dictum check` command.

use std::path::PathBuf;

use dictum::DictionaryBuilder;
use miette::{IntoDiagnostic, Report};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::loader::read_translations;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Directory containing <code>.json translation files
    #[arg(long)]
    pub translations: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-language check outcome.
#[derive(Debug, Serialize)]
struct LanguageCheck {
    language: String,
    keys: usize,
    error: Option<String>,
}

/// Run the check command.
///
/// Every file is parsed and every parsed language is built with its
/// fallback chain. Fails with `DATAERR` if anything is wrong.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let files = read_translations(&args.translations)?;

    let mut results: Vec<LanguageCheck> = Vec::new();
    let mut builder = DictionaryBuilder::new();
    for file in files {
        match file.parse() {
            Ok(raw) => builder.register(file.language, raw),
            Err(diagnostic) => {
                let error = diagnostic.message().to_string();
                if !args.json {
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(LanguageCheck {
                    language: file.language,
                    keys: 0,
                    error: Some(error),
                });
            }
        }
    }

    for language in builder.languages() {
        let check = match builder.build(&language) {
            Ok(dictionary) => LanguageCheck {
                language: language.to_string(),
                keys: dictionary.leaf_keys().len(),
                error: None,
            },
            Err(e) => LanguageCheck {
                language: language.to_string(),
                keys: 0,
                error: Some(e.to_string()),
            },
        };
        results.push(check);
    }
    results.sort_by(|a, b| a.language.cmp(&b.language));

    let failed = results.iter().any(|r| r.error.is_some());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results).into_diagnostic()?);
    } else {
        for result in &results {
            match &result.error {
                None => println!(
                    "{} {}: {} keys",
                    "ok".if_supports_color(Stream::Stdout, |t| t.green()),
                    result.language,
                    result.keys
                ),
                Some(error) => println!(
                    "{} {}: {}",
                    "error".if_supports_color(Stream::Stdout, |t| t.red()),
                    result.language,
                    error
                ),
            }
        }
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
