//! Implementation of the `dictum eval` command.

use std::path::PathBuf;

use dictum::{TranslationContext, Value};
use miette::IntoDiagnostic;
use serde::Serialize;

use crate::loader::load_builder;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Directory containing <code>.json translation files
    #[arg(long)]
    pub translations: PathBuf,

    /// Language code for evaluation (e.g., en, de, ru)
    #[arg(long, required = true)]
    pub lang: String,

    /// Dotted key to translate (e.g., Footer.preLink)
    pub key: String,

    /// Positional template arguments
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
}

/// JSON output for eval failures.
#[derive(Serialize)]
pub struct EvalFailure {
    pub error: String,
}

/// Parse an argument as an integer, then a float, falling back to text.
fn parse_value(s: &str) -> Value {
    if let Ok(n) = s.parse::<i64>() {
        Value::from(n)
    } else if let Ok(f) = s.parse::<f64>() {
        Value::from(f)
    } else {
        Value::from(s)
    }
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let context = TranslationContext::builder()
        .dictionaries(load_builder(&args.translations)?)
        .default_language(args.lang.as_str())
        .build();

    let values: Vec<Value> = args.args.iter().map(|arg| parse_value(arg)).collect();

    match context.translate_from(&args.lang, &args.key, &values) {
        Ok(result) => {
            if args.json {
                let output = EvalResult { result };
                println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                let output = EvalFailure {
                    error: e.to_string(),
                };
                eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
            } else {
                eprintln!("Evaluation error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
