//! Coverage command implementation.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::Args;
use dictum::LanguageCode;
use miette::{miette, IntoDiagnostic, Result};
use serde::Serialize;

use crate::loader::load_builder;
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Directory containing <code>.json translation files.
    #[arg(long)]
    pub translations: PathBuf,

    /// Language whose keys every other language should provide.
    #[arg(long, default_value = "en")]
    pub source: String,

    /// Languages to check coverage for (comma-separated). Defaults to every
    /// language except the source.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<String>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    inherited: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
///
/// A source key counts as translated if the language's own file defines it,
/// inherited if it resolves only through the fallback chain, and missing
/// otherwise. Incomplete means anything missing; inherited keys are fine.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let builder = load_builder(&args.translations)?;

    let source = builder
        .build(&args.source)
        .map_err(|e| miette!("Cannot build source language '{}': {}", args.source, e))?;
    let source_keys = source.leaf_keys();
    let source_count = source_keys.len();

    let languages: Vec<String> = if args.lang.is_empty() {
        builder
            .languages()
            .iter()
            .map(LanguageCode::to_string)
            .filter(|lang| *lang != args.source)
            .collect()
    } else {
        args.lang.clone()
    };

    // Collect coverage data for each language
    let mut coverage_data: Vec<LanguageCoverage> = Vec::new();

    for lang in &languages {
        let Some(raw) = builder.raw(lang) else {
            // No file for the language - all keys are missing
            coverage_data.push(LanguageCoverage {
                language: lang.clone(),
                translated: 0,
                inherited: 0,
                missing: source_keys.clone(),
            });
            continue;
        };

        let own: HashSet<String> = raw.leaf_keys().into_iter().collect();
        let built = builder
            .build(lang)
            .map_err(|e| miette!("Cannot build language '{}': {}", lang, e))?;

        let mut translated = 0;
        let mut inherited = 0;
        let mut missing = Vec::new();
        for key in &source_keys {
            if own.contains(key) {
                translated += 1;
            } else if built.lookup(key).is_some() {
                inherited += 1;
            } else {
                missing.push(key.clone());
            }
        }

        coverage_data.push(LanguageCoverage {
            language: lang.clone(),
            translated,
            inherited,
            missing,
        });
    }

    // Check if any translation is incomplete
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    // Output results
    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                inherited: c.inherited,
                total: source_count,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        // Print ASCII table
        let table = format_coverage_table(source_count, &coverage_data);
        println!("{}", table);

        // Print missing keys per language
        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    // Determine exit code
    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
