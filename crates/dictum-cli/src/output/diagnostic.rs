//! Miette diagnostic wrapper for malformed translation files.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde_json::error::Category;
use thiserror::Error;

/// A miette-compatible diagnostic for JSON errors in a translation file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid translation file: {message}")]
#[diagnostic(code(dictum::json))]
pub struct JsonDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl JsonDiagnostic {
    /// Create a diagnostic from a serde_json error with source context.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        // Convert line:column to byte offset.
        // Sum of (line_length + 1) for lines before error line, plus column.
        let offset = content
            .lines()
            .take(err.line().saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + err.column().saturating_sub(1);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());

        let help = match err.classify() {
            Category::Data => Some(
                "translation files hold nested objects whose leaves are strings".to_string(),
            ),
            Category::Io | Category::Syntax | Category::Eof => None,
        };

        JsonDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }

    /// The underlying error message, for JSON output.
    pub fn message(&self) -> &str {
        &self.message
    }
}
