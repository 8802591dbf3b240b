//! Error types for key resolution and template invocation.

use strsim::levenshtein;
use thiserror::Error;

use crate::dictionary::DictionaryError;
use crate::format::DateFormatError;
use crate::types::Value;

/// An error that occurred while translating a key.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The dictionary for the language could not be built.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// A segment of the key does not exist in the dictionary.
    #[error("key '{key}' is not found at '{segment}'{}", format_suggestions(suggestions))]
    KeyNotFound {
        key: String,
        segment: String,
        suggestions: Vec<String>,
    },

    /// The key names a node, not text or a template.
    #[error("key '{key}' names a group of translations, not a single entry")]
    NotALeaf { key: String },

    /// The template behind the key failed.
    #[error("template '{key}' failed: {source}")]
    Template {
        key: String,
        #[source]
        source: TemplateError,
    },
}

/// An error raised by a template entry.
///
/// Templates and their callers agree on arguments through the translation
/// data; these errors report calls that break that agreement.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Fewer positional arguments than the template reads.
    #[error("missing argument {index}, got {count}")]
    MissingArgument { index: usize, count: usize },

    /// An argument has the wrong type.
    #[error("argument {index} must be a {expected}, got {found}")]
    ArgumentType {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// Date formatting inside the template failed.
    #[error(transparent)]
    Date(#[from] DateFormatError),

    /// Any other template-specific failure.
    #[error("{0}")]
    Message(String),
}

impl TemplateError {
    /// Create a free-form template error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    pub(crate) fn argument_type(index: usize, expected: &'static str, found: &Value) -> Self {
        Self::ArgumentType {
            index,
            expected,
            found: found.kind(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Find keys within a small edit distance of `target`.
///
/// Keys of up to three characters allow one edit, longer keys two. Returns at
/// most three candidates, closest first, ties in input order.
pub fn compute_suggestions<S: AsRef<str>>(target: &str, available: &[S]) -> Vec<String> {
    let max_distance = if target.chars().count() <= 3 { 1 } else { 2 };

    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| AsRef::<str>::as_ref(candidate))
        .filter(|candidate| *candidate != target)
        .map(|candidate| (levenshtein(target, candidate), candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort_by_key(|(distance, _)| *distance);

    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
