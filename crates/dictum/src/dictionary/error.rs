//! Error types for dictionary building.

use thiserror::Error;

use crate::types::LanguageCode;

/// An error that occurred while building an effective dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    /// No raw dictionary is registered for the language.
    #[error("unknown language '{language}'")]
    UnknownLanguage { language: LanguageCode },

    /// The fallback chain revisits a language that is still being built.
    #[error("cyclic fallback chain: {}", chain.iter().map(LanguageCode::as_str).collect::<Vec<_>>().join(" -> "))]
    CyclicFallback { chain: Vec<LanguageCode> },

    /// The `_fallback` entry is not a plain language code.
    #[error("'_fallback' of language '{language}' must be text naming a language")]
    InvalidFallback { language: LanguageCode },
}
