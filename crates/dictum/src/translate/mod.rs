//! Key resolution.
//!
//! Walks dotted keys through an effective dictionary and turns the leaf it
//! finds into text, invoking template leaves with positional arguments and
//! the formatters of the dictionary's language.

mod args;
mod error;
mod translator;

pub use args::Args;
pub use error::{TemplateError, TranslateError, compute_suggestions};
pub use translator::{ScopedTranslator, Translator, resolve};
