//! Translation dictionaries with fallback chains.
//!
//! Each language registers a [`RawDictionary`]: a tree of text and template
//! leaves, optionally naming a parent language under `_fallback`. The
//! [`DictionaryBuilder`] merges every language with its fallback chain once
//! and caches the result. A [`Translator`] resolves dotted keys such as
//! `"Footer.preLink"` against the merged tree, and templates use
//! [`plural`], [`gender`], [`NumberFormatter`] and [`DateFormatter`] to
//! produce grammatical text. [`TranslationContext`] tracks the user's
//! language.

pub mod context;
pub mod dictionary;
pub mod format;
pub mod translate;
pub mod types;

pub use context::{LanguageObserver, Selection, TranslationContext, UNIVERSAL_LANGUAGE};
pub use dictionary::{DictionaryBuilder, DictionaryError, EffectiveDictionary, RawDictionary};
pub use format::{
    ChronoBackend, DateBackend, DateFormatError, DateFormatter, FormatOptions, Formats, Gender,
    NumberFormatter, PluralCount, RelativeTime, gender, gender_with_neuter, plural,
    plural_slavic,
};
pub use translate::{
    Args, ScopedTranslator, TemplateError, TranslateError, Translator, compute_suggestions,
    resolve,
};
pub use types::{Entry, LanguageCode, Node, Template, Value};

/// Creates a `Vec<Value>` of positional template arguments.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings and
/// timestamps can be mixed.
///
/// # Example
///
/// ```
/// use dictum::{values, Value};
///
/// let args = values![3, "female"];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args[0].as_number(), Some(3));
/// assert_eq!(args[1].as_string(), Some("female"));
/// ```
#[macro_export]
macro_rules! values {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![ $( ::std::convert::Into::<$crate::Value>::into($value) ),+ ]
    };
}
