//! Selectors and formatters available to template entries.

mod date;
mod gender;
mod number;
mod plural;

use std::sync::Arc;

pub use date::{
    ChronoBackend, DateBackend, DateFormatError, DateFormatter, RelativeSpan, RelativeTime, Tense,
};
pub use gender::{Gender, gender, gender_with_neuter};
pub use number::{FormatOptions, MINUS_SIGN, NumberFormatter};
pub use plural::{PluralCount, plural, plural_slavic};

use crate::dictionary::EffectiveDictionary;
use crate::types::LanguageCode;

/// The number and date formatters of one language.
#[derive(Debug, Clone)]
pub struct Formats {
    language: LanguageCode,
    number: NumberFormatter,
    date: DateFormatter,
}

impl Formats {
    /// Bundle formatters for a language.
    pub fn new(language: impl Into<LanguageCode>, number: NumberFormatter, date: DateFormatter) -> Self {
        Self {
            language: language.into(),
            number,
            date,
        }
    }

    /// Formatters configured by a built dictionary's separators.
    pub fn for_dictionary(dictionary: &EffectiveDictionary, backend: Arc<dyn DateBackend>) -> Self {
        let language = dictionary.language().clone();
        Self {
            number: NumberFormatter::from_dictionary(dictionary),
            date: DateFormatter::new(language.clone(), backend),
            language,
        }
    }

    /// Like [`for_dictionary`](Self::for_dictionary) with [`ChronoBackend`].
    pub fn for_dictionary_default(dictionary: &EffectiveDictionary) -> Self {
        Self::for_dictionary(dictionary, Arc::new(ChronoBackend))
    }

    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    pub fn number(&self) -> &NumberFormatter {
        &self.number
    }

    pub fn date(&self) -> &DateFormatter {
        &self.date
    }

    /// Shorthand for `self.number().format(n, options)`.
    pub fn format_number(&self, n: f64, options: FormatOptions) -> String {
        self.number.format(n, options)
    }
}
