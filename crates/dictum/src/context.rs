//! Session-scoped translation state.
//!
//! A [`TranslationContext`] holds the language selected by the user and hands
//! out translators for it. It is passed explicitly to whatever renders text;
//! there is no global instance.

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use bon::Builder;
use tracing::{debug, warn};

use crate::dictionary::{DictionaryBuilder, DictionaryError};
use crate::format::{ChronoBackend, DateBackend, Formats};
use crate::translate::{ScopedTranslator, TranslateError, Translator};
use crate::types::{LanguageCode, Value};

/// Language used when the selected one is not registered.
pub const UNIVERSAL_LANGUAGE: &str = "en";

/// Callback invoked after a successful language switch.
pub type LanguageObserver = Box<dyn Fn(&LanguageCode) + Send + Sync>;

/// Which language the user has chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing chosen yet: the configured default applies.
    #[default]
    Default,

    /// Chosen through [`TranslationContext::set_language`].
    Explicit(LanguageCode),
}

/// Active language plus access to translators and formatters for it.
///
/// Reads never fail because of the language setting: if the selected (or
/// default) language has no dictionary, [`UNIVERSAL_LANGUAGE`] is used
/// instead, and failing that the first registered language.
///
/// # Example
///
/// ```
/// use dictum::{DictionaryBuilder, RawDictionary, TranslationContext};
///
/// let dictionaries = DictionaryBuilder::new()
///     .with("en", RawDictionary::new().text("Personal.title", "My page"))
///     .with("ru", RawDictionary::new().fallback("en").text("Personal.title", "Моя страница"));
///
/// let mut context = TranslationContext::builder()
///     .dictionaries(dictionaries)
///     .default_language("en")
///     .build();
///
/// assert_eq!(context.translate("Personal.title", &[]).unwrap(), "My page");
/// context.set_language("ru").unwrap();
/// assert_eq!(context.translate("Personal.title", &[]).unwrap(), "Моя страница");
/// ```
#[derive(Builder)]
#[builder(on(LanguageCode, into))]
pub struct TranslationContext {
    /// Registered dictionaries, shared between contexts.
    #[builder(into)]
    dictionaries: Arc<DictionaryBuilder>,

    /// Language used until one is selected.
    default_language: LanguageCode,

    /// Backend for date formatting.
    #[builder(default = default_date_backend())]
    date_backend: Arc<dyn DateBackend>,

    /// Notified with the new code after each successful switch.
    on_set_language: Option<LanguageObserver>,

    #[builder(skip)]
    selection: Selection,
}

fn default_date_backend() -> Arc<dyn DateBackend> {
    Arc::new(ChronoBackend)
}

impl TranslationContext {
    /// The current selection state.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected language, or the default when nothing is selected. Not
    /// necessarily registered.
    pub fn selected_language(&self) -> &LanguageCode {
        match &self.selection {
            Selection::Default => &self.default_language,
            Selection::Explicit(code) => code,
        }
    }

    /// The language translations are served in.
    ///
    /// An unregistered selection falls back to [`UNIVERSAL_LANGUAGE`], or to
    /// the first registered language when that is missing too.
    pub fn current_language(&self) -> LanguageCode {
        let selected = self.selected_language();
        if self.dictionaries.contains(selected) {
            return selected.clone();
        }

        let fallback = if self.dictionaries.contains(UNIVERSAL_LANGUAGE) {
            LanguageCode::from(UNIVERSAL_LANGUAGE)
        } else {
            self.dictionaries
                .languages()
                .into_iter()
                .next()
                .unwrap_or_else(|| LanguageCode::from(UNIVERSAL_LANGUAGE))
        };
        warn!(
            selected = %selected,
            fallback = %fallback,
            "selected language is not registered"
        );
        fallback
    }

    /// Switch to `language` and notify the observer.
    ///
    /// # Errors
    ///
    /// [`DictionaryError::UnknownLanguage`] if no dictionary is registered
    /// for `language`; the selection is left unchanged.
    pub fn set_language(
        &mut self,
        language: impl Into<LanguageCode>,
    ) -> Result<(), DictionaryError> {
        let language = language.into();
        if !self.dictionaries.contains(&language) {
            return Err(DictionaryError::UnknownLanguage { language });
        }

        debug!(language = %language, "language selected");
        self.selection = Selection::Explicit(language.clone());
        if let Some(observer) = &self.on_set_language {
            observer(&language);
        }
        Ok(())
    }

    /// Translator for the current language.
    pub fn translator(&self) -> Result<Translator, DictionaryError> {
        self.translator_for(&self.current_language())
    }

    /// Translator for an arbitrary registered language.
    pub fn translator_for(&self, language: &str) -> Result<Translator, DictionaryError> {
        let dictionary = self.dictionaries.build(language)?;
        Ok(Translator::new(dictionary, Arc::clone(&self.date_backend)))
    }

    /// Translate a key in the current language.
    pub fn translate(&self, key: &str, args: &[Value]) -> Result<String, TranslateError> {
        Ok(self.translator()?.translate(key, args)?)
    }

    /// Translate a key in `language`, regardless of the current one.
    pub fn translate_from(
        &self,
        language: &str,
        key: &str,
        args: &[Value],
    ) -> Result<String, TranslateError> {
        Ok(self.translator_for(language)?.translate(key, args)?)
    }

    /// Translator for the current language bound to a key prefix.
    pub fn scoped(&self, prefix: impl Into<String>) -> Result<ScopedTranslator, DictionaryError> {
        Ok(self.translator()?.scoped(prefix))
    }

    /// Formatters for the current language.
    pub fn formats(&self) -> Result<Formats, DictionaryError> {
        let dictionary = self.dictionaries.build(&self.current_language())?;
        Ok(Formats::for_dictionary(
            &dictionary,
            Arc::clone(&self.date_backend),
        ))
    }

    /// All registered languages, sorted.
    pub fn all_languages(&self) -> Vec<LanguageCode> {
        self.dictionaries.languages()
    }

    /// The shared dictionary registry.
    pub fn dictionaries(&self) -> &Arc<DictionaryBuilder> {
        &self.dictionaries
    }
}

impl Debug for TranslationContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("TranslationContext")
            .field("default_language", &self.default_language)
            .field("selection", &self.selection)
            .field("languages", &self.dictionaries.languages())
            .finish_non_exhaustive()
    }
}
