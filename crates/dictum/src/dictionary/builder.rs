use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use tracing::debug;

use crate::dictionary::error::DictionaryError;
use crate::dictionary::merge::merge;
use crate::dictionary::{EffectiveDictionary, RawDictionary};
use crate::types::{Entry, LanguageCode};

/// Registry of raw dictionaries and cache of the effective ones built from
/// them.
///
/// Each language is built at most once: the first [`build`](Self::build)
/// clones the raw tree, merges in the fallback chain and caches the result.
/// Later calls return the cached `Arc`. Concurrent first builds of the same
/// language may race; every writer computes the same value and the first one
/// stored is kept.
///
/// # Example
///
/// ```
/// use dictum::{DictionaryBuilder, RawDictionary};
///
/// let builder = DictionaryBuilder::new()
///     .with("en", RawDictionary::new().text("Footer.link", "Contact"))
///     .with("ru", RawDictionary::new().fallback("en"));
///
/// let ru = builder.build("ru").unwrap();
/// assert_eq!(ru.lookup("Footer.link").and_then(|e| e.as_text()), Some("Contact"));
/// ```
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    sources: BTreeMap<LanguageCode, RawDictionary>,
    cache: RwLock<HashMap<LanguageCode, Arc<EffectiveDictionary>>>,
}

impl DictionaryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a raw dictionary, returning the builder for chaining.
    pub fn with(mut self, language: impl Into<LanguageCode>, dictionary: RawDictionary) -> Self {
        self.register(language, dictionary);
        self
    }

    /// Register a raw dictionary, replacing any previous one for the language.
    ///
    /// Clears the cache, since any built language may inherit from this one.
    pub fn register(&mut self, language: impl Into<LanguageCode>, dictionary: RawDictionary) {
        self.sources.insert(language.into(), dictionary);
        self.cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Whether a raw dictionary is registered for the language.
    pub fn contains(&self, language: &str) -> bool {
        self.sources.contains_key(language)
    }

    /// All registered language codes, sorted.
    pub fn languages(&self) -> Vec<LanguageCode> {
        self.sources.keys().cloned().collect()
    }

    /// The raw dictionary registered for a language.
    pub fn raw(&self, language: &str) -> Option<&RawDictionary> {
        self.sources.get(language)
    }

    /// Number of languages built so far.
    pub fn cached_len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Get the effective dictionary for a language, building it on first use.
    ///
    /// # Errors
    ///
    /// - [`DictionaryError::UnknownLanguage`] if the language, or any language
    ///   named in its fallback chain, is not registered.
    /// - [`DictionaryError::CyclicFallback`] if the chain revisits a language.
    /// - [`DictionaryError::InvalidFallback`] if a `_fallback` entry is not text.
    pub fn build(&self, language: &str) -> Result<Arc<EffectiveDictionary>, DictionaryError> {
        self.build_with_ancestry(language, &mut Vec::new())
    }

    /// Build `language`, where `ancestry` lists the languages whose builds are
    /// in progress further up the chain.
    fn build_with_ancestry(
        &self,
        language: &str,
        ancestry: &mut Vec<LanguageCode>,
    ) -> Result<Arc<EffectiveDictionary>, DictionaryError> {
        if ancestry.iter().any(|code| code == language) {
            let mut chain = ancestry.clone();
            chain.push(LanguageCode::from(language));
            return Err(DictionaryError::CyclicFallback { chain });
        }
        if let Some(built) = self.cached(language) {
            return Ok(built);
        }

        let raw = self
            .sources
            .get(language)
            .ok_or_else(|| DictionaryError::UnknownLanguage {
                language: LanguageCode::from(language),
            })?;

        let parent = match raw.fallback_entry() {
            None => None,
            Some(Entry::Text(code)) => Some(code.as_str()),
            Some(_) => {
                return Err(DictionaryError::InvalidFallback {
                    language: LanguageCode::from(language),
                });
            }
        };

        let mut entries = raw.entries().clone();
        if let Some(parent) = parent {
            ancestry.push(LanguageCode::from(language));
            let inherited = self.build_with_ancestry(parent, ancestry);
            ancestry.pop();
            merge(&mut entries, inherited?.entries());
        }

        debug!(
            language,
            fallback = parent.unwrap_or("-"),
            keys = entries.len(),
            "built dictionary"
        );

        let built = Arc::new(EffectiveDictionary::new(
            LanguageCode::from(language),
            entries,
        ));
        Ok(self.store(built))
    }

    fn cached(&self, language: &str) -> Option<Arc<EffectiveDictionary>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(language)
            .cloned()
    }

    /// Insert a freshly built dictionary unless another build got there first.
    fn store(&self, built: Arc<EffectiveDictionary>) -> Arc<EffectiveDictionary> {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache
            .entry(built.language().clone())
            .or_insert(built)
            .clone()
    }
}
