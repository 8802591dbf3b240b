use std::sync::Arc;

use crate::dictionary::EffectiveDictionary;
use crate::format::{DateBackend, Formats};
use crate::translate::{Args, TranslateError, compute_suggestions};
use crate::types::{Entry, LanguageCode, Node, Value};

/// Resolve a dotted key against a dictionary and render the entry it names.
///
/// Text entries are returned verbatim and `args` is ignored. Template entries
/// are invoked with `args` and `formats`.
///
/// # Errors
///
/// - [`TranslateError::KeyNotFound`] naming the first segment that does not
///   exist, including a segment that tries to descend into a leaf.
/// - [`TranslateError::NotALeaf`] if the key names a node.
/// - [`TranslateError::Template`] if the template fails.
pub fn resolve(
    dictionary: &EffectiveDictionary,
    formats: &Formats,
    key: &str,
    args: &[Value],
) -> Result<String, TranslateError> {
    let mut segments = key.split('.');
    let first = segments.next().unwrap_or_default();
    let mut entry = child(dictionary.entries(), key, first)?;

    for segment in segments {
        let Entry::Node(children) = entry else {
            return Err(TranslateError::KeyNotFound {
                key: key.to_string(),
                segment: segment.to_string(),
                suggestions: Vec::new(),
            });
        };
        entry = child(children, key, segment)?;
    }

    match entry {
        Entry::Text(text) => Ok(text.clone()),
        Entry::Template(template) => {
            template
                .call(&Args::new(args, formats))
                .map_err(|source| TranslateError::Template {
                    key: key.to_string(),
                    source,
                })
        }
        Entry::Node(_) => Err(TranslateError::NotALeaf {
            key: key.to_string(),
        }),
    }
}

fn child<'d>(node: &'d Node, key: &str, segment: &str) -> Result<&'d Entry, TranslateError> {
    node.get(segment).ok_or_else(|| {
        let siblings: Vec<&str> = node.keys().map(String::as_str).collect();
        TranslateError::KeyNotFound {
            key: key.to_string(),
            segment: segment.to_string(),
            suggestions: compute_suggestions(segment, &siblings),
        }
    })
}

/// A built dictionary bound to the formatters of its language.
///
/// Cheap to clone: the dictionary is shared.
///
/// # Example
///
/// ```
/// use dictum::{DictionaryBuilder, RawDictionary, Translator, values};
///
/// let builder = DictionaryBuilder::new().with(
///     "en",
///     RawDictionary::new().template("Jury.count", |args| {
///         let n = args.number(0)?;
///         Ok(format!("{n} {}", dictum::plural(n, "juror", "jurors")))
///     }),
/// );
///
/// let translator = Translator::with_default_backend(builder.build("en").unwrap());
/// assert_eq!(translator.translate("Jury.count", &values![3]).unwrap(), "3 jurors");
/// ```
#[derive(Debug, Clone)]
pub struct Translator {
    dictionary: Arc<EffectiveDictionary>,
    formats: Formats,
}

impl Translator {
    /// Bind a dictionary to its formatters, using `backend` for dates.
    pub fn new(dictionary: Arc<EffectiveDictionary>, backend: Arc<dyn DateBackend>) -> Self {
        let formats = Formats::for_dictionary(&dictionary, backend);
        Self {
            dictionary,
            formats,
        }
    }

    /// Bind a dictionary to its formatters, using the chrono date backend.
    pub fn with_default_backend(dictionary: Arc<EffectiveDictionary>) -> Self {
        let formats = Formats::for_dictionary_default(&dictionary);
        Self {
            dictionary,
            formats,
        }
    }

    /// Language of the underlying dictionary.
    pub fn language(&self) -> &LanguageCode {
        self.dictionary.language()
    }

    /// The underlying dictionary.
    pub fn dictionary(&self) -> &Arc<EffectiveDictionary> {
        &self.dictionary
    }

    /// Formatters of the dictionary's language.
    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    /// Translate a dotted key with positional arguments.
    pub fn translate(&self, key: &str, args: &[Value]) -> Result<String, TranslateError> {
        resolve(&self.dictionary, &self.formats, key, args)
    }

    /// A translator that prefixes every key with `prefix.`.
    pub fn scoped(&self, prefix: impl Into<String>) -> ScopedTranslator {
        ScopedTranslator {
            translator: self.clone(),
            prefix: prefix.into(),
        }
    }
}

/// A translator for one section of the dictionary, typically one view.
#[derive(Debug, Clone)]
pub struct ScopedTranslator {
    translator: Translator,
    prefix: String,
}

impl ScopedTranslator {
    /// The key prefix, without the trailing dot.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The unscoped translator.
    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Translate `prefix.key`.
    pub fn tr(&self, key: &str, args: &[Value]) -> Result<String, TranslateError> {
        self.translator
            .translate(&format!("{}.{key}", self.prefix), args)
    }
}
