use serde::Deserialize;

use crate::dictionary::effective::leaf_keys;
use crate::translate::{Args, TemplateError};
use crate::types::{Entry, LanguageCode, Node, Template};

/// Root key naming the language a dictionary inherits missing keys from.
pub const FALLBACK_KEY: &str = "_fallback";

/// Root key holding the digit group separator for number formatting.
pub const GROUP_SEPARATOR_KEY: &str = "_group";

/// Root key holding the decimal separator for number formatting.
pub const DECIMAL_SEPARATOR_KEY: &str = "_decimal";

/// The as-authored translation tree for one language.
///
/// Besides translations, the root may carry the distinguished keys
/// [`FALLBACK_KEY`], [`GROUP_SEPARATOR_KEY`] and [`DECIMAL_SEPARATOR_KEY`].
/// Text-only dictionaries deserialize from nested string maps.
///
/// # Example
///
/// ```
/// use dictum::RawDictionary;
///
/// let ru = RawDictionary::new()
///     .fallback("en")
///     .separators("\u{a0}", ",")
///     .text("Footer.preLink", "Сообщить об ошибке можно ")
///     .template("Stats.articles", |args| {
///         let n = args.number(0)?;
///         Ok(format!("{n} {}", dictum::plural_slavic(n, "статья", "статьи", "статей")))
///     });
///
/// assert!(ru.fallback_entry().is_some());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawDictionary {
    entries: Node,
}

impl RawDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing tree.
    pub fn from_entries(entries: Node) -> Self {
        Self { entries }
    }

    /// All root entries, including distinguished keys.
    pub fn entries(&self) -> &Node {
        &self.entries
    }

    /// The raw `_fallback` entry, if declared.
    pub fn fallback_entry(&self) -> Option<&Entry> {
        self.entries.get(FALLBACK_KEY)
    }

    /// Dotted paths of the leaves authored in this dictionary, sorted.
    pub fn leaf_keys(&self) -> Vec<String> {
        leaf_keys(&self.entries)
    }

    /// Declare the language this dictionary inherits from.
    pub fn fallback(self, language: impl Into<LanguageCode>) -> Self {
        let language = language.into();
        self.entry(FALLBACK_KEY, language.as_str())
    }

    /// Declare the number separators for this language.
    pub fn separators(self, group: &str, decimal: &str) -> Self {
        self.entry(GROUP_SEPARATOR_KEY, group)
            .entry(DECIMAL_SEPARATOR_KEY, decimal)
    }

    /// Add a literal text leaf at a dotted path.
    pub fn text(self, path: &str, text: impl Into<String>) -> Self {
        self.entry(path, Entry::Text(text.into()))
    }

    /// Add a template leaf at a dotted path.
    pub fn template(
        self,
        path: &str,
        f: impl Fn(&Args<'_>) -> Result<String, TemplateError> + Send + Sync + 'static,
    ) -> Self {
        self.entry(path, Template::new(f))
    }

    /// Add any entry at a dotted path.
    pub fn entry(mut self, path: &str, entry: impl Into<Entry>) -> Self {
        self.insert(path, entry);
        self
    }

    /// Insert an entry at a dotted path, creating intermediate nodes.
    ///
    /// A leaf standing where an intermediate node is needed is replaced by an
    /// empty node. An existing entry at the final segment is overwritten.
    pub fn insert(&mut self, path: &str, entry: impl Into<Entry>) {
        let segments: Vec<&str> = path.split('.').collect();
        insert_at(&mut self.entries, &segments, entry.into());
    }
}

fn insert_at(node: &mut Node, segments: &[&str], entry: Entry) {
    match segments {
        [] => {}
        [last] => {
            node.insert((*last).to_string(), entry);
        }
        [first, rest @ ..] => {
            let slot = node
                .entry((*first).to_string())
                .or_insert_with(|| Entry::Node(Node::new()));
            match slot {
                Entry::Node(child) => insert_at(child, rest, entry),
                Entry::Text(_) | Entry::Template(_) => {
                    let mut child = Node::new();
                    insert_at(&mut child, rest, entry);
                    *slot = Entry::Node(child);
                }
            }
        }
    }
}

