use crate::dictionary::raw::{DECIMAL_SEPARATOR_KEY, FALLBACK_KEY, GROUP_SEPARATOR_KEY};
use crate::types::{Entry, LanguageCode, Node};

/// The fully merged translation tree of one language.
///
/// Produced by [`DictionaryBuilder::build`](crate::DictionaryBuilder::build)
/// and shared behind an `Arc`. There is no way to mutate it after
/// construction.
#[derive(Debug)]
pub struct EffectiveDictionary {
    language: LanguageCode,
    entries: Node,
}

impl EffectiveDictionary {
    pub(crate) fn new(language: LanguageCode, entries: Node) -> Self {
        Self { language, entries }
    }

    /// The language this dictionary was built for.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Root entries, including distinguished keys.
    pub fn entries(&self) -> &Node {
        &self.entries
    }

    /// Get a root entry by name.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Walk a dotted key, returning `None` on any missing segment.
    ///
    /// Use [`resolve`](crate::resolve) for error reporting and template
    /// invocation.
    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut entry = self.entries.get(first)?;
        for segment in segments {
            entry = entry.as_node()?.get(segment)?;
        }
        Some(entry)
    }

    /// The declared (own) fallback language, if any.
    pub fn fallback(&self) -> Option<&str> {
        self.text_setting(FALLBACK_KEY)
    }

    /// Digit group separator, inherited through the fallback chain.
    pub fn group_separator(&self) -> Option<&str> {
        self.text_setting(GROUP_SEPARATOR_KEY)
    }

    /// Decimal separator, inherited through the fallback chain.
    pub fn decimal_separator(&self) -> Option<&str> {
        self.text_setting(DECIMAL_SEPARATOR_KEY)
    }

    /// Dotted paths of every leaf, sorted, skipping distinguished root keys.
    pub fn leaf_keys(&self) -> Vec<String> {
        leaf_keys(&self.entries)
    }

    fn text_setting(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Entry::as_text)
    }
}

/// Whether a root key configures the dictionary rather than holding text.
pub(crate) fn is_setting(key: &str) -> bool {
    matches!(key, FALLBACK_KEY | GROUP_SEPARATOR_KEY | DECIMAL_SEPARATOR_KEY)
}

pub(crate) fn leaf_keys(entries: &Node) -> Vec<String> {
    let mut keys = Vec::new();
    for (name, entry) in entries {
        if !is_setting(name) {
            collect_leaf_keys(name, entry, &mut keys);
        }
    }
    keys
}

fn collect_leaf_keys(path: &str, entry: &Entry, out: &mut Vec<String>) {
    match entry {
        Entry::Node(children) => {
            for (name, child) in children {
                collect_leaf_keys(&format!("{path}.{name}"), child, out);
            }
        }
        Entry::Text(_) | Entry::Template(_) => out.push(path.to_string()),
    }
}
