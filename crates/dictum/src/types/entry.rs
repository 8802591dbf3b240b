use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::translate::{Args, TemplateError};

/// Signature of a template entry: positional arguments in, text out.
pub type TemplateFn = dyn Fn(&Args<'_>) -> Result<String, TemplateError> + Send + Sync;

/// A dictionary node: named children in sorted order.
pub type Node = BTreeMap<String, Entry>;

/// A template leaf: a shared function producing text from caller arguments.
///
/// Cloning a template clones the handle, not the function.
#[derive(Clone)]
pub struct Template(Arc<TemplateFn>);

impl Template {
    /// Wrap a closure as a template.
    pub fn new(
        f: impl Fn(&Args<'_>) -> Result<String, TemplateError> + Send + Sync + 'static,
    ) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the template with the given arguments.
    pub fn call(&self, args: &Args<'_>) -> Result<String, TemplateError> {
        (self.0)(args)
    }
}

impl Debug for Template {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Template(..)")
    }
}

/// One value in a translation tree.
///
/// Key resolution walks `Node`s segment by segment and stops at a `Text` or
/// `Template` leaf.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Literal text, returned verbatim.
    Text(String),

    /// Function of positional arguments.
    Template(Template),

    /// Nested entries.
    Node(Node),
}

impl Entry {
    /// Get this entry as literal text, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Entry::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get this entry as a nested node, if it is one.
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Entry::Node(node) => Some(node),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Entry::Text(_) => "text",
            Entry::Template(_) => "template",
            Entry::Node(_) => "node",
        }
    }
}

impl From<&str> for Entry {
    fn from(s: &str) -> Self {
        Entry::Text(s.to_string())
    }
}

impl From<String> for Entry {
    fn from(s: String) -> Self {
        Entry::Text(s)
    }
}

impl From<Template> for Entry {
    fn from(template: Template) -> Self {
        Entry::Template(template)
    }
}

impl From<Node> for Entry {
    fn from(node: Node) -> Self {
        Entry::Node(node)
    }
}

/// Serialized shape of an entry. Templates only exist in code.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Text(String),
    Node(BTreeMap<String, StoredEntry>),
}

impl From<StoredEntry> for Entry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Text(s) => Entry::Text(s),
            StoredEntry::Node(children) => Entry::Node(
                children
                    .into_iter()
                    .map(|(key, child)| (key, Entry::from(child)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        StoredEntry::deserialize(deserializer).map(Entry::from)
    }
}
