use std::borrow::Borrow;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// A short identifier for a supported language, such as `"en"`, `"ru"` or
/// `"sah"`.
///
/// Codes are opaque: they are compared as plain strings and never parsed or
/// canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Create a new language code from any string-like value.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the language code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for LanguageCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&LanguageCode> for LanguageCode {
    fn from(code: &LanguageCode) -> Self {
        code.clone()
    }
}

impl PartialEq<str> for LanguageCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LanguageCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}
