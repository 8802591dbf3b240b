use chrono::{DateTime, Utc};

use crate::format::{Formats, Gender};
use crate::translate::TemplateError;
use crate::types::{LanguageCode, Value};

/// Arguments handed to a template entry.
///
/// Wraps the caller's positional values together with the formatter bundle
/// of the language being translated, so templates can pluralize and format
/// numbers and dates consistently with that language.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    values: &'a [Value],
    formats: &'a Formats,
}

impl<'a> Args<'a> {
    /// Bundle positional values with a formatter bundle.
    pub fn new(values: &'a [Value], formats: &'a Formats) -> Self {
        Self { values, formats }
    }

    /// All positional values.
    pub fn values(&self) -> &'a [Value] {
        self.values
    }

    /// Number of positional values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were passed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Formatters bound to the language being translated.
    pub fn formats(&self) -> &'a Formats {
        self.formats
    }

    /// Language being translated.
    pub fn language(&self) -> &'a LanguageCode {
        self.formats.language()
    }

    /// The value at `index`.
    pub fn get(&self, index: usize) -> Result<&'a Value, TemplateError> {
        self.values
            .get(index)
            .ok_or(TemplateError::MissingArgument {
                index,
                count: self.values.len(),
            })
    }

    /// The integer at `index`.
    pub fn number(&self, index: usize) -> Result<i64, TemplateError> {
        let value = self.get(index)?;
        value
            .as_number()
            .ok_or_else(|| TemplateError::argument_type(index, "number", value))
    }

    /// The number at `index`, widening integers.
    pub fn float(&self, index: usize) -> Result<f64, TemplateError> {
        let value = self.get(index)?;
        value
            .as_float()
            .ok_or_else(|| TemplateError::argument_type(index, "float", value))
    }

    /// The string at `index`.
    pub fn text(&self, index: usize) -> Result<&'a str, TemplateError> {
        let value = self.get(index)?;
        value
            .as_string()
            .ok_or_else(|| TemplateError::argument_type(index, "string", value))
    }

    /// The timestamp at `index`.
    pub fn date(&self, index: usize) -> Result<DateTime<Utc>, TemplateError> {
        let value = self.get(index)?;
        value
            .as_date()
            .ok_or_else(|| TemplateError::argument_type(index, "date", value))
    }

    /// The gender named by the string at `index`.
    ///
    /// A missing or non-string argument is treated as unset, which selects
    /// the neuter form.
    pub fn gender(&self, index: usize) -> Gender {
        Gender::from(self.values.get(index).and_then(Value::as_string))
    }
}
