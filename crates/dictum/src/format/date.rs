//! Locale-aware date rendering.
//!
//! [`DateFormatter`] binds a language to a [`DateBackend`], which owns the
//! calendar arithmetic and the locale data. [`ChronoBackend`] is the default.

use std::fmt::{Debug, Formatter, Result as FmtResult, Write};
use std::sync::Arc;

use chrono::{DateTime, Locale, Utc};
use thiserror::Error;

use crate::types::LanguageCode;

/// An error produced while rendering a date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateFormatError {
    /// The pattern contains an unknown or malformed specifier.
    #[error("invalid date pattern '{pattern}'")]
    InvalidPattern { pattern: String },
}

/// Renders dates for a language.
pub trait DateBackend: Send + Sync {
    /// Render `date` using a strftime-style `pattern`.
    fn format(
        &self,
        language: &LanguageCode,
        date: DateTime<Utc>,
        pattern: &str,
    ) -> Result<String, DateFormatError>;

    /// Render how long ago (or how far ahead) `date` is from `now`.
    fn relative(&self, language: &LanguageCode, date: DateTime<Utc>, now: DateTime<Utc>) -> String;
}

/// A date formatter bound to one language.
#[derive(Clone)]
pub struct DateFormatter {
    language: LanguageCode,
    backend: Arc<dyn DateBackend>,
}

impl DateFormatter {
    /// Bind `language` to a backend.
    pub fn new(language: impl Into<LanguageCode>, backend: Arc<dyn DateBackend>) -> Self {
        Self {
            language: language.into(),
            backend,
        }
    }

    /// Bind `language` to the chrono backend.
    pub fn with_default_backend(language: impl Into<LanguageCode>) -> Self {
        Self::new(language, Arc::new(ChronoBackend))
    }

    /// The bound language.
    pub fn language(&self) -> &LanguageCode {
        &self.language
    }

    /// Absolute rendering with localized month and weekday names.
    pub fn format_date(
        &self,
        date: DateTime<Utc>,
        pattern: &str,
    ) -> Result<String, DateFormatError> {
        self.backend.format(&self.language, date, pattern)
    }

    /// Relative rendering against the current time, e.g. `"3 days ago"`.
    pub fn format_date_in(&self, date: DateTime<Utc>) -> String {
        self.format_relative_to(date, Utc::now())
    }

    /// Relative rendering against an explicit reference time.
    pub fn format_relative_to(&self, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        self.backend.relative(&self.language, date, now)
    }
}

impl Debug for DateFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DateFormatter")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

/// Whether a relative time lies before or after the reference time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Future,
}

/// Humanized magnitude of a time difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeSpan {
    FewSeconds,
    Minutes(u64),
    Hours(u64),
    Days(u64),
    Months(u64),
    Years(u64),
}

/// A time difference bucketed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeTime {
    pub span: RelativeSpan,
    pub tense: Tense,
}

impl RelativeTime {
    /// Bucket the distance from `now` to `date`.
    ///
    /// Each unit is rounded independently and the first threshold that
    /// matches wins: up to 44 seconds is "a few seconds", under 45 minutes
    /// counts minutes, under 22 hours counts hours, under 26 days counts
    /// days, under 11 months counts months, and anything longer counts years.
    pub fn between(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let millis = now.signed_duration_since(date).num_milliseconds();
        let tense = if millis >= 0 { Tense::Past } else { Tense::Future };

        let exact_seconds = millis.unsigned_abs() as f64 / 1000.0;
        let exact_days = exact_seconds / 86_400.0;
        let exact_months = exact_days * 4800.0 / 146_097.0;

        let seconds = exact_seconds.round();
        let minutes = (exact_seconds / 60.0).round();
        let hours = (exact_seconds / 3600.0).round();
        let days = exact_days.round();
        let months = exact_months.round();
        let years = (exact_months / 12.0).round();

        let span = if seconds <= 44.0 {
            RelativeSpan::FewSeconds
        } else if minutes < 45.0 {
            RelativeSpan::Minutes(minutes.max(1.0) as u64)
        } else if hours < 22.0 {
            RelativeSpan::Hours(hours.max(1.0) as u64)
        } else if days < 26.0 {
            RelativeSpan::Days(days.max(1.0) as u64)
        } else if months < 11.0 {
            RelativeSpan::Months(months.max(1.0) as u64)
        } else {
            RelativeSpan::Years(years.max(1.0) as u64)
        };

        Self { span, tense }
    }

    /// English rendering, e.g. `"a minute ago"` or `"in 3 days"`.
    pub fn to_english(self) -> String {
        let amount = match self.span {
            RelativeSpan::FewSeconds => "a few seconds".to_string(),
            RelativeSpan::Minutes(n) => english_unit(n, "a minute", "minutes"),
            RelativeSpan::Hours(n) => english_unit(n, "an hour", "hours"),
            RelativeSpan::Days(n) => english_unit(n, "a day", "days"),
            RelativeSpan::Months(n) => english_unit(n, "a month", "months"),
            RelativeSpan::Years(n) => english_unit(n, "a year", "years"),
        };
        match self.tense {
            Tense::Past => format!("{amount} ago"),
            Tense::Future => format!("in {amount}"),
        }
    }
}

fn english_unit(n: u64, single: &str, unit: &str) -> String {
    if n == 1 {
        single.to_string()
    } else {
        format!("{n} {unit}")
    }
}

/// Date backend built on chrono's localized strftime.
///
/// Month and weekday names come from the locale matching the language code
/// (POSIX for unknown codes). Relative times are rendered in English.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChronoBackend;

impl ChronoBackend {
    /// The chrono locale used for a language code.
    pub fn locale_for(language: &str) -> Locale {
        match language {
            "az" => Locale::az_AZ,
            "be" => Locale::be_BY,
            "bg" => Locale::bg_BG,
            "bn" => Locale::bn_BD,
            "de" => Locale::de_DE,
            "en" => Locale::en_US,
            "hu" => Locale::hu_HU,
            "id" => Locale::id_ID,
            "ja" => Locale::ja_JP,
            "ka" => Locale::ka_GE,
            "lo" => Locale::lo_LA,
            "ml" => Locale::ml_IN,
            "ne" => Locale::ne_NP,
            "pt" => Locale::pt_PT,
            "ru" => Locale::ru_RU,
            "sah" => Locale::sah_RU,
            "sq" => Locale::sq_AL,
            "uk" => Locale::uk_UA,
            "vi" => Locale::vi_VN,
            "zh" => Locale::zh_CN,
            _ => Locale::POSIX,
        }
    }
}

impl DateBackend for ChronoBackend {
    fn format(
        &self,
        language: &LanguageCode,
        date: DateTime<Utc>,
        pattern: &str,
    ) -> Result<String, DateFormatError> {
        let mut out = String::new();
        write!(
            out,
            "{}",
            date.format_localized(pattern, Self::locale_for(language))
        )
        .map_err(|_| DateFormatError::InvalidPattern {
            pattern: pattern.to_string(),
        })?;
        Ok(out)
    }

    fn relative(&self, _language: &LanguageCode, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        RelativeTime::between(date, now).to_english()
    }
}
