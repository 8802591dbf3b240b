//! Tests for absolute and relative date rendering.

use std::sync::Arc;

use chrono::{DateTime, Duration, Locale, TimeZone, Utc};
use dictum::format::{RelativeSpan, Tense};
use dictum::{
    ChronoBackend, DateBackend, DateFormatError, DateFormatter, LanguageCode, RelativeTime,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2017, 11, 3, 12, 0, 0).unwrap()
}

fn ago(duration: Duration) -> String {
    DateFormatter::with_default_backend("en").format_relative_to(now() - duration, now())
}

// =========================================================================
// Absolute
// =========================================================================

#[test]
fn formats_with_english_names() {
    let en = DateFormatter::with_default_backend("en");
    assert_eq!(en.format_date(now(), "%d %B %Y").unwrap(), "03 November 2017");
    assert_eq!(en.format_date(now(), "%Y-%m-%d %H:%M").unwrap(), "2017-11-03 12:00");
}

#[test]
fn formats_with_localized_names() {
    let de = DateFormatter::with_default_backend("de");
    assert_eq!(de.format_date(now(), "%A").unwrap(), "Freitag");
    assert_eq!(de.format_date(now(), "%B").unwrap(), "November");
}

#[test]
fn unknown_language_uses_posix_names() {
    let xx = DateFormatter::with_default_backend("xx");
    assert_eq!(xx.format_date(now(), "%A %B").unwrap(), "Friday November");
}

#[test]
fn invalid_pattern_is_an_error() {
    let en = DateFormatter::with_default_backend("en");
    assert_eq!(
        en.format_date(now(), "%").unwrap_err(),
        DateFormatError::InvalidPattern {
            pattern: "%".to_string()
        }
    );
}

// =========================================================================
// Relative
// =========================================================================

#[test]
fn seconds_are_few() {
    assert_eq!(ago(Duration::seconds(0)), "a few seconds ago");
    assert_eq!(ago(Duration::seconds(30)), "a few seconds ago");
    assert_eq!(ago(Duration::seconds(44)), "a few seconds ago");
}

#[test]
fn minutes() {
    assert_eq!(ago(Duration::seconds(50)), "a minute ago");
    assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
    assert_eq!(ago(Duration::minutes(44)), "44 minutes ago");
}

#[test]
fn hours() {
    assert_eq!(ago(Duration::minutes(45)), "an hour ago");
    assert_eq!(ago(Duration::hours(3)), "3 hours ago");
    assert_eq!(ago(Duration::hours(21)), "21 hours ago");
}

#[test]
fn days() {
    assert_eq!(ago(Duration::hours(22)), "a day ago");
    assert_eq!(ago(Duration::days(3)), "3 days ago");
    assert_eq!(ago(Duration::days(25)), "25 days ago");
}

#[test]
fn months_and_years() {
    assert_eq!(ago(Duration::days(26)), "a month ago");
    assert_eq!(ago(Duration::days(60)), "2 months ago");
    assert_eq!(ago(Duration::days(300)), "10 months ago");
    assert_eq!(ago(Duration::days(320)), "a year ago");
    assert_eq!(ago(Duration::days(3 * 365)), "3 years ago");
}

#[test]
fn future_dates_use_in() {
    let en = DateFormatter::with_default_backend("en");
    assert_eq!(
        en.format_relative_to(now() + Duration::days(3), now()),
        "in 3 days"
    );
    assert_eq!(
        RelativeTime::between(now() + Duration::hours(2), now()),
        RelativeTime {
            span: RelativeSpan::Hours(2),
            tense: Tense::Future,
        }
    );
}

#[test]
fn format_date_in_uses_current_time() {
    let en = DateFormatter::with_default_backend("en");
    assert_eq!(en.format_date_in(Utc::now()), "a few seconds ago");
}

// =========================================================================
// Custom backend
// =========================================================================

struct Fixed;

impl DateBackend for Fixed {
    fn format(
        &self,
        language: &LanguageCode,
        _date: DateTime<Utc>,
        pattern: &str,
    ) -> Result<String, DateFormatError> {
        Ok(format!("{language}:{pattern}"))
    }

    fn relative(&self, language: &LanguageCode, date: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let days = (now - date).num_days();
        format!("{language}:{days}d")
    }
}

#[test]
fn formatter_forwards_to_backend() {
    let ru = DateFormatter::new("ru", Arc::new(Fixed));
    assert_eq!(ru.language(), &LanguageCode::from("ru"));
    assert_eq!(ru.format_date(now(), "LL").unwrap(), "ru:LL");
    assert_eq!(
        ru.format_relative_to(now() - Duration::days(2), now()),
        "ru:2d"
    );
}

#[test]
fn chrono_backend_maps_locales() {
    assert!(matches!(ChronoBackend::locale_for("ru"), Locale::ru_RU));
    assert!(matches!(ChronoBackend::locale_for("sah"), Locale::sah_RU));
    assert!(matches!(ChronoBackend::locale_for("tlh"), Locale::POSIX));
}
