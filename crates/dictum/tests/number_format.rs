//! Tests for number formatting.

use dictum::{DictionaryBuilder, FormatOptions, NumberFormatter, RawDictionary};

fn en() -> NumberFormatter {
    NumberFormatter::new(Some(","), Some("."))
}

fn places(places: i32) -> FormatOptions {
    FormatOptions::with_places(places)
}

// =========================================================================
// Grouping
// =========================================================================

#[test]
fn groups_integer_part() {
    let f = en();
    assert_eq!(f.format(1234567.0, places(0)), "1,234,567");
    assert_eq!(f.format(1000.0, places(0)), "1,000");
    assert_eq!(f.format(999.0, places(0)), "999");
    assert_eq!(f.format(1_000_001.0, places(0)), "1,000,001");
}

#[test]
fn groups_magnitudes_beyond_integer_range() {
    let f = en();
    let thousands = ",000".repeat(13);
    assert_eq!(f.format(1e40, places(0)), format!("10{thousands}"));
    assert_eq!(f.format(1e39, places(0)), format!("1{thousands}"));
    assert_eq!(f.format(-1e39, places(-3)), format!("\u{2212}1{thousands}"));
    assert_eq!(f.format(f64::MAX, places(-400)), "0");
}

#[test]
fn zero_formats_as_zero() {
    let f = en();
    assert_eq!(f.format(0.0, places(0)), "0");
    assert_eq!(f.format(0.0, places(-2)), "0");
    assert_eq!(f.format(-0.0, places(0)), "0");
}

#[test]
fn custom_separators() {
    let f = NumberFormatter::new(Some("\u{a0}"), Some(","));
    assert_eq!(f.format(1234567.891, places(2)), "1\u{a0}234\u{a0}567,89");
}

// =========================================================================
// Rounding
// =========================================================================

#[test]
fn rounds_half_up() {
    let f = en();
    assert_eq!(f.format(2.5, places(0)), "3");
    assert_eq!(f.format(3.5, places(0)), "4");
    assert_eq!(f.format(2.4, places(0)), "2");
    assert_eq!(f.format(-2.5, places(0)), "\u{2212}3");
}

#[test]
fn fractional_places_are_exact() {
    let f = en();
    assert_eq!(f.format(0.0, places(2)), "0.00");
    assert_eq!(f.format(1.0, places(3)), "1.000");
    assert_eq!(f.format(1234.5, places(1)), "1,234.5");
    assert_eq!(f.format(0.5, places(2)), "0.50");
}

#[test]
fn negative_half_cent_rounds_away_from_zero() {
    assert_eq!(en().format(-0.005, places(2)), "\u{2212}0.01");
}

#[test]
fn negative_places_round_to_magnitude() {
    let f = en();
    assert_eq!(f.format(1234.5, places(-2)), "1,200");
    assert_eq!(f.format(1250.0, places(-2)), "1,300");
    assert_eq!(f.format(1249.0, places(-2)), "1,200");
    assert_eq!(f.format(987_654.0, places(-3)), "988,000");
    assert_eq!(f.format(40.0, places(-2)), "0");
}

// =========================================================================
// Signs
// =========================================================================

#[test]
fn negative_numbers_use_minus_sign() {
    let out = en().format(-1234.0, places(0));
    assert_eq!(out, "\u{2212}1,234");
    assert!(!out.contains('-'));
}

#[test]
fn force_plus_marks_positive_numbers() {
    let options = FormatOptions::builder().force_plus(true).build();
    let f = en();
    assert_eq!(f.format(5.0, options), "+5");
    assert_eq!(f.format(-5.0, options), "\u{2212}5");
    assert_eq!(f.format(0.0, options), "0");
}

#[test]
fn no_sign_for_positive_by_default() {
    assert_eq!(en().format(42.0, FormatOptions::default()), "42");
}

// =========================================================================
// Plain formatter
// =========================================================================

#[test]
fn formatter_without_separators_is_plain() {
    let f = NumberFormatter::new(None, None);
    assert!(f.is_plain());
    assert_eq!(f.format(1234567.0, places(2)), "1234567");
    assert_eq!(f.format(0.25, places(0)), "0.25");
    assert_eq!(f.format(-3.0, FormatOptions::default()), "-3");

    let empty = NumberFormatter::new(Some(""), Some(""));
    assert!(empty.is_plain());
    assert_eq!(empty, NumberFormatter::plain());
}

#[test]
fn plain_output_matches_unformatted_conversion() {
    let f = NumberFormatter::plain();
    for n in [1.5, 100.0, -7.25, 0.1] {
        assert_eq!(f.format(n, places(3)), n.to_string());
    }
}

#[test]
fn non_finite_values_fall_back_to_plain() {
    let f = en();
    assert_eq!(f.format(f64::NAN, places(2)), "NaN");
    assert_eq!(f.format(f64::INFINITY, places(0)), "Infinity");
}

#[test]
fn group_only_formatter_still_groups() {
    let f = NumberFormatter::new(Some(" "), None);
    assert!(!f.is_plain());
    assert_eq!(f.format(12345.0, places(0)), "12 345");
}

// =========================================================================
// Dictionary configuration
// =========================================================================

#[test]
fn formatter_reads_dictionary_separators() {
    let builder = DictionaryBuilder::new()
        .with("en", RawDictionary::new().separators(",", "."))
        .with("de", RawDictionary::new().fallback("en").separators(".", ","))
        .with("ja", RawDictionary::new());

    let de = NumberFormatter::from_dictionary(&builder.build("de").unwrap());
    assert_eq!(de.format(1234.5, places(1)), "1.234,5");

    let ja = NumberFormatter::from_dictionary(&builder.build("ja").unwrap());
    assert!(ja.is_plain());
}
