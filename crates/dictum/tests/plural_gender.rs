//! Tests for plural and gender selection.

use dictum::{Gender, gender, gender_with_neuter, plural, plural_slavic};

// =========================================================================
// Binary plural
// =========================================================================

#[test]
fn binary_plural_selects_one_for_unit() {
    assert_eq!(plural(1, "one", "few"), "one");
    assert_eq!(plural(-1, "one", "few"), "one");
}

#[test]
fn binary_plural_selects_few_otherwise() {
    for n in [0, 2, 5, 11, 21, -2, 101] {
        assert_eq!(plural(n, "one", "few"), "few", "n = {n}");
    }
}

#[test]
fn binary_plural_handles_extremes() {
    assert_eq!(plural(i64::MIN, "one", "few"), "few");
    assert_eq!(plural(i64::MAX, "one", "few"), "few");
}

// =========================================================================
// Slavic plural
// =========================================================================

fn slavic(n: i64) -> &'static str {
    plural_slavic(n, "one", "few", "many")
}

#[test]
fn slavic_plural_one() {
    for n in [1, 21, 31, 101, 121, 1001, -1, -21] {
        assert_eq!(slavic(n), "one", "n = {n}");
    }
}

#[test]
fn slavic_plural_few() {
    for n in [2, 3, 4, 22, 23, 24, 102, 1004, -3] {
        assert_eq!(slavic(n), "few", "n = {n}");
    }
}

#[test]
fn slavic_plural_many() {
    for n in [0, 5, 6, 7, 8, 9, 10, 25, 30, 100, -5] {
        assert_eq!(slavic(n), "many", "n = {n}");
    }
}

#[test]
fn slavic_plural_teens_are_many() {
    for n in 10..=20 {
        assert_eq!(slavic(n), "many", "n = {n}");
        assert_eq!(slavic(n + 100), "many", "n = {}", n + 100);
    }
    assert_eq!(slavic(111), "many");
    assert_eq!(slavic(112), "many");
}

#[test]
fn slavic_plural_handles_extremes() {
    // |i64::MIN| = 9223372036854775808, ends in 08
    assert_eq!(slavic(i64::MIN), "many");
    // i64::MAX ends in 07
    assert_eq!(slavic(i64::MAX), "many");
}

// =========================================================================
// Fractional and unsigned counts
// =========================================================================

#[test]
fn binary_plural_accepts_floats() {
    assert_eq!(plural(1.0, "one", "few"), "one");
    assert_eq!(plural(-1.0_f32, "one", "few"), "one");
    assert_eq!(plural(1.5, "one", "few"), "few");
    assert_eq!(plural(0.0, "one", "few"), "few");
    assert_eq!(plural(f64::NAN, "one", "few"), "few");
}

#[test]
fn slavic_plural_accepts_floats() {
    let slavic = |n: f64| plural_slavic(n, "one", "few", "many");
    assert_eq!(slavic(21.0), "one");
    assert_eq!(slavic(-101.0), "one");
    assert_eq!(slavic(1.5), "few");
    assert_eq!(slavic(21.5), "few");
    assert_eq!(slavic(20.5), "few");
    assert_eq!(slavic(10.5), "many");
    assert_eq!(slavic(9.5), "many");
    assert_eq!(slavic(0.5), "few");
    assert_eq!(slavic(f64::NAN), "many");
    assert_eq!(slavic(f64::INFINITY), "many");
}

#[test]
fn plural_accepts_unsigned_counts() {
    assert_eq!(plural(1_usize, "one", "few"), "one");
    assert_eq!(plural_slavic(22_u64, "one", "few", "many"), "few");
    assert_eq!(plural_slavic(u128::MAX, "one", "few", "many"), "many");
}

// =========================================================================
// Gender
// =========================================================================

#[test]
fn gender_parses_known_values() {
    assert_eq!(Gender::from("female"), Gender::Female);
    assert_eq!(Gender::from("male"), Gender::Male);
    assert_eq!(Gender::from("other"), Gender::Other);
    assert_eq!(Gender::from("Female"), Gender::Other);
    assert_eq!(Gender::from(None::<&str>), Gender::Other);
    assert_eq!(Gender::from(Some("male")), Gender::Male);
}

#[test]
fn gender_defaults_neuter_to_masculine() {
    assert_eq!(gender("female", "F", "M"), "F");
    assert_eq!(gender("male", "F", "M"), "M");
    assert_eq!(gender("other", "F", "M"), "M");
    assert_eq!(gender(None::<&str>, "F", "M"), "M");
}

#[test]
fn gender_with_explicit_neuter() {
    assert_eq!(gender_with_neuter("other", "F", "M", "N"), "N");
    assert_eq!(gender_with_neuter("", "F", "M", "N"), "N");
    assert_eq!(gender_with_neuter("female", "F", "M", "N"), "F");
    assert_eq!(gender_with_neuter(Gender::Male, "F", "M", "N"), "M");
}
