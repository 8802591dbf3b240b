//! Locale-aware number formatting.
//!
//! Rounding is half-up on the absolute value: `5 * 10^(-places - 1)` is added
//! before truncating, so `0.125` at two places becomes `0.13` and `-2.5` at
//! zero places becomes `−3`. Negative `places` round to tens, hundreds and so
//! on.

use std::iter::repeat_n;

use bon::Builder;

use crate::dictionary::EffectiveDictionary;

/// Minus sign used for negative numbers (U+2212).
pub const MINUS_SIGN: char = '\u{2212}';

/// Options for a single [`NumberFormatter::format`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Builder)]
pub struct FormatOptions {
    /// Digits after the decimal separator. Negative values round to a
    /// coarser magnitude.
    #[builder(default)]
    pub places: i32,

    /// Print `+` in front of positive numbers.
    #[builder(default)]
    pub force_plus: bool,
}

impl FormatOptions {
    /// Options with the given number of places and no forced plus sign.
    pub fn with_places(places: i32) -> Self {
        Self {
            places,
            force_plus: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Separators {
    group: String,
    decimal: String,
}

/// Formats numbers with a language's group and decimal separators.
///
/// A formatter without separators performs a plain conversion and ignores
/// [`FormatOptions`].
///
/// # Example
///
/// ```
/// use dictum::{FormatOptions, NumberFormatter};
///
/// let en = NumberFormatter::new(Some(","), Some("."));
/// assert_eq!(en.format(1234567.0, FormatOptions::default()), "1,234,567");
/// assert_eq!(en.format(-0.005, FormatOptions::with_places(2)), "\u{2212}0.01");
///
/// let plain = NumberFormatter::new(None, None);
/// assert_eq!(plain.format(1234.5, FormatOptions::with_places(3)), "1234.5");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumberFormatter {
    separators: Option<Separators>,
}

impl NumberFormatter {
    /// Create a formatter. Absent separators count as empty; if both are
    /// empty the formatter is plain.
    pub fn new(group: Option<&str>, decimal: Option<&str>) -> Self {
        let group = group.unwrap_or_default();
        let decimal = decimal.unwrap_or_default();
        if group.is_empty() && decimal.is_empty() {
            return Self::plain();
        }
        Self {
            separators: Some(Separators {
                group: group.to_string(),
                decimal: decimal.to_string(),
            }),
        }
    }

    /// A formatter performing plain numeric-to-string conversion.
    pub fn plain() -> Self {
        Self { separators: None }
    }

    /// A formatter using the separators configured in a dictionary.
    pub fn from_dictionary(dictionary: &EffectiveDictionary) -> Self {
        Self::new(dictionary.group_separator(), dictionary.decimal_separator())
    }

    /// Whether this formatter performs plain conversion.
    pub fn is_plain(&self) -> bool {
        self.separators.is_none()
    }

    /// Format `n` according to `options`.
    pub fn format(&self, n: f64, options: FormatOptions) -> String {
        let Some(separators) = &self.separators else {
            return plain(n);
        };
        if !n.is_finite() {
            return plain(n);
        }

        let places = options.places;
        let bumped = n.abs() + 5.0 * 10f64.powi(places.saturating_neg().saturating_sub(1));
        let whole = bumped.trunc();

        let sign = if n < 0.0 {
            MINUS_SIGN.to_string()
        } else if options.force_plus && n > 0.0 {
            "+".to_string()
        } else {
            String::new()
        };

        let mut out = sign;
        out.push_str(&group_digits(&integer_digits(whole, places), &separators.group));
        if places <= 0 {
            return out;
        }

        out.push_str(&separators.decimal);
        out.push_str(&fraction_digits(bumped - whole, places.unsigned_abs() as usize));
        out
    }
}

/// Plain conversion: integral values print without a fractional part and
/// negative zero prints as `0`.
fn plain(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{n}")
    }
}

/// Decimal digits of the truncated magnitude `whole`, with the low
/// `-places` digits zeroed when `places` is negative.
fn integer_digits(whole: f64, places: i32) -> String {
    // Past f64 range the rounding unit dwarfs any input
    if !whole.is_finite() {
        return "0".to_string();
    }
    let digits = format!("{whole}");
    if places >= 0 {
        return digits;
    }

    let low = places.unsigned_abs() as usize;
    if low >= digits.len() {
        return "0".to_string();
    }
    let mut floored = digits[..digits.len() - low].to_string();
    floored.extend(repeat_n('0', low));
    floored
}

/// Join decimal digits in groups of three from the right.
fn group_digits(digits: &str, separator: &str) -> String {
    let head = match digits.len() % 3 {
        0 => 3,
        rest => rest,
    };

    let mut out = String::with_capacity(digits.len() + separator.len() * 8);
    out.push_str(&digits[..head]);
    let mut start = head;
    while start < digits.len() {
        out.push_str(separator);
        out.push_str(&digits[start..start + 3]);
        start += 3;
    }
    out
}

/// The first `places` decimal digits of `fraction` (in `[0, 1)`), taken from
/// its shortest decimal rendering and padded with zeros.
fn fraction_digits(fraction: f64, places: usize) -> String {
    let rendered = format!("{fraction}");
    let digits = rendered.split_once('.').map_or("", |(_, digits)| digits);
    let mut out: String = digits.chars().take(places).collect();
    while out.len() < places {
        out.push('0');
    }
    out
}
