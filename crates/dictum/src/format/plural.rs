//! Plural form selection.
//!
//! Two rules cover the shipped languages: a binary rule (one / other) and the
//! East Slavic three-way rule (one / few / many). Both accept integers and
//! floats; a fractional count is never `one`.

/// A count that plural rules can inspect.
pub trait PluralCount: Copy {
    /// Whether `|n| == 1`.
    fn is_unit(self) -> bool;

    /// `|n| mod 100`, keeping any fractional part.
    fn last_two_digits(self) -> f64;
}

macro_rules! signed_count {
    ($($ty:ty),*) => {$(
        impl PluralCount for $ty {
            fn is_unit(self) -> bool {
                self.unsigned_abs() == 1
            }

            fn last_two_digits(self) -> f64 {
                (self.unsigned_abs() % 100) as f64
            }
        }
    )*};
}

macro_rules! unsigned_count {
    ($($ty:ty),*) => {$(
        impl PluralCount for $ty {
            fn is_unit(self) -> bool {
                self == 1
            }

            fn last_two_digits(self) -> f64 {
                (self % 100) as f64
            }
        }
    )*};
}

signed_count!(i8, i16, i32, i64, i128, isize);
unsigned_count!(u8, u16, u32, u64, u128, usize);

impl PluralCount for f64 {
    fn is_unit(self) -> bool {
        self.abs() == 1.0
    }

    fn last_two_digits(self) -> f64 {
        self.abs() % 100.0
    }
}

impl PluralCount for f32 {
    fn is_unit(self) -> bool {
        f64::from(self).is_unit()
    }

    fn last_two_digits(self) -> f64 {
        f64::from(self).last_two_digits()
    }
}

/// Select between a singular and a plural form.
///
/// Returns `one` when `|n| == 1`, otherwise `few`.
///
/// # Examples
///
/// ```
/// use dictum::plural;
///
/// assert_eq!(plural(1, "article", "articles"), "article");
/// assert_eq!(plural(-1, "article", "articles"), "article");
/// assert_eq!(plural(0, "article", "articles"), "articles");
/// assert_eq!(plural(1.5, "point", "points"), "points");
/// ```
pub fn plural<T>(n: impl PluralCount, one: T, few: T) -> T {
    if n.is_unit() { one } else { few }
}

/// Select among three forms using the East Slavic rule.
///
/// With `m = |n| mod 100` and `d = m mod 10`: outside the 10..=20 band,
/// `d == 1` selects `one` and `0 < d < 5` selects `few`. Everything else,
/// the band included, selects `many`. For fractional counts this puts
/// `21.5` under `few` and `10.5` under `many`.
///
/// # Examples
///
/// ```
/// use dictum::plural_slavic;
///
/// assert_eq!(plural_slavic(21, "статья", "статьи", "статей"), "статья");
/// assert_eq!(plural_slavic(22, "статья", "статьи", "статей"), "статьи");
/// assert_eq!(plural_slavic(11, "статья", "статьи", "статей"), "статей");
/// assert_eq!(plural_slavic(5, "статья", "статьи", "статей"), "статей");
/// assert_eq!(plural_slavic(1.5, "балл", "балла", "баллов"), "балла");
/// ```
pub fn plural_slavic<T>(n: impl PluralCount, one: T, few: T, many: T) -> T {
    let m = n.last_two_digits();
    if !(10.0..=20.0).contains(&m) {
        let d = m % 10.0;
        if d == 1.0 {
            return one;
        }
        if 0.0 < d && d < 5.0 {
            return few;
        }
    }
    many
}
