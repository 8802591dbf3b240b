//! Grammatical gender selection.

/// Grammatical gender of a person referred to by a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    Female,
    Male,
    /// Unknown, unset or unspecified.
    #[default]
    Other,
}

impl From<&str> for Gender {
    /// `"female"` and `"male"` map to their variants; anything else is `Other`.
    fn from(s: &str) -> Self {
        match s {
            "female" => Gender::Female,
            "male" => Gender::Male,
            _ => Gender::Other,
        }
    }
}

impl From<Option<&str>> for Gender {
    fn from(s: Option<&str>) -> Self {
        s.map(Gender::from).unwrap_or_default()
    }
}

/// Select a gendered form, using the masculine form for `Other`.
///
/// # Examples
///
/// ```
/// use dictum::gender;
///
/// assert_eq!(gender("female", "F", "M"), "F");
/// assert_eq!(gender("male", "F", "M"), "M");
/// assert_eq!(gender("other", "F", "M"), "M");
/// ```
pub fn gender<T>(g: impl Into<Gender>, feminine: T, masculine: T) -> T {
    match g.into() {
        Gender::Female => feminine,
        Gender::Male | Gender::Other => masculine,
    }
}

/// Select a gendered form with an explicit neuter form for `Other`.
pub fn gender_with_neuter<T>(g: impl Into<Gender>, feminine: T, masculine: T, neuter: T) -> T {
    match g.into() {
        Gender::Female => feminine,
        Gender::Male => masculine,
        Gender::Other => neuter,
    }
}
