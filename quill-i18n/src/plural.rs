//! Category Resolvers
//!
//! Maps a number to a plural or ordinal category. The shipped defaults,
//! [`SimpleCardinal`] and [`SimpleOrdinal`], are deliberately small; the
//! per-language [`LocalePlurals`] cover the common CLDR families. Anything
//! implementing [`PluralRules`] can be plugged into a
//! [`RenderConfig`](crate::RenderConfig).

use crate::{I18nError, Locale, Result};
use std::str::FromStr;

/// CLDR plural categories.
///
/// Not all languages use all categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    /// Zero items (Arabic)
    Zero,
    /// One item (most languages)
    One,
    /// Two items (Arabic, Welsh)
    Two,
    /// Few items (Slavic languages)
    Few,
    /// Many items (Slavic languages, Arabic)
    Many,
    /// All other cases
    Other,
}

impl PluralCategory {
    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::One => "one",
            Self::Two => "two",
            Self::Few => "few",
            Self::Many => "many",
            Self::Other => "other",
        }
    }
}

impl FromStr for PluralCategory {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "one" => Ok(Self::One),
            "two" => Ok(Self::Two),
            "few" => Ok(Self::Few),
            "many" => Ok(Self::Many),
            "other" => Ok(Self::Other),
            _ => Err(I18nError::InvalidPluralCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Maps numbers to categories.
pub trait PluralRules {
    /// Get the category for a number.
    fn category(&self, n: f64) -> PluralCategory;

    /// Get all categories this resolver can produce.
    fn categories(&self) -> &[PluralCategory];
}

/// Default cardinal resolver: `0 → zero`, `1 → one`, `2 → two`, else `other`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCardinal;

impl PluralRules for SimpleCardinal {
    fn category(&self, n: f64) -> PluralCategory {
        if n == 0.0 {
            PluralCategory::Zero
        } else if n == 1.0 {
            PluralCategory::One
        } else if n == 2.0 {
            PluralCategory::Two
        } else {
            PluralCategory::Other
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::Zero,
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Other,
        ]
    }
}

/// Default ordinal resolver (English ordinals: 1st, 2nd, 3rd, 4th, 11th, 21st).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOrdinal;

impl PluralRules for SimpleOrdinal {
    fn category(&self, n: f64) -> PluralCategory {
        if n.fract() != 0.0 {
            return PluralCategory::Other;
        }

        let i = n.abs() as i64;
        let mod10 = i % 10;
        let mod100 = i % 100;

        if mod10 == 1 && mod100 != 11 {
            PluralCategory::One
        } else if mod10 == 2 && mod100 != 12 {
            PluralCategory::Two
        } else if mod10 == 3 && mod100 != 13 {
            PluralCategory::Few
        } else {
            PluralCategory::Other
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        &[
            PluralCategory::One,
            PluralCategory::Two,
            PluralCategory::Few,
            PluralCategory::Other,
        ]
    }
}

/// Per-language cardinal rules for the common CLDR families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalePlurals {
    /// English-like: 1 = one, else other.
    Default,
    /// Chinese, Japanese, Korean, etc.: always other.
    NoPlurals,
    /// French: 0 and 1 = one, else other.
    French,
    /// Russian, Ukrainian, Belarusian.
    Russian,
    /// Polish.
    Polish,
    /// Czech, Slovak.
    Czech,
    /// Welsh.
    Welsh,
    /// Arabic.
    Arabic,
}

impl LocalePlurals {
    /// Pick the rules for a locale's language.
    pub fn for_locale(locale: &Locale) -> Self {
        match locale.language.as_str() {
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" => Self::NoPlurals,
            "fr" => Self::French,
            "ru" | "uk" | "be" => Self::Russian,
            "pl" => Self::Polish,
            "cs" | "sk" => Self::Czech,
            "cy" => Self::Welsh,
            "ar" => Self::Arabic,
            _ => Self::Default,
        }
    }
}

impl PluralRules for LocalePlurals {
    fn category(&self, n: f64) -> PluralCategory {
        let integral = n.fract() == 0.0;
        let i = n.abs() as i64;
        let mod10 = i % 10;
        let mod100 = i % 100;

        match self {
            Self::Default => {
                if i == 1 && integral {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::NoPlurals => PluralCategory::Other,
            Self::French => {
                if (i == 0 || i == 1) && integral {
                    PluralCategory::One
                } else {
                    PluralCategory::Other
                }
            }
            Self::Russian => {
                if !integral {
                    PluralCategory::Other
                } else if mod10 == 1 && mod100 != 11 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Polish => {
                if !integral {
                    PluralCategory::Other
                } else if i == 1 {
                    PluralCategory::One
                } else if (2..=4).contains(&mod10) && !(12..=14).contains(&mod100) {
                    PluralCategory::Few
                } else {
                    PluralCategory::Many
                }
            }
            Self::Czech => {
                if !integral {
                    return PluralCategory::Many;
                }
                match i {
                    1 => PluralCategory::One,
                    2..=4 => PluralCategory::Few,
                    _ => PluralCategory::Other,
                }
            }
            Self::Welsh => {
                if !integral {
                    return PluralCategory::Other;
                }
                match i {
                    0 => PluralCategory::Zero,
                    1 => PluralCategory::One,
                    2 => PluralCategory::Two,
                    3 => PluralCategory::Few,
                    6 => PluralCategory::Many,
                    _ => PluralCategory::Other,
                }
            }
            Self::Arabic => {
                if !integral {
                    return PluralCategory::Other;
                }
                match i {
                    0 => PluralCategory::Zero,
                    1 => PluralCategory::One,
                    2 => PluralCategory::Two,
                    _ if (3..=10).contains(&mod100) => PluralCategory::Few,
                    _ if (11..=99).contains(&mod100) => PluralCategory::Many,
                    _ => PluralCategory::Other,
                }
            }
        }
    }

    fn categories(&self) -> &[PluralCategory] {
        use PluralCategory::*;
        match self {
            Self::Default | Self::French => &[One, Other],
            Self::NoPlurals => &[Other],
            Self::Russian | Self::Polish => &[One, Few, Many, Other],
            Self::Czech => &[One, Few, Many, Other],
            Self::Welsh | Self::Arabic => &[Zero, One, Two, Few, Many, Other],
        }
    }
}

/// Get the CLDR cardinal category for a number in a locale.
///
/// # Example
///
/// ```
/// use quill_i18n::{plural_category, PluralCategory, Locale};
///
/// assert_eq!(plural_category(1, &Locale::en()), PluralCategory::One);
/// assert_eq!(plural_category(2, &Locale::en()), PluralCategory::Other);
/// assert_eq!(plural_category(0, &Locale::fr()), PluralCategory::One);
/// ```
pub fn plural_category(n: impl Into<f64>, locale: &Locale) -> PluralCategory {
    LocalePlurals::for_locale(locale).category(n.into())
}
