//! Locale identifiers
//!
//! A render targets one locale. Every locale-keyed table in this crate is
//! consulted in the same order: exact tag, language only, generic default.

use crate::{I18nError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Represents a locale (language + optional script + optional region).
///
/// # Examples
///
/// ```
/// use quill_i18n::Locale;
/// use std::str::FromStr;
///
/// let en_us = Locale::new("en", Some("US"));
/// let fr_fr = Locale::from_str("fr_FR").unwrap();
/// assert_eq!(fr_fr.tag(), "fr-FR");
/// assert_eq!(en_us.currency(), Some("USD"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    /// Language code (ISO 639-1, e.g., "en", "fr", "de")
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g., "US", "GB", "FR")
    pub region: Option<String>,
    /// Optional script (e.g., "Latn", "Hans")
    pub script: Option<String>,
}

/// ISO 4217 currency of a region.
static REGION_CURRENCIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for region in [
        "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "HR", "IE", "IT", "LT", "LU",
        "LV", "MT", "NL", "PT", "SI", "SK",
    ] {
        map.insert(region, "EUR");
    }
    map.extend([
        ("US", "USD"),
        ("GB", "GBP"),
        ("JP", "JPY"),
        ("CN", "CNY"),
        ("KR", "KRW"),
        ("IN", "INR"),
        ("RU", "RUB"),
        ("BR", "BRL"),
        ("CH", "CHF"),
        ("CA", "CAD"),
        ("AU", "AUD"),
        ("HK", "HKD"),
        ("SG", "SGD"),
        ("SE", "SEK"),
        ("NO", "NOK"),
        ("DK", "DKK"),
        ("PL", "PLN"),
        ("CZ", "CZK"),
        ("MX", "MXN"),
        ("TH", "THB"),
        ("TW", "TWD"),
    ]);
    map
});

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
            script: None,
        }
    }

    /// Parse from BCP 47 tag (e.g., "en-US", "zh-Hans-CN"); `_` is accepted
    /// as a separator.
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split(['-', '_']).collect();

        if parts.is_empty() || parts[0].is_empty() {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let language = parts[0].to_lowercase();

        // Validate language code (2-3 letters)
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidLocale(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts.iter().skip(1) {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                let mut chars = part.chars();
                script = chars.next().map(|first| {
                    first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect()
                });
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                // UN M.49 code (3 digits)
                region = Some(part.to_string());
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// Get the language tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Get language-only locale (strips region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            script: self.script.clone(),
            region: None,
        }
    }

    /// Tags to try when looking this locale up in a table, most specific first.
    pub fn lookup_tags(&self) -> Vec<String> {
        let mut tags = vec![self.tag()];
        if self.region.is_some() || self.script.is_some() {
            tags.push(self.language.clone());
        }
        tags
    }

    /// ISO 4217 code of the region's own currency, if known.
    pub fn currency(&self) -> Option<&'static str> {
        self.region
            .as_deref()
            .and_then(|region| REGION_CURRENCIES.get(region).copied())
    }

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (US)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// English (GB)
    pub fn en_gb() -> Self {
        Self::new("en", Some("GB"))
    }

    /// French (no region)
    pub fn fr() -> Self {
        Self::new("fr", None::<&str>)
    }

    /// French (France)
    pub fn fr_fr() -> Self {
        Self::new("fr", Some("FR"))
    }

    /// German (no region)
    pub fn de() -> Self {
        Self::new("de", None::<&str>)
    }

    /// German (Germany)
    pub fn de_de() -> Self {
        Self::new("de", Some("DE"))
    }

    /// Spanish (Spain)
    pub fn es_es() -> Self {
        Self::new("es", Some("ES"))
    }

    /// Japanese
    pub fn ja() -> Self {
        Self::new("ja", None::<&str>)
    }

    /// Japanese (Japan)
    pub fn ja_jp() -> Self {
        Self::new("ja", Some("JP"))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Locale::parse(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = I18nError;

    fn try_from(value: String) -> Result<Self> {
        Locale::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        let en = Locale::parse("en").unwrap();
        assert_eq!(en.language, "en");
        assert!(en.region.is_none());

        let en_us = Locale::parse("en_us").unwrap();
        assert_eq!(en_us.language, "en");
        assert_eq!(en_us.region, Some("US".to_string()));

        let zh = Locale::parse("zh-hans-CN").unwrap();
        assert_eq!(zh.script, Some("Hans".to_string()));
        assert_eq!(zh.tag(), "zh-Hans-CN");

        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("english").is_err());
    }

    #[test]
    fn test_lookup_tags() {
        assert_eq!(Locale::en_gb().lookup_tags(), vec!["en-GB", "en"]);
        assert_eq!(Locale::fr().lookup_tags(), vec!["fr"]);
    }

    #[test]
    fn test_region_currency() {
        assert_eq!(Locale::en_us().currency(), Some("USD"));
        assert_eq!(Locale::de_de().currency(), Some("EUR"));
        assert_eq!(Locale::ja_jp().currency(), Some("JPY"));
        assert_eq!(Locale::en().currency(), None);
    }

    #[test]
    fn test_locale_serde() {
        let locale: Locale = serde_json::from_str("\"de-DE\"").unwrap();
        assert_eq!(locale, Locale::de_de());
        assert_eq!(serde_json::to_string(&locale).unwrap(), "\"de-DE\"");
        assert!(serde_json::from_str::<Locale>("\"x\"").is_err());
    }
}
