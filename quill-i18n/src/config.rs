//! Render configuration
//!
//! Everything a render needs beyond the template and its values is carried
//! in one [`RenderConfig`] passed by reference; there is no global state.

use crate::plural::{LocalePlurals, PluralRules, SimpleCardinal, SimpleOrdinal};
use crate::{I18nError, Locale, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared category resolver.
pub type SharedPluralRules = Arc<dyn PluralRules + Send + Sync>;

/// Configuration threaded through every render call.
///
/// # Example
///
/// ```
/// use quill_i18n::{Locale, LocalePlurals, RenderConfig};
///
/// let config = RenderConfig::new(Locale::fr_fr())
///     .with_cardinal(LocalePlurals::French)
///     .with_default_currency("EUR");
/// assert_eq!(config.locale.tag(), "fr-FR");
/// ```
#[derive(Clone)]
pub struct RenderConfig {
    /// Target locale.
    pub locale: Locale,
    /// Cardinal category resolver used by `plural`.
    pub cardinal: SharedPluralRules,
    /// Ordinal category resolver used by `selectordinal`.
    pub ordinal: SharedPluralRules,
    /// Currency used by `currency` styles that name none.
    pub default_currency: Option<String>,
}

impl RenderConfig {
    /// Config for `locale` with the simple category resolvers.
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            cardinal: Arc::new(SimpleCardinal),
            ordinal: Arc::new(SimpleOrdinal),
            default_currency: None,
        }
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the cardinal category resolver.
    pub fn with_cardinal(mut self, rules: impl PluralRules + Send + Sync + 'static) -> Self {
        self.cardinal = Arc::new(rules);
        self
    }

    /// Set the ordinal category resolver.
    pub fn with_ordinal(mut self, rules: impl PluralRules + Send + Sync + 'static) -> Self {
        self.ordinal = Arc::new(rules);
        self
    }

    /// Set the default currency (ISO 4217).
    pub fn with_default_currency(mut self, code: impl Into<String>) -> Self {
        self.default_currency = Some(code.into().to_uppercase());
        self
    }

    /// Build from deserialized settings.
    pub fn from_settings(settings: &RenderSettings) -> Result<Self> {
        let mut config = Self::new(settings.locale.clone());

        if settings.plural_rules == PluralRuleSet::Cldr {
            config.cardinal = Arc::new(LocalePlurals::for_locale(&settings.locale));
        }

        if let Some(code) = &settings.default_currency {
            if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(I18nError::InvalidConfig(format!(
                    "default currency must be a three-letter ISO 4217 code, got '{}'",
                    code
                )));
            }
            config = config.with_default_currency(code.as_str());
        }

        Ok(config)
    }

    /// Build from a JSON settings document.
    ///
    /// ```
    /// use quill_i18n::RenderConfig;
    ///
    /// let config = RenderConfig::from_json(
    ///     r#"{ "locale": "de-DE", "pluralRules": "cldr", "defaultCurrency": "eur" }"#,
    /// ).unwrap();
    /// assert_eq!(config.default_currency.as_deref(), Some("EUR"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: RenderSettings = serde_json::from_str(json)?;
        Self::from_settings(&settings)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("locale", &self.locale)
            .field("cardinal", &self.cardinal.categories())
            .field("ordinal", &self.ordinal.categories())
            .field("default_currency", &self.default_currency)
            .finish()
    }
}

/// Which cardinal rules a [`RenderSettings`] selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluralRuleSet {
    /// `0 → zero`, `1 → one`, `2 → two`, else `other`.
    #[default]
    Simple,
    /// Per-language rules from [`LocalePlurals`].
    Cldr,
}

/// Serializable form of a [`RenderConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderSettings {
    /// Target locale tag.
    pub locale: Locale,
    /// Cardinal rule set.
    pub plural_rules: PluralRuleSet,
    /// Default currency code.
    pub default_currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PluralCategory;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.locale, Locale::en_us());
        assert_eq!(config.cardinal.category(0.0), PluralCategory::Zero);
        assert_eq!(config.ordinal.category(3.0), PluralCategory::Few);
        assert!(config.default_currency.is_none());
    }

    #[test]
    fn test_from_json_cldr() {
        let config = RenderConfig::from_json(r#"{ "locale": "fr", "pluralRules": "cldr" }"#).unwrap();
        assert_eq!(config.cardinal.category(0.0), PluralCategory::One);
    }

    #[test]
    fn test_from_json_defaults() {
        let config = RenderConfig::from_json("{}").unwrap();
        assert_eq!(config.locale, Locale::en_us());
        assert_eq!(config.cardinal.category(1.0), PluralCategory::One);
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RenderConfig::from_json(r#"{ "defaultCurrency": "euro" }"#),
            Err(I18nError::InvalidConfig(_))
        ));
        assert!(matches!(
            RenderConfig::from_json(r#"{ "locale": "x" }"#),
            Err(I18nError::JsonError(_))
        ));
        assert!(matches!(
            RenderConfig::from_json("not json"),
            Err(I18nError::JsonError(_))
        ));
    }
}
