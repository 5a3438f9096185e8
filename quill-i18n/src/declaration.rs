//! Placeholder declarations
//!
//! ARB files describe placeholders in a metadata object:
//!
//! ```json
//! "@total": {
//!   "placeholders": {
//!     "amount": { "type": "num", "format": "currency", "optionalParameters": { "name": "EUR" } }
//!   }
//! }
//! ```
//!
//! A declaration both gates which names resolve in Arb-family templates and
//! selects how a value is formatted.

use crate::format::{
    DateTimeKind, DateTimeStyle, NumericStyle, NumericStyleOptions, format_temporal, skeleton_style,
};
use crate::{I18nError, RenderConfig, Result, Value};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Declared placeholder type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeclaredType {
    /// `num` or `double`
    Num,
    /// `int`
    Int,
    /// `DateTime`
    DateTime,
    /// Anything else (`String`, `Object`, ...); formatted generically
    Other(String),
}

impl From<String> for DeclaredType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "num" | "double" => Self::Num,
            "int" => Self::Int,
            "DateTime" => Self::DateTime,
            _ => Self::Other(value),
        }
    }
}

impl From<DeclaredType> for String {
    fn from(value: DeclaredType) -> Self {
        match value {
            DeclaredType::Num => "num".to_string(),
            DeclaredType::Int => "int".to_string(),
            DeclaredType::DateTime => "DateTime".to_string(),
            DeclaredType::Other(other) => other,
        }
    }
}

/// Metadata for one placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderDeclaration {
    /// Placeholder name (the key of the `placeholders` object).
    #[serde(skip)]
    pub name: String,
    /// Declared type.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<DeclaredType>,
    /// Format name or skeleton.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Example value for translators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    /// Parameters of the format (`name`, `decimalDigits`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub optional_parameters: BTreeMap<String, serde_json::Value>,
    /// Any other attributes.
    #[serde(flatten)]
    pub properties: BTreeMap<String, serde_json::Value>,
}

impl PlaceholderDeclaration {
    /// Create a declaration with no type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the declared type.
    pub fn with_type(mut self, declared_type: DeclaredType) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    /// Set the format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Set an optional parameter.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.optional_parameters.insert(key.into(), value.into());
        self
    }

    /// Set a free-form property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether `format` is a verbatim date pattern rather than a skeleton.
    pub fn is_custom_date_format(&self) -> bool {
        match self.properties.get("isCustomDateFormat") {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    fn text_parameter(&self, key: &str) -> Option<String> {
        match self.optional_parameters.get(key)? {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    fn digits_parameter(&self, key: &str) -> Option<usize> {
        match self.optional_parameters.get(key)? {
            serde_json::Value::Number(n) => n.as_u64().map(|d| d as usize),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Numeric style selected by the declared format.
    pub fn numeric_style(&self) -> Result<NumericStyleOptions> {
        let style = match self.format.as_deref().map(str::trim) {
            None | Some("") => match self.declared_type {
                Some(DeclaredType::Int) => NumericStyleOptions::new(NumericStyle::Integer),
                _ => NumericStyleOptions::new(NumericStyle::Number),
            },
            Some("compact" | "compactLong") => NumericStyleOptions::new(NumericStyle::CompactShort),
            Some(
                "currency" | "simpleCurrency" | "compactCurrency" | "compactSimpleCurrency",
            ) => {
                let mut options = NumericStyleOptions::currency(self.text_parameter("name"));
                options.decimal_digits = self.digits_parameter("decimalDigits");
                options
            }
            Some("decimalPattern") => NumericStyleOptions::new(NumericStyle::Number),
            Some("percentPattern" | "decimalPercentPattern") => {
                NumericStyleOptions::new(NumericStyle::Percent)
            }
            Some("scientificPattern") => NumericStyleOptions::new(NumericStyle::Scientific),
            Some(other) => return Err(I18nError::UnsupportedStyle(other.to_string())),
        };
        Ok(style)
    }

    /// Date kind and style selected by the declared format.
    pub fn date_style(&self) -> Result<(DateTimeKind, DateTimeStyle)> {
        let Some(format) = self.format.as_deref().filter(|f| !f.trim().is_empty()) else {
            return Ok((DateTimeKind::DateTime, DateTimeStyle::Medium));
        };
        if self.is_custom_date_format() {
            return Ok((DateTimeKind::DateTime, DateTimeStyle::Custom(format.to_string())));
        }
        skeleton_style(format).ok_or_else(|| I18nError::UnsupportedStyle(format.to_string()))
    }

    /// Format `value` as the declared type.
    ///
    /// Returns `Ok(None)` when there is no numeric or date type, or when the
    /// value does not fit the declared type; the caller then stringifies it
    /// generically. An unknown format is an error.
    pub fn format_value(&self, value: &Value, config: &RenderConfig) -> Result<Option<String>> {
        match self.declared_type {
            Some(DeclaredType::Num | DeclaredType::Int) => {
                let style = self.numeric_style()?;
                let Some(n) = value.as_number() else {
                    debug!(name = %self.name, value = %value, "value is not numeric, formatting generically");
                    return Ok(None);
                };
                style
                    .format(n, &config.locale, config.default_currency.as_deref())
                    .map(Some)
            }
            Some(DeclaredType::DateTime) => {
                let (kind, style) = self.date_style()?;
                let Some(t) = value.as_temporal() else {
                    debug!(name = %self.name, value = %value, "value is not a date, formatting generically");
                    return Ok(None);
                };
                Ok(Some(format_temporal(&t, kind, &style, &config.locale)))
            }
            Some(DeclaredType::Other(_)) | None => Ok(None),
        }
    }
}

/// The declarations of one template text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Declarations {
    entries: Vec<PlaceholderDeclaration>,
}

impl Declarations {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration.
    pub fn with(mut self, declaration: PlaceholderDeclaration) -> Self {
        self.insert(declaration);
        self
    }

    /// Add a declaration.
    pub fn insert(&mut self, declaration: PlaceholderDeclaration) {
        self.entries.push(declaration);
    }

    /// Find a declaration by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&PlaceholderDeclaration> {
        self.entries
            .iter()
            .find(|declaration| declaration.name.eq_ignore_ascii_case(name))
    }

    /// Number of declarations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the declarations.
    pub fn iter(&self) -> impl Iterator<Item = &PlaceholderDeclaration> {
        self.entries.iter()
    }

    /// Parse an ARB metadata object (`{"placeholders": {...}}`) or a bare
    /// placeholders object.
    ///
    /// ```
    /// use quill_i18n::{DeclaredType, Declarations};
    ///
    /// let declarations = Declarations::from_arb_json(
    ///     r#"{ "placeholders": { "count": { "type": "int" } } }"#,
    /// ).unwrap();
    /// let count = declarations.find("COUNT").unwrap();
    /// assert_eq!(count.declared_type, Some(DeclaredType::Int));
    /// ```
    pub fn from_arb_json(json: &str) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(json)?;
        let placeholders = match root.get("placeholders") {
            Some(inner) => inner.clone(),
            None => root,
        };
        let serde_json::Value::Object(map) = placeholders else {
            return Err(I18nError::InvalidConfig(
                "placeholders must be a JSON object".to_string(),
            ));
        };

        let mut declarations = Self::new();
        for (name, body) in map {
            let mut declaration: PlaceholderDeclaration = serde_json::from_value(body)?;
            declaration.name = name;
            declarations.insert(declaration);
        }
        Ok(declarations)
    }
}

impl FromIterator<PlaceholderDeclaration> for Declarations {
    fn from_iter<I: IntoIterator<Item = PlaceholderDeclaration>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Locale;

    fn config() -> RenderConfig {
        RenderConfig::new(Locale::en_us())
    }

    #[test]
    fn test_parse_arb_metadata() {
        let json = r#"{
            "description": "ignored",
            "placeholders": {
                "when": { "type": "DateTime", "format": "EEE, M/d", "isCustomDateFormat": "true" },
                "price": { "type": "double", "format": "currency", "optionalParameters": { "name": "EUR", "decimalDigits": 1 } },
                "who": { "type": "String", "example": "Bob" }
            }
        }"#;
        let declarations = Declarations::from_arb_json(json).unwrap();
        assert_eq!(declarations.len(), 3);

        let when = declarations.find("when").unwrap();
        assert!(when.is_custom_date_format());
        assert_eq!(when.declared_type, Some(DeclaredType::DateTime));

        let price = declarations.find("Price").unwrap();
        assert_eq!(price.declared_type, Some(DeclaredType::Num));
        let style = price.numeric_style().unwrap();
        assert_eq!(style.currency.as_deref(), Some("EUR"));
        assert_eq!(style.decimal_digits, Some(1));

        let who = declarations.find("who").unwrap();
        assert_eq!(who.example.as_deref(), Some("Bob"));
        assert_eq!(who.declared_type, Some(DeclaredType::Other("String".into())));
    }

    #[test]
    fn test_format_numeric() {
        let compact = PlaceholderDeclaration::new("n")
            .with_type(DeclaredType::Num)
            .with_format("compact");
        assert_eq!(
            compact.format_value(&Value::from(1500), &config()).unwrap().as_deref(),
            Some("1.5K")
        );

        let int = PlaceholderDeclaration::new("n").with_type(DeclaredType::Int);
        assert_eq!(
            int.format_value(&Value::from(1234.6), &config()).unwrap().as_deref(),
            Some("1,235")
        );
    }

    #[test]
    fn test_type_mismatch_is_generic() {
        let num = PlaceholderDeclaration::new("n").with_type(DeclaredType::Num);
        assert_eq!(num.format_value(&Value::from("many"), &config()).unwrap(), None);

        let date = PlaceholderDeclaration::new("d").with_type(DeclaredType::DateTime);
        assert_eq!(date.format_value(&Value::from("soon"), &config()).unwrap(), None);
    }

    #[test]
    fn test_unknown_format_is_error() {
        let num = PlaceholderDeclaration::new("n")
            .with_type(DeclaredType::Num)
            .with_format("roman");
        assert!(matches!(
            num.format_value(&Value::from(4), &config()),
            Err(I18nError::UnsupportedStyle(_))
        ));
    }

    #[test]
    fn test_date_formats() {
        let short = PlaceholderDeclaration::new("d")
            .with_type(DeclaredType::DateTime)
            .with_format("yMd");
        let value = Value::from("2024-01-15T09:05:00");
        assert_eq!(
            short.format_value(&value, &config()).unwrap().as_deref(),
            Some("1/15/24")
        );

        let custom = PlaceholderDeclaration::new("d")
            .with_type(DeclaredType::DateTime)
            .with_format("y/MM")
            .with_property("isCustomDateFormat", true);
        assert_eq!(
            custom.format_value(&value, &config()).unwrap().as_deref(),
            Some("2024/01")
        );
    }
}
