//! Placeholder values
//!
//! Values handed to the engine are a closed set of variants, so formatting
//! never has to probe runtime types.

use crate::Locale;
use crate::format::{DateTimeKind, DateTimeStyle, format_plain, format_temporal};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use std::fmt;
use std::sync::Arc;

/// A point in time, with or without a known UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    /// Timestamp with a known offset.
    Zoned(DateTime<FixedOffset>),
    /// Wall-clock timestamp with no offset information.
    Naive(NaiveDateTime),
}

impl Temporal {
    /// Wall-clock date and time as shown to the reader.
    pub fn local(&self) -> NaiveDateTime {
        match self {
            Self::Zoned(dt) => dt.naive_local(),
            Self::Naive(dt) => *dt,
        }
    }

    /// Offset from UTC, when known.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Zoned(dt) => Some(dt.offset().fix()),
            Self::Naive(_) => None,
        }
    }

    /// Interpret `millis` as milliseconds since the Unix epoch (UTC).
    pub fn from_epoch_millis(millis: i64) -> Option<Self> {
        Utc.timestamp_millis_opt(millis)
            .single()
            .map(|dt| Self::Zoned(dt.fixed_offset()))
    }

    /// Parse RFC 3339, `YYYY-MM-DDTHH:MM[:SS[.fff]]`, `YYYY-MM-DD HH:MM[:SS]`
    /// or `YYYY-MM-DD`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(Self::Zoned(dt));
        }
        for pattern in [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%d %H:%M",
        ] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(text, pattern) {
                return Some(Self::Naive(dt));
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(|date| Self::Naive(date.and_time(NaiveTime::MIN)))
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(dt) => write!(f, "{}", dt.to_rfc3339()),
            Self::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
        }
    }
}

/// A value supplied for a placeholder.
#[derive(Clone)]
pub enum Value {
    /// Floating point number.
    Number(f64),
    /// Integer.
    Integer(i64),
    /// Text.
    Text(String),
    /// Date and/or time.
    Temporal(Temporal),
    /// Anything else; only its `Display` form is used.
    Opaque(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    /// Wrap any displayable value.
    pub fn opaque(value: impl fmt::Display + Send + Sync + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Numeric view of the value. Text is parsed; temporals and opaque
    /// values are not numeric.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Integer(i) => Some(*i as f64),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Temporal(_) | Self::Opaque(_) => None,
        }
    }

    /// Date/time view of the value. Numbers are milliseconds since the Unix
    /// epoch; text is parsed with [`Temporal::parse`].
    pub fn as_temporal(&self) -> Option<Temporal> {
        match self {
            Self::Temporal(t) => Some(*t),
            Self::Integer(i) => Temporal::from_epoch_millis(*i),
            Self::Number(n) if n.is_finite() => Temporal::from_epoch_millis(n.round() as i64),
            Self::Text(s) => Temporal::parse(s),
            _ => None,
        }
    }

    /// Whether the value is a number or an integer (no text coercion).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Integer(_))
    }

    /// Locale-default stringification.
    pub fn to_locale_string(&self, locale: &Locale) -> String {
        match self {
            Self::Number(n) => format_plain(*n, locale),
            Self::Integer(i) => i.to_string(),
            Self::Text(s) => s.clone(),
            Self::Temporal(t) => {
                format_temporal(t, DateTimeKind::DateTime, &DateTimeStyle::Medium, locale)
            }
            Self::Opaque(v) => v.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Integer(i) => write!(f, "{}", i),
            Self::Text(s) => f.write_str(s),
            Self::Temporal(t) => write!(f, "{}", t),
            Self::Opaque(v) => write!(f, "{}", v),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            Self::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Self::Temporal(t) => f.debug_tuple("Temporal").field(t).finish(),
            Self::Opaque(v) => f.debug_tuple("Opaque").field(&v.to_string()).finish(),
        }
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Integer(value as i64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, isize);

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(i) => Self::Integer(i),
            Err(_) => Self::Number(value as f64),
        }
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::from(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Temporal> for Value {
    fn from(value: Temporal) -> Self {
        Self::Temporal(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Temporal(Temporal::Zoned(value))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Temporal(Temporal::Zoned(value.fixed_offset()))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Temporal(Temporal::Naive(value))
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Temporal(Temporal::Naive(value.and_time(NaiveTime::MIN)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_to_string() {
        assert_eq!(Value::from(5).to_string(), "5");
        assert_eq!(Value::from(5.0).to_string(), "5");
        assert_eq!(Value::from(1.25).to_string(), "1.25");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::opaque('x').to_string(), "x");
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(Value::from(" 42 ").as_number(), Some(42.0));
        assert_eq!(Value::from("abc").as_number(), None);
        assert_eq!(Value::from(7u64).as_number(), Some(7.0));
        assert!(Value::from(3).is_numeric());
        assert!(!Value::from("3").is_numeric());
    }

    #[test]
    fn test_temporal_coercion() {
        let t = Value::from("2024-01-15T10:30:00+02:00").as_temporal().unwrap();
        assert_eq!(t.offset(), FixedOffset::east_opt(7200));
        assert_eq!(t.local().to_string(), "2024-01-15 10:30:00");

        let t = Value::from("2024-01-15").as_temporal().unwrap();
        assert_eq!(t.offset(), None);

        let t = Value::from(0).as_temporal().unwrap();
        assert_eq!(t.local().to_string(), "1970-01-01 00:00:00");
        assert_eq!(t.offset(), FixedOffset::east_opt(0));

        assert!(Value::from("not a date").as_temporal().is_none());
        assert!(Value::opaque(1).as_temporal().is_none());
    }

    #[test]
    fn test_locale_string() {
        assert_eq!(Value::from(1234.5).to_locale_string(&Locale::de_de()), "1234,5");
        assert_eq!(Value::from(1234.5).to_locale_string(&Locale::en_us()), "1234.5");
        assert_eq!(Value::from(12).to_locale_string(&Locale::fr()), "12");
    }
}
