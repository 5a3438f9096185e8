//! .NET composite format items
//!
//! The tail of a DotNet placeholder, `[,alignment][:format]`, applied to a
//! resolved value.

use super::datetime::format_dotnet_date;
use super::number::{
    CurrencyFormatter, DecimalPattern, NumberFormatter, format_plain, number_separators,
};
use crate::{I18nError, Locale, Result, Value};

/// Parsed `[,alignment][:format]` tail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatItem<'a> {
    /// Field width; negative left-aligns.
    pub alignment: Option<i32>,
    /// Format string after the colon.
    pub format: Option<&'a str>,
}

impl<'a> FormatItem<'a> {
    /// Parse the text following the placeholder name.
    pub fn parse(tail: &'a str) -> Result<Self> {
        let (alignment, format) = match tail.strip_prefix(',') {
            Some(rest) => match rest.split_once(':') {
                Some((width, format)) => (Some(width), Some(format)),
                None => (Some(rest), None),
            },
            None => (None, tail.strip_prefix(':')),
        };

        if alignment.is_none() && format.is_none() && !tail.trim().is_empty() {
            return Err(I18nError::InvalidPlaceholderName(tail.to_string()));
        }

        let alignment = alignment
            .map(|width| {
                width
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .filter(|w| w.unsigned_abs() <= MAX_ALIGNMENT)
                    .ok_or_else(|| I18nError::UnsupportedStyle(tail.to_string()))
            })
            .transpose()?;

        Ok(Self { alignment, format })
    }

    /// Format `value` and pad it to the alignment width.
    pub fn apply(&self, value: &Value, locale: &Locale) -> Result<String> {
        let body = match self.format.filter(|f| !f.is_empty()) {
            Some(format) => format_value(value, format, locale)?,
            None => value.to_locale_string(locale),
        };
        Ok(align(body, self.alignment))
    }
}

fn align(body: String, alignment: Option<i32>) -> String {
    let Some(width) = alignment else {
        return body;
    };
    let len = body.chars().count();
    let target = width.unsigned_abs() as usize;
    if len >= target {
        return body;
    }
    let padding = " ".repeat(target - len);
    if width > 0 {
        padding + &body
    } else {
        body + &padding
    }
}

fn format_value(value: &Value, format: &str, locale: &Locale) -> Result<String> {
    match value {
        Value::Integer(i) => format_dotnet_number(*i as f64, Some(*i), format, locale),
        Value::Number(n) => format_dotnet_number(*n, None, format, locale),
        Value::Temporal(t) => Ok(format_dotnet_date(t, format, locale)),
        Value::Text(_) | Value::Opaque(_) => Ok(value.to_locale_string(locale)),
    }
}

/// Largest precision specifier accepted in a standard numeric format.
pub const MAX_PRECISION: usize = 99;

/// Largest field width accepted in an alignment component.
pub const MAX_ALIGNMENT: u32 = 999_999;

/// .NET standard numeric format strings (`C`, `D`, `E`, `F`, `G`, `N`, `P`,
/// `R`, `X` with optional precision), falling back to a custom pattern.
pub fn format_dotnet_number(
    n: f64,
    integer: Option<i64>,
    format: &str,
    locale: &Locale,
) -> Result<String> {
    let mut chars = format.chars();
    let letter = chars.next().unwrap_or('G');
    let rest = chars.as_str();
    let standard = letter.is_ascii_alphabetic() && rest.chars().all(|c| c.is_ascii_digit());

    if !standard {
        return Ok(DecimalPattern::parse(format)?.format(n, locale));
    }

    let unsupported = || I18nError::UnsupportedStyle(format.to_string());
    let precision = match rest {
        "" => None,
        digits => match digits.parse::<usize>() {
            Ok(p) if p <= MAX_PRECISION => Some(p),
            _ => return Err(unsupported()),
        },
    };

    let text = match letter.to_ascii_uppercase() {
        'C' => CurrencyFormatter::new(locale.currency().unwrap_or("XXX"))
            .decimal_digits(precision)
            .format(n, locale),
        'D' => {
            let i = integer.ok_or_else(unsupported)?;
            let digits = format!("{:0width$}", i.unsigned_abs(), width = precision.unwrap_or(1));
            if i < 0 { format!("-{}", digits) } else { digits }
        }
        'E' => {
            let formatted = format!("{:.*e}", precision.unwrap_or(6), n);
            let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let (decimal_sep, _) = number_separators(locale);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!(
                "{}{}{}{:03}",
                mantissa.replace('.', decimal_sep),
                letter,
                sign,
                exponent.unsigned_abs()
            )
        }
        'F' => NumberFormatter::new()
            .fraction_digits(precision.unwrap_or(2))
            .use_grouping(false)
            .format(n, locale),
        'N' => NumberFormatter::new()
            .fraction_digits(precision.unwrap_or(2))
            .format(n, locale),
        'P' => {
            let body = NumberFormatter::new()
                .fraction_digits(precision.unwrap_or(2))
                .format(n * 100.0, locale);
            format!("{}%", body)
        }
        'G' => match integer {
            Some(i) => i.to_string(),
            None => format_plain(n, locale),
        },
        'R' => format_plain(n, locale),
        'X' => {
            let i = integer.ok_or_else(unsupported)?;
            let width = precision.unwrap_or(1);
            if letter == 'X' {
                format!("{:0width$X}", i, width = width)
            } else {
                format!("{:0width$x}", i, width = width)
            }
        }
        _ => DecimalPattern::parse(format)?.format(n, locale),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tail() {
        assert_eq!(FormatItem::parse("").unwrap(), FormatItem::default());
        assert_eq!(
            FormatItem::parse(",-6:N1").unwrap(),
            FormatItem {
                alignment: Some(-6),
                format: Some("N1")
            }
        );
        assert_eq!(FormatItem::parse(":yyyy").unwrap().format, Some("yyyy"));
        assert!(FormatItem::parse(",abc").is_err());
    }

    #[test]
    fn test_alignment() {
        let en = Locale::en_us();
        let item = FormatItem::parse(",5").unwrap();
        assert_eq!(item.apply(&Value::from(42), &en).unwrap(), "   42");
        let item = FormatItem::parse(",-5").unwrap();
        assert_eq!(item.apply(&Value::from("ab"), &en).unwrap(), "ab   ");
    }

    #[test]
    fn test_standard_numeric_formats() {
        let en = Locale::en_us();
        let f = |n: f64, i: Option<i64>, spec: &str| format_dotnet_number(n, i, spec, &en).unwrap();
        assert_eq!(f(1234.567, None, "N"), "1,234.57");
        assert_eq!(f(1234.567, None, "F1"), "1234.6");
        assert_eq!(f(0.256, None, "P1"), "25.6%");
        assert_eq!(f(42.0, Some(42), "D5"), "00042");
        assert_eq!(f(255.0, Some(255), "X4"), "00FF");
        assert_eq!(f(255.0, Some(255), "x"), "ff");
        assert_eq!(f(9.5, None, "C"), "$9.50");
        assert_eq!(f(1234.5, None, "E2"), "1.23E+003");
        assert_eq!(f(1234.5, None, "#,##0.0"), "1,234.5");
        assert!(format_dotnet_number(1.5, None, "D", &en).is_err());
    }

    #[test]
    fn test_precision_and_width_limits() {
        let en = Locale::en_us();
        let f99 = format_dotnet_number(1.5, None, "F99", &en).unwrap();
        assert_eq!(f99.len(), 101);
        for spec in ["F100", "N999999999", "D100", "E99999999999999999999999"] {
            assert!(
                matches!(
                    format_dotnet_number(1.0, Some(1), spec, &en),
                    Err(I18nError::UnsupportedStyle(_))
                ),
                "{} should be rejected",
                spec
            );
        }
        assert_eq!(FormatItem::parse(",-999999").unwrap().alignment, Some(-999_999));
        assert!(matches!(
            FormatItem::parse(",1000000"),
            Err(I18nError::UnsupportedStyle(_))
        ));
    }

    #[test]
    fn test_text_ignores_format() {
        let item = FormatItem::parse(":N2").unwrap();
        assert_eq!(item.apply(&Value::from("abc"), &Locale::en_us()).unwrap(), "abc");
    }
}
