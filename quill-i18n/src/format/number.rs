//! Number Formatting
//!
//! Locale-aware numbers, percentages, currencies, compact and scientific
//! notation, and DecimalFormat-style custom patterns.

use crate::{I18nError, Locale, Result};

// ============================================================================
// Number Formatting
// ============================================================================

/// Number formatting configuration.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    /// Minimum integer digits
    pub min_integer_digits: usize,
    /// Minimum fraction digits
    pub min_fraction_digits: usize,
    /// Maximum fraction digits
    pub max_fraction_digits: usize,
    /// Use grouping separators
    pub use_grouping: bool,
    /// Digits per group
    pub grouping_size: usize,
}

impl Default for NumberFormatter {
    fn default() -> Self {
        Self {
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            use_grouping: true,
            grouping_size: 3,
        }
    }
}

impl NumberFormatter {
    /// Create a new number formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set minimum integer digits.
    pub fn min_integer_digits(mut self, digits: usize) -> Self {
        self.min_integer_digits = digits;
        self
    }

    /// Set minimum fraction digits.
    pub fn min_fraction_digits(mut self, digits: usize) -> Self {
        self.min_fraction_digits = digits;
        self.max_fraction_digits = self.max_fraction_digits.max(digits);
        self
    }

    /// Set maximum fraction digits.
    pub fn max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self.min_fraction_digits = self.min_fraction_digits.min(digits);
        self
    }

    /// Set exact fraction digits.
    pub fn fraction_digits(self, digits: usize) -> Self {
        self.max_fraction_digits(digits).min_fraction_digits(digits)
    }

    /// Set whether to use grouping separators.
    pub fn use_grouping(mut self, use_grouping: bool) -> Self {
        self.use_grouping = use_grouping;
        self
    }

    /// Set the number of digits per group.
    pub fn grouping_size(mut self, size: usize) -> Self {
        self.grouping_size = size.max(1);
        self
    }

    /// Format a number for the given locale.
    pub fn format(&self, n: f64, locale: &Locale) -> String {
        let (decimal_sep, group_sep) = number_separators(locale);
        self.format_with(n, decimal_sep, group_sep)
    }

    pub(crate) fn format_with(&self, n: f64, decimal_sep: &str, group_sep: &str) -> String {
        if n.is_nan() {
            return "NaN".to_string();
        }
        if n.is_infinite() {
            return if n > 0.0 { "∞" } else { "-∞" }.to_string();
        }

        let rounded = round_half_away(n.abs(), self.max_fraction_digits);
        let negative = n < 0.0 && rounded != 0.0;
        let formatted = format!("{:.*}", self.max_fraction_digits, rounded);
        let (integer_part, fraction_part) = formatted
            .split_once('.')
            .unwrap_or((formatted.as_str(), ""));

        let mut fraction = fraction_part.to_string();
        while fraction.len() > self.min_fraction_digits && fraction.ends_with('0') {
            fraction.pop();
        }

        let mut integer = integer_part.to_string();
        if integer.len() < self.min_integer_digits {
            integer.insert_str(0, &"0".repeat(self.min_integer_digits - integer.len()));
        }
        if self.min_integer_digits == 0 && integer == "0" && !fraction.is_empty() {
            integer.clear();
        }

        let integer = if self.use_grouping {
            add_grouping(&integer, group_sep, self.grouping_size)
        } else {
            integer
        };

        let mut out = String::with_capacity(integer.len() + fraction.len() + 2);
        if negative {
            out.push('-');
        }
        out.push_str(&integer);
        if !fraction.is_empty() {
            out.push_str(decimal_sep);
            out.push_str(&fraction);
        }
        out
    }
}

/// Format a number for a locale (grouping, up to three fraction digits).
///
/// # Example
///
/// ```
/// use quill_i18n::format::format_number;
/// use quill_i18n::Locale;
///
/// assert_eq!(format_number(1234567.89, &Locale::en_us()), "1,234,567.89");
/// assert_eq!(format_number(1234567.89, &Locale::de_de()), "1.234.567,89");
/// assert_eq!(format_number(1234567.89, &Locale::fr_fr()), "1 234 567,89");
/// ```
pub fn format_number(n: f64, locale: &Locale) -> String {
    NumberFormatter::default().format(n, locale)
}

/// Format a number rounded half away from zero to an integer.
pub fn format_integer(n: f64, locale: &Locale) -> String {
    NumberFormatter::new().max_fraction_digits(0).format(n, locale)
}

/// Format a fraction as a percentage.
///
/// # Example
///
/// ```
/// use quill_i18n::format::format_percent;
/// use quill_i18n::Locale;
///
/// assert_eq!(format_percent(0.75, &Locale::en_us()), "75%");
/// assert_eq!(format_percent(0.125, &Locale::de_de()), "12,5%");
/// ```
pub fn format_percent(n: f64, locale: &Locale) -> String {
    let formatted = NumberFormatter::new()
        .max_fraction_digits(1)
        .format(n * 100.0, locale);
    format!("{}%", formatted)
}

/// Locale-default stringification of a number: shortest representation,
/// locale decimal separator, no grouping.
pub fn format_plain(n: f64, locale: &Locale) -> String {
    let (decimal_sep, _) = number_separators(locale);
    let text = n.to_string();
    if decimal_sep == "." {
        text
    } else {
        text.replace('.', decimal_sep)
    }
}

/// Format with a `K`/`M`/`B`/`T` suffix.
///
/// One fraction digit is kept while the scaled value is below ten; a
/// trailing `.0` is dropped.
///
/// # Example
///
/// ```
/// use quill_i18n::format::format_compact;
/// use quill_i18n::Locale;
///
/// let en = Locale::en_us();
/// assert_eq!(format_compact(1500.0, &en), "1.5K");
/// assert_eq!(format_compact(999.0, &en), "999");
/// assert_eq!(format_compact(2_500_000.0, &en), "2.5M");
/// ```
pub fn format_compact(n: f64, locale: &Locale) -> String {
    const SCALES: [(f64, &str); 5] = [
        (1.0, ""),
        (1e3, "K"),
        (1e6, "M"),
        (1e9, "B"),
        (1e12, "T"),
    ];

    if !n.is_finite() {
        return format_number(n, locale);
    }

    let abs = n.abs();
    let mut idx = SCALES.iter().rposition(|(scale, _)| abs >= *scale).unwrap_or(0);
    let (scaled, digits) = loop {
        let scaled = abs / SCALES[idx].0;
        let digits = if scaled < 10.0 { 1 } else { 0 };
        let rounded = round_half_away(scaled, digits);
        if rounded >= 1000.0 && idx + 1 < SCALES.len() {
            idx += 1;
            continue;
        }
        break (rounded, digits);
    };

    let (decimal_sep, _) = number_separators(locale);
    let body = NumberFormatter::new()
        .max_fraction_digits(digits)
        .use_grouping(false)
        .format_with(scaled, decimal_sep, "");
    let sign = if n < 0.0 && body != "0" { "-" } else { "" };
    format!("{}{}{}", sign, body, SCALES[idx].1)
}

/// Scientific notation with up to three mantissa fraction digits (`1.5E3`).
pub fn format_scientific(n: f64, locale: &Locale) -> String {
    if !n.is_finite() {
        return format_number(n, locale);
    }
    let formatted = format!("{:.3e}", n);
    let (mantissa, exponent) = formatted.split_once('e').unwrap_or((formatted.as_str(), "0"));
    let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
    let (decimal_sep, _) = number_separators(locale);
    format!("{}E{}", mantissa.replace('.', decimal_sep), exponent)
}

// ============================================================================
// Currency Formatting
// ============================================================================

/// Currency formatting configuration.
///
/// A currency that is the locale region's own currency is written the
/// native way (symbol and position); any other is written as
/// `"<ISO> <amount>"`.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    /// Currency code (ISO 4217)
    pub currency_code: String,
    /// Fraction digits; defaults to the currency's minor units
    pub decimal_digits: Option<usize>,
}

impl CurrencyFormatter {
    /// Create a new currency formatter.
    pub fn new(currency_code: impl Into<String>) -> Self {
        Self {
            currency_code: currency_code.into().to_uppercase(),
            decimal_digits: None,
        }
    }

    /// Override the number of fraction digits.
    pub fn decimal_digits(mut self, digits: Option<usize>) -> Self {
        self.decimal_digits = digits;
        self
    }

    /// Whether this currency is the locale's own.
    pub fn is_native(&self, locale: &Locale) -> bool {
        locale.currency() == Some(self.currency_code.as_str())
    }

    /// Format a currency amount.
    pub fn format(&self, amount: f64, locale: &Locale) -> String {
        let digits = self
            .decimal_digits
            .unwrap_or_else(|| minor_units(&self.currency_code));
        let formatted = NumberFormatter::new()
            .fraction_digits(digits)
            .format(amount.abs(), locale);
        let sign = if amount < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };

        if self.is_native(locale) {
            let (symbol, before) = currency_symbol(&self.currency_code, locale);
            if before {
                format!("{}{}{}", sign, symbol, formatted)
            } else {
                format!("{}{} {}", sign, formatted, symbol)
            }
        } else {
            format!("{}{} {}", sign, self.currency_code, formatted)
        }
    }
}

/// Format a currency amount for a locale.
///
/// # Example
///
/// ```
/// use quill_i18n::format::format_currency;
/// use quill_i18n::Locale;
///
/// assert_eq!(format_currency(99.99, "USD", &Locale::en_us()), "$99.99");
/// assert_eq!(format_currency(99.99, "EUR", &Locale::de_de()), "99,99 €");
/// assert_eq!(format_currency(99.99, "EUR", &Locale::en_us()), "EUR 99.99");
/// ```
pub fn format_currency(amount: f64, currency_code: &str, locale: &Locale) -> String {
    CurrencyFormatter::new(currency_code).format(amount, locale)
}

// ============================================================================
// Style options
// ============================================================================

/// Numeric style tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericStyle {
    /// Grouped decimal number.
    #[default]
    Number,
    /// Rounded to an integer.
    Integer,
    /// Fraction shown as a percentage.
    Percent,
    /// Currency amount.
    Currency,
    /// `K`/`M`/`B`/`T` suffixed.
    CompactShort,
    /// Scientific notation.
    Scientific,
    /// DecimalFormat-style pattern.
    Custom,
}

/// Style options of a `number` directive or a declared numeric placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NumericStyleOptions {
    /// Style tag
    pub style: NumericStyle,
    /// ISO 4217 code for [`NumericStyle::Currency`]
    pub currency: Option<String>,
    /// Pattern for [`NumericStyle::Custom`]
    pub pattern: Option<String>,
    /// Fraction digits override for currency
    pub decimal_digits: Option<usize>,
}

impl NumericStyleOptions {
    /// Options with the given style.
    pub fn new(style: NumericStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Currency options.
    pub fn currency(code: Option<impl Into<String>>) -> Self {
        Self {
            style: NumericStyle::Currency,
            currency: code.map(Into::into),
            ..Self::default()
        }
    }

    /// Custom pattern options.
    pub fn custom(pattern: impl Into<String>) -> Self {
        Self {
            style: NumericStyle::Custom,
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Parse the style part of a `number` directive.
    ///
    /// Accepts `number`, `integer`, `percent`, `currency` (optionally
    /// `currency/EUR` or `currency:EUR`), `compact-short`, `scientific`,
    /// the same words behind an ICU `::` prefix, or a custom pattern
    /// containing `#` or `0`. Absent or empty means `number`.
    pub fn parse(style: Option<&str>) -> Result<Self> {
        let Some(raw) = style.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };
        let token = raw.strip_prefix("::").unwrap_or(raw).trim();
        let lower = token.to_ascii_lowercase();

        let (keyword, argument) = match lower.split_once(['/', ':', ' ']) {
            Some((keyword, argument)) => (keyword, Some(argument.trim())),
            None => (lower.as_str(), None),
        };

        let options = match (keyword, argument) {
            ("number" | "decimal", None) => Self::new(NumericStyle::Number),
            ("integer", None) => Self::new(NumericStyle::Integer),
            ("percent", None) => Self::new(NumericStyle::Percent),
            ("currency", code) => Self::currency(code.filter(|c| !c.is_empty()).map(str::to_uppercase)),
            ("compact-short" | "compact" | "compactshort", None) => {
                Self::new(NumericStyle::CompactShort)
            }
            ("scientific", None) => Self::new(NumericStyle::Scientific),
            _ if token.contains(['#', '0']) => Self::custom(token),
            _ => return Err(I18nError::UnsupportedStyle(raw.to_string())),
        };
        Ok(options)
    }

    /// Format `n` with these options.
    ///
    /// The currency code falls back to `default_currency`, then to the
    /// locale region's currency, then to `XXX`.
    pub fn format(&self, n: f64, locale: &Locale, default_currency: Option<&str>) -> Result<String> {
        let text = match self.style {
            NumericStyle::Number => format_number(n, locale),
            NumericStyle::Integer => format_integer(n, locale),
            NumericStyle::Percent => format_percent(n, locale),
            NumericStyle::Currency => {
                let code = self
                    .currency
                    .as_deref()
                    .or(default_currency)
                    .or_else(|| locale.currency())
                    .unwrap_or("XXX");
                CurrencyFormatter::new(code)
                    .decimal_digits(self.decimal_digits)
                    .format(n, locale)
            }
            NumericStyle::CompactShort => format_compact(n, locale),
            NumericStyle::Scientific => format_scientific(n, locale),
            NumericStyle::Custom => {
                let pattern = self.pattern.as_deref().unwrap_or_default();
                DecimalPattern::parse(pattern)?.format(n, locale)
            }
        };
        Ok(text)
    }
}

// ============================================================================
// Custom patterns
// ============================================================================

/// A DecimalFormat-style pattern such as `#,##0.00` or `'€'0.###`.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalPattern {
    prefix: String,
    suffix: String,
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping_size: Option<usize>,
    multiplier: f64,
}

impl DecimalPattern {
    /// Parse the positive sub-pattern of `pattern`.
    pub fn parse(pattern: &str) -> Result<Self> {
        #[derive(PartialEq)]
        enum Part {
            Prefix,
            Number,
            Suffix,
        }

        let mut part = Part::Prefix;
        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut number = String::new();
        let mut multiplier = 1.0;
        let mut chars = pattern.chars().peekable();

        while let Some(c) = chars.next() {
            let is_number_char = matches!(c, '#' | '0' | ',' | '.');
            if c == ';' {
                break;
            }
            if is_number_char && part != Part::Suffix {
                part = Part::Number;
                number.push(c);
                continue;
            }
            if part == Part::Number {
                part = Part::Suffix;
            }
            let target = if part == Part::Prefix {
                &mut prefix
            } else {
                &mut suffix
            };
            match c {
                '\'' => {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        target.push('\'');
                        continue;
                    }
                    while let Some(q) = chars.next() {
                        if q == '\'' {
                            if chars.peek() == Some(&'\'') {
                                chars.next();
                                target.push('\'');
                                continue;
                            }
                            break;
                        }
                        target.push(q);
                    }
                }
                '%' => {
                    multiplier = 100.0;
                    target.push('%');
                }
                '‰' => {
                    multiplier = 1000.0;
                    target.push('‰');
                }
                c => target.push(c),
            }
        }

        if !number.contains(['#', '0']) {
            return Err(I18nError::UnsupportedStyle(pattern.to_string()));
        }

        let (integer, fraction) = number.split_once('.').unwrap_or((number.as_str(), ""));
        let grouping_size = integer
            .rfind(',')
            .map(|idx| integer[idx + 1..].len())
            .filter(|size| *size > 0);

        Ok(Self {
            prefix,
            suffix,
            min_integer_digits: integer.chars().filter(|c| *c == '0').count(),
            min_fraction_digits: fraction.chars().filter(|c| *c == '0').count(),
            max_fraction_digits: fraction.chars().filter(|c| matches!(c, '0' | '#')).count(),
            grouping_size,
            multiplier,
        })
    }

    /// Format a number with this pattern.
    pub fn format(&self, n: f64, locale: &Locale) -> String {
        let formatter = NumberFormatter {
            min_integer_digits: self.min_integer_digits,
            min_fraction_digits: self.min_fraction_digits,
            max_fraction_digits: self.max_fraction_digits.max(self.min_fraction_digits),
            use_grouping: self.grouping_size.is_some(),
            grouping_size: self.grouping_size.unwrap_or(3),
        };
        let body = formatter.format(n * self.multiplier, locale);
        match body.strip_prefix('-') {
            Some(unsigned) => format!("-{}{}{}", self.prefix, unsigned, self.suffix),
            None => format!("{}{}{}", self.prefix, body, self.suffix),
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Round half away from zero to `digits` fraction digits.
pub(crate) fn round_half_away(n: f64, digits: usize) -> f64 {
    let factor = 10f64.powi(digits as i32);
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    scaled.round() / factor
}

/// Get decimal and grouping separators for a locale.
pub(crate) fn number_separators(locale: &Locale) -> (&'static str, &'static str) {
    match locale.language.as_str() {
        // Comma decimal, period grouping
        "de" | "es" | "it" | "pt" | "nl" | "da" | "sv" | "no" | "fi" | "pl" | "cs" | "sk"
        | "hu" | "ro" | "bg" | "el" | "ru" | "uk" | "tr" | "id" | "vi" => (",", "."),

        // Comma decimal, space grouping (French-speaking)
        "fr" => (",", " "),

        // Period decimal, comma grouping (default English-like)
        _ => (".", ","),
    }
}

/// Add grouping separators to a string of digits.
fn add_grouping(digits: &str, sep: &str, size: usize) -> String {
    let len = digits.chars().count();
    if len <= size || size == 0 {
        return digits.to_string();
    }

    let mut result = String::with_capacity(len + (len - 1) / size * sep.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            result.push_str(sep);
        }
        result.push(c);
    }
    result
}

/// ISO 4217 minor units.
fn minor_units(currency_code: &str) -> usize {
    match currency_code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "TND" => 3,
        _ => 2,
    }
}

/// Get currency symbol and position for a locale.
fn currency_symbol(currency_code: &str, locale: &Locale) -> (String, bool) {
    // Symbol before amount (English-style)
    let symbol_before = !matches!(
        locale.language.as_str(),
        "de" | "fr" | "es" | "it" | "pt" | "nl" | "da" | "sv" | "no" | "fi" | "pl" | "cs" | "sk"
            | "hu" | "ro" | "bg" | "el" | "ru" | "uk" | "vi"
    );

    let symbol = match currency_code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "¥",
        "KRW" => "₩",
        "INR" => "₹",
        "RUB" => "₽",
        "BRL" => "R$",
        "CHF" => "CHF",
        "CAD" => "$",
        "AUD" => "$",
        "HKD" => "HK$",
        "SGD" => "$",
        "SEK" => "kr",
        "NOK" => "kr",
        "DKK" => "kr.",
        "PLN" => "zł",
        "CZK" => "Kč",
        "MXN" => "$",
        "THB" => "฿",
        "TWD" => "$",
        _ => currency_code,
    };

    (symbol.to_string(), symbol_before)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_us() {
        let locale = Locale::en_us();
        assert_eq!(format_number(1234567.89, &locale), "1,234,567.89");
        assert_eq!(format_number(1000.0, &locale), "1,000");
        assert_eq!(format_number(1.5, &locale), "1.5");
        assert_eq!(format_number(-1234.5, &locale), "-1,234.5");
        assert_eq!(format_number(-123.0, &locale), "-123");
        assert_eq!(format_number(0.12345, &locale), "0.123");
    }

    #[test]
    fn test_format_number_german() {
        assert_eq!(format_number(1234567.89, &Locale::de_de()), "1.234.567,89");
    }

    #[test]
    fn test_format_integer_rounds_half_away() {
        let en = Locale::en_us();
        assert_eq!(format_integer(2.5, &en), "3");
        assert_eq!(format_integer(-2.5, &en), "-3");
        assert_eq!(format_integer(1234.4, &en), "1,234");
        assert_eq!(format_integer(-0.4, &en), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.75, &Locale::en_us()), "75%");
        assert_eq!(format_percent(0.125, &Locale::de_de()), "12,5%");
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_plain(3.0, &Locale::en_us()), "3");
        assert_eq!(format_plain(2.5, &Locale::fr()), "2,5");
    }

    #[test]
    fn test_format_currency_native_and_foreign() {
        assert_eq!(format_currency(99.99, "USD", &Locale::en_us()), "$99.99");
        assert_eq!(format_currency(99.99, "EUR", &Locale::de_de()), "99,99 €");
        assert_eq!(format_currency(99.99, "GBP", &Locale::en_gb()), "£99.99");
        assert_eq!(format_currency(1234.5, "EUR", &Locale::en_us()), "EUR 1,234.50");
        assert_eq!(format_currency(-5.0, "USD", &Locale::en_us()), "-$5.00");
        assert_eq!(format_currency(1500.0, "JPY", &Locale::ja_jp()), "¥1,500");
        assert_eq!(format_currency(10.0, "USD", &Locale::en()), "USD 10.00");
    }

    #[test]
    fn test_format_compact() {
        let en = Locale::en_us();
        assert_eq!(format_compact(1500.0, &en), "1.5K");
        assert_eq!(format_compact(999.0, &en), "999");
        assert_eq!(format_compact(2_500_000.0, &en), "2.5M");
        assert_eq!(format_compact(1000.0, &en), "1K");
        assert_eq!(format_compact(15_300.0, &en), "15K");
        assert_eq!(format_compact(999_950.0, &en), "1M");
        assert_eq!(format_compact(3.2e12, &en), "3.2T");
        assert_eq!(format_compact(-1500.0, &en), "-1.5K");
        assert_eq!(format_compact(1500.0, &Locale::de_de()), "1,5K");
        assert_eq!(format_compact(0.0, &en), "0");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1500.0, &Locale::en_us()), "1.5E3");
        assert_eq!(format_scientific(0.00012, &Locale::en_us()), "1.2E-4");
    }

    #[test]
    fn test_style_options_parse() {
        assert_eq!(NumericStyleOptions::parse(None).unwrap().style, NumericStyle::Number);
        assert_eq!(
            NumericStyleOptions::parse(Some(" integer ")).unwrap().style,
            NumericStyle::Integer
        );
        let currency = NumericStyleOptions::parse(Some("currency/eur")).unwrap();
        assert_eq!(currency.style, NumericStyle::Currency);
        assert_eq!(currency.currency.as_deref(), Some("EUR"));
        assert_eq!(
            NumericStyleOptions::parse(Some("::compact-short")).unwrap().style,
            NumericStyle::CompactShort
        );
        let custom = NumericStyleOptions::parse(Some("#,##0.00")).unwrap();
        assert_eq!(custom.pattern.as_deref(), Some("#,##0.00"));
        assert!(matches!(
            NumericStyleOptions::parse(Some("fancy")),
            Err(I18nError::UnsupportedStyle(_))
        ));
    }

    #[test]
    fn test_style_options_currency_fallbacks() {
        let options = NumericStyleOptions::currency(None::<String>);
        assert_eq!(options.format(5.0, &Locale::en_us(), None).unwrap(), "$5.00");
        assert_eq!(options.format(5.0, &Locale::en_us(), Some("EUR")).unwrap(), "EUR 5.00");
        assert_eq!(options.format(5.0, &Locale::en(), None).unwrap(), "XXX 5.00");
    }

    #[test]
    fn test_decimal_pattern() {
        let en = Locale::en_us();
        assert_eq!(DecimalPattern::parse("#,##0.00").unwrap().format(1234.5, &en), "1,234.50");
        assert_eq!(DecimalPattern::parse("0.###").unwrap().format(3.14159, &en), "3.142");
        assert_eq!(DecimalPattern::parse("000").unwrap().format(7.0, &en), "007");
        assert_eq!(DecimalPattern::parse("#%").unwrap().format(0.256, &en), "26%");
        assert_eq!(
            DecimalPattern::parse("'#'0 'pts'").unwrap().format(-12.0, &en),
            "-#12 pts"
        );
        assert_eq!(
            DecimalPattern::parse("#,##0.0;(#)").unwrap().format(1234.56, &Locale::de_de()),
            "1.234,6"
        );
        assert!(DecimalPattern::parse("abc").is_err());
    }

    #[test]
    fn test_add_grouping() {
        assert_eq!(add_grouping("1234567", ",", 3), "1,234,567");
        assert_eq!(add_grouping("123", ",", 3), "123");
        assert_eq!(add_grouping("1234", " ", 3), "1 234");
        assert_eq!(add_grouping("123456", ",", 2), "12,34,56");
    }
}
