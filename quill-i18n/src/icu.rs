//! ICU Mini-Grammar
//!
//! Placeholders of the form `name, kind[, body]`:
//!
//! ```text
//! {count, plural, offset:1 =0{nobody} one{just you} other{you and # others}}
//! {gender, select, female{she} male{he} other{they}}
//! {place, selectordinal, one{#st} two{#nd} few{#rd} other{#th}}
//! {amount, number, currency/EUR}
//! {when, date, short}
//! ```
//!
//! Branch options may be wrapped in one extra pair of braces
//! (`{n, plural, {one{..} other{..}}}`). The chosen branch text is handed
//! back to the caller for rendering, so nested placeholders resolve against
//! the same values and continue the same resolution index.

use crate::format::{
    DateTimeKind, DateTimeStyle, NumericStyleOptions, format_plain, format_temporal,
};
use crate::scanner::matching_brace;
use crate::{EscapingMode, I18nError, RenderConfig, Result, Value};
use std::fmt;
use tracing::debug;

/// Directive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `select`
    Select,
    /// `plural`
    Plural,
    /// `selectordinal`
    SelectOrdinal,
    /// `number`
    Number,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `datetime`
    DateTime,
}

impl DirectiveKind {
    /// Parse a kind keyword (case-insensitive).
    pub fn parse(kind: &str) -> Option<Self> {
        let kind = match kind.trim().to_ascii_lowercase().as_str() {
            "select" => Self::Select,
            "plural" => Self::Plural,
            "selectordinal" => Self::SelectOrdinal,
            "number" => Self::Number,
            "date" => Self::Date,
            "time" => Self::Time,
            "datetime" => Self::DateTime,
            _ => return None,
        };
        Some(kind)
    }

    /// Keyword for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Plural => "plural",
            Self::SelectOrdinal => "selectordinal",
            Self::Number => "number",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime",
        }
    }

    fn has_branches(&self) -> bool {
        matches!(self, Self::Select | Self::Plural | Self::SelectOrdinal)
    }
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key of one branch.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchKey {
    /// `=N`, matched against the unmodified numeric value.
    Exact(f64),
    /// `other`, a category name, or a select keyword (lower-cased).
    Keyword(String),
}

impl BranchKey {
    fn matches_keyword(&self, keyword: &str) -> bool {
        matches!(self, Self::Keyword(k) if k.eq_ignore_ascii_case(keyword))
    }
}

/// Kind-specific options of a directive.
#[derive(Debug, Clone, PartialEq)]
pub enum DirectiveOptions<'a> {
    /// Branches of a select, plural or selectordinal directive, in source
    /// order. Duplicate keys keep the first occurrence.
    Branches {
        /// `offset:N` of a plural directive; zero otherwise.
        offset: f64,
        /// Branch keys and their raw text.
        branches: Vec<(BranchKey, &'a str)>,
    },
    /// Style of a number directive.
    Numeric(NumericStyleOptions),
    /// Style of a date, time or datetime directive.
    Temporal(DateTimeStyle),
}

/// A parsed `name, kind, body` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive<'a> {
    /// Value name.
    pub name: &'a str,
    /// Kind.
    pub kind: DirectiveKind,
    /// Kind-specific options.
    pub options: DirectiveOptions<'a>,
}

/// Split placeholder content into a leading name and the rest.
///
/// Leading whitespace is skipped. Returns `None` when the content does not
/// start with a name character.
pub(crate) fn split_name(content: &str) -> Option<(&str, &str)> {
    let rest = content.trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some((&rest[..end], &rest[end..]))
}

impl<'a> Directive<'a> {
    /// Parse placeholder content.
    ///
    /// Returns `Ok(None)` when no comma follows the name, which means the
    /// content is a simple placeholder.
    pub fn parse(content: &'a str, mode: EscapingMode) -> Result<Option<Self>> {
        let Some((name, tail)) = split_name(content) else {
            return Ok(None);
        };
        let Some(after_name) = tail.trim_start().strip_prefix(',') else {
            return Ok(None);
        };

        let (kind_text, body) = match after_name.split_once(',') {
            Some((kind, body)) => (kind.trim(), Some(body)),
            None => (after_name.trim(), None),
        };
        let kind = DirectiveKind::parse(kind_text).ok_or_else(|| I18nError::UnsupportedIcuKind {
            kind: kind_text.to_string(),
            content: content.to_string(),
        })?;

        let options = if kind.has_branches() {
            let body = body.ok_or_else(|| I18nError::MalformedOptions(content.to_string()))?;
            let (offset, body) = if kind == DirectiveKind::Plural {
                parse_offset(body, content)?
            } else {
                (0.0, body)
            };
            let branches = parse_branches(body, content, mode)?;
            if !branches.iter().any(|(key, _)| key.matches_keyword("other")) {
                return Err(I18nError::MissingOtherBranch(content.to_string()));
            }
            DirectiveOptions::Branches { offset, branches }
        } else if kind == DirectiveKind::Number {
            DirectiveOptions::Numeric(NumericStyleOptions::parse(body)?)
        } else {
            DirectiveOptions::Temporal(DateTimeStyle::parse(body)?)
        };

        Ok(Some(Self {
            name,
            kind,
            options,
        }))
    }

    /// Produce the text of this directive for `value`.
    ///
    /// `nested` renders the chosen branch text.
    pub fn evaluate(
        &self,
        value: Option<&Value>,
        config: &RenderConfig,
        nested: &mut dyn FnMut(&str) -> Result<String>,
    ) -> Result<String> {
        let locale = &config.locale;
        match &self.options {
            DirectiveOptions::Branches { offset, branches } => {
                let text = match self.kind {
                    DirectiveKind::Select => {
                        let key = value.map(Value::to_string);
                        self.choose(branches, None, key.as_deref()).to_string()
                    }
                    _ => {
                        let rules = if self.kind == DirectiveKind::Plural {
                            &config.cardinal
                        } else {
                            &config.ordinal
                        };
                        let number = value.and_then(Value::as_number);
                        let category = number.map(|n| rules.category(n));
                        let chosen =
                            self.choose(branches, number, category.map(|c| c.as_str()));
                        let pound = match (number, value) {
                            (Some(n), Some(Value::Integer(i))) => integer_offset(*i, *offset)
                                .map(|d| d.to_string())
                                .unwrap_or_else(|| format_plain(n - offset, locale)),
                            (Some(n), _) => format_plain(n - offset, locale),
                            (None, Some(v)) => v.to_locale_string(locale),
                            (None, None) => String::new(),
                        };
                        replace_pound(chosen, &pound)
                    }
                };
                nested(&text)
            }
            DirectiveOptions::Numeric(style) => match value {
                None => {
                    debug!(name = self.name, "no value for number directive");
                    Ok(String::new())
                }
                Some(v) => match v.as_number() {
                    Some(n) => style.format(n, locale, config.default_currency.as_deref()),
                    None => {
                        debug!(name = self.name, value = %v, "value is not numeric, formatting generically");
                        Ok(v.to_locale_string(locale))
                    }
                },
            },
            DirectiveOptions::Temporal(style) => {
                let kind = match self.kind {
                    DirectiveKind::Date => DateTimeKind::Date,
                    DirectiveKind::Time => DateTimeKind::Time,
                    _ => DateTimeKind::DateTime,
                };
                match value.and_then(Value::as_temporal) {
                    Some(t) => Ok(format_temporal(&t, kind, style, locale)),
                    None => {
                        debug!(name = self.name, kind = %self.kind, "value is not a date, rendering empty");
                        Ok(String::new())
                    }
                }
            }
        }
    }

    /// Pick a branch: exact `=N` first, then the keyword, then `other`.
    fn choose<'b>(
        &self,
        branches: &'b [(BranchKey, &'a str)],
        exact: Option<f64>,
        keyword: Option<&str>,
    ) -> &'a str {
        let by_exact = exact.and_then(|n| {
            branches
                .iter()
                .find(|(key, _)| matches!(key, BranchKey::Exact(k) if *k == n))
        });
        let by_keyword = || {
            keyword.and_then(|k| branches.iter().find(|(key, _)| key.matches_keyword(k)))
        };
        if let Some((_, text)) = by_exact.or_else(by_keyword) {
            return *text;
        }

        debug!(
            name = self.name,
            kind = %self.kind,
            key = keyword.unwrap_or(""),
            "no matching branch, using 'other'"
        );
        branches
            .iter()
            .find(|(key, _)| key.matches_keyword("other"))
            .map(|(_, text)| *text)
            .unwrap_or_default()
    }
}

/// Evaluate placeholder content as an ICU directive.
///
/// Returns `Ok(None)` when the content is not ICU syntax. `nested` renders
/// branch text through the caller's rendering walk.
///
/// # Example
///
/// ```
/// use quill_i18n::{EscapingMode, RenderConfig, Value, icu};
///
/// let config = RenderConfig::default();
/// let value = Value::from(5);
/// let text = icu::evaluate(
///     "n, plural, one{# item} other{# items}",
///     Some(&value),
///     EscapingMode::Arb,
///     &config,
///     &mut |branch| Ok(branch.to_string()),
/// )
/// .unwrap();
/// assert_eq!(text.as_deref(), Some("5 items"));
///
/// let plain = icu::evaluate("n", Some(&value), EscapingMode::Arb, &config, &mut |b| Ok(b.into()));
/// assert!(plain.unwrap().is_none());
/// ```
pub fn evaluate(
    content: &str,
    value: Option<&Value>,
    mode: EscapingMode,
    config: &RenderConfig,
    nested: &mut dyn FnMut(&str) -> Result<String>,
) -> Result<Option<String>> {
    match Directive::parse(content, mode)? {
        Some(directive) => directive.evaluate(value, config, nested).map(Some),
        None => Ok(None),
    }
}

/// Consume an optional `offset:N` prefix; anything else rewinds.
fn parse_offset<'a>(body: &'a str, content: &str) -> Result<(f64, &'a str)> {
    let trimmed = body.trim_start();
    let Some(after) = trimmed.strip_prefix("offset") else {
        return Ok((0.0, body));
    };
    let Some(after) = after.trim_start().strip_prefix(':') else {
        return Ok((0.0, body));
    };
    let after = after.trim_start();
    let end = after
        .find(|c: char| c.is_whitespace() || c == '{')
        .unwrap_or(after.len());
    let offset = after[..end]
        .parse::<f64>()
        .map_err(|_| I18nError::MalformedOptions(content.to_string()))?;
    Ok((offset, &after[end..]))
}

/// Parse grouped `{key{text}...}` or inline `key{text}...` options.
fn parse_branches<'a>(
    body: &'a str,
    content: &str,
    mode: EscapingMode,
) -> Result<Vec<(BranchKey, &'a str)>> {
    let malformed = || I18nError::MalformedOptions(content.to_string());

    let trimmed = body.trim();
    let inner = if trimmed.starts_with('{') {
        let close = matching_brace(trimmed, 0, mode)?;
        if close + 1 != trimmed.len() {
            return Err(malformed());
        }
        &trimmed[1..close]
    } else {
        trimmed
    };

    let mut branches: Vec<(BranchKey, &'a str)> = Vec::new();
    let mut pos = 0;
    loop {
        let rest = &inner[pos..];
        let skipped = rest.len() - rest.trim_start().len();
        pos += skipped;
        if pos >= inner.len() {
            break;
        }

        let rest = &inner[pos..];
        let key_len = rest
            .find(|c: char| c.is_whitespace() || c == '{' || c == '}')
            .unwrap_or(rest.len());
        let key_text = &rest[..key_len];
        let key = parse_key(key_text).ok_or_else(malformed)?;
        pos += key_len;

        let rest = &inner[pos..];
        pos += rest.len() - rest.trim_start().len();
        if !inner[pos..].starts_with('{') {
            return Err(malformed());
        }
        let close = matching_brace(inner, pos, mode)?;
        let text = &inner[pos + 1..close];
        pos = close + 1;

        let duplicate = branches.iter().any(|(existing, _)| match (existing, &key) {
            (BranchKey::Exact(a), BranchKey::Exact(b)) => a == b,
            (BranchKey::Keyword(a), BranchKey::Keyword(b)) => a == b,
            _ => false,
        });
        if !duplicate {
            branches.push((key, text));
        }
    }

    if branches.is_empty() {
        return Err(malformed());
    }
    Ok(branches)
}

fn parse_key(text: &str) -> Option<BranchKey> {
    if let Some(number) = text.strip_prefix('=') {
        return number.parse::<f64>().ok().map(BranchKey::Exact);
    }
    if !text.is_empty() && text.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Some(BranchKey::Keyword(text.to_lowercase()));
    }
    None
}

/// `value - offset` without going through `f64`, when the offset is
/// integral and the difference fits.
fn integer_offset(value: i64, offset: f64) -> Option<i64> {
    if offset.fract() != 0.0 || offset.abs() >= i64::MAX as f64 {
        return None;
    }
    value.checked_sub(offset as i64)
}

/// Replace every `#` outside quoted regions with `value`.
///
/// The branch text is rendered again afterwards, so a value carrying
/// apostrophes, braces, backslashes or `#` is inserted as a quoted region.
/// A quoted region directly before or after the `#` is merged with it.
fn replace_pound(text: &str, value: &str) -> String {
    let quote = value.contains(['\'', '{', '}', '\\', '#']);
    let mut out = String::with_capacity(text.len() + value.len() + 2);
    let mut in_quotes = false;
    let mut closed_at = None;
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' if chars.peek() == Some(&'\'') => {
                chars.next();
                out.push_str("''");
            }
            '\'' => {
                in_quotes = !in_quotes;
                out.push('\'');
                if !in_quotes {
                    closed_at = Some(out.len());
                }
            }
            '#' if !in_quotes && quote => {
                let mut rest = value;
                if closed_at == Some(out.len()) {
                    out.pop();
                } else {
                    // A quote cannot open on an apostrophe.
                    while let Some(tail) = rest.strip_prefix('\'') {
                        out.push_str("''");
                        rest = tail;
                    }
                    if rest.is_empty() {
                        continue;
                    }
                    out.push('\'');
                }
                out.push_str(&rest.replace('\'', "''"));

                let mut ahead = chars.clone();
                if ahead.next() == Some('\'') && ahead.next() != Some('\'') {
                    // The text opens a quote right away; stay inside it.
                    chars.next();
                    in_quotes = true;
                } else {
                    out.push('\'');
                    closed_at = Some(out.len());
                }
            }
            '#' if !in_quotes => out.push_str(value),
            c => out.push(c),
        }
    }
    out
}
