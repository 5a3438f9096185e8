//! Date and Time Formatting
//!
//! Locale pattern tables for the four named styles, plus an interpreter for
//! ICU-style and .NET-style date patterns.

use crate::value::Temporal;
use crate::{I18nError, Locale, Result};
use chrono::{Datelike, FixedOffset, Timelike};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Which parts of a timestamp to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeKind {
    /// Date only.
    Date,
    /// Time only.
    Time,
    /// Date and time.
    DateTime,
}

/// Date/time style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DateTimeStyle {
    /// Short (e.g., 1/15/24)
    Short,
    /// Medium (e.g., Jan 15, 2024)
    #[default]
    Medium,
    /// Long (e.g., January 15, 2024), followed by the UTC offset
    Long,
    /// Full (e.g., Monday, January 15, 2024), followed by the zone name
    Full,
    /// Explicit ICU pattern such as `yyyy-MM-dd`
    Custom(String),
}

impl DateTimeStyle {
    /// Parse the style part of a `date`, `time` or `datetime` directive.
    ///
    /// Absent or empty means medium. Anything other than the four style
    /// words must look like a pattern (contain a pattern letter).
    pub fn parse(style: Option<&str>) -> Result<Self> {
        let Some(raw) = style.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(Self::Medium);
        };
        let token = raw.strip_prefix("::").unwrap_or(raw).trim();
        match token.to_ascii_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            "full" => Ok(Self::Full),
            _ if looks_like_pattern(token) => Ok(Self::Custom(token.to_string())),
            _ => Err(I18nError::UnsupportedStyle(raw.to_string())),
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Short => 0,
            Self::Medium | Self::Custom(_) => 1,
            Self::Long => 2,
            Self::Full => 3,
        }
    }
}

/// Pattern letters that may appear in an ICU date pattern.
const PATTERN_LETTERS: &str = "GyYuMLdDEecaBhHkKmsSzZxXvVwWQq";

fn looks_like_pattern(token: &str) -> bool {
    let mut in_quotes = false;
    for c in token.chars() {
        match c {
            '\'' => in_quotes = !in_quotes,
            c if !in_quotes && PATTERN_LETTERS.contains(c) => return true,
            _ => {}
        }
    }
    false
}

// ============================================================================
// Locale tables
// ============================================================================

struct LocalePatterns {
    date: [&'static str; 4],
    time: [&'static str; 4],
    joiner: &'static str,
}

static GENERIC_PATTERNS: LocalePatterns = LocalePatterns {
    date: ["y-MM-dd", "y-MM-dd", "y MMMM d", "y MMMM d, EEEE"],
    time: ["HH:mm", "HH:mm:ss", "HH:mm:ss", "HH:mm:ss"],
    joiner: " ",
};

static PATTERNS: Lazy<HashMap<&'static str, LocalePatterns>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "en",
        LocalePatterns {
            date: ["M/d/yy", "MMM d, y", "MMMM d, y", "EEEE, MMMM d, y"],
            time: ["h:mm a", "h:mm:ss a", "h:mm:ss a", "h:mm:ss a"],
            joiner: ", ",
        },
    );
    map.insert(
        "en-GB",
        LocalePatterns {
            date: ["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"],
            time: ["HH:mm", "HH:mm:ss", "HH:mm:ss", "HH:mm:ss"],
            joiner: ", ",
        },
    );
    map.insert(
        "de",
        LocalePatterns {
            date: ["dd.MM.yy", "dd.MM.y", "d. MMMM y", "EEEE, d. MMMM y"],
            time: ["HH:mm", "HH:mm:ss", "HH:mm:ss", "HH:mm:ss"],
            joiner: ", ",
        },
    );
    map.insert(
        "fr",
        LocalePatterns {
            date: ["dd/MM/y", "d MMM y", "d MMMM y", "EEEE d MMMM y"],
            time: ["HH:mm", "HH:mm:ss", "HH:mm:ss", "HH:mm:ss"],
            joiner: " ",
        },
    );
    map.insert(
        "es",
        LocalePatterns {
            date: ["d/M/yy", "d MMM y", "d 'de' MMMM 'de' y", "EEEE, d 'de' MMMM 'de' y"],
            time: ["H:mm", "H:mm:ss", "H:mm:ss", "H:mm:ss"],
            joiner: ", ",
        },
    );
    map.insert(
        "ja",
        LocalePatterns {
            date: ["y/MM/dd", "y/MM/dd", "y年M月d日", "y年M月d日"],
            time: ["H:mm", "H:mm:ss", "H:mm:ss", "H:mm:ss"],
            joiner: " ",
        },
    );
    map
});

fn patterns_for(locale: &Locale) -> &'static LocalePatterns {
    locale
        .lookup_tags()
        .iter()
        .find_map(|tag| PATTERNS.get(tag.as_str()))
        .unwrap_or(&GENERIC_PATTERNS)
}

struct Names {
    months: [&'static str; 12],
    months_short: [&'static str; 12],
    weekdays: [&'static str; 7],
    weekdays_short: [&'static str; 7],
}

static ENGLISH_NAMES: Names = Names {
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    months_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    weekdays: [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    ],
    weekdays_short: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
};

static NAMES: Lazy<HashMap<&'static str, Names>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "de",
        Names {
            months: [
                "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August",
                "September", "Oktober", "November", "Dezember",
            ],
            months_short: [
                "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.",
                "Nov.", "Dez.",
            ],
            weekdays: [
                "Montag", "Dienstag", "Mittwoch", "Donnerstag", "Freitag", "Samstag", "Sonntag",
            ],
            weekdays_short: ["Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa.", "So."],
        },
    );
    map.insert(
        "fr",
        Names {
            months: [
                "janvier", "février", "mars", "avril", "mai", "juin", "juillet", "août",
                "septembre", "octobre", "novembre", "décembre",
            ],
            months_short: [
                "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.",
                "oct.", "nov.", "déc.",
            ],
            weekdays: [
                "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
            ],
            weekdays_short: ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."],
        },
    );
    map.insert(
        "es",
        Names {
            months: [
                "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio", "agosto",
                "septiembre", "octubre", "noviembre", "diciembre",
            ],
            months_short: [
                "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov",
                "dic",
            ],
            weekdays: [
                "lunes", "martes", "miércoles", "jueves", "viernes", "sábado", "domingo",
            ],
            weekdays_short: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
        },
    );
    map
});

fn names_for(locale: &Locale) -> &'static Names {
    NAMES.get(locale.language.as_str()).unwrap_or(&ENGLISH_NAMES)
}

// ============================================================================
// Public entry points
// ============================================================================

/// Format a timestamp in a style.
///
/// Long styles append `" ±HH:mm"` (`+00:00` when the offset is unknown); full
/// styles append `" UTC±HH:mm"` for a known non-zero offset and
/// `" Universal Coordinated Time"` otherwise. Custom patterns get no suffix.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use quill_i18n::format::{DateTimeKind, DateTimeStyle, format_temporal};
/// use quill_i18n::{Locale, Temporal};
///
/// let dt = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(14, 30, 0).unwrap();
/// let t = Temporal::Naive(dt);
/// let en = Locale::en_us();
/// assert_eq!(format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Short, &en), "1/15/24");
/// assert_eq!(format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Medium, &en), "Jan 15, 2024");
/// assert_eq!(format_temporal(&t, DateTimeKind::Time, &DateTimeStyle::Short, &en), "2:30 PM");
/// ```
pub fn format_temporal(
    t: &Temporal,
    kind: DateTimeKind,
    style: &DateTimeStyle,
    locale: &Locale,
) -> String {
    let body = format_temporal_body(t, kind, style, locale);
    match style {
        DateTimeStyle::Long => format!("{} {}", body, offset_text(t.offset(), true)),
        DateTimeStyle::Full => format!("{} {}", body, zone_name(t.offset())),
        _ => body,
    }
}

/// Same as [`format_temporal`] without the zone suffix.
pub(crate) fn format_temporal_body(
    t: &Temporal,
    kind: DateTimeKind,
    style: &DateTimeStyle,
    locale: &Locale,
) -> String {
    if let DateTimeStyle::Custom(pattern) = style {
        return format_date_pattern(t, pattern, locale, PatternDialect::Icu);
    }
    let patterns = patterns_for(locale);
    let idx = style.index();
    let date = || format_date_pattern(t, patterns.date[idx], locale, PatternDialect::Icu);
    let time = || format_date_pattern(t, patterns.time[idx], locale, PatternDialect::Icu);
    match kind {
        DateTimeKind::Date => date(),
        DateTimeKind::Time => time(),
        DateTimeKind::DateTime => format!("{}{}{}", date(), patterns.joiner, time()),
    }
}

/// Map a Flutter `DateFormat` skeleton (as used in ARB `format` attributes)
/// to a kind and style.
pub fn skeleton_style(skeleton: &str) -> Option<(DateTimeKind, DateTimeStyle)> {
    use DateTimeKind::*;
    let mapped = match skeleton.trim() {
        "yMd" => (Date, DateTimeStyle::Short),
        "yMMMd" => (Date, DateTimeStyle::Medium),
        "yMMMMd" => (Date, DateTimeStyle::Long),
        "yMMMMEEEEd" => (Date, DateTimeStyle::Full),
        "Hm" | "jm" => (Time, DateTimeStyle::Short),
        "Hms" | "jms" => (Time, DateTimeStyle::Medium),
        "yMd Hm" | "yMd jm" => (DateTime, DateTimeStyle::Short),
        "yMd Hms" | "yMd jms" | "yMMMd Hms" | "yMMMd jms" | "yMMMd Hm" | "yMMMd jm" => {
            (DateTime, DateTimeStyle::Medium)
        }
        "y" => (Date, DateTimeStyle::Custom("y".into())),
        "yMMMM" => (Date, DateTimeStyle::Custom("MMMM y".into())),
        "yMMM" => (Date, DateTimeStyle::Custom("MMM y".into())),
        "MMMd" => (Date, DateTimeStyle::Custom("MMM d".into())),
        "MMMMd" => (Date, DateTimeStyle::Custom("MMMM d".into())),
        "MMMM" | "LLLL" => (Date, DateTimeStyle::Custom("MMMM".into())),
        "EEEE" => (Date, DateTimeStyle::Custom("EEEE".into())),
        "d" => (Date, DateTimeStyle::Custom("d".into())),
        "H" => (Time, DateTimeStyle::Custom("HH".into())),
        _ => return None,
    };
    Some(mapped)
}

/// Date pattern dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternDialect {
    /// ICU / CLDR letters, `'quoted'` literals.
    Icu,
    /// .NET custom format letters, `'…'`/`"…"` literals and `\` escapes.
    DotNet,
}

/// Render `pattern` for `t`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use quill_i18n::format::{PatternDialect, format_date_pattern};
/// use quill_i18n::{Locale, Temporal};
///
/// let dt = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 7, 0).unwrap();
/// let t = Temporal::Naive(dt);
/// assert_eq!(
///     format_date_pattern(&t, "yyyy-MM-dd 'at' HH:mm", &Locale::en(), PatternDialect::Icu),
///     "2024-03-05 at 09:07"
/// );
/// ```
pub fn format_date_pattern(
    t: &Temporal,
    pattern: &str,
    locale: &Locale,
    dialect: PatternDialect,
) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match (c, dialect) {
            ('\'', PatternDialect::Icu) => {
                if chars.get(i + 1) == Some(&'\'') {
                    out.push('\'');
                    i += 2;
                    continue;
                }
                i += 1;
                while i < chars.len() {
                    if chars[i] == '\'' {
                        if chars.get(i + 1) == Some(&'\'') {
                            out.push('\'');
                            i += 2;
                            continue;
                        }
                        break;
                    }
                    out.push(chars[i]);
                    i += 1;
                }
                i += 1;
            }
            ('\'' | '"', PatternDialect::DotNet) => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    out.push(chars[i]);
                    i += 1;
                }
                i += 1;
            }
            ('\\', PatternDialect::DotNet) => {
                if let Some(next) = chars.get(i + 1) {
                    out.push(*next);
                }
                i += 2;
            }
            _ if c.is_ascii_alphabetic() => {
                let mut run = 1;
                while chars.get(i + run) == Some(&c) {
                    run += 1;
                }
                match dialect {
                    PatternDialect::Icu => icu_field(&mut out, t, c, run, locale),
                    PatternDialect::DotNet => dotnet_field(&mut out, t, c, run, locale),
                }
                i += run;
            }
            _ => {
                out.push(c);
                i += 1;
            }
        }
    }
    out
}

/// .NET standard date format specifiers, falling back to a custom pattern.
pub fn format_dotnet_date(t: &Temporal, spec: &str, locale: &Locale) -> String {
    use DateTimeKind::*;
    use DateTimeStyle::*;

    let body = |kind, style| format_temporal_body(t, kind, &style, locale);
    let join = |date: String, time: String| format!("{} {}", date, time);
    let dt = t.local();

    match spec {
        "d" => body(Date, Short),
        "D" => body(Date, Long),
        "t" => body(Time, Short),
        "T" => body(Time, Medium),
        "f" => join(body(Date, Long), body(Time, Short)),
        "F" => join(body(Date, Long), body(Time, Medium)),
        "g" => join(body(Date, Short), body(Time, Short)),
        "G" => join(body(Date, Short), body(Time, Medium)),
        "M" | "m" => format_date_pattern(t, "MMMM d", locale, PatternDialect::Icu),
        "Y" | "y" => format_date_pattern(t, "MMMM y", locale, PatternDialect::Icu),
        "o" | "O" => {
            let zone = t.offset().map(|o| offset_text(Some(o), true)).unwrap_or_default();
            format!(
                "{}.{:07}{}",
                dt.format("%Y-%m-%dT%H:%M:%S"),
                dt.nanosecond() / 100,
                zone
            )
        }
        "s" => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
        "u" => dt.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        "R" | "r" => format_date_pattern(
            t,
            "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
            &Locale::en(),
            PatternDialect::DotNet,
        ),
        _ => format_date_pattern(t, spec, locale, PatternDialect::DotNet),
    }
}

// ============================================================================
// Pattern fields
// ============================================================================

fn pad(out: &mut String, value: i64, width: usize) {
    if value < 0 {
        out.push('-');
    }
    out.push_str(&format!("{:0width$}", value.unsigned_abs(), width = width));
}

fn hour12(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

fn fraction(out: &mut String, nanos: u32, digits: usize) {
    let text = format!("{:09}", nanos);
    out.push_str(&text[..digits.min(9)]);
    for _ in 9..digits {
        out.push('0');
    }
}

fn icu_field(out: &mut String, t: &Temporal, letter: char, run: usize, locale: &Locale) {
    let dt = t.local();
    let names = names_for(locale);
    let month = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_monday() as usize;

    match letter {
        'y' | 'Y' | 'u' => {
            if run == 2 {
                pad(out, (dt.year() % 100) as i64, 2);
            } else {
                pad(out, dt.year() as i64, run);
            }
        }
        'M' | 'L' => match run {
            1 | 2 => pad(out, dt.month() as i64, run),
            3 => out.push_str(names.months_short[month]),
            _ => out.push_str(names.months[month]),
        },
        'd' => pad(out, dt.day() as i64, run),
        'D' => pad(out, dt.ordinal() as i64, run),
        'E' | 'c' | 'e' => {
            if run >= 4 {
                out.push_str(names.weekdays[weekday]);
            } else {
                out.push_str(names.weekdays_short[weekday]);
            }
        }
        'a' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
        'h' => pad(out, hour12(dt.hour()) as i64, run),
        'H' => pad(out, dt.hour() as i64, run),
        'k' => pad(out, if dt.hour() == 0 { 24 } else { dt.hour() } as i64, run),
        'K' => pad(out, (dt.hour() % 12) as i64, run),
        'm' => pad(out, dt.minute() as i64, run),
        's' => pad(out, dt.second() as i64, run),
        'S' => fraction(out, dt.nanosecond(), run),
        'G' => out.push_str("AD"),
        'Z' => match run {
            1..=3 => out.push_str(&offset_text(t.offset(), false)),
            4 => {
                out.push_str("GMT");
                out.push_str(&offset_text(t.offset(), true));
            }
            _ => out.push_str(&offset_text(t.offset(), true)),
        },
        'x' | 'X' => {
            let seconds = t.offset().map(|o| o.local_minus_utc()).unwrap_or(0);
            if letter == 'X' && seconds == 0 {
                out.push('Z');
            } else {
                out.push_str(&offset_text(t.offset(), run >= 3));
            }
        }
        other => {
            for _ in 0..run {
                out.push(other);
            }
        }
    }
}

fn dotnet_field(out: &mut String, t: &Temporal, letter: char, run: usize, locale: &Locale) {
    let dt = t.local();
    let names = names_for(locale);
    let month = dt.month0() as usize;
    let weekday = dt.weekday().num_days_from_monday() as usize;
    let am = dt.hour() < 12;

    match letter {
        'y' => match run {
            1 => pad(out, (dt.year() % 100) as i64, 1),
            2 => pad(out, (dt.year() % 100) as i64, 2),
            _ => pad(out, dt.year() as i64, run),
        },
        'M' => match run {
            1 | 2 => pad(out, dt.month() as i64, run),
            3 => out.push_str(names.months_short[month]),
            _ => out.push_str(names.months[month]),
        },
        'd' => match run {
            1 | 2 => pad(out, dt.day() as i64, run),
            3 => out.push_str(names.weekdays_short[weekday]),
            _ => out.push_str(names.weekdays[weekday]),
        },
        'h' => pad(out, hour12(dt.hour()) as i64, run.min(2)),
        'H' => pad(out, dt.hour() as i64, run.min(2)),
        'm' => pad(out, dt.minute() as i64, run.min(2)),
        's' => pad(out, dt.second() as i64, run.min(2)),
        'f' => fraction(out, dt.nanosecond(), run),
        'F' => {
            let mut digits = String::new();
            fraction(&mut digits, dt.nanosecond(), run);
            out.push_str(digits.trim_end_matches('0'));
        }
        't' => {
            let marker = if am { "AM" } else { "PM" };
            if run == 1 {
                out.push_str(&marker[..1]);
            } else {
                out.push_str(marker);
            }
        }
        'z' => {
            let seconds = t.offset().map(|o| o.local_minus_utc()).unwrap_or(0);
            let sign = if seconds < 0 { '-' } else { '+' };
            let hours = seconds.unsigned_abs() / 3600;
            match run {
                1 => out.push_str(&format!("{}{}", sign, hours)),
                2 => out.push_str(&format!("{}{:02}", sign, hours)),
                _ => out.push_str(&offset_text(t.offset(), true)),
            }
        }
        'K' => {
            if t.offset().is_some() {
                out.push_str(&offset_text(t.offset(), true));
            }
        }
        'g' => out.push_str("A.D."),
        other => {
            for _ in 0..run {
                out.push(other);
            }
        }
    }
}

/// `+HH:mm` (or `+HHmm` without the colon); unknown offsets read as zero.
fn offset_text(offset: Option<FixedOffset>, colon: bool) -> String {
    let seconds = offset.map(|o| o.local_minus_utc()).unwrap_or(0);
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    if colon {
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    } else {
        format!("{}{:02}{:02}", sign, minutes / 60, minutes % 60)
    }
}

fn zone_name(offset: Option<FixedOffset>) -> String {
    match offset {
        Some(o) if o.local_minus_utc() != 0 => format!("UTC{}", offset_text(Some(o), true)),
        _ => "Universal Coordinated Time".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn naive() -> Temporal {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        Temporal::Naive(dt)
    }

    fn zoned(offset_hours: i32) -> Temporal {
        let offset = FixedOffset::east_opt(offset_hours * 3600).unwrap();
        Temporal::Zoned(offset.with_ymd_and_hms(2024, 1, 15, 14, 30, 5).unwrap())
    }

    #[test]
    fn test_named_styles_en_us() {
        let en = Locale::en_us();
        let t = naive();
        assert_eq!(format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Short, &en), "1/15/24");
        assert_eq!(
            format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Medium, &en),
            "Jan 15, 2024"
        );
        assert_eq!(
            format_temporal(&t, DateTimeKind::Time, &DateTimeStyle::Medium, &en),
            "2:30:05 PM"
        );
        assert_eq!(
            format_temporal(&t, DateTimeKind::DateTime, &DateTimeStyle::Medium, &en),
            "Jan 15, 2024, 2:30:05 PM"
        );
    }

    #[test]
    fn test_long_and_full_suffixes() {
        let en = Locale::en_us();
        assert_eq!(
            format_temporal(&zoned(2), DateTimeKind::Date, &DateTimeStyle::Long, &en),
            "January 15, 2024 +02:00"
        );
        assert_eq!(
            format_temporal(&naive(), DateTimeKind::Date, &DateTimeStyle::Long, &en),
            "January 15, 2024 +00:00"
        );
        assert_eq!(
            format_temporal(&zoned(-5), DateTimeKind::Date, &DateTimeStyle::Full, &en),
            "Monday, January 15, 2024 UTC-05:00"
        );
        assert_eq!(
            format_temporal(&zoned(0), DateTimeKind::Time, &DateTimeStyle::Full, &en),
            "2:30:05 PM Universal Coordinated Time"
        );
    }

    #[test]
    fn test_locale_fallbacks() {
        let t = naive();
        assert_eq!(
            format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Long, &Locale::de_de()),
            "15. Januar 2024 +00:00"
        );
        assert_eq!(
            format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Short, &Locale::en_gb()),
            "15/01/2024"
        );
        let unknown = Locale::new("sw", None::<&str>);
        assert_eq!(
            format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Short, &unknown),
            "2024-01-15"
        );
        assert_eq!(
            format_temporal(&t, DateTimeKind::Date, &DateTimeStyle::Medium, &Locale::es_es()),
            "15 ene 2024"
        );
    }

    #[test]
    fn test_style_parse() {
        assert_eq!(DateTimeStyle::parse(None).unwrap(), DateTimeStyle::Medium);
        assert_eq!(DateTimeStyle::parse(Some(" FULL ")).unwrap(), DateTimeStyle::Full);
        assert_eq!(
            DateTimeStyle::parse(Some("yyyy-MM-dd")).unwrap(),
            DateTimeStyle::Custom("yyyy-MM-dd".into())
        );
        assert!(matches!(
            DateTimeStyle::parse(Some("tiny")),
            Err(I18nError::UnsupportedStyle(_))
        ));
    }

    #[test]
    fn test_icu_pattern_fields() {
        let t = zoned(2);
        let en = Locale::en();
        assert_eq!(
            format_date_pattern(&t, "EEEE, d MMMM yy", &en, PatternDialect::Icu),
            "Monday, 15 January 24"
        );
        assert_eq!(format_date_pattern(&t, "hh:mm a", &en, PatternDialect::Icu), "02:30 PM");
        assert_eq!(format_date_pattern(&t, "HHmm Z", &en, PatternDialect::Icu), "1430 +0200");
        assert_eq!(format_date_pattern(&t, "'o''clock'", &en, PatternDialect::Icu), "o'clock");
    }

    #[test]
    fn test_dotnet_dates() {
        let t = zoned(2);
        let en = Locale::en_us();
        assert_eq!(format_dotnet_date(&t, "yyyy-MM-dd", &en), "2024-01-15");
        assert_eq!(format_dotnet_date(&t, "dddd h:mm tt", &en), "Monday 2:30 PM");
        assert_eq!(format_dotnet_date(&t, "d", &en), "1/15/24");
        assert_eq!(format_dotnet_date(&t, "s", &en), "2024-01-15T14:30:05");
        assert_eq!(format_dotnet_date(&t, "o", &en), "2024-01-15T14:30:05.0000000+02:00");
        assert_eq!(format_dotnet_date(&t, "HH\\h mm", &en), "14h 30");
        assert_eq!(format_dotnet_date(&t, "zzz", &en), "+02:00");
    }

    #[test]
    fn test_skeletons() {
        assert_eq!(skeleton_style("yMd"), Some((DateTimeKind::Date, DateTimeStyle::Short)));
        assert_eq!(skeleton_style("jm"), Some((DateTimeKind::Time, DateTimeStyle::Short)));
        assert!(skeleton_style("nonsense").is_none());
    }
}
