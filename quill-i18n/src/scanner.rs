//! Placeholder Scanner
//!
//! Single left-to-right walk over a template text. [`has_placeholder`] is
//! the cheap probe loaders use to decide whether a text needs rendering at
//! all; [`tokenize`] splits a text into literal runs and placeholder spans.

use crate::delimiter::{Delimiter, classify};
use crate::escape;
use crate::{EscapingMode, I18nError, Result};

/// One top-level `{...}` region of a template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpan<'a> {
    /// Byte offset of the opening brace.
    pub start: usize,
    /// Byte offset just past the closing brace.
    pub end: usize,
    /// Text between the braces, still raw.
    pub content: &'a str,
    /// The whole span including braces.
    pub raw: &'a str,
}

/// A piece of a tokenized template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Literal text with quotes, doubled delimiters and escapes resolved.
    Literal(String),
    /// A placeholder span awaiting resolution.
    Placeholder(PlaceholderSpan<'a>),
}

fn char_at(text: &str, i: usize) -> Option<(char, Option<char>)> {
    let mut chars = text.get(i..)?.chars();
    let c = chars.next()?;
    Some((c, chars.next()))
}

/// Check whether `text` contains at least one placeholder.
///
/// Returns `true` as soon as a `}` closes an open `{` outside quotes.
/// Structural problems found before that point are reported even when no
/// placeholder would ultimately be found. `None` and `Backslash` texts never
/// contain placeholders.
///
/// # Example
///
/// ```
/// use quill_i18n::{EscapingMode, has_placeholder};
///
/// assert!(has_placeholder("Hello {name}", EscapingMode::Arb).unwrap());
/// assert!(!has_placeholder("It''s fine", EscapingMode::Arb).unwrap());
/// assert!(!has_placeholder("{{x}}", EscapingMode::DotNet).unwrap());
/// assert!(has_placeholder("{x", EscapingMode::Arb).is_err());
/// ```
pub fn has_placeholder(text: &str, mode: EscapingMode) -> Result<bool> {
    if !mode.recognizes_placeholders() {
        return Ok(false);
    }

    let mut in_quotes = false;
    let mut quote_start = 0;
    let mut open_braces = 0usize;
    let mut open_start = 0;
    let mut i = 0;

    while let Some((c, next)) = char_at(text, i) {
        if in_quotes {
            match c {
                '\'' if next == Some('\'') => i += 2,
                '\'' => {
                    in_quotes = false;
                    i += 1;
                }
                _ => i += c.len_utf8(),
            }
            continue;
        }

        match classify(mode, c, next, open_braces) {
            Delimiter::Doubled(_) => i += 2,
            Delimiter::Quote => {
                in_quotes = true;
                quote_start = i;
                i += 1;
            }
            Delimiter::Escape => i = escape::decode_at(text, i).1,
            Delimiter::Open => {
                if open_braces == 0 {
                    open_start = i;
                }
                open_braces += 1;
                i += 1;
            }
            Delimiter::Close => {
                if open_braces == 0 {
                    return Err(I18nError::UnmatchedClosingBrace {
                        text: text.to_string(),
                        offset: i,
                    });
                }
                return Ok(true);
            }
            Delimiter::Plain(c) => i += c.len_utf8(),
        }
    }

    if in_quotes {
        return Err(I18nError::HangingQuote {
            text: text.to_string(),
            offset: quote_start,
        });
    }
    if open_braces > 0 {
        return Err(I18nError::UnclosedPlaceholder {
            text: text.to_string(),
            offset: open_start,
        });
    }
    Ok(false)
}

/// Split `text` into literal runs and placeholder spans.
///
/// The whole text is scanned before anything is returned, so a structural
/// error never yields partial output.
///
/// # Example
///
/// ```
/// use quill_i18n::{EscapingMode, Segment, tokenize};
///
/// let segments = tokenize("It''s {name}'{'", EscapingMode::Arb).unwrap();
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Literal("It's ".to_string()));
/// assert_eq!(segments[2], Segment::Literal("{".to_string()));
/// ```
pub fn tokenize(text: &str, mode: EscapingMode) -> Result<Vec<Segment<'_>>> {
    let mut segments = Vec::new();
    let mut literal = String::with_capacity(text.len());
    let mut in_quotes = false;
    let mut quote_start = 0;
    let mut i = 0;

    while let Some((c, next)) = char_at(text, i) {
        if in_quotes {
            match c {
                '\'' if next == Some('\'') => {
                    literal.push('\'');
                    i += 2;
                }
                '\'' => {
                    in_quotes = false;
                    i += 1;
                }
                _ => {
                    literal.push(c);
                    i += c.len_utf8();
                }
            }
            continue;
        }

        match classify(mode, c, next, 0) {
            Delimiter::Doubled(d) => {
                literal.push(d);
                i += 2;
            }
            Delimiter::Quote => {
                in_quotes = true;
                quote_start = i;
                i += 1;
            }
            Delimiter::Escape => {
                let (piece, end) = escape::decode_at(text, i);
                piece.push_to(&mut literal);
                i = end;
            }
            Delimiter::Open => {
                let close = matching_brace(text, i, mode)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(PlaceholderSpan {
                    start: i,
                    end: close + 1,
                    content: &text[i + 1..close],
                    raw: &text[i..=close],
                }));
                i = close + 1;
            }
            Delimiter::Close => {
                return Err(I18nError::UnmatchedClosingBrace {
                    text: text.to_string(),
                    offset: i,
                });
            }
            Delimiter::Plain(c) => {
                literal.push(c);
                i += c.len_utf8();
            }
        }
    }

    if in_quotes {
        return Err(I18nError::HangingQuote {
            text: text.to_string(),
            offset: quote_start,
        });
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Find the `}` matching the `{` at byte offset `open`.
///
/// Nesting is counted for the ARB family (quoted braces do not count);
/// DotNet placeholders may not nest.
pub(crate) fn matching_brace(text: &str, open: usize, mode: EscapingMode) -> Result<usize> {
    let mut depth = 1usize;
    let mut in_quotes = false;
    let mut quote_start = 0;
    let mut i = open + 1;

    while let Some((c, next)) = char_at(text, i) {
        if in_quotes {
            match c {
                '\'' if next == Some('\'') => i += 2,
                '\'' => {
                    in_quotes = false;
                    i += 1;
                }
                _ => i += c.len_utf8(),
            }
            continue;
        }

        match c {
            '\'' if mode.uses_quotes() => {
                if next == Some('\'') {
                    i += 2;
                } else {
                    in_quotes = true;
                    quote_start = i;
                    i += 1;
                }
            }
            '\\' if mode.decodes_escapes_inline() => i = escape::decode_at(text, i).1,
            '{' => {
                if !mode.is_arb_family() {
                    return Err(I18nError::NestedBraceNotAllowed {
                        text: text.to_string(),
                        offset: i,
                    });
                }
                depth += 1;
                i += 1;
            }
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i);
                }
                i += 1;
            }
            c => i += c.len_utf8(),
        }
    }

    if in_quotes {
        return Err(I18nError::HangingQuote {
            text: text.to_string(),
            offset: quote_start,
        });
    }
    Err(I18nError::UnclosedPlaceholder {
        text: text.to_string(),
        offset: open,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_finds_placeholder() {
        assert!(has_placeholder("{x}", EscapingMode::Arb).unwrap());
        assert!(has_placeholder("a {x} b", EscapingMode::ArbNoEscaping).unwrap());
        assert!(has_placeholder("{0}", EscapingMode::DotNet).unwrap());
    }

    #[test]
    fn test_probe_doubled_delimiters() {
        assert!(!has_placeholder("It''s fine", EscapingMode::Arb).unwrap());
        assert!(!has_placeholder("{{x}}", EscapingMode::DotNet).unwrap());
        assert!(!has_placeholder("'{x}'", EscapingMode::Arb).unwrap());
    }

    #[test]
    fn test_probe_plain_modes_never_scan() {
        assert!(!has_placeholder("{x", EscapingMode::None).unwrap());
        assert!(!has_placeholder("}{", EscapingMode::Backslash).unwrap());
    }

    #[test]
    fn test_probe_structural_errors() {
        assert!(matches!(
            has_placeholder("{x", EscapingMode::Arb),
            Err(I18nError::UnclosedPlaceholder { offset: 0, .. })
        ));
        assert!(matches!(
            has_placeholder("x}", EscapingMode::Arb),
            Err(I18nError::UnmatchedClosingBrace { offset: 1, .. })
        ));
        assert!(matches!(
            has_placeholder("it's", EscapingMode::Arb),
            Err(I18nError::HangingQuote { offset: 2, .. })
        ));
        // An error after the first placeholder is not reached by the probe.
        assert!(has_placeholder("{x} }", EscapingMode::Arb).unwrap());
    }

    #[test]
    fn test_tokenize_arb() {
        let segments = tokenize("Hi {name}, '{literal}' ok", EscapingMode::Arb).unwrap();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Literal("Hi ".to_string()));
        match &segments[1] {
            Segment::Placeholder(span) => {
                assert_eq!(span.content, "name");
                assert_eq!(span.raw, "{name}");
                assert_eq!((span.start, span.end), (3, 9));
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
        assert_eq!(segments[2], Segment::Literal(", {literal} ok".to_string()));
    }

    #[test]
    fn test_tokenize_nested_arb_span() {
        let text = "{n, plural, one{# item} other{# items}}!";
        let segments = tokenize(text, EscapingMode::Arb).unwrap();
        assert_eq!(segments.len(), 2);
        match &segments[0] {
            Segment::Placeholder(span) => {
                assert_eq!(span.content, "n, plural, one{# item} other{# items}")
            }
            other => panic!("expected placeholder, got {:?}", other),
        }
    }

    #[test]
    fn test_tokenize_dotnet() {
        let segments = tokenize(r"{{literal}} {0}\n", EscapingMode::DotNet).unwrap();
        assert_eq!(segments[0], Segment::Literal("{literal} ".to_string()));
        assert_eq!(segments[2], Segment::Literal("\n".to_string()));

        assert!(matches!(
            tokenize("{0{1}}", EscapingMode::DotNet),
            Err(I18nError::NestedBraceNotAllowed { offset: 2, .. })
        ));
    }

    #[test]
    fn test_tokenize_escaped_brace_is_literal() {
        let segments = tokenize(r"\{0}", EscapingMode::DotNet);
        assert!(matches!(
            segments,
            Err(I18nError::UnmatchedClosingBrace { offset: 3, .. })
        ));

        let segments = tokenize(r"a\{b", EscapingMode::Arb).unwrap();
        assert_eq!(segments, vec![Segment::Literal(r"a\{b".to_string())]);
    }

    #[test]
    fn test_tokenize_hanging_quote_inside_span() {
        assert!(matches!(
            tokenize("{n, select, other{it's}}", EscapingMode::Arb),
            Err(I18nError::HangingQuote { .. })
        ));
    }

    #[test]
    fn test_matching_brace_ignores_quoted() {
        let text = "{a '}' b}";
        assert_eq!(matching_brace(text, 0, EscapingMode::Arb).unwrap(), 8);
    }
}
