//! Backslash escape codec
//!
//! Decodes `\"`, `\\`, `\/`, `\b`, `\f`, `\n`, `\r`, `\t` and `\uXXXX`
//! (including UTF-16 surrogate pairs). Unknown or incomplete sequences are
//! kept as raw text; decoding never fails.

/// Result of decoding one escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Decoded<'a> {
    /// The sequence stood for this character.
    Char(char),
    /// The sequence was not understood and is emitted verbatim.
    Raw(&'a str),
}

impl Decoded<'_> {
    pub(crate) fn push_to(self, out: &mut String) {
        match self {
            Decoded::Char(c) => out.push(c),
            Decoded::Raw(s) => out.push_str(s),
        }
    }
}

/// Decode the escape sequence whose backslash sits at byte offset `start`.
///
/// Returns the decoded piece and the byte offset just past the sequence.
pub(crate) fn decode_at(text: &str, start: usize) -> (Decoded<'_>, usize) {
    debug_assert!(text[start..].starts_with('\\'));
    let rest = &text[start + 1..];
    let Some(next) = rest.chars().next() else {
        return (Decoded::Raw(&text[start..]), text.len());
    };
    let simple = match next {
        '"' => Some('"'),
        '\\' => Some('\\'),
        '/' => Some('/'),
        'b' => Some('\u{8}'),
        'f' => Some('\u{c}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    };
    if let Some(c) = simple {
        return (Decoded::Char(c), start + 2);
    }
    if next == 'u' {
        if let Some(unit) = hex4(rest, 1) {
            // High surrogate followed by an escaped low surrogate.
            if (0xD800..0xDC00).contains(&unit) && rest[5..].starts_with("\\u") {
                if let Some(low) = hex4(rest, 7) {
                    if (0xDC00..0xE000).contains(&low) {
                        let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                        if let Some(c) = char::from_u32(code) {
                            return (Decoded::Char(c), start + 12);
                        }
                    }
                }
            }
            if let Some(c) = char::from_u32(unit) {
                return (Decoded::Char(c), start + 6);
            }
            return (Decoded::Raw(&text[start..start + 6]), start + 6);
        }
        return (Decoded::Raw(&text[start..start + 2]), start + 2);
    }
    let end = start + 1 + next.len_utf8();
    (Decoded::Raw(&text[start..end]), end)
}

fn hex4(s: &str, from: usize) -> Option<u32> {
    let digits = s.get(from..from + 4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Decode every backslash escape in `text`.
///
/// # Example
///
/// ```
/// use quill_i18n::escape::decode;
///
/// assert_eq!(decode(r"Tab:\tEnd"), "Tab:\tEnd");
/// assert_eq!(decode(r"\u00e9t\u00e9"), "été");
/// assert_eq!(decode(r"\q stays"), r"\q stays");
/// ```
pub fn decode(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('\\') {
        let at = pos + offset;
        out.push_str(&text[pos..at]);
        let (piece, end) = decode_at(text, at);
        piece.push_to(&mut out);
        pos = end;
    }
    out.push_str(&text[pos..]);
    out
}

/// Encode `text` so that [`decode`] restores it exactly.
///
/// # Example
///
/// ```
/// use quill_i18n::escape::{decode, encode};
///
/// let original = "Say \"hi\"\n";
/// assert_eq!(encode(original), r#"Say \"hi\"\n"#);
/// assert_eq!(decode(&encode(original)), original);
/// ```
pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{:04x}", unit));
                }
            }
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_escapes() {
        assert_eq!(decode(r#"\"quoted\""#), "\"quoted\"");
        assert_eq!(decode(r"a\\b"), "a\\b");
        assert_eq!(decode(r"a\/b"), "a/b");
        assert_eq!(decode(r"\b\f\n\r\t"), "\u{8}\u{c}\n\r\t");
    }

    #[test]
    fn test_decode_unicode() {
        assert_eq!(decode(r"\u0041\u00df"), "Aß");
        assert_eq!(decode(r"\ud83d\ude00"), "😀");
    }

    #[test]
    fn test_decode_degrades_on_bad_sequences() {
        assert_eq!(decode(r"\u12"), r"\u12");
        assert_eq!(decode(r"\uZZZZ!"), r"\uZZZZ!");
        assert_eq!(decode(r"lone \ud83d here"), r"lone \ud83d here");
        assert_eq!(decode(r"\x"), r"\x");
        assert_eq!(decode("end\\"), "end\\");
        assert_eq!(decode(r"\é"), r"\é");
    }

    #[test]
    fn test_decode_at_reports_end() {
        let text = r"ab\ncd";
        let (piece, end) = decode_at(text, 2);
        assert_eq!(piece, Decoded::Char('\n'));
        assert_eq!(&text[end..], "cd");
    }

    #[test]
    fn test_encode_round_trip() {
        let original = "line1\nline2\t\"q\" \\ \u{1} é";
        assert_eq!(decode(&encode(original)), original);
        assert_eq!(encode("\u{1}"), r"\u0001");
    }
}
