//! Delimiter classification
//!
//! Decides, for the character under the cursor and its lookahead, whether
//! it is a doubled literal, a quote toggle, an escape, a brace or plain text.

use crate::EscapingMode;

/// Classification of the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Delimiter {
    /// Doubled delimiter standing for one literal character; consumes two.
    Doubled(char),
    /// Bare apostrophe that toggles quoting; never emitted.
    Quote,
    /// Backslash starting an escape sequence.
    Escape,
    /// Placeholder open.
    Open,
    /// Placeholder close.
    Close,
    /// Anything else.
    Plain(char),
}

/// Classify `current` given the following character and the number of
/// braces currently open.
///
/// Quoted regions are the caller's business: inside quotes only
/// [`Delimiter::Doubled`]`('\'')` and [`Delimiter::Quote`] matter.
pub(crate) fn classify(
    mode: EscapingMode,
    current: char,
    next: Option<char>,
    open_braces: usize,
) -> Delimiter {
    match current {
        '\'' if mode.uses_quotes() => {
            if next == Some('\'') {
                Delimiter::Doubled('\'')
            } else {
                Delimiter::Quote
            }
        }
        '\\' if mode.decodes_escapes_inline() => Delimiter::Escape,
        '{' if mode.recognizes_placeholders() => {
            if mode.uses_doubled_braces() && next == Some('{') {
                Delimiter::Doubled('{')
            } else {
                Delimiter::Open
            }
        }
        '}' if mode.recognizes_placeholders() => {
            if mode.uses_doubled_braces() && open_braces == 0 && next == Some('}') {
                Delimiter::Doubled('}')
            } else {
                Delimiter::Close
            }
        }
        c => Delimiter::Plain(c),
    }
}
