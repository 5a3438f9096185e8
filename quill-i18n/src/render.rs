//! Rendering walk
//!
//! Tokenizes a template text, passes literal runs through, and resolves each
//! placeholder span in order. All walk state lives in a [`RenderContext`]
//! owned by one call, so concurrent renders never share anything mutable.

use crate::scanner::{Segment, tokenize};
use crate::{Declarations, EscapingMode, RenderConfig, Result, ValueLookup, escape};
use tracing::trace;

/// State of one render call.
pub(crate) struct RenderContext<'a> {
    pub(crate) mode: EscapingMode,
    pub(crate) declarations: Option<&'a Declarations>,
    pub(crate) lookup: &'a dyn ValueLookup,
    pub(crate) config: &'a RenderConfig,
    /// Resolution index of the next span; shared with nested branch renders.
    pub(crate) index: usize,
}

impl<'a> RenderContext<'a> {
    pub(crate) fn new(
        mode: EscapingMode,
        declarations: Option<&'a Declarations>,
        lookup: &'a dyn ValueLookup,
        config: &'a RenderConfig,
    ) -> Self {
        Self {
            mode,
            declarations,
            lookup,
            config,
            index: 0,
        }
    }

    /// Render `text`, which must use this context's mode.
    pub(crate) fn render(&mut self, text: &str) -> Result<String> {
        let segments = tokenize(text, self.mode)?;
        let mut out = String::with_capacity(text.len());
        for segment in segments {
            match segment {
                Segment::Literal(literal) => out.push_str(&literal),
                Segment::Placeholder(span) => {
                    let resolved = self.resolve(&span)?;
                    out.push_str(&resolved);
                }
            }
        }
        Ok(out)
    }
}

/// Render a template text.
///
/// `None` texts are returned unchanged and `Backslash` texts are decoded;
/// the other modes resolve placeholders through `lookup`. A structural or
/// grammar error aborts the whole render.
///
/// # Example
///
/// ```
/// use quill_i18n::{Args, EscapingMode, RenderConfig, render};
///
/// let args = Args::new().with("count", 3).with("name", "Ada");
/// let text = render(
///     "{name} has {count, plural, =0{no messages} one{one message} other{# messages}}",
///     EscapingMode::Arb,
///     None,
///     &args,
///     &RenderConfig::default(),
/// )
/// .unwrap();
/// assert_eq!(text, "Ada has 3 messages");
/// ```
pub fn render(
    text: &str,
    mode: EscapingMode,
    declarations: Option<&Declarations>,
    lookup: &dyn ValueLookup,
    config: &RenderConfig,
) -> Result<String> {
    trace!(mode = %mode, locale = %config.locale, len = text.len(), "rendering template text");

    match mode {
        EscapingMode::None => Ok(text.to_string()),
        EscapingMode::Backslash => Ok(escape::decode(text)),
        EscapingMode::Arb | EscapingMode::ArbNoEscaping | EscapingMode::DotNet => {
            RenderContext::new(mode, declarations, lookup, config).render(text)
        }
    }
}
