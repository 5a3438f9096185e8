//! Simple Resolver
//!
//! Turns one placeholder span into text. ICU syntax is always tried first;
//! only content the evaluator rejects as "not ICU" is resolved here.
//!
//! Fallbacks when no value is found (ARB family):
//!
//! | placeholder                         | output        |
//! |-------------------------------------|---------------|
//! | `{}`                                | empty         |
//! | `{0}` (positional)                  | `{0}`         |
//! | `{name}`, declared elsewhere only   | `{name}`      |
//! | `{name}`, declared or no metadata   | `name`        |
//!
//! The declared-only rule applies to simple placeholders; ICU directives
//! are evaluated whether or not their name is declared.
//!
//! A tail after the name must start with a comma (an ICU directive). Other
//! tails, such as `{name:x}`, are rejected as invalid names rather than
//! applied as format specifiers; format specifiers belong to DotNet texts
//! and to declarations.
//!
//! DotNet placeholders with no value render empty.

use crate::format::FormatItem;
use crate::icu::{self, split_name};
use crate::lookup::NO_POSITION;
use crate::render::RenderContext;
use crate::scanner::PlaceholderSpan;
use crate::{EscapingMode, I18nError, Result};
use tracing::debug;

impl RenderContext<'_> {
    /// Resolve one span and advance the resolution index.
    pub(crate) fn resolve(&mut self, span: &PlaceholderSpan<'_>) -> Result<String> {
        let index = self.index;
        self.index += 1;

        if span.content.trim().is_empty() {
            return Ok(self.resolve_empty(index));
        }

        match self.mode {
            EscapingMode::DotNet => self.resolve_dotnet(span.content, index),
            _ => self.resolve_arb(span, index),
        }
    }

    fn resolve_empty(&self, index: usize) -> String {
        match self.lookup.lookup("", index as i64) {
            Some(value) => value.to_locale_string(&self.config.locale),
            None => {
                debug!(index, "no value for empty placeholder");
                String::new()
            }
        }
    }

    fn resolve_arb(&mut self, span: &PlaceholderSpan<'_>, index: usize) -> Result<String> {
        let content = span.content;
        if let Some(literal) = content.strip_prefix('@') {
            return Ok(literal.to_string());
        }

        let invalid = || I18nError::InvalidPlaceholderName(content.to_string());
        let (name, tail) = split_name(content).ok_or_else(invalid)?;
        let positional = name.chars().all(|c| c.is_ascii_digit());
        if name.starts_with(|c: char| c.is_ascii_digit()) && !positional {
            return Err(invalid());
        }
        let tail = tail.trim();
        if !tail.is_empty() && !tail.starts_with(',') {
            return Err(invalid());
        }

        let value = if positional {
            let position = name.parse::<i64>().unwrap_or(NO_POSITION);
            self.lookup.lookup(name, position)
        } else {
            self.lookup.lookup(name, index as i64)
        };

        let mode = self.mode;
        let config = self.config;
        if let Some(text) =
            icu::evaluate(content, value.as_ref(), mode, config, &mut |branch| self.render(branch))?
        {
            return Ok(text);
        }

        let declaration = match self.declarations {
            Some(declarations) if !positional => match declarations.find(name) {
                Some(declaration) => Some(declaration),
                None => {
                    debug!(name, "placeholder is not declared, keeping it verbatim");
                    return Ok(span.raw.to_string());
                }
            },
            _ => None,
        };

        let Some(value) = value else {
            debug!(name, index, "no value for placeholder");
            return Ok(if positional {
                span.raw.to_string()
            } else {
                content.to_string()
            });
        };

        if let Some(declaration) = declaration {
            if let Some(text) = declaration.format_value(&value, config)? {
                return Ok(text);
            }
        }
        Ok(value.to_locale_string(&config.locale))
    }

    fn resolve_dotnet(&self, content: &str, index: usize) -> Result<String> {
        let split = content.find([',', ':']).unwrap_or(content.len());
        let name = content[..split].trim();
        let item = FormatItem::parse(&content[split..])?;

        let position = if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
            name.parse::<i64>().unwrap_or(NO_POSITION)
        } else {
            index as i64
        };

        match self.lookup.lookup(name, position) {
            Some(value) => item.apply(&value, &self.config.locale),
            None => {
                debug!(name, position, "no value for placeholder");
                Ok(String::new())
            }
        }
    }
}
