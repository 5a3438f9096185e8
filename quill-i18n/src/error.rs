//! Error types for template rendering

use thiserror::Error;

/// Errors that can occur while scanning or rendering a template.
///
/// Resolution misses and type mismatches are not represented here: they
/// degrade to literal fallbacks and never abort a render.
#[derive(Debug, Error)]
pub enum I18nError {
    /// A `{` was never closed.
    #[error("Unclosed placeholder at offset {offset}: {text}")]
    UnclosedPlaceholder { text: String, offset: usize },

    /// A quoted region was still open at the end of the text.
    #[error("Hanging quote at offset {offset}: {text}")]
    HangingQuote { text: String, offset: usize },

    /// A `}` appeared with no open placeholder.
    #[error("Unmatched closing brace at offset {offset}: {text}")]
    UnmatchedClosingBrace { text: String, offset: usize },

    /// A `{` appeared inside a DotNet placeholder.
    #[error("Nested brace not allowed at offset {offset}: {text}")]
    NestedBraceNotAllowed { text: String, offset: usize },

    /// A select/plural/selectordinal block has no `other` branch.
    #[error("Missing 'other' branch in: {0}")]
    MissingOtherBranch(String),

    /// Placeholder content does not start with a valid name.
    #[error("Invalid placeholder name: {0}")]
    InvalidPlaceholderName(String),

    /// ICU directive kind is not one of the supported kinds.
    #[error("Unsupported ICU kind '{kind}' in: {content}")]
    UnsupportedIcuKind { kind: String, content: String },

    /// Branch options of a select/plural block could not be parsed.
    #[error("Malformed options block: {0}")]
    MalformedOptions(String),

    /// Number or date/time style token is not recognised.
    #[error("Unsupported format style: {0}")]
    UnsupportedStyle(String),

    /// Invalid locale string
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),

    /// Invalid plural category
    #[error("Invalid plural category: {0}")]
    InvalidPluralCategory(String),

    /// Raw text was reassigned while the template was locked.
    #[error("Template text is locked")]
    TemplateLocked,

    /// Render configuration could not be built.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON parse error
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Broad classes of [`I18nError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Brace or quote structure of the template is broken.
    Structural,
    /// ICU grammar, placeholder names or format styles are invalid.
    Grammar,
    /// Misuse of the API or bad configuration input.
    Usage,
}

impl I18nError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnclosedPlaceholder { .. }
            | Self::HangingQuote { .. }
            | Self::UnmatchedClosingBrace { .. }
            | Self::NestedBraceNotAllowed { .. } => ErrorCategory::Structural,
            Self::MissingOtherBranch(_)
            | Self::InvalidPlaceholderName(_)
            | Self::UnsupportedIcuKind { .. }
            | Self::MalformedOptions(_)
            | Self::UnsupportedStyle(_) => ErrorCategory::Grammar,
            Self::InvalidLocale(_)
            | Self::InvalidPluralCategory(_)
            | Self::TemplateLocked
            | Self::InvalidConfig(_)
            | Self::JsonError(_) => ErrorCategory::Usage,
        }
    }

    /// Whether this error comes from the brace/quote structure of the text.
    pub fn is_structural(&self) -> bool {
        self.category() == ErrorCategory::Structural
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let err = I18nError::HangingQuote {
            text: "'oops".to_string(),
            offset: 0,
        };
        assert_eq!(err.category(), ErrorCategory::Structural);
        assert!(err.is_structural());

        let err = I18nError::MissingOtherBranch("x".to_string());
        assert_eq!(err.category(), ErrorCategory::Grammar);
        assert!(!err.is_structural());

        assert_eq!(I18nError::TemplateLocked.category(), ErrorCategory::Usage);
    }

    #[test]
    fn test_error_messages_carry_text() {
        let err = I18nError::UnclosedPlaceholder {
            text: "Hello {name".to_string(),
            offset: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("Hello {name"));
        assert!(msg.contains('6'));
    }
}
