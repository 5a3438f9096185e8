//! Template rendering engine for Quill
//!
//! Renders stored translation strings into final text:
//!
//! - **Placeholders**: `{name}`, positional `{0}`, .NET `{0,8:N2}`
//! - **ICU directives**: `select`, `plural` (with `offset:` and `=N`),
//!   `selectordinal`, `number`, `date`, `time`, `datetime`
//! - **Escaping modes**: plain, backslash, ARB apostrophe quoting, .NET
//!   doubled braces
//! - **Formatting**: locale-aware numbers, currencies, compact numbers and
//!   dates
//!
//! # Quick Start
//!
//! ```
//! use quill_i18n::{Args, EscapingMode, RenderConfig, render};
//!
//! let config = RenderConfig::default();
//! let args = Args::new().with("status", "active").with("count", 1500);
//!
//! let text = render(
//!     "{status, select, active{Online} other{Offline}} with {count, number, compact-short} users",
//!     EscapingMode::Arb,
//!     None,
//!     &args,
//!     &config,
//! )?;
//! assert_eq!(text, "Online with 1.5K users");
//! # Ok::<(), quill_i18n::I18nError>(())
//! ```
//!
//! # Declared placeholders
//!
//! ```
//! use quill_i18n::{Args, Declarations, EscapingMode, RenderConfig, render};
//!
//! let declarations = Declarations::from_arb_json(
//!     r#"{ "placeholders": { "price": { "type": "num", "format": "currency" } } }"#,
//! )?;
//! let args = Args::new().with("price", 9.5);
//! let text = render("Total: {price}", EscapingMode::Arb, Some(&declarations), &args, &RenderConfig::default())?;
//! assert_eq!(text, "Total: $9.50");
//! # Ok::<(), quill_i18n::I18nError>(())
//! ```
//!
//! # Formatting helpers
//!
//! ```
//! use quill_i18n::Locale;
//! use quill_i18n::format::{format_currency, format_number};
//!
//! let locale = Locale::de_de();
//! assert_eq!(format_number(1234567.89, &locale), "1.234.567,89");
//! assert_eq!(format_currency(99.99, "EUR", &locale), "99,99 €");
//! ```

mod config;
mod declaration;
mod delimiter;
mod error;
pub mod escape;
pub mod format;
pub mod icu;
mod locale;
mod lookup;
mod mode;
mod plural;
mod render;
mod resolve;
mod scanner;
mod template;
mod value;

pub use config::{PluralRuleSet, RenderConfig, RenderSettings, SharedPluralRules};
pub use declaration::{DeclaredType, Declarations, PlaceholderDeclaration};
pub use error::{ErrorCategory, I18nError};
pub use locale::Locale;
pub use lookup::{Args, FnLookup, NO_POSITION, ValueLookup, from_fn};
pub use mode::EscapingMode;
pub use plural::{
    LocalePlurals, PluralCategory, PluralRules, SimpleCardinal, SimpleOrdinal, plural_category,
};
pub use render::render;
pub use scanner::{PlaceholderSpan, Segment, has_placeholder, tokenize};
pub use template::{TemplateLock, TemplateText, render_template};
pub use value::{Temporal, Value};

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::format::{format_currency, format_number, format_percent};
    pub use crate::{
        Args, Declarations, EscapingMode, I18nError, Locale, PlaceholderDeclaration,
        PluralCategory, RenderConfig, Result, TemplateText, Value, ValueLookup, has_placeholder,
        plural_category, render, render_template,
    };
}
