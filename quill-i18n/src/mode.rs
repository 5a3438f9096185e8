//! Escaping modes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Convention a template text uses for literal delimiters and placeholders.
///
/// The mode is fixed for the lifetime of a template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EscapingMode {
    /// Plain text, returned unchanged.
    #[default]
    None,
    /// Backslash escapes are decoded; no placeholders.
    Backslash,
    /// ARB/ICU style: apostrophe quoting, `{name}` placeholders and ICU
    /// directives; backslash escapes are decoded inline.
    Arb,
    /// Like [`EscapingMode::Arb`] but backslashes are plain text.
    #[serde(alias = "arb-no-escaping", alias = "arb_no_escaping")]
    ArbNoEscaping,
    /// .NET composite format: `{0:N2}` placeholders, `{{`/`}}` literals and
    /// inline backslash escapes.
    #[serde(alias = "dotnet", alias = "DotNet")]
    DotNet,
}

impl EscapingMode {
    /// Whether `{...}` spans are recognised at all.
    pub fn recognizes_placeholders(self) -> bool {
        matches!(self, Self::Arb | Self::ArbNoEscaping | Self::DotNet)
    }

    /// ARB family: `Arb` and `ArbNoEscaping`.
    pub fn is_arb_family(self) -> bool {
        matches!(self, Self::Arb | Self::ArbNoEscaping)
    }

    /// Whether apostrophes delimit quoted literal text.
    pub fn uses_quotes(self) -> bool {
        self.is_arb_family()
    }

    /// Whether doubled braces stand for literal braces.
    pub fn uses_doubled_braces(self) -> bool {
        self == Self::DotNet
    }

    /// Whether backslash escapes are decoded while walking the text.
    pub fn decodes_escapes_inline(self) -> bool {
        matches!(self, Self::Arb | Self::DotNet)
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Backslash => "backslash",
            Self::Arb => "arb",
            Self::ArbNoEscaping => "arbNoEscaping",
            Self::DotNet => "dotNet",
        }
    }
}

impl fmt::Display for EscapingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
