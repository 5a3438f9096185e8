//! Property-based invariant tests for the rendering engine.
//!
//! 1. `None` texts render unchanged
//! 2. Backslash encode/decode restores any string
//! 3. The probe and the tokenizer never panic
//! 4. Doubled apostrophes render as single apostrophes
//! 5. Doubled .NET braces render as single braces
//! 6. `{name}` renders a text value verbatim
//! 7. `#` in a plural branch renders the count, or a text value verbatim
//! 8. Texts without braces have no placeholder

use proptest::prelude::*;
use quill_i18n::escape::{decode, encode};
use quill_i18n::format::format_compact;
use quill_i18n::{Args, EscapingMode, Locale, RenderConfig, has_placeholder, render, tokenize};

fn all_modes() -> [EscapingMode; 5] {
    [
        EscapingMode::None,
        EscapingMode::Backslash,
        EscapingMode::Arb,
        EscapingMode::ArbNoEscaping,
        EscapingMode::DotNet,
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Identity and escape codec
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn none_mode_is_identity(text in any::<String>()) {
        let out = render(&text, EscapingMode::None, None, &Args::new(), &RenderConfig::default());
        prop_assert_eq!(out.unwrap(), text);
    }

    #[test]
    fn backslash_codec_restores_text(text in any::<String>()) {
        prop_assert_eq!(decode(&encode(&text)), text);
    }

    #[test]
    fn decode_of_plain_text_is_identity(text in "[^\\\\]{0,40}") {
        prop_assert_eq!(decode(&text), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Never panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn probe_and_tokenizer_never_panic(text in "[a-z0-9{}',#: \\\\]{0,32}") {
        for mode in all_modes() {
            let _ = has_placeholder(&text, mode);
            let _ = tokenize(&text, mode);
        }
    }

    #[test]
    fn render_never_panics(text in "[a-z0-9{}',#=: \\\\]{0,32}") {
        let args = Args::new().with("a", 1).with("b", "x").arg(2.5);
        for mode in all_modes() {
            let _ = render(&text, mode, None, &args, &RenderConfig::default());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4-5. Quoting
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn doubled_apostrophes_render_single(text in "[a-zA-Z ,.!']{0,30}") {
        let stored = text.replace('\'', "''");
        for mode in [EscapingMode::Arb, EscapingMode::ArbNoEscaping] {
            let out = render(&stored, mode, None, &Args::new(), &RenderConfig::default());
            prop_assert_eq!(out.unwrap(), text.clone());
        }
    }

    #[test]
    fn doubled_dotnet_braces_render_single(text in "[a-z {}]{0,30}") {
        let stored = text.replace('{', "{{").replace('}', "}}");
        prop_assert!(!has_placeholder(&stored, EscapingMode::DotNet).unwrap());
        let out = render(&stored, EscapingMode::DotNet, None, &Args::new(), &RenderConfig::default());
        prop_assert_eq!(out.unwrap(), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6-8. Substitution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn named_placeholder_renders_text_value(
        name in "[a-z_][a-z0-9_]{0,10}",
        value in "[^{}]{0,20}",
    ) {
        let args = Args::new().with(name.as_str(), value.as_str());
        let text = format!("<{{{}}}>", name);
        let out = render(&text, EscapingMode::Arb, None, &args, &RenderConfig::default());
        prop_assert_eq!(out.unwrap(), format!("<{}>", value));
    }

    #[test]
    fn pound_renders_count(n in 3i64..1000) {
        let args = Args::new().with("n", n);
        let out = render(
            "{n, plural, one{one} other{# items}}",
            EscapingMode::Arb,
            None,
            &args,
            &RenderConfig::default(),
        );
        prop_assert_eq!(out.unwrap(), format!("{} items", n));
    }

    #[test]
    fn pound_renders_text_value_verbatim(value in "[a-z '{}#\\\\]{0,20}") {
        let args = Args::new().with("n", value.as_str());
        for mode in [EscapingMode::Arb, EscapingMode::ArbNoEscaping] {
            let out = render("{n, plural, other{[#]}}", mode, None, &args, &RenderConfig::default());
            prop_assert_eq!(out.unwrap(), format!("[{}]", value));
        }
    }

    #[test]
    fn small_integers_are_not_compacted(n in 0i64..1000) {
        prop_assert_eq!(format_compact(n as f64, &Locale::en_us()), n.to_string());
    }

    #[test]
    fn brace_free_text_has_no_placeholder(text in "[a-z ,.']{0,30}") {
        for mode in all_modes() {
            prop_assert!(!has_placeholder(&text, mode).unwrap_or(false));
        }
    }
}
