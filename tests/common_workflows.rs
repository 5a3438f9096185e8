//! Integration tests for common Quill workflows.
//!
//! These tests go through the facade crate the way an application would.

use quill::prelude::*;
use quill::RenderSettings;

// =============================================================================
// Catalog entry rendering
// =============================================================================

#[test]
fn test_arb_entry_with_metadata() {
    // An ARB entry: the message plus its "@key" metadata object.
    let metadata = r#"{
        "description": "Cart summary",
        "placeholders": {
            "count": { "type": "int" },
            "total": { "type": "double", "format": "currency", "optionalParameters": { "name": "EUR" } },
            "when": { "type": "DateTime", "format": "yMMMd" }
        }
    }"#;
    let declarations = Declarations::from_arb_json(metadata).unwrap();
    let template = TemplateText::new(
        "{count, plural, =0{Your cart is empty} one{1 item} other{{count} items}}, {total}, {when}",
        EscapingMode::Arb,
    )
    .with_declarations(declarations);

    let when = chrono::NaiveDate::from_ymd_opt(2024, 7, 4).unwrap();
    let args = Args::new().with("count", 3).with("total", 42.5).with("when", when);
    let text = template.render(&args, &RenderConfig::default()).unwrap();
    assert_eq!(text, "3 items, EUR 42.50, Jul 4, 2024");
}

#[test]
fn test_same_template_in_two_locales() {
    let text = "{price, number, currency}";
    let args = Args::new().with("price", 1234.5);

    let us = RenderConfig::default();
    let de = RenderConfig::new(Locale::de_de());
    assert_eq!(render(text, EscapingMode::Arb, None, &args, &us).unwrap(), "$1,234.50");
    assert_eq!(render(text, EscapingMode::Arb, None, &args, &de).unwrap(), "1.234,50 €");
}

#[test]
fn test_resx_style_composite_format() {
    let args = Args::new().arg("report.pdf").arg(1536.0);
    let text = render(
        "Uploaded {0} ({1:N0} KB)",
        EscapingMode::DotNet,
        None,
        &args,
        &RenderConfig::default(),
    )
    .unwrap();
    assert_eq!(text, "Uploaded report.pdf (1,536 KB)");
}

#[test]
fn test_backslash_resource_string() {
    let template = TemplateText::new(r#"Line one\nSay \"hi\""#, EscapingMode::Backslash);
    let text = render_template(&template, &Args::new(), &RenderConfig::default()).unwrap();
    assert_eq!(text, "Line one\nSay \"hi\"");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_settings_file_drives_plural_rules() {
    let settings: RenderSettings =
        serde_json::from_str(r#"{ "locale": "pl-PL", "pluralRules": "cldr" }"#).unwrap();
    let config = RenderConfig::from_settings(&settings).unwrap();

    let text = "{n, plural, one{# plik} few{# pliki} many{# plików} other{# pliku}}";
    let render_n = |n: i64| {
        render(text, EscapingMode::Arb, None, &Args::new().with("n", n), &config).unwrap()
    };
    assert_eq!(render_n(1), "1 plik");
    assert_eq!(render_n(3), "3 pliki");
    assert_eq!(render_n(5), "5 plików");
}

#[test]
fn test_ordinal_rules() {
    let config = RenderConfig::default();
    let text = "{n, selectordinal, one{#st} two{#nd} few{#rd} other{#th}}";
    let render_n = |n: i64| {
        render(text, EscapingMode::Arb, None, &Args::new().with("n", n), &config).unwrap()
    };
    assert_eq!(render_n(1), "1st");
    assert_eq!(render_n(22), "22nd");
    assert_eq!(render_n(13), "13th");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_error_categories() {
    let config = RenderConfig::default();
    let err = render("{x", EscapingMode::Arb, None, &Args::new(), &config).unwrap_err();
    assert_eq!(err.category(), quill::ErrorCategory::Structural);

    let err = render("{x, gender, a{b}}", EscapingMode::Arb, None, &Args::new(), &config).unwrap_err();
    assert_eq!(err.category(), quill::ErrorCategory::Grammar);
}

#[test]
fn test_logging_bootstrap_is_reexported() {
    let config = quill::quill_log::LogConfig::from_lookup(|_| None);
    assert_eq!(config.level, quill::quill_log::Level::Info);
}
