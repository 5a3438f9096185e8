//! Fuzz target for template rendering.
//!
//! Feeds arbitrary texts through the probe and the renderer in every
//! escaping mode. Errors are fine; panics are not.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use quill_i18n::{Args, EscapingMode, RenderConfig, has_placeholder, render};

/// Arbitrary render input for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzRender {
    /// Template text
    text: String,
    /// Escaping mode selector
    mode: u8,
    /// Named text arguments
    named: Vec<(String, String)>,
    /// Positional numeric arguments
    numbers: Vec<f64>,
}

fuzz_target!(|data: FuzzRender| {
    let mode = match data.mode % 5 {
        0 => EscapingMode::None,
        1 => EscapingMode::Backslash,
        2 => EscapingMode::Arb,
        3 => EscapingMode::ArbNoEscaping,
        _ => EscapingMode::DotNet,
    };

    let mut args = Args::new();
    for (name, value) in data.named.into_iter().take(8) {
        args = args.with(name, value);
    }
    for n in data.numbers.into_iter().take(8) {
        args = args.arg(n);
    }

    let _ = has_placeholder(&data.text, mode);
    let rendered = render(&data.text, mode, None, &args, &RenderConfig::default());

    if mode == EscapingMode::None {
        assert_eq!(rendered.ok().as_deref(), Some(data.text.as_str()));
    }
});
