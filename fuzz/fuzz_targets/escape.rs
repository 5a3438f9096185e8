//! Fuzz target for the backslash escape codec.

#![no_main]

use libfuzzer_sys::fuzz_target;

use quill_i18n::escape::{decode, encode};

fuzz_target!(|text: &str| {
    let _ = decode(text);
    assert_eq!(decode(&encode(text)), text);
});
