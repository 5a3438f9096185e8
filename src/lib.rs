// Quill - translation template rendering for Rust
//
// Renders stored translation strings (ARB, ICU MessageFormat subsets and
// .NET composite formats) into final text with locale-aware formatting.

// Re-export the rendering engine
pub use quill_i18n::*;

// Re-export the logging bootstrap
#[cfg(feature = "log")]
pub use quill_log;
