//! Template text
//!
//! A stored translation string together with its escaping mode, optional
//! pre-decoded form and placeholder declarations.

use crate::render::render;
use crate::scanner;
use crate::{Declarations, EscapingMode, I18nError, RenderConfig, Result, ValueLookup, escape};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// A translation string ready to be rendered.
///
/// The lock flag is advisory: while it is set, [`TemplateText::set_raw`]
/// refuses to replace the text. Rendering sets it for the duration of the
/// call. It is not a mutex; callers that mutate a shared template from
/// several threads must synchronize themselves.
///
/// # Example
///
/// ```
/// use quill_i18n::{Args, EscapingMode, RenderConfig, TemplateText};
///
/// let template = TemplateText::new("Hello, {name}!", EscapingMode::Arb);
/// assert!(template.has_placeholder().unwrap());
///
/// let args = Args::new().with("name", "World");
/// let text = template.render(&args, &RenderConfig::default()).unwrap();
/// assert_eq!(text, "Hello, World!");
/// ```
#[derive(Debug)]
pub struct TemplateText {
    raw: RwLock<String>,
    unescaped: RwLock<Option<String>>,
    mode: EscapingMode,
    declarations: Option<Declarations>,
    locked: AtomicBool,
}

impl TemplateText {
    /// Create a template text.
    pub fn new(raw: impl Into<String>, mode: EscapingMode) -> Self {
        Self {
            raw: RwLock::new(raw.into()),
            unescaped: RwLock::new(None),
            mode,
            declarations: None,
            locked: AtomicBool::new(false),
        }
    }

    /// Attach an already-decoded form, used by `Backslash` renders.
    pub fn with_unescaped(self, unescaped: impl Into<String>) -> Self {
        *self.unescaped.write() = Some(unescaped.into());
        self
    }

    /// Attach placeholder declarations.
    pub fn with_declarations(mut self, declarations: Declarations) -> Self {
        self.declarations = Some(declarations);
        self
    }

    /// Escaping mode.
    pub fn mode(&self) -> EscapingMode {
        self.mode
    }

    /// Copy of the stored text.
    pub fn raw(&self) -> String {
        self.raw.read().clone()
    }

    /// Copy of the pre-decoded form, if any.
    pub fn unescaped(&self) -> Option<String> {
        self.unescaped.read().clone()
    }

    /// Placeholder declarations, if any.
    pub fn declarations(&self) -> Option<&Declarations> {
        self.declarations.as_ref()
    }

    /// Whether the lock flag is set.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Acquire)
    }

    /// Set the lock flag until the returned guard is dropped.
    pub fn lock(&self) -> TemplateLock<'_> {
        let previous = self.locked.swap(true, Ordering::AcqRel);
        TemplateLock {
            template: self,
            previous,
        }
    }

    /// Replace the stored text. The pre-decoded form is discarded.
    pub fn set_raw(&self, raw: impl Into<String>) -> Result<()> {
        if self.is_locked() {
            return Err(I18nError::TemplateLocked);
        }
        *self.raw.write() = raw.into();
        *self.unescaped.write() = None;
        Ok(())
    }

    /// Whether the text contains a placeholder.
    pub fn has_placeholder(&self) -> Result<bool> {
        scanner::has_placeholder(&self.raw.read(), self.mode)
    }

    /// Render with `lookup` under `config`.
    pub fn render(&self, lookup: &dyn ValueLookup, config: &RenderConfig) -> Result<String> {
        let _lock = self.lock();

        if self.mode == EscapingMode::Backslash {
            if let Some(unescaped) = self.unescaped.read().as_ref() {
                return Ok(unescaped.clone());
            }
            return Ok(escape::decode(&self.raw.read()));
        }

        let raw = self.raw.read();
        render(&raw, self.mode, self.declarations.as_ref(), lookup, config)
    }
}

/// Guard returned by [`TemplateText::lock`].
#[derive(Debug)]
pub struct TemplateLock<'a> {
    template: &'a TemplateText,
    previous: bool,
}

impl Drop for TemplateLock<'_> {
    fn drop(&mut self) {
        self.template.locked.store(self.previous, Ordering::Release);
    }
}

/// Render a [`TemplateText`].
pub fn render_template(
    template: &TemplateText,
    lookup: &dyn ValueLookup,
    config: &RenderConfig,
) -> Result<String> {
    template.render(lookup, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Args;

    #[test]
    fn test_lock_blocks_set_raw() {
        let template = TemplateText::new("a", EscapingMode::None);
        {
            let _guard = template.lock();
            assert!(template.is_locked());
            assert!(matches!(template.set_raw("b"), Err(I18nError::TemplateLocked)));
        }
        assert!(!template.is_locked());
        template.set_raw("b").unwrap();
        assert_eq!(template.raw(), "b");
    }

    #[test]
    fn test_nested_locks_restore_previous_state() {
        let template = TemplateText::new("a", EscapingMode::None);
        let outer = template.lock();
        {
            let _inner = template.lock();
        }
        assert!(template.is_locked());
        drop(outer);
        assert!(!template.is_locked());
    }

    #[test]
    fn test_render_releases_lock() {
        let template = TemplateText::new("{x}", EscapingMode::Arb);
        let args = Args::new().with("x", 1);
        assert_eq!(template.render(&args, &RenderConfig::default()).unwrap(), "1");
        assert!(!template.is_locked());

        let broken = TemplateText::new("{x", EscapingMode::Arb);
        assert!(broken.render(&args, &RenderConfig::default()).is_err());
        assert!(!broken.is_locked());
    }

    #[test]
    fn test_backslash_prefers_unescaped_sibling() {
        let template = TemplateText::new(r"a\nb", EscapingMode::Backslash);
        let config = RenderConfig::default();
        assert_eq!(template.render(&Args::new(), &config).unwrap(), "a\nb");

        let template = template.with_unescaped("cached");
        assert_eq!(render_template(&template, &Args::new(), &config).unwrap(), "cached");

        template.set_raw(r"\t").unwrap();
        assert_eq!(template.unescaped(), None);
        assert_eq!(template.render(&Args::new(), &config).unwrap(), "\t");
    }
}
