//! Value lookup
//!
//! The engine never owns placeholder values. It asks a [`ValueLookup`] once
//! per placeholder span, in left-to-right order.

use crate::Value;
use std::collections::HashMap;

/// Index passed when a lookup has no positional context.
pub const NO_POSITION: i64 = -1;

/// Resolves a placeholder by name and/or positional index.
///
/// Implementations must be deterministic for the duration of a render and
/// must answer `index == NO_POSITION` without failing. When both a name and
/// an index could match, the name wins.
pub trait ValueLookup {
    /// Look up a value.
    fn lookup(&self, name: &str, index: i64) -> Option<Value>;
}

/// Named and positional arguments.
///
/// # Example
///
/// ```
/// use quill_i18n::{Args, ValueLookup};
///
/// let args = Args::new().with("name", "Alice").arg(3);
/// assert_eq!(args.lookup("name", 0).unwrap().to_string(), "Alice");
/// assert_eq!(args.lookup("", 0).unwrap().to_string(), "3");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Args {
    named: HashMap<String, Value>,
    positional: Vec<Value>,
}

impl Args {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named argument.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Append a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Set a named argument.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.named.insert(name.into(), value.into());
    }

    /// Get a named argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Number of named plus positional arguments.
    pub fn len(&self) -> usize {
        self.named.len() + self.positional.len()
    }

    /// Whether there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty() && self.positional.is_empty()
    }
}

fn positional(values: &[Value], index: i64) -> Option<Value> {
    usize::try_from(index).ok().and_then(|i| values.get(i).cloned())
}

impl ValueLookup for Args {
    fn lookup(&self, name: &str, index: i64) -> Option<Value> {
        self.named
            .get(name)
            .cloned()
            .or_else(|| positional(&self.positional, index))
    }
}

impl ValueLookup for HashMap<String, Value> {
    fn lookup(&self, name: &str, _index: i64) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl ValueLookup for Vec<Value> {
    fn lookup(&self, _name: &str, index: i64) -> Option<Value> {
        positional(self, index)
    }
}

impl<const N: usize> ValueLookup for [Value; N] {
    fn lookup(&self, _name: &str, index: i64) -> Option<Value> {
        positional(self, index)
    }
}

/// Lookup backed by a closure; see [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnLookup<F>(F);

impl<F> ValueLookup for FnLookup<F>
where
    F: Fn(&str, i64) -> Option<Value>,
{
    fn lookup(&self, name: &str, index: i64) -> Option<Value> {
        (self.0)(name, index)
    }
}

/// Build a lookup from a closure.
///
/// ```
/// use quill_i18n::{Value, ValueLookup, from_fn};
///
/// let lookup = from_fn(|name, _| (name == "n").then(|| Value::from(2)));
/// assert!(lookup.lookup("n", -1).is_some());
/// assert!(lookup.lookup("m", -1).is_none());
/// ```
pub fn from_fn<F>(f: F) -> FnLookup<F>
where
    F: Fn(&str, i64) -> Option<Value>,
{
    FnLookup(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_name_wins() {
        let args = Args::new().with("0", "named").arg("positional");
        assert_eq!(args.lookup("0", 0).unwrap().to_string(), "named");
        assert_eq!(args.lookup("x", 0).unwrap().to_string(), "positional");
        assert!(args.lookup("x", NO_POSITION).is_none());
        assert!(args.lookup("x", 5).is_none());
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_collections() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), Value::from(1));
        assert!(map.lookup("a", NO_POSITION).is_some());
        assert!(map.lookup("b", 0).is_none());

        let list = vec![Value::from("x")];
        assert!(list.lookup("ignored", 0).is_some());
        assert!(list.lookup("ignored", NO_POSITION).is_none());

        let array = [Value::from(1), Value::from(2)];
        assert_eq!(array.lookup("", 1).unwrap().to_string(), "2");
    }
}
