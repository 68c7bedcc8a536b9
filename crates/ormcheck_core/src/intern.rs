//! String interning for analysis names.
//!
//! Parameter names, symbol names, and module-level declaration names are
//! interned once and compared as integer handles afterwards. The interner
//! is owned by the host session and outlives any individual hook call.

use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::Arc;

/// An interned name. A lightweight handle (u32) that can be resolved back
/// to its text through the [`StringInterner`] that produced it.
///
/// Comparing two `InternedString` values is an O(1) integer comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct InternedString(Spur);

impl InternedString {
    /// Create from a raw lasso key.
    #[inline]
    pub fn from_spur(spur: Spur) -> Self {
        Self(spur)
    }

    /// Get the raw lasso key.
    #[inline]
    pub fn as_spur(self) -> Spur {
        self.0
    }
}

impl fmt::Debug for InternedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InternedString({:?})", self.0)
    }
}

/// Thread-safe string interner.
///
/// Stores one copy of each unique name and hands out lightweight handles.
/// Cloning is cheap; clones share the same underlying table.
#[derive(Clone)]
pub struct StringInterner {
    rodeo: Arc<ThreadedRodeo>,
}

impl StringInterner {
    /// Create a new string interner.
    pub fn new() -> Self {
        Self {
            rodeo: Arc::new(ThreadedRodeo::new()),
        }
    }

    /// Intern a name, returning a handle to the interned value.
    /// If the name was already interned, returns the existing handle.
    #[inline]
    pub fn intern(&self, s: &str) -> InternedString {
        InternedString::from_spur(self.rodeo.get_or_intern(s))
    }

    /// Intern a static string. More efficient than `intern` for the
    /// well-known names (`__init__`, `to`, `null`, ...).
    #[inline]
    pub fn intern_static(&self, s: &'static str) -> InternedString {
        InternedString::from_spur(self.rodeo.get_or_intern_static(s))
    }

    /// Look up an already-interned name without interning it if absent.
    /// A name that was never interned cannot appear in any table, so
    /// resolution code treats `None` here as "no such declaration".
    #[inline]
    pub fn get(&self, s: &str) -> Option<InternedString> {
        self.rodeo.get(s).map(InternedString::from_spur)
    }

    /// Resolve an interned handle back to its text.
    #[inline]
    pub fn resolve(&self, key: InternedString) -> &str {
        self.rodeo.resolve(&key.as_spur())
    }

    /// Returns the number of interned names.
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    /// Returns true if no names have been interned.
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StringInterner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringInterner")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let interner = StringInterner::new();
        let a = interner.intern("name");
        let b = interner.intern("name");
        let c = interner.intern("pk");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.resolve(a), "name");
        assert_eq!(interner.resolve(c), "pk");
    }

    #[test]
    fn test_get_without_interning() {
        let interner = StringInterner::new();
        assert!(interner.get("Post").is_none());
        let a = interner.intern("Post");
        assert_eq!(interner.get("Post"), Some(a));
    }

    #[test]
    fn test_intern_static() {
        let interner = StringInterner::new();
        let a = interner.intern_static("__init__");
        let b = interner.intern("__init__");
        assert_eq!(a, b);
    }
}
