//! Symbol and symbol table definitions.
//!
//! These mirror the host checker's declaration model: a symbol is a named
//! entity (class, function, variable), classes carry a member table, and
//! callables carry an initializer signature. The plugin only ever reads
//! them.

use ormcheck_ast::types::{SymbolFlags, SymbolId};
use ormcheck_core::InternedString;
use rustc_hash::FxHashMap;

/// An initializer signature: the ordered parameter names of a callable.
/// The first parameter is the instance-self parameter and is never bound
/// to an actual argument.
#[derive(Debug, Clone)]
pub struct Signature {
    param_names: Vec<InternedString>,
}

impl Signature {
    pub fn new(param_names: Vec<InternedString>) -> Self {
        Self { param_names }
    }

    /// All parameter names, self included.
    pub fn param_names(&self) -> &[InternedString] {
        &self.param_names
    }

    /// The parameter names actual arguments can bind to (self excluded).
    pub fn bindable_params(&self) -> &[InternedString] {
        if self.param_names.is_empty() {
            &[]
        } else {
            &self.param_names[1..]
        }
    }
}

/// A symbol represents a named declaration in an analyzed module
/// (class, function, variable, ...).
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Unique identifier for this symbol.
    pub id: SymbolId,
    /// The name of this symbol (interned).
    pub name: InternedString,
    /// Symbol flags describing what kind of entity this is.
    pub flags: SymbolFlags,
    /// Members of this symbol (for classes and modules).
    pub members: Option<SymbolTable>,
    /// Initializer signature (for callables).
    pub signature: Option<Signature>,
}

impl Symbol {
    pub fn new(id: SymbolId, name: InternedString, flags: SymbolFlags) -> Self {
        Self {
            id,
            name,
            flags,
            members: None,
            signature: None,
        }
    }

    /// Whether a string model reference may resolve to this symbol.
    pub fn is_class_like(&self) -> bool {
        self.flags.intersects(SymbolFlags::CLASS_LIKE)
    }
}

/// A symbol table maps names to symbols.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    table: FxHashMap<InternedString, SymbolId>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            table: FxHashMap::default(),
        }
    }

    pub fn get(&self, name: &InternedString) -> Option<SymbolId> {
        self.table.get(name).copied()
    }

    pub fn set(&mut self, name: InternedString, symbol: SymbolId) {
        self.table.insert(name, symbol);
    }

    pub fn has(&self, name: &InternedString) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InternedString, &SymbolId)> {
        self.table.iter()
    }
}

/// The symbol store holds every symbol the host has shared with the
/// plugin, addressed by SymbolId.
#[derive(Debug, Default)]
pub struct SymbolStore {
    symbols: Vec<Symbol>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Add a new symbol and return its ID.
    pub fn alloc(&mut self, name: InternedString, flags: SymbolFlags) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(Symbol::new(id, name, flags));
        id
    }

    /// Get a symbol by its ID. Panics on an out-of-range ID; use
    /// [`lookup`](Self::lookup) for host-supplied ids.
    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.index()]
    }

    /// Get a mutable reference to a symbol by its ID.
    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    /// Fallible lookup, for ids that cross the host boundary and may be
    /// stale or `INVALID`.
    pub fn lookup(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ormcheck_core::StringInterner;

    #[test]
    fn test_signature_skips_self() {
        let interner = StringInterner::new();
        let sig = Signature::new(vec![
            interner.intern("self"),
            interner.intern("title"),
            interner.intern("body"),
        ]);
        assert_eq!(sig.bindable_params().len(), 2);
        assert_eq!(sig.bindable_params()[0], interner.intern("title"));
    }

    #[test]
    fn test_empty_signature_has_no_bindable_params() {
        let sig = Signature::new(Vec::new());
        assert!(sig.bindable_params().is_empty());
    }

    #[test]
    fn test_store_alloc_and_lookup() {
        let interner = StringInterner::new();
        let mut store = SymbolStore::new();
        let id = store.alloc(interner.intern("Post"), SymbolFlags::CLASS);
        assert_eq!(store.get(id).id, id);
        assert!(store.lookup(id).is_some());
        assert!(store.lookup(SymbolId::INVALID).is_none());
    }

    #[test]
    fn test_class_like() {
        let interner = StringInterner::new();
        let mut store = SymbolStore::new();
        let class = store.alloc(interner.intern("Post"), SymbolFlags::CLASS);
        let model = store.alloc(
            interner.intern("Comment"),
            SymbolFlags::CLASS | SymbolFlags::MODEL,
        );
        let var = store.alloc(interner.intern("posts"), SymbolFlags::VARIABLE);
        assert!(store.get(class).is_class_like());
        assert!(store.get(model).is_class_like());
        assert!(!store.get(var).is_class_like());
    }
}
